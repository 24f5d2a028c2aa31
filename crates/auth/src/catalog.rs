//! Static role → permission catalog.
//!
//! Process-wide, read-only after initialization; the single source of truth
//! for "what can a role do". The tables mirror the backend's grants — the
//! backend remains authoritative, this copy only gates what the interface
//! offers.

use serde::Serialize;

use crate::{Permission, Role};

/// The permissions a role holds.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Grant {
    /// Wildcard sentinel: every permission. Held only by the top role.
    All,
    /// An explicit, static permission list.
    Only(&'static [Permission]),
}

impl Grant {
    /// Literal membership test; the wildcard grants everything. No partial
    /// or prefix matching on permission tags.
    pub fn contains(&self, permission: Permission) -> bool {
        match self {
            Grant::All => true,
            Grant::Only(permissions) => permissions.contains(&permission),
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Grant::All)
    }

    /// The explicit permission list, or every permission for the wildcard.
    pub fn permissions(&self) -> &'static [Permission] {
        match self {
            Grant::All => &Permission::ALL,
            Grant::Only(permissions) => permissions,
        }
    }
}

/// Everything except user deletion and billing credentials, which stay with
/// the owner.
const ADMIN: &[Permission] = &[
    Permission::UserCreate,
    Permission::UserRead,
    Permission::UserUpdate,
    Permission::SettingsRead,
    Permission::SettingsUpdate,
    Permission::ProductRead,
    Permission::ProductWrite,
    Permission::CatalogRead,
    Permission::CatalogWrite,
    Permission::TableRead,
    Permission::TableWrite,
    Permission::TableActivate,
    Permission::FloorRead,
    Permission::FloorWrite,
    Permission::OrderRead,
    Permission::OrderUpdateStatus,
    Permission::OrderItemStatus,
    Permission::OrderMarkPaid,
    Permission::OrderCancel,
    Permission::OrderRemoveItem,
    Permission::InventoryRead,
    Permission::InventoryWrite,
    Permission::TranslationRead,
    Permission::TranslationWrite,
];

/// Menu visibility plus per-item preparation status.
const KITCHEN: &[Permission] = &[
    Permission::ProductRead,
    Permission::CatalogRead,
    Permission::OrderRead,
    Permission::OrderItemStatus,
];

/// Full order handling on the floor, short of cancellation.
const WAITER: &[Permission] = &[
    Permission::ProductRead,
    Permission::CatalogRead,
    Permission::TableRead,
    Permission::TableActivate,
    Permission::FloorRead,
    Permission::OrderRead,
    Permission::OrderUpdateStatus,
    Permission::OrderItemStatus,
    Permission::OrderMarkPaid,
    Permission::OrderRemoveItem,
];

/// Seating and viewing only.
const RECEPTIONIST: &[Permission] = &[
    Permission::ProductRead,
    Permission::CatalogRead,
    Permission::TableRead,
    Permission::TableActivate,
    Permission::FloorRead,
    Permission::OrderRead,
];

/// The permission set for a role.
///
/// Every role has exactly one entry; the match is exhaustive, so there is no
/// "unknown role" at this level. The unknown-role fail-closed boundary lives
/// in [`Role::from_str`](core::str::FromStr), which rejects unknown tags.
pub fn permissions_for(role: Role) -> Grant {
    match role {
        Role::Owner => Grant::All,
        Role::Admin => Grant::Only(ADMIN),
        Role::Kitchen => Grant::Only(KITCHEN),
        Role::Waiter => Grant::Only(WAITER),
        Role::Receptionist => Grant::Only(RECEPTIONIST),
    }
}

/// Does `role` hold `permission`? Pure function of static data.
pub fn role_has_permission(role: Role, permission: Permission) -> bool {
    permissions_for(role).contains(permission)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn owner_wildcard_grants_every_permission() {
        assert!(permissions_for(Role::Owner).is_all());
        for permission in Permission::ALL {
            assert!(role_has_permission(Role::Owner, permission));
        }
    }

    #[test]
    fn admin_lacks_exactly_the_owner_reserved_permissions() {
        let reserved = [Permission::UserDelete, Permission::SettingsBilling];
        for permission in Permission::ALL {
            let expected = !reserved.contains(&permission);
            assert_eq!(
                role_has_permission(Role::Admin, permission),
                expected,
                "admin grant wrong for {permission}"
            );
        }
    }

    #[test]
    fn no_dead_permissions() {
        // Every permission must be reachable from at least one role.
        for permission in Permission::ALL {
            assert!(
                Role::ALL
                    .iter()
                    .any(|role| role_has_permission(*role, permission)),
                "no role grants {permission}"
            );
        }
    }

    #[test]
    fn explicit_grants_hold_no_duplicates() {
        for role in Role::ALL {
            let grant = permissions_for(role);
            let unique: HashSet<Permission> = grant.permissions().iter().copied().collect();
            assert_eq!(unique.len(), grant.permissions().len(), "duplicate in {role}");
        }
    }

    #[test]
    fn kitchen_sees_orders_but_cannot_settle_them() {
        assert!(role_has_permission(Role::Kitchen, Permission::OrderRead));
        assert!(role_has_permission(Role::Kitchen, Permission::OrderItemStatus));
        assert!(!role_has_permission(Role::Kitchen, Permission::OrderMarkPaid));
        assert!(!role_has_permission(Role::Kitchen, Permission::TableRead));
    }

    #[test]
    fn floor_staff_cannot_cancel_orders_or_touch_billing() {
        for role in [Role::Kitchen, Role::Waiter, Role::Receptionist] {
            assert!(!role_has_permission(role, Permission::OrderCancel));
            assert!(!role_has_permission(role, Permission::SettingsBilling));
        }
    }
}
