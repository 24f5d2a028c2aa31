use core::str::FromStr;

use serde::{Deserialize, Serialize};

use tavola_core::DomainError;

/// Fine-grained capability tag of the form `<resource>:<action>`.
///
/// The set is closed and defined once at build time; permissions are never
/// created or destroyed at runtime. Granting is purely role-driven — see
/// [`crate::catalog`] for the role → permission mapping.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Permission {
    // User management
    #[serde(rename = "user:create")]
    UserCreate,
    #[serde(rename = "user:read")]
    UserRead,
    #[serde(rename = "user:update")]
    UserUpdate,
    #[serde(rename = "user:delete")]
    UserDelete,

    // Tenant settings
    #[serde(rename = "settings:read")]
    SettingsRead,
    #[serde(rename = "settings:update")]
    SettingsUpdate,
    /// Billing credentials. Owner only.
    #[serde(rename = "settings:billing")]
    SettingsBilling,

    // Products
    #[serde(rename = "product:read")]
    ProductRead,
    #[serde(rename = "product:write")]
    ProductWrite,

    // Catalog
    #[serde(rename = "catalog:read")]
    CatalogRead,
    #[serde(rename = "catalog:write")]
    CatalogWrite,

    // Tables
    #[serde(rename = "table:read")]
    TableRead,
    #[serde(rename = "table:write")]
    TableWrite,
    #[serde(rename = "table:activate")]
    TableActivate,

    // Floors
    #[serde(rename = "floor:read")]
    FloorRead,
    #[serde(rename = "floor:write")]
    FloorWrite,

    // Orders
    #[serde(rename = "order:read")]
    OrderRead,
    #[serde(rename = "order:update_status")]
    OrderUpdateStatus,
    #[serde(rename = "order:item_status")]
    OrderItemStatus,
    #[serde(rename = "order:mark_paid")]
    OrderMarkPaid,
    #[serde(rename = "order:cancel")]
    OrderCancel,
    #[serde(rename = "order:remove_item")]
    OrderRemoveItem,

    // Inventory
    #[serde(rename = "inventory:read")]
    InventoryRead,
    #[serde(rename = "inventory:write")]
    InventoryWrite,

    // Translations
    #[serde(rename = "translation:read")]
    TranslationRead,
    #[serde(rename = "translation:write")]
    TranslationWrite,
}

impl Permission {
    /// Every permission in the system.
    pub const ALL: [Permission; 26] = [
        Permission::UserCreate,
        Permission::UserRead,
        Permission::UserUpdate,
        Permission::UserDelete,
        Permission::SettingsRead,
        Permission::SettingsUpdate,
        Permission::SettingsBilling,
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

    /// Wire/storage tag for this permission (`<resource>:<action>`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Permission::UserCreate => "user:create",
            Permission::UserRead => "user:read",
            Permission::UserUpdate => "user:update",
            Permission::UserDelete => "user:delete",
            Permission::SettingsRead => "settings:read",
            Permission::SettingsUpdate => "settings:update",
            Permission::SettingsBilling => "settings:billing",
            Permission::ProductRead => "product:read",
            Permission::ProductWrite => "product:write",
            Permission::CatalogRead => "catalog:read",
            Permission::CatalogWrite => "catalog:write",
            Permission::TableRead => "table:read",
            Permission::TableWrite => "table:write",
            Permission::TableActivate => "table:activate",
            Permission::FloorRead => "floor:read",
            Permission::FloorWrite => "floor:write",
            Permission::OrderRead => "order:read",
            Permission::OrderUpdateStatus => "order:update_status",
            Permission::OrderItemStatus => "order:item_status",
            Permission::OrderMarkPaid => "order:mark_paid",
            Permission::OrderCancel => "order:cancel",
            Permission::OrderRemoveItem => "order:remove_item",
            Permission::InventoryRead => "inventory:read",
            Permission::InventoryWrite => "inventory:write",
            Permission::TranslationRead => "translation:read",
            Permission::TranslationWrite => "translation:write",
        }
    }

    /// The `<resource>` half of the tag.
    pub fn resource(&self) -> &'static str {
        let tag = self.as_str();
        match tag.split_once(':') {
            Some((resource, _)) => resource,
            None => tag,
        }
    }
}

impl core::fmt::Display for Permission {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Permission {
    type Err = DomainError;

    /// Parse a permission tag. Matching is literal; there is no prefix or
    /// wildcard matching on permission strings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Permission::ALL
            .iter()
            .find(|p| p.as_str() == s)
            .copied()
            .ok_or_else(|| DomainError::validation(format!("unknown permission: {s}")))
    }
}
