//! User-administration rules.
//!
//! One place for the actor/target policy that gates user management, so a
//! policy change is a single edit rather than a hunt through view code.
//! All functions are pure; callers pass the actor and target explicitly.

use tavola_core::UserId;

use crate::Role;

const BELOW_OWNER: &[Role] = &[Role::Admin, Role::Kitchen, Role::Waiter, Role::Receptionist];

/// May `actor_role` create users with, or assign, `target_role`?
///
/// Owner manages every role; admin manages every role except owner; nobody
/// else manages users.
pub fn can_manage_role(actor_role: Role, target_role: Role) -> bool {
    match actor_role {
        Role::Owner => true,
        Role::Admin => target_role != Role::Owner,
        Role::Kitchen | Role::Waiter | Role::Receptionist => false,
    }
}

/// May the actor modify the target user's record?
///
/// Owner modifies anyone; admin modifies anyone except owners; everyone
/// else only themselves (limited fields, enforced by the backend).
pub fn can_modify_user(
    actor_role: Role,
    actor_id: UserId,
    target_role: Role,
    target_id: UserId,
) -> bool {
    match actor_role {
        Role::Owner => true,
        Role::Admin => target_role != Role::Owner,
        Role::Kitchen | Role::Waiter | Role::Receptionist => actor_id == target_id,
    }
}

/// May the actor delete the target user?
///
/// Deletion is stricter than management: self-deletion is never allowed,
/// owner accounts are never deletable, and only an owner may delete at
/// all — matching the catalog, where `user:delete` is owner-reserved.
pub fn can_delete_user(
    actor_role: Role,
    actor_id: UserId,
    target_role: Role,
    target_id: UserId,
) -> bool {
    if actor_id == target_id {
        return false;
    }
    if target_role == Role::Owner {
        return false;
    }
    actor_role == Role::Owner
}

/// The roles the actor may hand out when creating or updating users.
pub fn assignable_roles(actor_role: Role) -> &'static [Role] {
    match actor_role {
        Role::Owner => &Role::ALL,
        Role::Admin => BELOW_OWNER,
        Role::Kitchen | Role::Waiter | Role::Receptionist => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn owner_manages_everyone_including_other_owners() {
        for target in Role::ALL {
            assert!(can_manage_role(Role::Owner, target));
        }
    }

    #[test]
    fn admin_cannot_touch_owners() {
        assert!(!can_manage_role(Role::Admin, Role::Owner));
        assert!(can_manage_role(Role::Admin, Role::Admin));
        assert!(can_manage_role(Role::Admin, Role::Waiter));

        let admin = UserId::new();
        let owner = UserId::new();
        assert!(!can_modify_user(Role::Admin, admin, Role::Owner, owner));
        assert!(!can_delete_user(Role::Admin, admin, Role::Owner, owner));
    }

    #[test]
    fn staff_may_only_modify_themselves() {
        let me = UserId::new();
        let someone_else = UserId::new();

        for role in [Role::Kitchen, Role::Waiter, Role::Receptionist] {
            assert!(can_modify_user(role, me, role, me));
            assert!(!can_modify_user(role, me, Role::Waiter, someone_else));
            assert!(!can_manage_role(role, Role::Receptionist));
        }
    }

    #[test]
    fn self_deletion_is_always_denied() {
        let me = UserId::new();
        for role in Role::ALL {
            assert!(!can_delete_user(role, me, role, me));
        }
    }

    #[test]
    fn deletion_is_owner_only_and_spares_owners() {
        let actor = UserId::new();
        let other = UserId::new();

        assert!(can_delete_user(Role::Owner, actor, Role::Kitchen, other));
        // Owner accounts are never deletable, not even by another owner.
        assert!(!can_delete_user(Role::Owner, actor, Role::Owner, other));
        // Admins manage non-owner users but may not delete them.
        assert!(can_manage_role(Role::Admin, Role::Kitchen));
        assert!(!can_delete_user(Role::Admin, actor, Role::Kitchen, other));

        // Agreement with the catalog: whoever lacks user:delete cannot delete.
        for role in Role::ALL {
            if !crate::catalog::role_has_permission(role, crate::Permission::UserDelete) {
                assert!(!can_delete_user(role, actor, Role::Waiter, other));
            }
        }
    }

    #[test]
    fn assignable_roles_match_management_reach() {
        assert_eq!(assignable_roles(Role::Owner), &Role::ALL);
        assert!(!assignable_roles(Role::Admin).contains(&Role::Owner));
        assert_eq!(assignable_roles(Role::Admin).len(), 4);
        assert!(assignable_roles(Role::Waiter).is_empty());

        // The two views of the same policy must agree.
        for actor in Role::ALL {
            for target in Role::ALL {
                assert_eq!(
                    assignable_roles(actor).contains(&target),
                    can_manage_role(actor, target),
                    "rule mismatch for {actor} -> {target}"
                );
            }
        }
    }
}
