//! Authorization decision queries.
//!
//! Bridges the identity, the permission catalog, and the route-access table
//! into the queries guards and view logic consume. Every query is a pure,
//! stateless function of `(Option<&Identity>, static tables)`; an absent
//! identity denies everything.

use thiserror::Error;

use crate::{Identity, Permission, Role, catalog, routes};

/// Denial at an operation boundary, for callers that dispatch a command and
/// want an error to propagate instead of a boolean.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AccessError {
    #[error("not authenticated")]
    Unauthenticated,

    #[error("forbidden: missing permission '{0}'")]
    MissingPermission(Permission),
}

/// Does the identity hold `permission`? False when the identity is absent.
pub fn has_permission(identity: Option<&Identity>, permission: Permission) -> bool {
    match identity {
        Some(identity) => catalog::role_has_permission(identity.role, permission),
        None => false,
    }
}

/// True iff at least one permission check succeeds. Short-circuits; the
/// checks are pure, so evaluation order is unobservable.
pub fn has_any_permission(identity: Option<&Identity>, permissions: &[Permission]) -> bool {
    permissions.iter().any(|p| has_permission(identity, *p))
}

/// True iff every permission check succeeds.
pub fn has_all_permissions(identity: Option<&Identity>, permissions: &[Permission]) -> bool {
    permissions.iter().all(|p| has_permission(identity, *p))
}

/// Is the identity's role one of `roles`? False when the identity is absent.
pub fn has_role(identity: Option<&Identity>, roles: &[Role]) -> bool {
    identity.is_some_and(|i| roles.contains(&i.role))
}

/// Owner or admin.
pub fn is_admin(identity: Option<&Identity>) -> bool {
    has_role(identity, &[Role::Owner, Role::Admin])
}

pub fn is_owner(identity: Option<&Identity>) -> bool {
    has_role(identity, &[Role::Owner])
}

/// May the identity enter `path`?
///
/// False when the identity is absent. Registered paths (exact or ancestor
/// match, see [`crate::routes`]) test the identity's role against the
/// entry; unregistered paths are permissive for any authenticated user.
pub fn can_access_route(identity: Option<&Identity>, path: &str) -> bool {
    let Some(identity) = identity else {
        return false;
    };

    match routes::find(path) {
        Some(roles) => roles.contains(&identity.role),
        None => true,
    }
}

/// The roles permitted on `path`, or the full role universe when no table
/// entry matches.
pub fn allowed_roles_for_route(path: &str) -> &'static [Role] {
    routes::allowed_roles_for(path)
}

/// Boundary form of [`has_permission`].
pub fn authorize(identity: Option<&Identity>, permission: Permission) -> Result<(), AccessError> {
    let Some(identity) = identity else {
        return Err(AccessError::Unauthenticated);
    };

    if catalog::role_has_permission(identity.role, permission) {
        Ok(())
    } else {
        Err(AccessError::MissingPermission(permission))
    }
}

/// Require every permission in `permissions`; the first missing one is
/// reported.
pub fn authorize_all(
    identity: Option<&Identity>,
    permissions: &[Permission],
) -> Result<(), AccessError> {
    for permission in permissions {
        authorize(identity, *permission)?;
    }
    Ok(())
}
