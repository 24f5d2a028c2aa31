//! `tavola-auth` — pure authorization boundary for the Tavola product.
//!
//! Answers "may this identity do X / enter route Y" for the routing layer
//! and for view logic. Intentionally decoupled from HTTP and storage: the
//! REST backend and the session transport are external collaborators.

pub mod catalog;
pub mod guard;
pub mod identity;
pub mod permissions;
pub mod roles;
pub mod routes;
pub mod rules;
pub mod service;
pub mod session;

pub use catalog::{Grant, permissions_for, role_has_permission};
pub use guard::{GuardDecision, RouteGuard, evaluate_chain, evaluate_guard};
pub use identity::Identity;
pub use permissions::Permission;
pub use roles::Role;
pub use routes::{allowed_roles_for, normalize_path};
pub use service::{
    AccessError, allowed_roles_for_route, authorize, authorize_all, can_access_route,
    has_all_permissions, has_any_permission, has_permission, has_role, is_admin, is_owner,
};
pub use session::{IdentityProvider, SessionCache, SessionError};
