//! Route guards: gate entry into a protected view during navigation.
//!
//! A guard is a tagged configuration value interpreted by one generic
//! evaluator, not a closure per route. The router evaluates a route's
//! guards in sequence and all must allow; an authentication guard precedes
//! any role guard so role checks never run against an absent identity.

use serde::Serialize;
use tracing::{debug, warn};

use crate::{Identity, Role, service, session::IdentityProvider};

/// Guard configuration attached to a route.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RouteGuard {
    /// Any authenticated identity may pass.
    Authenticated,
    /// Only identities whose role is in `allowed` may pass.
    RoleRestricted { allowed: &'static [Role] },
}

impl RouteGuard {
    pub const fn role_restricted(allowed: &'static [Role]) -> Self {
        Self::RoleRestricted { allowed }
    }

    /// Owner only.
    pub const OWNER: Self = Self::RoleRestricted {
        allowed: &[Role::Owner],
    };

    /// Owners and admins.
    pub const ADMIN: Self = Self::RoleRestricted {
        allowed: &[Role::Owner, Role::Admin],
    };

    /// Staff with table access (everyone but the kitchen).
    pub const TABLE_ACCESS: Self = Self::RoleRestricted {
        allowed: &[Role::Owner, Role::Admin, Role::Waiter, Role::Receptionist],
    };

    /// Staff with order access.
    pub const ORDER_ACCESS: Self = Self::RoleRestricted {
        allowed: &Role::ALL,
    };
}

/// Outcome of a guard evaluation. Denials resolve to redirects; nothing
/// here surfaces as an error to the router.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GuardDecision {
    Allow,
    /// Unauthenticated (or the session check failed): go log in.
    RedirectToLogin,
    /// Authenticated but not permitted: back to the home view.
    RedirectToHome,
}

impl GuardDecision {
    pub fn is_allow(&self) -> bool {
        matches!(self, GuardDecision::Allow)
    }
}

/// Resolve the identity for one navigation attempt.
///
/// Reads the in-memory identity first; only when it is absent does this
/// make the single `validate_session` round-trip (one attempt, no retry).
/// A transport failure lands in the same place as a stale session — the
/// login view — with the distinction only logged.
async fn resolve_identity<P: IdentityProvider>(provider: &P, path: &str) -> Option<Identity> {
    match provider.current_identity() {
        Some(identity) => Some(identity),
        None => match provider.validate_session().await {
            Ok(identity) => Some(identity),
            Err(err) => {
                debug!(error = %err, path, "session re-validation failed");
                None
            }
        },
    }
}

/// Check one guard against an already-resolved identity.
fn check(guard: RouteGuard, identity: &Identity, path: &str) -> GuardDecision {
    match guard {
        RouteGuard::Authenticated => GuardDecision::Allow,
        RouteGuard::RoleRestricted { allowed } => {
            if service::has_role(Some(identity), allowed) {
                GuardDecision::Allow
            } else {
                warn!(
                    role = identity.role.as_str(),
                    required = ?allowed,
                    path,
                    "navigation denied"
                );
                GuardDecision::RedirectToHome
            }
        }
    }
}

/// Evaluate one guard against the target `path`.
pub async fn evaluate_guard<P: IdentityProvider>(
    guard: RouteGuard,
    provider: &P,
    path: &str,
) -> GuardDecision {
    evaluate_chain(&[guard], provider, path).await
}

/// Evaluate a route's guards in order; the first non-allow decision wins.
///
/// The identity is resolved once per navigation attempt and shared by all
/// guards in the chain, so a chain makes at most one session round-trip.
/// A route with no guards is public and resolves nothing.
pub async fn evaluate_chain<P: IdentityProvider>(
    guards: &[RouteGuard],
    provider: &P,
    path: &str,
) -> GuardDecision {
    if guards.is_empty() {
        return GuardDecision::Allow;
    }

    let Some(identity) = resolve_identity(provider, path).await else {
        return GuardDecision::RedirectToLogin;
    };

    for guard in guards {
        let decision = check(*guard, &identity, path);
        if !decision.is_allow() {
            return decision;
        }
    }
    GuardDecision::Allow
}
