//! Session seam: where the current identity comes from.
//!
//! The network side of session handling (cookie transport, token refresh)
//! lives outside this workspace; this module defines the seam the guards
//! consume plus the in-memory cache with its explicit lifecycle — created
//! empty at app start, refreshed on login, cleared on logout.

use std::sync::{PoisonError, RwLock};

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::Identity;

/// Session lookup/validation failures.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// No valid session exists (never established, expired, or revoked).
    #[error("not authenticated")]
    Unauthenticated,

    /// The re-validation round-trip failed before an answer was obtained.
    #[error("session check failed: {0}")]
    Transport(String),
}

/// Source of the currently-authenticated identity.
///
/// `current_identity` is a synchronous in-memory read. `validate_session`
/// is the single network round-trip a guard may fall back to when the
/// cache is empty; implementations make one attempt, with no retry.
#[allow(async_fn_in_trait)]
pub trait IdentityProvider {
    fn current_identity(&self) -> Option<Identity>;

    async fn validate_session(&self) -> Result<Identity, SessionError>;
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
struct Established {
    identity: Identity,
    since: DateTime<Utc>,
}

/// In-memory session handle.
///
/// Single writer (the session owner: login/logout/refresh flows), many
/// readers (guards, services, views). Queries against a cleared cache all
/// deny, so a logout immediately invalidates every previously-true answer.
#[derive(Debug, Default)]
pub struct SessionCache {
    inner: RwLock<Option<Established>>,
}

impl SessionCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the identity for a fresh or re-established login.
    pub fn login(&self, identity: Identity) {
        *self.write() = Some(Established {
            identity,
            since: Utc::now(),
        });
    }

    /// Drop the session (logout). Subsequent queries deny.
    pub fn clear(&self) {
        *self.write() = None;
    }

    pub fn identity(&self) -> Option<Identity> {
        self.read().map(|e| e.identity)
    }

    /// When the current session was established, if one exists.
    pub fn established_at(&self) -> Option<DateTime<Utc>> {
        self.read().map(|e| e.since)
    }

    pub fn is_authenticated(&self) -> bool {
        self.read().is_some()
    }

    // Readers and the single writer never panic while holding the lock;
    // recover from poisoning rather than propagate it.
    fn read(&self) -> Option<Established> {
        *self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Option<Established>> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl IdentityProvider for SessionCache {
    fn current_identity(&self) -> Option<Identity> {
        self.identity()
    }

    /// The cache has no backend of its own, so re-validation can only
    /// confirm what is already in memory.
    async fn validate_session(&self) -> Result<Identity, SessionError> {
        self.identity().ok_or(SessionError::Unauthenticated)
    }
}
