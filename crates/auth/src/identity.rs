use serde::{Deserialize, Serialize};

use tavola_core::{TenantId, UserId};

use crate::Role;

/// The currently-authenticated user, as supplied by the session collaborator.
///
/// This layer only ever reads identities; it never mutates or persists them.
/// Every user carries exactly one role within exactly one tenant.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub user_id: UserId,
    pub tenant_id: TenantId,
    pub role: Role,
}

impl Identity {
    pub fn new(user_id: UserId, tenant_id: TenantId, role: Role) -> Self {
        Self {
            user_id,
            tenant_id,
            role,
        }
    }
}
