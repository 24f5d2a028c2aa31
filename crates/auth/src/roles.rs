use core::str::FromStr;

use serde::{Deserialize, Serialize};

use tavola_core::DomainError;

/// Staff category assigned to a user.
///
/// The set is closed and fixed at build time. A role is immutable on an
/// identity once assigned; it changes only through an explicit user-update
/// operation performed by an authorized actor (see [`crate::rules`]).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Owner,
    Admin,
    Kitchen,
    Waiter,
    Receptionist,
}

impl Role {
    /// The full role universe, from most to least privileged.
    pub const ALL: [Role; 5] = [
        Role::Owner,
        Role::Admin,
        Role::Kitchen,
        Role::Waiter,
        Role::Receptionist,
    ];

    /// Wire/storage tag for this role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Owner => "owner",
            Role::Admin => "admin",
            Role::Kitchen => "kitchen",
            Role::Waiter => "waiter",
            Role::Receptionist => "receptionist",
        }
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = DomainError;

    /// Parse a role tag. Unknown tags fail closed rather than mapping to a
    /// default role.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "owner" => Ok(Role::Owner),
            "admin" => Ok(Role::Admin),
            "kitchen" => Ok(Role::Kitchen),
            "waiter" => Ok(Role::Waiter),
            "receptionist" => Ok(Role::Receptionist),
            other => Err(DomainError::validation(format!("unknown role: {other}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_tags_round_trip() {
        for role in Role::ALL {
            assert_eq!(role.as_str().parse::<Role>().unwrap(), role);
        }
    }

    #[test]
    fn unknown_role_tag_fails_closed() {
        let result = "superuser".parse::<Role>();
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn serde_uses_wire_tags() {
        assert_eq!(serde_json::to_string(&Role::Owner).unwrap(), "\"owner\"");
        let role: Role = serde_json::from_str("\"receptionist\"").unwrap();
        assert_eq!(role, Role::Receptionist);
    }
}
