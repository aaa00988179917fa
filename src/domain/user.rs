//! Session principal and role.

use serde::{Deserialize, Serialize};

/// The authenticated user for the lifetime of a session. Not persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    /// User identifier
    pub id: String,

    /// Display name
    pub name: String,

    /// Role gating mutation affordances in the UI
    pub role: Role,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// Two-valued role model: admins see mutation controls, members do not.
/// The gate is UI-level only; there is no server-side enforcement in this
/// application.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Admin,
    Member,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Admin => write!(f, "ADMIN"),
            Self::Member => write!(f, "MEMBER"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_serializes_uppercase() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"ADMIN\"");
        assert_eq!(serde_json::to_string(&Role::Member).unwrap(), "\"MEMBER\"");
    }

    #[test]
    fn test_is_admin() {
        let user = User {
            id: "u-1".to_string(),
            name: "Dana".to_string(),
            role: Role::Admin,
        };
        assert!(user.is_admin());
    }
}
