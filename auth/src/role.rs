use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

/// Coarse-grained permission class carried in every token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Admin,
    User,
}

impl Role {
    /// Check whether this role may access an operation with the given requirement.
    ///
    /// `Admin` satisfies every requirement. `User` satisfies `Authenticated`
    /// and `Role(User)`.
    pub fn satisfies(&self, requirement: Requirement) -> bool {
        match (self, requirement) {
            (_, Requirement::Authenticated) => true,
            (Role::Admin, Requirement::Role(_)) => true,
            (Role::User, Requirement::Role(required)) => required == Role::User,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::User => "User",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unknown role: {0}")]
pub struct RoleParseError(pub String);

impl FromStr for Role {
    type Err = RoleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Admin" => Ok(Role::Admin),
            "User" => Ok(Role::User),
            other => Err(RoleParseError(other.to_string())),
        }
    }
}

/// Access requirement declared by a protected operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    /// Any holder of a valid token.
    Authenticated,
    /// A token whose role satisfies the given role.
    Role(Role),
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Requirement::Authenticated => f.write_str("authenticated"),
            Requirement::Role(role) => write!(f, "role {}", role),
        }
    }
}
