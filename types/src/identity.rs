//! The signed-in identity and its role.

use serde::{Deserialize, Serialize};
use std::fmt;

/// What a signed-in identity may do in the portal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Voter,
    Commissioner,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Voter => "voter",
            Self::Commissioner => "commissioner",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "voter" => Some(Self::Voter),
            "commissioner" => Some(Self::Commissioner),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The authenticated user. At most one is resident per session.
///
/// Serialized as `{"id", "username", "email", "role"}`; a missing role is
/// stored as `null`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: String,
    pub username: String,
    pub email: String,
    pub role: Option<Role>,
}
