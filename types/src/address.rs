//! Wallet address type with `0x` prefix.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::TypeError;

/// A simulated wallet address: `0x` followed by lowercase base-36 characters.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct WalletAddress(String);

impl WalletAddress {
    /// The standard prefix for all wallet addresses.
    pub const PREFIX: &'static str = "0x";

    /// Number of body characters generated for a fresh address.
    pub const BODY_LEN: usize = 13;

    /// Parse and validate a raw address string.
    pub fn parse(raw: impl Into<String>) -> Result<Self, TypeError> {
        let s = raw.into();
        if is_prefixed_base36(&s) {
            Ok(Self(s))
        } else {
            Err(TypeError::InvalidAddress(s))
        }
    }

    /// Build an address from a freshly generated base-36 body.
    pub fn from_body(body: &str) -> Result<Self, TypeError> {
        Self::parse(format!("{}{}", Self::PREFIX, body))
    }

    /// Return the raw address string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

pub(crate) fn is_prefixed_base36(s: &str) -> bool {
    match s.strip_prefix(WalletAddress::PREFIX) {
        Some(body) => {
            !body.is_empty()
                && body
                    .chars()
                    .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase())
        }
        None => false,
    }
}

impl fmt::Display for WalletAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for WalletAddress {
    type Error = TypeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl From<WalletAddress> for String {
    fn from(address: WalletAddress) -> Self {
        address.0
    }
}
