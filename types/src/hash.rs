//! Simulated transaction hashes for cast votes.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::address::is_prefixed_base36;
use crate::TypeError;

/// A transaction hash as entered by a voter or issued by the ballot service.
///
/// Any non-blank string is accepted when parsed; hashes built with
/// [`TxHash::from_body`] are always `0x` followed by lowercase base-36
/// characters. Nothing is hashed.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TxHash(String);

impl TxHash {
    pub const PREFIX: &'static str = "0x";

    /// Number of body characters generated for a fresh hash.
    pub const BODY_LEN: usize = 32;

    /// Accept any hash with surrounding whitespace removed. Only blank input
    /// is rejected.
    pub fn parse(raw: impl Into<String>) -> Result<Self, TypeError> {
        let s = raw.into();
        let trimmed = s.trim();
        if trimmed.is_empty() {
            Err(TypeError::InvalidTxHash(s))
        } else {
            Ok(Self(trimmed.to_string()))
        }
    }

    /// Build a hash from a freshly generated base-36 body.
    pub fn from_body(body: &str) -> Result<Self, TypeError> {
        let s = format!("{}{}", Self::PREFIX, body);
        if is_prefixed_base36(&s) {
            Ok(Self(s))
        } else {
            Err(TypeError::InvalidTxHash(s))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for TxHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let short: String = self.0.chars().take(10).collect();
        write!(f, "TxHash({short})")
    }
}

impl fmt::Display for TxHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for TxHash {
    type Error = TypeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl From<TxHash> for String {
    fn from(hash: TxHash) -> Self {
        hash.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_hash_is_rejected() {
        assert_eq!(
            TxHash::parse(""),
            Err(TypeError::InvalidTxHash(String::new()))
        );
        assert!(TxHash::parse("   ").is_err());
    }

    #[test]
    fn foreign_hash_formats_are_accepted() {
        assert_eq!(TxHash::parse("0xDEADBEEF").unwrap().as_str(), "0xDEADBEEF");
        assert_eq!(TxHash::parse("abc123").unwrap().as_str(), "abc123");
    }

    #[test]
    fn synthesized_bodies_must_be_base36() {
        assert_eq!(TxHash::from_body("k3j9").unwrap().as_str(), "0xk3j9");
        assert!(TxHash::from_body("").is_err());
        assert!(TxHash::from_body("ABC").is_err());
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        let hash = TxHash::parse("  0xabc123 ").unwrap();
        assert_eq!(hash.as_str(), "0xabc123");
    }
}
