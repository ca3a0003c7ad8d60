//! Account address type with `levy_` prefix.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A LEVY account address, always prefixed with `levy_`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Address(String);

impl Address {
    /// The standard prefix for all LEVY account addresses.
    pub const PREFIX: &'static str = "levy_";

    /// Create a new address from a raw string.
    ///
    /// # Panics
    /// Panics if the string does not start with `levy_`.
    pub fn new(raw: impl Into<String>) -> Self {
        let s = raw.into();
        assert!(s.starts_with(Self::PREFIX), "address must start with levy_");
        Self(s)
    }

    /// The canonical zero address — the invalid-argument sentinel for
    /// admin setters. Never holds a balance and never receives fees.
    pub fn zero() -> Self {
        Self(format!("{}{}", Self::PREFIX, "0".repeat(60)))
    }

    /// Whether this is the canonical zero address.
    pub fn is_zero(&self) -> bool {
        self.0.len() == Self::PREFIX.len() + 60
            && self.0[Self::PREFIX.len()..].bytes().all(|b| b == b'0')
    }

    /// Return the raw address string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Validate that this address is well-formed.
    pub fn is_valid(&self) -> bool {
        self.0.starts_with(Self::PREFIX) && self.0.len() > Self::PREFIX.len()
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for Address {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_address_roundtrip() {
        let zero = Address::zero();
        assert!(zero.is_zero());
        assert!(zero.is_valid());
        assert_eq!(zero.as_str().len(), Address::PREFIX.len() + 60);
    }

    #[test]
    fn nonzero_address_is_not_zero() {
        let addr = Address::new(format!("levy_{:0>59}1", ""));
        assert!(!addr.is_zero());
    }

    #[test]
    fn short_all_zero_address_is_not_canonical_zero() {
        let addr = Address::new("levy_000");
        assert!(!addr.is_zero());
    }

    #[test]
    #[should_panic(expected = "must start with levy_")]
    fn wrong_prefix_panics() {
        Address::new("acct_1111");
    }
}
