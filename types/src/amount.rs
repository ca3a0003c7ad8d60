//! Token amount type for LVY.
//!
//! Amounts are represented as fixed-point integers (u128) to avoid
//! floating-point errors. The smallest unit is 1 raw; one whole LVY is
//! `LVY_UNIT` raw (18 decimal places).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

/// Raw units per whole LVY (10^18).
pub const LVY_UNIT: u128 = 1_000_000_000_000_000_000;

/// LVY amount — the ledger's fungible token.
///
/// Internally stored as raw units (u128) for precision.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LvyAmount(u128);

impl LvyAmount {
    pub const ZERO: Self = Self(0);

    pub fn new(raw: u128) -> Self {
        Self(raw)
    }

    /// Whole-LVY constructor: `from_lvy(5)` == 5 × 10^18 raw.
    pub fn from_lvy(units: u128) -> Self {
        Self(units * LVY_UNIT)
    }

    /// Whole-LVY view (truncates sub-unit raw).
    pub fn to_lvy(&self) -> u128 {
        self.0 / LVY_UNIT
    }

    pub fn raw(&self) -> u128 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    pub fn checked_sub(self, other: Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }

    pub fn saturating_sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl Add for LvyAmount {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sub for LvyAmount {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl fmt::Display for LvyAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} LVY raw", self.0)
    }
}
