//! Per-address transfer fee rates, in basis points.

use serde::{Deserialize, Serialize};

/// Basis points per 100% (1 bp = 0.01%).
pub const BPS_DENOMINATOR: u32 = 10_000;

/// Cap on each fee-rate component: 1000 bp = 10%.
///
/// The cap binds per address per direction. The combined rate of a transfer
/// (sender outbound + recipient inbound) is NOT capped and may reach 2000 bp.
pub const MAX_FEE_BPS: u32 = 1_000;

/// The fee rates configured for a single address.
///
/// `outbound_bps` applies when the address sends, `inbound_bps` when it
/// receives. An address with no table entry is treated as `FeeRate::ZERO`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FeeRate {
    pub outbound_bps: u32,
    pub inbound_bps: u32,
}

impl FeeRate {
    pub const ZERO: Self = Self {
        outbound_bps: 0,
        inbound_bps: 0,
    };

    pub fn new(outbound_bps: u32, inbound_bps: u32) -> Self {
        Self {
            outbound_bps,
            inbound_bps,
        }
    }

    /// Whether both components respect `MAX_FEE_BPS`.
    pub fn is_valid(&self) -> bool {
        self.outbound_bps <= MAX_FEE_BPS && self.inbound_bps <= MAX_FEE_BPS
    }

    pub fn is_zero(&self) -> bool {
        self.outbound_bps == 0 && self.inbound_bps == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn at_cap_is_valid() {
        assert!(FeeRate::new(MAX_FEE_BPS, MAX_FEE_BPS).is_valid());
    }

    #[test]
    fn over_cap_is_invalid() {
        assert!(!FeeRate::new(MAX_FEE_BPS + 1, 0).is_valid());
        assert!(!FeeRate::new(0, MAX_FEE_BPS + 1).is_valid());
    }

    #[test]
    fn default_is_zero() {
        assert_eq!(FeeRate::default(), FeeRate::ZERO);
        assert!(FeeRate::default().is_zero());
    }
}
