//! Ledger parameters — supply and denomination constants fixed at genesis.

use crate::amount::LvyAmount;
use serde::{Deserialize, Serialize};

/// Parameters a ledger is initialized with.
///
/// The total supply is minted once at genesis and never changes; there is no
/// further issuance and no burning in this ledger.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerParams {
    /// Total token supply in raw units.
    pub total_supply: u128,

    /// Decimal places of the fixed-point representation.
    pub decimals: u32,
}

impl LedgerParams {
    /// LEVY live-network defaults: 1 trillion whole LVY.
    pub fn levy_defaults() -> Self {
        Self {
            total_supply: LvyAmount::from_lvy(1_000_000_000_000).raw(),
            decimals: 18,
        }
    }
}

/// Default is the live-network configuration.
impl Default for LedgerParams {
    fn default() -> Self {
        Self::levy_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::amount::LVY_UNIT;

    #[test]
    fn live_supply_is_one_trillion_lvy() {
        let params = LedgerParams::levy_defaults();
        assert_eq!(params.total_supply, 1_000_000_000_000 * LVY_UNIT);
        assert_eq!(params.decimals, 18);
    }
}
