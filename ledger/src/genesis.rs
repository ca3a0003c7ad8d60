//! Genesis ledger creation — the initial state on each network.
//!
//! A genesis ledger credits the entire supply to the deployer, makes the
//! deployer the controller and initial fee accumulator, and fee-exempts it.
//! Each `NetworkId` has its own supply parameters and canonical deployer so
//! that genesis state is fully deterministic per network.

use crate::engine::LedgerEngine;
use levy_types::amount::LVY_UNIT;
use levy_types::{Address, LedgerParams, NetworkId};

/// Configuration for creating a genesis ledger.
pub struct GenesisConfig {
    /// Which network this genesis is for.
    pub network: NetworkId,
    /// The account that receives the full supply and the controller role.
    pub deployer: Address,
}

/// Create the genesis ledger for a given configuration.
pub fn create_ledger(config: &GenesisConfig) -> LedgerEngine {
    let params = initial_params(&config.network);
    LedgerEngine::new(config.deployer.clone(), &params)
}

/// The canonical genesis ledger for a network (canonical deployer).
pub fn genesis_ledger(network: NetworkId) -> LedgerEngine {
    create_ledger(&GenesisConfig {
        network,
        deployer: genesis_deployer(&network),
    })
}

/// Return the initial ledger params for a network.
pub fn initial_params(network: &NetworkId) -> LedgerParams {
    match network {
        NetworkId::Live => LedgerParams::levy_defaults(),
        // Smaller supplies keep test/dev balances easy to eyeball.
        NetworkId::Test => LedgerParams {
            total_supply: 1_000_000_000 * LVY_UNIT,
            decimals: 18,
        },
        NetworkId::Dev => LedgerParams {
            total_supply: 1_000_000 * LVY_UNIT,
            decimals: 18,
        },
    }
}

/// Canonical genesis deployer address per network.
///
/// Live is a well-known address whose key material is managed by the
/// deployment; test/dev addresses are published for local use.
fn genesis_deployer(network: &NetworkId) -> Address {
    match network {
        NetworkId::Live => Address::new(
            "levy_1genesis1ive11111111111111111111111111111111111111111111111111111",
        ),
        NetworkId::Test => Address::new(
            "levy_1genesistest1111111111111111111111111111111111111111111111111111",
        ),
        NetworkId::Dev => Address::new(
            "levy_1genesisdev11111111111111111111111111111111111111111111111111111",
        ),
    }
}
