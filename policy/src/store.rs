//! The admin policy store — controller-gated fee configuration.

use crate::error::PolicyError;
use levy_types::{Address, FeeRate};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Fee policy state: accumulator, exemptions, and per-address rates.
///
/// Every mutator takes the caller explicitly and rejects anyone but the
/// controller before looking at the arguments. Reads are unrestricted and
/// side-effect-free.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FeePolicy {
    controller: Address,
    fee_accumulator: Address,
    exempt: HashSet<Address>,
    rates: HashMap<Address, FeeRate>,
}

impl FeePolicy {
    /// Create the initial policy for a freshly deployed ledger.
    ///
    /// The deployer becomes the controller, is auto-exempted, and is
    /// assigned as the initial fee accumulator.
    pub fn new(controller: Address) -> Self {
        let mut exempt = HashSet::new();
        exempt.insert(controller.clone());
        Self {
            fee_accumulator: controller.clone(),
            controller,
            exempt,
            rates: HashMap::new(),
        }
    }

    fn require_controller(&self, caller: &Address) -> Result<(), PolicyError> {
        if *caller != self.controller {
            return Err(PolicyError::Unauthorized {
                caller: caller.clone(),
            });
        }
        Ok(())
    }

    /// Replace the fee-accumulator address.
    ///
    /// No retroactive effect: fees already credited to the previous
    /// accumulator stay where they are.
    pub fn set_fee_accumulator(
        &mut self,
        caller: &Address,
        address: Address,
    ) -> Result<(), PolicyError> {
        self.require_controller(caller)?;
        if address.is_zero() {
            return Err(PolicyError::InvalidAddress(address.to_string()));
        }
        self.fee_accumulator = address;
        Ok(())
    }

    /// Add or remove an address from the fee-exempt set. Idempotent.
    pub fn set_fee_exempt(
        &mut self,
        caller: &Address,
        address: Address,
        exempt: bool,
    ) -> Result<(), PolicyError> {
        self.require_controller(caller)?;
        if address.is_zero() {
            return Err(PolicyError::InvalidAddress(address.to_string()));
        }
        if exempt {
            self.exempt.insert(address);
        } else {
            self.exempt.remove(&address);
        }
        Ok(())
    }

    /// Replace both fee-rate components for an address as one atomic update.
    pub fn set_fee_rate(
        &mut self,
        caller: &Address,
        address: Address,
        rate: FeeRate,
    ) -> Result<(), PolicyError> {
        self.require_controller(caller)?;
        if address.is_zero() {
            return Err(PolicyError::InvalidAddress(address.to_string()));
        }
        if !rate.is_valid() {
            return Err(PolicyError::InvalidFee {
                bps: rate.outbound_bps.max(rate.inbound_bps),
            });
        }
        self.rates.insert(address, rate);
        Ok(())
    }

    /// Hand the controller identity to a new address.
    ///
    /// The incoming controller is not auto-exempted; exemption is policy
    /// data, not a consequence of holding the controller role.
    pub fn set_controller(
        &mut self,
        caller: &Address,
        new_controller: Address,
    ) -> Result<(), PolicyError> {
        self.require_controller(caller)?;
        if new_controller.is_zero() {
            return Err(PolicyError::InvalidAddress(new_controller.to_string()));
        }
        self.controller = new_controller;
        Ok(())
    }

    pub fn controller(&self) -> &Address {
        &self.controller
    }

    pub fn fee_accumulator(&self) -> &Address {
        &self.fee_accumulator
    }

    pub fn is_fee_exempt(&self, address: &Address) -> bool {
        self.exempt.contains(address)
    }

    /// The configured rate for an address; absent entries read as zero.
    pub fn fee_rate(&self, address: &Address) -> FeeRate {
        self.rates.get(address).copied().unwrap_or(FeeRate::ZERO)
    }
}
