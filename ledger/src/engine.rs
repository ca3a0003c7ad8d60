//! Core ledger engine — balances, allowances, and the transfer tax.

use crate::error::LedgerError;
use levy_policy::{compute_fee, FeePolicy, PolicyError};
use levy_store::LedgerStore;
use levy_types::{Address, FeeRate, LedgerParams};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, info};

/// Allowance sentinel that is never decremented on spend.
pub const UNLIMITED_ALLOWANCE: u128 = u128::MAX;

/// Everything the host needs to emit events for one successful transfer.
///
/// `fee_recipient` is `Some` only when a fee was actually credited; a
/// zero-fee transfer produces no accumulator credit and no fee event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferOutcome {
    pub sender: Address,
    pub recipient: Address,
    pub amount_received: u128,
    pub fee_applied: u128,
    pub fee_recipient: Option<Address>,
}

/// The ledger engine — balances, allowances, and the admin fee policy.
///
/// One operation at a time: every method is a single synchronous state
/// transition, and every failure is checked before the first write, so a
/// returned error means nothing was mutated.
#[derive(Debug)]
pub struct LedgerEngine {
    balances: HashMap<Address, u128>,
    allowances: HashMap<(Address, Address), u128>,
    policy: FeePolicy,
    total_supply: u128,
}

impl LedgerEngine {
    /// Create a ledger with the full supply credited to the deployer.
    ///
    /// The deployer becomes the controller, is fee-exempted, and is the
    /// initial fee accumulator.
    pub fn new(deployer: Address, params: &LedgerParams) -> Self {
        let mut balances = HashMap::new();
        balances.insert(deployer.clone(), params.total_supply);
        Self {
            balances,
            allowances: HashMap::new(),
            policy: FeePolicy::new(deployer),
            total_supply: params.total_supply,
        }
    }

    pub fn total_supply(&self) -> u128 {
        self.total_supply
    }

    /// Balance of an account; unknown accounts hold zero.
    pub fn balance_of(&self, address: &Address) -> u128 {
        self.balances.get(address).copied().unwrap_or(0)
    }

    /// Iterate all accounts with a recorded balance.
    pub fn iter_balances(&self) -> impl Iterator<Item = (&Address, u128)> {
        self.balances.iter().map(|(a, b)| (a, *b))
    }

    /// Remaining allowance for (owner, spender); absent pairs read as zero.
    pub fn allowance(&self, owner: &Address, spender: &Address) -> u128 {
        self.allowances
            .get(&(owner.clone(), spender.clone()))
            .copied()
            .unwrap_or(0)
    }

    /// Set the allowance for (owner, spender), overwriting any prior value.
    pub fn approve(&mut self, owner: &Address, spender: &Address, amount: u128) {
        if amount == 0 {
            self.allowances.remove(&(owner.clone(), spender.clone()));
        } else {
            self.allowances
                .insert((owner.clone(), spender.clone()), amount);
        }
    }

    /// Transfer `amount` raw units from `sender` to `recipient`, withholding
    /// the configured fee.
    pub fn transfer(
        &mut self,
        sender: &Address,
        recipient: &Address,
        amount: u128,
    ) -> Result<TransferOutcome, LedgerError> {
        self.apply_transfer(sender, recipient, amount)
    }

    /// Allowance-based transfer: `spender` moves `amount` from `owner` to
    /// `recipient`.
    ///
    /// The allowance must cover the pre-fee amount and is decremented by the
    /// pre-fee amount regardless of the fee applied — the fee is carved out
    /// of what the recipient receives, not out of the allowance. The
    /// `UNLIMITED_ALLOWANCE` sentinel is never decremented.
    pub fn transfer_from(
        &mut self,
        spender: &Address,
        owner: &Address,
        recipient: &Address,
        amount: u128,
    ) -> Result<TransferOutcome, LedgerError> {
        let allowance = self.allowance(owner, spender);
        if allowance != UNLIMITED_ALLOWANCE && allowance < amount {
            return Err(LedgerError::InsufficientAllowance {
                needed: amount,
                available: allowance,
            });
        }
        let outcome = self.apply_transfer(owner, recipient, amount)?;
        if allowance != UNLIMITED_ALLOWANCE {
            self.approve(owner, spender, allowance - amount);
        }
        Ok(outcome)
    }

    /// The transfer tax engine.
    ///
    /// Debits `sender` by the full `amount`, credits `recipient` with
    /// `amount − fee`, and credits the fee accumulator with `fee` when it is
    /// non-zero. When sender or recipient coincides with the accumulator the
    /// debits/credits still apply independently and additively — no
    /// special-casing.
    pub fn apply_transfer(
        &mut self,
        sender: &Address,
        recipient: &Address,
        amount: u128,
    ) -> Result<TransferOutcome, LedgerError> {
        let fee = compute_fee(&self.policy, sender, recipient, amount);
        let available = self.balance_of(sender);
        if available < amount {
            return Err(LedgerError::InsufficientBalance {
                needed: amount,
                available,
            });
        }

        // All preconditions hold; the credits below cannot overflow while
        // the sum-of-balances == total-supply invariant holds.
        self.debit(sender, amount)?;
        self.credit(recipient, amount - fee)?;
        if fee > 0 {
            let accumulator = self.policy.fee_accumulator().clone();
            self.credit(&accumulator, fee)?;
            debug!(
                sender = %sender,
                recipient = %recipient,
                amount,
                fee,
                accumulator = %accumulator,
                "transfer applied with fee"
            );
            Ok(TransferOutcome {
                sender: sender.clone(),
                recipient: recipient.clone(),
                amount_received: amount - fee,
                fee_applied: fee,
                fee_recipient: Some(accumulator),
            })
        } else {
            debug!(sender = %sender, recipient = %recipient, amount, "transfer applied");
            Ok(TransferOutcome {
                sender: sender.clone(),
                recipient: recipient.clone(),
                amount_received: amount,
                fee_applied: 0,
                fee_recipient: None,
            })
        }
    }

    fn debit(&mut self, address: &Address, amount: u128) -> Result<(), LedgerError> {
        let balance = self.balances.entry(address.clone()).or_insert(0);
        *balance = balance.checked_sub(amount).ok_or(LedgerError::Overflow)?;
        Ok(())
    }

    fn credit(&mut self, address: &Address, amount: u128) -> Result<(), LedgerError> {
        let balance = self.balances.entry(address.clone()).or_insert(0);
        *balance = balance.checked_add(amount).ok_or(LedgerError::Overflow)?;
        Ok(())
    }

    // ── Admin policy surface ─────────────────────────────────────────────

    pub fn set_fee_accumulator(
        &mut self,
        caller: &Address,
        address: Address,
    ) -> Result<(), PolicyError> {
        self.policy.set_fee_accumulator(caller, address.clone())?;
        info!(accumulator = %address, "fee accumulator updated");
        Ok(())
    }

    pub fn set_fee_exempt(
        &mut self,
        caller: &Address,
        address: Address,
        exempt: bool,
    ) -> Result<(), PolicyError> {
        self.policy.set_fee_exempt(caller, address.clone(), exempt)?;
        info!(address = %address, exempt, "fee exemption updated");
        Ok(())
    }

    pub fn set_fee_rate(
        &mut self,
        caller: &Address,
        address: Address,
        rate: FeeRate,
    ) -> Result<(), PolicyError> {
        self.policy.set_fee_rate(caller, address.clone(), rate)?;
        info!(
            address = %address,
            outbound_bps = rate.outbound_bps,
            inbound_bps = rate.inbound_bps,
            "fee rate updated"
        );
        Ok(())
    }

    pub fn set_controller(
        &mut self,
        caller: &Address,
        new_controller: Address,
    ) -> Result<(), PolicyError> {
        self.policy.set_controller(caller, new_controller.clone())?;
        info!(controller = %new_controller, "controller updated");
        Ok(())
    }

    pub fn is_fee_exempt(&self, address: &Address) -> bool {
        self.policy.is_fee_exempt(address)
    }

    pub fn fee_rate(&self, address: &Address) -> FeeRate {
        self.policy.fee_rate(address)
    }

    pub fn fee_accumulator(&self) -> &Address {
        self.policy.fee_accumulator()
    }

    pub fn controller(&self) -> &Address {
        self.policy.controller()
    }

    pub fn policy(&self) -> &FeePolicy {
        &self.policy
    }
}

impl LedgerEngine {
    /// Persist all engine state through the store traits.
    pub fn save_to_store(&self, store: &dyn LedgerStore) -> Result<(), LedgerError> {
        store
            .put_meta("total_supply", &self.total_supply.to_be_bytes())
            .map_err(|e| LedgerError::Storage(e.to_string()))?;

        let policy_bytes =
            bincode::serialize(&self.policy).map_err(|e| LedgerError::Storage(e.to_string()))?;
        store
            .put_meta("policy", &policy_bytes)
            .map_err(|e| LedgerError::Storage(e.to_string()))?;

        for (address, balance) in &self.balances {
            store
                .put_balance(address, *balance)
                .map_err(|e| LedgerError::Storage(e.to_string()))?;
        }
        for ((owner, spender), amount) in &self.allowances {
            store
                .put_allowance(owner, spender, *amount)
                .map_err(|e| LedgerError::Storage(e.to_string()))?;
        }
        Ok(())
    }

    /// Restore an engine from a store previously filled by `save_to_store`.
    ///
    /// Fails if the stored balances do not sum to the stored total supply.
    pub fn load_from_store(store: &dyn LedgerStore) -> Result<Self, LedgerError> {
        let supply_bytes = store
            .get_meta("total_supply")
            .map_err(|e| LedgerError::Storage(e.to_string()))?
            .ok_or_else(|| LedgerError::Storage("missing total_supply meta".into()))?;
        if supply_bytes.len() != 16 {
            return Err(LedgerError::Storage("malformed total_supply meta".into()));
        }
        let total_supply = u128::from_be_bytes(supply_bytes[..16].try_into().unwrap());

        let policy_bytes = store
            .get_meta("policy")
            .map_err(|e| LedgerError::Storage(e.to_string()))?
            .ok_or_else(|| LedgerError::Storage("missing policy meta".into()))?;
        let policy: FeePolicy = bincode::deserialize(&policy_bytes)
            .map_err(|e| LedgerError::Storage(e.to_string()))?;

        let mut balances = HashMap::new();
        let mut sum: u128 = 0;
        for (address, balance) in store
            .iter_balances()
            .map_err(|e| LedgerError::Storage(e.to_string()))?
        {
            sum = sum.checked_add(balance).ok_or(LedgerError::Overflow)?;
            balances.insert(address, balance);
        }
        if sum != total_supply {
            return Err(LedgerError::Storage(
                "stored balances do not sum to total supply".into(),
            ));
        }

        let mut allowances = HashMap::new();
        for (owner, spender, amount) in store
            .iter_allowances()
            .map_err(|e| LedgerError::Storage(e.to_string()))?
        {
            allowances.insert((owner, spender), amount);
        }

        Ok(Self {
            balances,
            allowances,
            policy,
            total_supply,
        })
    }
}
