//! Account balance storage trait.

use crate::StoreError;
use levy_types::Address;

/// Trait for account balance storage operations.
///
/// Balances are raw `u128` token units. An account absent from the store
/// holds a zero balance.
pub trait BalanceStore {
    fn get_balance(&self, address: &Address) -> Result<Option<u128>, StoreError>;
    fn put_balance(&self, address: &Address, balance: u128) -> Result<(), StoreError>;
    fn delete_balance(&self, address: &Address) -> Result<(), StoreError>;
    fn iter_balances(&self) -> Result<Vec<(Address, u128)>, StoreError>;

    /// Number of accounts with a stored balance.
    fn account_count(&self) -> Result<u64, StoreError> {
        self.iter_balances().map(|v| v.len() as u64)
    }
}
