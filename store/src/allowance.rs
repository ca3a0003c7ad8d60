//! Spending allowance storage trait.

use crate::StoreError;
use levy_types::Address;

/// Trait for (owner, spender) allowance storage operations.
///
/// An absent pair means a zero allowance.
pub trait AllowanceStore {
    fn get_allowance(&self, owner: &Address, spender: &Address)
        -> Result<Option<u128>, StoreError>;
    fn put_allowance(
        &self,
        owner: &Address,
        spender: &Address,
        amount: u128,
    ) -> Result<(), StoreError>;
    fn delete_allowance(&self, owner: &Address, spender: &Address) -> Result<(), StoreError>;
    fn iter_allowances(&self) -> Result<Vec<(Address, Address, u128)>, StoreError>;
}
