//! Nullable store — thread-safe in-memory storage for testing.

use levy_store::{AllowanceStore, BalanceStore, MetaStore, StoreError};
use levy_types::Address;
use std::collections::HashMap;
use std::sync::Mutex;

/// An in-memory balance + allowance + meta store for testing.
/// Thread-safe so it is usable from multi-threaded test harnesses.
pub struct NullStore {
    balances: Mutex<HashMap<Address, u128>>,
    allowances: Mutex<HashMap<(Address, Address), u128>>,
    meta: Mutex<HashMap<String, Vec<u8>>>,
}

impl NullStore {
    pub fn new() -> Self {
        Self {
            balances: Mutex::new(HashMap::new()),
            allowances: Mutex::new(HashMap::new()),
            meta: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for NullStore {
    fn default() -> Self {
        Self::new()
    }
}

impl BalanceStore for NullStore {
    fn get_balance(&self, address: &Address) -> Result<Option<u128>, StoreError> {
        Ok(self.balances.lock().unwrap().get(address).copied())
    }

    fn put_balance(&self, address: &Address, balance: u128) -> Result<(), StoreError> {
        self.balances
            .lock()
            .unwrap()
            .insert(address.clone(), balance);
        Ok(())
    }

    fn delete_balance(&self, address: &Address) -> Result<(), StoreError> {
        self.balances.lock().unwrap().remove(address);
        Ok(())
    }

    fn iter_balances(&self) -> Result<Vec<(Address, u128)>, StoreError> {
        Ok(self
            .balances
            .lock()
            .unwrap()
            .iter()
            .map(|(a, b)| (a.clone(), *b))
            .collect())
    }
}

impl AllowanceStore for NullStore {
    fn get_allowance(
        &self,
        owner: &Address,
        spender: &Address,
    ) -> Result<Option<u128>, StoreError> {
        Ok(self
            .allowances
            .lock()
            .unwrap()
            .get(&(owner.clone(), spender.clone()))
            .copied())
    }

    fn put_allowance(
        &self,
        owner: &Address,
        spender: &Address,
        amount: u128,
    ) -> Result<(), StoreError> {
        self.allowances
            .lock()
            .unwrap()
            .insert((owner.clone(), spender.clone()), amount);
        Ok(())
    }

    fn delete_allowance(&self, owner: &Address, spender: &Address) -> Result<(), StoreError> {
        self.allowances
            .lock()
            .unwrap()
            .remove(&(owner.clone(), spender.clone()));
        Ok(())
    }

    fn iter_allowances(&self) -> Result<Vec<(Address, Address, u128)>, StoreError> {
        Ok(self
            .allowances
            .lock()
            .unwrap()
            .iter()
            .map(|((o, s), a)| (o.clone(), s.clone(), *a))
            .collect())
    }
}

impl MetaStore for NullStore {
    fn put_meta(&self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        self.meta
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn get_meta(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.meta.lock().unwrap().get(key).cloned())
    }

    fn delete_meta(&self, key: &str) -> Result<(), StoreError> {
        self.meta.lock().unwrap().remove(key);
        Ok(())
    }
}
