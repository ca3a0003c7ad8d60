//! Abstract storage traits for the LEVY ledger.
//!
//! Every storage backend (in-memory for testing, or a durable backend
//! supplied by the host) implements these traits. The rest of the workspace
//! depends only on the traits; the on-disk format is the backend's business.

pub mod allowance;
pub mod balance;
pub mod error;
pub mod meta;

pub use allowance::AllowanceStore;
pub use balance::BalanceStore;
pub use error::StoreError;
pub use meta::MetaStore;

/// Convenience supertrait for backends that implement every ledger concern.
/// Blanket-implemented, so backends only implement the three base traits.
pub trait LedgerStore: BalanceStore + AllowanceStore + MetaStore {}

impl<T: BalanceStore + AllowanceStore + MetaStore> LedgerStore for T {}
