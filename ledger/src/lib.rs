//! The LEVY ledger engine.
//!
//! A fungible-token ledger with an embedded, admin-configurable transfer
//! tax. Every transfer — direct or allowance-based — routes through the
//! fee-aware engine, which may redirect a slice of the transferred amount
//! to the configured fee accumulator.
//!
//! This crate handles:
//! - Balance and allowance bookkeeping
//! - The transfer tax engine (`apply_transfer`)
//! - Genesis creation per network
//! - Persistence through the `levy-store` traits

pub mod engine;
pub mod error;
pub mod genesis;

pub use engine::{LedgerEngine, TransferOutcome, UNLIMITED_ALLOWANCE};
pub use error::LedgerError;
pub use genesis::GenesisConfig;
