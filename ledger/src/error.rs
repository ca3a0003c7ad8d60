//! Ledger-specific errors.

use levy_policy::PolicyError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("insufficient balance: need {needed}, available {available}")]
    InsufficientBalance { needed: u128, available: u128 },

    #[error("insufficient allowance: need {needed}, available {available}")]
    InsufficientAllowance { needed: u128, available: u128 },

    #[error("arithmetic overflow in balance update")]
    Overflow,

    #[error("policy error: {0}")]
    Policy(#[from] PolicyError),

    #[error("storage error: {0}")]
    Storage(String),
}
