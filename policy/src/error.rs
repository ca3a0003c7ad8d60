//! Policy-specific errors.

use levy_types::Address;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PolicyError {
    #[error("caller {caller} is not the controller")]
    Unauthorized { caller: Address },

    #[error("invalid address: {0}")]
    InvalidAddress(String),

    #[error("fee rate {bps} exceeds the per-address cap")]
    InvalidFee { bps: u32 },
}
