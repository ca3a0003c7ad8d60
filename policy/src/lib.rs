//! Admin fee policy for the LEVY ledger.
//!
//! Holds the fee-accumulator address, the fee-exempt set, and the table of
//! per-address fee rates. All mutation is gated on a single controller
//! identity; reads are unrestricted. The fee computation itself is a pure
//! function over a policy snapshot — see [`fees::compute_fee`].

pub mod error;
pub mod fees;
pub mod store;

pub use error::PolicyError;
pub use fees::compute_fee;
pub use store::FeePolicy;
