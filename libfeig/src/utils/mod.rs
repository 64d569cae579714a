//! Small helpers shared across the crate: hex formatting for frame logs and
//! timeout handling for exchanges and USB transfers.

pub mod hex;
pub mod timeout;

pub use hex::*;
pub use timeout::*;
