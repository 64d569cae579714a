// libfeig/src/lib.rs

//! libfeig
//!
//! Pure Rust driver for FEIG HF RFID readers speaking the Advanced Protocol:
//! frame codec, single-in-flight command correlation and the ISO15693 tag
//! commands (inventory, system information, block read/write, AFI).

pub mod constants;
pub mod device;
pub mod error;
pub mod prelude;
pub mod protocol;
pub mod tag;
pub mod test_support;
pub mod transport;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the newtypes in `types` are available for consumers.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
