// libfeig/src/device/mod.rs

pub mod builder;
pub mod config;
pub mod correlator;
pub mod handle;

pub use builder::ReaderBuilder;
pub use config::{ReaderConfig, UsbFilter};
pub use correlator::Correlator;
pub use handle::Reader;
