// libfeig/src/prelude.rs

pub use crate::device::{Reader, ReaderBuilder, ReaderConfig};
pub use crate::protocol::{Command, Response, Status};
pub use crate::tag::{Tag, TagReading, WriteReport};
pub use crate::transport::Transport;
pub use crate::{Error, Result, TransponderType, Uid};

// Re-export small utilities for convenience
pub use crate::utils::{bytes_to_hex, bytes_to_hex_spaced, parse_hex};
