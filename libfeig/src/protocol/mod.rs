// libfeig/src/protocol/mod.rs

pub mod blocks;
pub mod checksum;
pub mod codec;
pub mod commands;
pub mod frame;
pub mod parser;
pub mod responses;
pub mod status;

pub use checksum::{Checksum, FeigCrc16};
pub use commands::*;
pub use frame::{FrameAccumulator, FrameCodec, ParseOutcome, ParseStatus};
pub use responses::*;
pub use status::Status;
