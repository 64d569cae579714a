// libfeig/src/error.rs

use thiserror::Error;

use crate::protocol::{Response, Status};

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("device not found")]
    DeviceNotFound,

    // USB 実装を後から有効化できるように optional dependency にしている
    #[cfg(feature = "usb")]
    #[error("usb error: {0}")]
    Usb(#[from] rusb::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("connection closed")]
    ConnectionClosed,

    #[error("reader busy: an exchange is already outstanding")]
    Busy,

    #[error("invalid packet length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("frame format error: {0}")]
    FrameFormat(String),

    #[error("checksum mismatch: expected {expected:#06x}, got {actual:#06x}")]
    ChecksumMismatch { expected: u16, actual: u16 },

    #[error("device status {} ({:#04x})", .status, .status.code())]
    DeviceStatus { status: Status, data: Vec<u8> },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("write aborted after {} chunk(s): {}", .completed.len(), .source)]
    PartialWrite {
        completed: Vec<Response>,
        #[source]
        source: Box<Error>,
    },

    #[error("operation timed out")]
    Timeout,

    #[error("exchange aborted")]
    Aborted,
}

impl Error {
    /// Device status carried by this error, if the reader answered with a
    /// non-OK status.
    pub fn device_status(&self) -> Option<Status> {
        match self {
            Error::DeviceStatus { status, .. } => Some(*status),
            Error::PartialWrite { source, .. } => source.device_status(),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
