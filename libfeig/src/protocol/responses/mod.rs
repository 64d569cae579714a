// libfeig/src/protocol/responses/mod.rs

pub mod inventory;
pub mod read;
pub mod reader_info;
pub mod system;

pub use inventory::{InventoryRecord, InventoryResult, decode_inventory};
pub use read::{BlockRead, decode_read_multiple_blocks};
pub use reader_info::{ReaderInfo, decode_reader_info};
pub use system::{SystemInformation, decode_system_information};

use crate::protocol::Status;
use crate::{Error, Result};

/// A decoded response frame: device status, echoed opcode and raw data.
///
/// Per-command decoders in `protocol::responses::<name>.rs` interpret the
/// data field; this type stays command-agnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    status: u8,
    opcode: u8,
    data: Vec<u8>,
}

impl Response {
    pub fn new(status: u8, opcode: u8, data: Vec<u8>) -> Self {
        Self {
            status,
            opcode,
            data,
        }
    }

    /// Raw status byte as sent by the reader.
    pub fn status_code(&self) -> u8 {
        self.status
    }

    pub fn status(&self) -> Status {
        Status::from_code(self.status)
    }

    pub fn opcode(&self) -> u8 {
        self.opcode
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    pub fn is_ok(&self) -> bool {
        self.status().is_ok()
    }

    /// Turn a non-OK status into [`Error::DeviceStatus`], keeping the data
    /// the reader sent along with it.
    pub fn ensure_ok(self) -> Result<Self> {
        if self.is_ok() {
            Ok(self)
        } else {
            Err(self.into_status_error())
        }
    }

    pub fn into_status_error(self) -> Error {
        Error::DeviceStatus {
            status: self.status(),
            data: self.data,
        }
    }
}
