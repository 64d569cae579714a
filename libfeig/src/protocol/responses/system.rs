// libfeig/src/protocol/responses/system.rs

use crate::protocol::parser;
use crate::types::Uid;
use crate::Result;

/// Tag system information (ISO Get System Information, 0x2B).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SystemInformation {
    pub dsfid: u8,
    pub uid: Uid,
    pub afi: u8,
    /// Bytes per block, 1..=32
    pub block_size: u8,
    /// Number of blocks, 1..=256
    pub block_count: u16,
    pub ic_reference: u8,
}

impl SystemInformation {
    /// Total user memory in bytes.
    pub fn memory_size(&self) -> usize {
        self.block_size as usize * self.block_count as usize
    }
}

/// Decode Get System Information data
/// Layout: dsfid(1) + uid(8) + afi(1) + mem_size(2) + ic_ref(1)
/// mem_size: low 5 bits of the first byte are block size - 1, second byte is
/// block count - 1.
pub fn decode_system_information(data: &[u8]) -> Result<SystemInformation> {
    parser::ensure_len(data, 13)?;

    Ok(SystemInformation {
        dsfid: parser::byte_at(data, 0)?,
        uid: parser::uid_at(data, 1)?,
        afi: parser::byte_at(data, 9)?,
        block_size: (parser::byte_at(data, 10)? & 0x1F) + 1,
        block_count: parser::byte_at(data, 11)? as u16 + 1,
        ic_reference: parser::byte_at(data, 12)?,
    })
}
