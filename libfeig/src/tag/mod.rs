// libfeig/src/tag/mod.rs

//! Tag model and multi-exchange tag operations.

use crate::protocol::{BlockRead, InventoryRecord, Response, SystemInformation};
use crate::types::{TransponderType, Uid};
use crate::{Error, Result};

pub mod operations;
pub mod planner;

pub use operations::{erase_tag, read_tag, read_tags, write_tag, write_tag_with_afi};
pub use planner::{WriteChunk, WritePlan, plan_write};

/// Everything known about one tag. Operations return new values built by
/// merging; a `Tag` is never updated behind the caller's back.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tag {
    pub uid: Uid,
    pub transponder_type: TransponderType,
    pub dsfid: Option<u8>,
    pub afi: Option<u8>,
    pub block_size: Option<u8>,
    pub block_count: Option<u16>,
    pub ic_reference: Option<u8>,
    /// Block data in host byte order.
    pub data: Vec<u8>,
    /// Security status byte per block read.
    pub security_status: Vec<u8>,
}

impl Tag {
    pub fn new(uid: Uid) -> Self {
        Self {
            uid,
            transponder_type: TransponderType::Iso15693,
            dsfid: None,
            afi: None,
            block_size: None,
            block_count: None,
            ic_reference: None,
            data: Vec::new(),
            security_status: Vec::new(),
        }
    }

    /// Build a tag from an inventory record. Only 8-byte identifiers can
    /// be addressed by the ISO15693 commands.
    pub fn from_record(record: &InventoryRecord) -> Result<Self> {
        let uid = Uid::try_from(&record.identifier[..])?;
        Ok(Self {
            transponder_type: record.transponder_type,
            dsfid: Some(record.dsfid),
            ..Self::new(uid)
        })
    }

    pub fn with_system_information(self, info: &SystemInformation) -> Self {
        Self {
            uid: info.uid,
            dsfid: Some(info.dsfid),
            afi: Some(info.afi),
            block_size: Some(info.block_size),
            block_count: Some(info.block_count),
            ic_reference: Some(info.ic_reference),
            ..self
        }
    }

    pub fn with_blocks(self, blocks: BlockRead) -> Self {
        Self {
            block_size: self.block_size.or(Some(blocks.block_size)),
            data: blocks.data,
            security_status: blocks.security_status,
            ..self
        }
    }

    pub fn uid_hex(&self) -> String {
        self.uid.to_hex()
    }

    /// Memory size in bytes, once system information is known.
    pub fn memory_size(&self) -> Option<usize> {
        Some(self.block_size? as usize * self.block_count? as usize)
    }
}

/// Outcome of a full read for one inventoried tag. A failed read does not
/// stop the batch; its error is kept here.
#[derive(Debug)]
pub struct TagReading {
    pub record: InventoryRecord,
    pub outcome: Result<Tag>,
}

impl TagReading {
    pub fn tag(&self) -> Option<&Tag> {
        self.outcome.as_ref().ok()
    }

    pub fn error(&self) -> Option<&Error> {
        self.outcome.as_ref().err()
    }
}

/// Result of a planned (possibly chunked) write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteReport {
    pub uid: Uid,
    /// AFI written ahead of the data, when one was requested and accepted.
    pub afi: Option<u8>,
    /// Payload as written, zero-padded to whole blocks.
    pub data: Vec<u8>,
    /// One response per Write Multiple Blocks exchange.
    pub responses: Vec<Response>,
}

/// Result of Write AFI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AfiWritten {
    pub uid: Uid,
    pub afi: u8,
}
