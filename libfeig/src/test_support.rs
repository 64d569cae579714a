//! Test support helpers intended for use by unit and integration tests.
//!
//! They build reader response frames and wire a [`Reader`] to a
//! [`MockTransport`] so tests across the crate and the tests/ directory can
//! share the same setup.
#![allow(dead_code)]

use std::sync::Arc;

use crate::constants::FRAME_START;
use crate::device::{Reader, ReaderBuilder, ReaderConfig};
use crate::protocol::FeigCrc16;
use crate::protocol::checksum::Checksum;
use crate::transport::MockTransport;
use crate::types::{TransponderType, Uid};
use crate::Result;

/// Build a response frame as the reader sends it: status in byte 3, the
/// echoed opcode in byte 4 and a valid CRC.
#[doc(hidden)]
pub fn response_frame(status: u8, opcode: u8, data: &[u8]) -> Vec<u8> {
    let length = data.len() + 7;
    let mut out = vec![
        FRAME_START,
        (length >> 8) as u8,
        (length & 0xFF) as u8,
        status,
        opcode,
    ];
    out.extend_from_slice(data);
    let crc = FeigCrc16.checksum(&out);
    out.extend_from_slice(&crc.to_be_bytes());
    out
}

/// Connect a [`Reader`] to a fresh [`MockTransport`] and return both.
#[doc(hidden)]
pub async fn mock_reader(config: ReaderConfig) -> Result<(Arc<MockTransport>, Reader)> {
    let mock = Arc::new(MockTransport::new());
    let reader = ReaderBuilder::new()
        .with_transport(mock.clone())
        .with_config(config)
        .connect()
        .await?;
    Ok((mock, reader))
}

/// Inventory answer data listing ISO15693 tags with DSFID 0.
#[doc(hidden)]
pub fn inventory_data(uids: &[Uid]) -> Vec<u8> {
    let mut data = vec![uids.len() as u8];
    for uid in uids {
        data.push(TransponderType::ISO15693);
        data.push(0x00);
        data.extend_from_slice(uid.as_bytes());
    }
    data
}

/// Get System Information answer data.
#[doc(hidden)]
pub fn system_information_data(uid: &Uid, afi: u8, block_size: u8, block_count: u16) -> Vec<u8> {
    let mut data = vec![0x00];
    data.extend_from_slice(uid.as_bytes());
    data.push(afi);
    data.push((block_size - 1) & 0x1F);
    data.push((block_count - 1) as u8);
    data.push(0x01);
    data
}

/// Read Multiple Blocks answer data for host-ordered `data`, with every
/// security status byte set to `security`.
#[doc(hidden)]
pub fn read_blocks_data(block_size: u8, data: &[u8], security: u8) -> Vec<u8> {
    let bs = block_size as usize;
    let count = data.len() / bs;
    let mut out = vec![count as u8, block_size];
    for block in data.chunks(bs) {
        out.push(security);
        out.extend(block.iter().rev());
    }
    out
}
