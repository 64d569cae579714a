// libfeig/src/protocol/responses/reader_info.rs

use crate::protocol::parser;
use crate::Result;

/// Answer to Get Reader Info in buffer mode (0x00).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReaderInfo {
    /// Receive buffer size of the reader in bytes.
    pub rx_buffer_size: u16,
    pub raw: Vec<u8>,
}

/// Decode Get Reader Info data; the receive buffer size sits at bytes 7..9.
pub fn decode_reader_info(data: &[u8]) -> Result<ReaderInfo> {
    Ok(ReaderInfo {
        rx_buffer_size: parser::be_u16_at(data, 7)?,
        raw: data.to_vec(),
    })
}
