// libfeig/src/constants.rs
//! Common protocol constants used across the crate

/// Advanced Protocol start marker (STX)
pub const FRAME_START: u8 = 0x02;

/// Address byte used by every host request (broadcast)
pub const FRAME_BROADCAST_ADDRESS: u8 = 0xFF;

/// Bytes in front of the data field: start(1) + length(2) + address(1) + opcode(1)
pub const FRAME_HEADER_LEN: usize = 5;

/// Trailing checksum length in bytes
pub const FRAME_CHECKSUM_LEN: usize = 2;

/// Minimal Advanced Protocol frame length (no data bytes)
pub const FRAME_MIN_LEN: usize = FRAME_HEADER_LEN + FRAME_CHECKSUM_LEN;

/// Largest value the 16-bit length field can declare
pub const FRAME_MAX_LEN: usize = 0xFFFF;

/// Receive buffer size of an MR102 reader, used until Get Reader Info
/// reports the real value.
pub const DEFAULT_RX_BUFFER_SIZE: usize = 280;

/// Maximum number of bytes requested per transport read
pub const DEFAULT_READ_CHUNK_SIZE: usize = 255;

/// Bytes surrounding the block data of a Write Multiple Blocks frame:
/// start(1) + length(2) + address(1) + opcode(1) + sub-opcode(1) + mode(1)
/// + uid(8) + first block(1) + block count(1) + block size(1) + crc(2)
pub const WRITE_MULTIPLE_BLOCKS_OVERHEAD: usize = 20;

/// Block size assumed for ISO15693 writes when the caller has no better value
pub const DEFAULT_BLOCK_SIZE: usize = 4;

/// ISO15693 UID length in bytes
pub const UID_LEN: usize = 8;

/// Size of one inventory record for ISO15693: tr-type(1) + dsfid(1) + uid(8)
pub const INVENTORY_RECORD_LEN: usize = 10;

/// FEIG USB vendor id
pub const FEIG_VENDOR_ID: u16 = 0x0AB1;

/// Product id of the FEIG USB readers this driver was built against
pub const FEIG_PRODUCT_ID: u16 = 0x0002;

/// Request modes for ISO standard host commands
pub mod mode {
    /// Inventory: start a new inventory
    pub const INVENTORY_NEW: u8 = 0x00;
    /// Inventory: fetch the remaining records after status MoreData
    pub const INVENTORY_MORE: u8 = 0x01;
    /// Addressed request (uid follows the mode byte)
    pub const ADDRESSED: u8 = 0x01;
    /// Addressed request with per-block security status in the answer
    pub const ADDRESSED_WITH_SECURITY: u8 = 0x09;
    /// Get Reader Info: mode returning the receive buffer size
    pub const READER_INFO_BUFFERS: u8 = 0x00;
}
