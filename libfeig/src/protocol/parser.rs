// libfeig/src/protocol/parser.rs

use crate::types::Uid;
use crate::{Error, Result};

/// Ensure the slice has at least `min` bytes.
pub fn ensure_len(data: &[u8], min: usize) -> Result<()> {
    if data.len() < min {
        return Err(Error::InvalidLength {
            expected: min,
            actual: data.len(),
        });
    }
    Ok(())
}

/// Read a big-endian u16 at given index, with bounds checking.
pub fn be_u16_at(data: &[u8], idx: usize) -> Result<u16> {
    ensure_len(data, idx + 2)?;
    Ok(u16::from_be_bytes([data[idx], data[idx + 1]]))
}

/// Return a subslice with bounds checking.
pub fn slice_at(data: &[u8], idx: usize, len: usize) -> Result<&[u8]> {
    ensure_len(data, idx + len)?;
    Ok(&data[idx..idx + len])
}

/// Parse a UID (8 bytes) at `start` index with bounds checking.
pub fn uid_at(data: &[u8], start: usize) -> Result<Uid> {
    let s = slice_at(data, start, crate::constants::UID_LEN)?;
    Uid::try_from(s)
}

/// Read a single byte at `idx` with bounds checking.
pub fn byte_at(data: &[u8], idx: usize) -> Result<u8> {
    ensure_len(data, idx + 1)?;
    Ok(data[idx])
}
