// libfeig/src/protocol/responses/read.rs

use crate::protocol::blocks::reverse_blocks;
use crate::protocol::parser;
use crate::{Error, Result};

/// Blocks returned by Read Multiple Blocks, restored to host byte order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BlockRead {
    pub block_size: u8,
    /// Flat block data, `block_size` bytes per block.
    pub data: Vec<u8>,
    /// One security status byte per block.
    pub security_status: Vec<u8>,
}

impl BlockRead {
    pub fn block_count(&self) -> usize {
        self.security_status.len()
    }

    /// Append another read of the same tag.
    pub fn extend(&mut self, other: BlockRead) {
        if self.block_size == 0 {
            self.block_size = other.block_size;
        }
        self.data.extend(other.data);
        self.security_status.extend(other.security_status);
    }
}

/// Decode Read Multiple Blocks data
/// Layout: block_count(1) + block_size(1) + N * (security_status(1) + block(block_size))
/// Block bytes arrive reversed.
pub fn decode_read_multiple_blocks(data: &[u8]) -> Result<BlockRead> {
    let count = parser::byte_at(data, 0)? as usize;
    let block_size = parser::byte_at(data, 1)?;
    let bs = block_size as usize;

    let needed = count
        .checked_mul(bs + 1)
        .and_then(|n| n.checked_add(2))
        .ok_or_else(|| Error::FrameFormat("block layout overflows".into()))?;
    parser::ensure_len(data, needed)?;

    let mut out = BlockRead {
        block_size,
        data: Vec::with_capacity(count * bs),
        security_status: Vec::with_capacity(count),
    };
    for i in 0..count {
        let offset = 2 + i * (bs + 1);
        out.security_status.push(parser::byte_at(data, offset)?);
        let start = out.data.len();
        out.data.extend_from_slice(parser::slice_at(data, offset + 1, bs)?);
        reverse_blocks(&mut out.data[start..], bs);
    }
    Ok(out)
}
