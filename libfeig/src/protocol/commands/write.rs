// libfeig/src/protocol/commands/write.rs

use crate::constants::mode;
use crate::protocol::blocks::{pad_to_block_size, reverse_blocks};
use crate::protocol::commands::IsoCommand;
use crate::types::Uid;
use crate::{Error, Result};

/// Encode ISO Write Multiple Blocks data (sub-command 0x24)
/// Layout: sub_command(1) + mode(1, addressed) + uid(8) + first_block(1)
///         + block_count(1) + block_size(1) + block_data(block_size*N)
///
/// `data` is zero-padded to a whole number of blocks and every block is
/// byte-reversed before it is placed on the wire.
pub fn encode_write_multiple_blocks(
    uid: &Uid,
    first_block: u8,
    block_size: u8,
    data: &[u8],
) -> Result<Vec<u8>> {
    if block_size == 0 {
        return Err(Error::InvalidArgument("block size must be non-zero".into()));
    }
    let bs = block_size as usize;
    let mut blocks = pad_to_block_size(data, bs);
    let count = blocks.len() / bs;
    let count = u8::try_from(count).map_err(|_| {
        Error::InvalidArgument(format!("{} blocks exceed a single write request", count))
    })?;
    reverse_blocks(&mut blocks, bs);

    let mut buf = Vec::with_capacity(13 + blocks.len());
    buf.push(IsoCommand::WriteMultipleBlocks.code());
    buf.push(mode::ADDRESSED);
    buf.extend_from_slice(uid.as_bytes());
    buf.push(first_block);
    buf.push(count);
    buf.push(block_size);
    buf.extend_from_slice(&blocks);
    Ok(buf)
}
