// libfeig/src/protocol/commands/read.rs

use crate::constants::mode;
use crate::protocol::commands::IsoCommand;
use crate::types::Uid;

/// Encode ISO Read Multiple Blocks data (sub-command 0x23)
/// Layout: sub_command(1) + mode(1, addressed + security status) + uid(8)
///         + first_block(1) + block_count(1)
pub fn encode_read_multiple_blocks(uid: &Uid, first_block: u8, block_count: u8) -> Vec<u8> {
    let mut buf = Vec::with_capacity(12);
    buf.push(IsoCommand::ReadMultipleBlocks.code());
    buf.push(mode::ADDRESSED_WITH_SECURITY);
    buf.extend_from_slice(uid.as_bytes());
    buf.push(first_block);
    buf.push(block_count);
    buf
}
