// libfeig/src/protocol/commands/afi.rs

use crate::constants::mode;
use crate::protocol::commands::IsoCommand;
use crate::types::Uid;

/// Encode ISO Write AFI data (sub-command 0x27)
/// Layout: sub_command(1) + mode(1, addressed) + uid(8) + afi(1)
pub fn encode_write_afi(uid: &Uid, afi: u8) -> Vec<u8> {
    let mut buf = Vec::with_capacity(11);
    buf.push(IsoCommand::WriteAfi.code());
    buf.push(mode::ADDRESSED);
    buf.extend_from_slice(uid.as_bytes());
    buf.push(afi);
    buf
}
