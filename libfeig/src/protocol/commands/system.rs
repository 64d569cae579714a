// libfeig/src/protocol/commands/system.rs

use crate::constants::mode;
use crate::protocol::commands::IsoCommand;
use crate::types::Uid;

/// Encode ISO Get System Information data (sub-command 0x2B)
/// Layout: sub_command(1) + mode(1, addressed) + uid(8)
pub fn encode_get_system_information(uid: &Uid) -> Vec<u8> {
    let mut buf = Vec::with_capacity(10);
    buf.push(IsoCommand::GetSystemInformation.code());
    buf.push(mode::ADDRESSED);
    buf.extend_from_slice(uid.as_bytes());
    buf
}
