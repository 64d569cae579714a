// libfeig/src/protocol/commands/inventory.rs

use crate::constants::mode;
use crate::protocol::commands::IsoCommand;

/// Encode ISO Inventory data (sub-command 0x01)
/// Layout: sub_command(1) + mode(1)
/// mode 0x00 starts a new inventory, 0x01 continues after status MoreData.
pub fn encode_inventory(more_data: bool) -> Vec<u8> {
    let mode = if more_data {
        mode::INVENTORY_MORE
    } else {
        mode::INVENTORY_NEW
    };
    vec![IsoCommand::Inventory.code(), mode]
}
