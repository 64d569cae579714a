// libfeig/src/protocol/commands/mod.rs

pub mod afi;
pub mod host;
pub mod inventory;
pub mod read;
pub mod system;
pub mod write;

pub use afi::encode_write_afi;
pub use host::{encode_reader_info, encode_rf_output};
pub use inventory::encode_inventory;
pub use read::encode_read_multiple_blocks;
pub use system::encode_get_system_information;
pub use write::encode_write_multiple_blocks;

use derive_more::Display;

use crate::Result;
use crate::types::Uid;

/// Reader-level command codes (the CMD byte of a request frame).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum HostCommand {
    None,
    BaudRateDetection,
    StartFlashLoader,
    CpuReset,
    SystemReset,
    GetSoftwareVersion,
    GetReaderInfo,
    RfReset,
    RfOutputOnOff,
    SetOutput,
    ReaderLogin,
    ReadConfiguration,
    WriteConfiguration,
    SaveConfiguration,
    SetDefaultConfiguration,
    WriteMifareReaderKeys,
    IsoStandardHostCommand,
    Iso14443SpecialHostCommand,
    Iso14443ATransparentCommand,
    Iso14443BTransparentCommand,
    CommandQueue,
    #[display(fmt = "Unrecognized({:#04x})", _0)]
    Unrecognized(u8),
}

impl HostCommand {
    pub fn from_code(code: u8) -> Self {
        match code {
            0x00 => Self::None,
            0x52 => Self::BaudRateDetection,
            0x55 => Self::StartFlashLoader,
            0x63 => Self::CpuReset,
            0x64 => Self::SystemReset,
            0x65 => Self::GetSoftwareVersion,
            0x66 => Self::GetReaderInfo,
            0x69 => Self::RfReset,
            0x6A => Self::RfOutputOnOff,
            0x72 => Self::SetOutput,
            0xA0 => Self::ReaderLogin,
            0x80 => Self::ReadConfiguration,
            0x81 => Self::WriteConfiguration,
            0x82 => Self::SaveConfiguration,
            0x83 => Self::SetDefaultConfiguration,
            0xA2 => Self::WriteMifareReaderKeys,
            0xB0 => Self::IsoStandardHostCommand,
            0xB2 => Self::Iso14443SpecialHostCommand,
            0xBD => Self::Iso14443ATransparentCommand,
            0xBE => Self::Iso14443BTransparentCommand,
            0xBC => Self::CommandQueue,
            other => Self::Unrecognized(other),
        }
    }

    pub fn code(&self) -> u8 {
        match self {
            Self::None => 0x00,
            Self::BaudRateDetection => 0x52,
            Self::StartFlashLoader => 0x55,
            Self::CpuReset => 0x63,
            Self::SystemReset => 0x64,
            Self::GetSoftwareVersion => 0x65,
            Self::GetReaderInfo => 0x66,
            Self::RfReset => 0x69,
            Self::RfOutputOnOff => 0x6A,
            Self::SetOutput => 0x72,
            Self::ReaderLogin => 0xA0,
            Self::ReadConfiguration => 0x80,
            Self::WriteConfiguration => 0x81,
            Self::SaveConfiguration => 0x82,
            Self::SetDefaultConfiguration => 0x83,
            Self::WriteMifareReaderKeys => 0xA2,
            Self::IsoStandardHostCommand => 0xB0,
            Self::Iso14443SpecialHostCommand => 0xB2,
            Self::Iso14443ATransparentCommand => 0xBD,
            Self::Iso14443BTransparentCommand => 0xBE,
            Self::CommandQueue => 0xBC,
            Self::Unrecognized(code) => *code,
        }
    }
}

/// Sub-opcodes of the ISO standard host command (0xB0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[repr(u8)]
pub enum IsoCommand {
    Inventory = 0x01,
    ReadMultipleBlocks = 0x23,
    WriteMultipleBlocks = 0x24,
    Select = 0x25,
    WriteAfi = 0x27,
    GetSystemInformation = 0x2B,
}

impl IsoCommand {
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0x01 => Some(Self::Inventory),
            0x23 => Some(Self::ReadMultipleBlocks),
            0x24 => Some(Self::WriteMultipleBlocks),
            0x25 => Some(Self::Select),
            0x27 => Some(Self::WriteAfi),
            0x2B => Some(Self::GetSystemInformation),
            _ => None,
        }
    }

    pub fn code(&self) -> u8 {
        *self as u8
    }
}

/// High-level Command enum. New commands should be added here and
/// their per-command encoder placed in `protocol::commands::<name>.rs`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    SystemReset,
    CpuReset,
    RfReset,
    RfOutput {
        on: bool,
    },
    GetSoftwareVersion,
    GetReaderInfo {
        mode: u8,
    },
    Inventory {
        more_data: bool,
    },
    GetSystemInformation {
        uid: Uid,
    },
    ReadMultipleBlocks {
        uid: Uid,
        first_block: u8,
        block_count: u8,
    },
    /// `data` is host-ordered; padding and per-block reversal happen on encode.
    WriteMultipleBlocks {
        uid: Uid,
        first_block: u8,
        block_size: u8,
        data: Vec<u8>,
    },
    WriteAfi {
        uid: Uid,
        afi: u8,
    },
    /// Any opcode with a caller-built payload.
    Raw {
        opcode: u8,
        data: Vec<u8>,
    },
}

impl Command {
    /// Return the host command of the request frame.
    pub fn host_command(&self) -> HostCommand {
        match self {
            Self::SystemReset => HostCommand::SystemReset,
            Self::CpuReset => HostCommand::CpuReset,
            Self::RfReset => HostCommand::RfReset,
            Self::RfOutput { .. } => HostCommand::RfOutputOnOff,
            Self::GetSoftwareVersion => HostCommand::GetSoftwareVersion,
            Self::GetReaderInfo { .. } => HostCommand::GetReaderInfo,
            Self::Inventory { .. }
            | Self::GetSystemInformation { .. }
            | Self::ReadMultipleBlocks { .. }
            | Self::WriteMultipleBlocks { .. }
            | Self::WriteAfi { .. } => HostCommand::IsoStandardHostCommand,
            Self::Raw { opcode, .. } => HostCommand::from_code(*opcode),
        }
    }

    pub fn opcode(&self) -> u8 {
        self.host_command().code()
    }

    /// ISO sub-command carried in the first data byte, if any.
    pub fn iso_command(&self) -> Option<IsoCommand> {
        match self {
            Self::Inventory { .. } => Some(IsoCommand::Inventory),
            Self::GetSystemInformation { .. } => Some(IsoCommand::GetSystemInformation),
            Self::ReadMultipleBlocks { .. } => Some(IsoCommand::ReadMultipleBlocks),
            Self::WriteMultipleBlocks { .. } => Some(IsoCommand::WriteMultipleBlocks),
            Self::WriteAfi { .. } => Some(IsoCommand::WriteAfi),
            _ => None,
        }
    }

    /// Encode the data field of the request frame (everything after CMD).
    pub fn encode(&self) -> Result<Vec<u8>> {
        match self {
            Self::SystemReset
            | Self::CpuReset
            | Self::RfReset
            | Self::GetSoftwareVersion => Ok(Vec::new()),
            Self::RfOutput { on } => Ok(encode_rf_output(*on)),
            Self::GetReaderInfo { mode } => Ok(encode_reader_info(*mode)),
            Self::Inventory { more_data } => Ok(encode_inventory(*more_data)),
            Self::GetSystemInformation { uid } => Ok(encode_get_system_information(uid)),
            Self::ReadMultipleBlocks {
                uid,
                first_block,
                block_count,
            } => Ok(encode_read_multiple_blocks(uid, *first_block, *block_count)),
            Self::WriteMultipleBlocks {
                uid,
                first_block,
                block_size,
                data,
            } => encode_write_multiple_blocks(uid, *first_block, *block_size, data),
            Self::WriteAfi { uid, afi } => Ok(encode_write_afi(uid, *afi)),
            Self::Raw { data, .. } => Ok(data.clone()),
        }
    }
}
