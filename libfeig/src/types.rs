// libfeig/src/types.rs

use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

use derive_more::Display;

use crate::Error;
use crate::constants::UID_LEN;

/// UID - Newtype Pattern (8 バイト, ISO15693)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Uid([u8; UID_LEN]);

impl Uid {
    pub fn from_bytes(bytes: [u8; UID_LEN]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; UID_LEN] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(self.as_bytes())
    }
}

impl TryFrom<&[u8]> for Uid {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() != UID_LEN {
            return Err(Error::InvalidLength {
                expected: UID_LEN,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; UID_LEN];
        arr.copy_from_slice(bytes);
        Ok(Self(arr))
    }
}

impl FromStr for Uid {
    type Err = Error;

    /// Parse the hex form reported by inventory, e.g. `e004010809b9cb12`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = crate::utils::parse_hex(s).map_err(Error::InvalidArgument)?;
        Uid::try_from(&bytes[..])
    }
}

impl fmt::Display for Uid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Transponder type byte (TR-TYPE) reported in inventory records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransponderType {
    #[display(fmt = "ISO15693")]
    Iso15693,
    #[display(fmt = "ISO14443A")]
    Iso14443A,
    #[display(fmt = "Other({:#04x})", _0)]
    Other(u8),
}

impl TransponderType {
    pub const ISO15693: u8 = 0x03;
    pub const ISO14443A: u8 = 0x04;

    pub fn from_code(code: u8) -> Self {
        match code {
            Self::ISO15693 => Self::Iso15693,
            Self::ISO14443A => Self::Iso14443A,
            other => Self::Other(other),
        }
    }

    pub fn code(&self) -> u8 {
        match self {
            Self::Iso15693 => Self::ISO15693,
            Self::Iso14443A => Self::ISO14443A,
            Self::Other(code) => *code,
        }
    }
}

impl From<u8> for TransponderType {
    fn from(code: u8) -> Self {
        Self::from_code(code)
    }
}
