// libfeig/src/protocol/status.rs

use std::fmt;

macro_rules! status_table {
    ($($(#[$doc:meta])* $variant:ident = $code:literal,)+) => {
        /// Device status byte carried in every response frame.
        ///
        /// Unknown codes decode to [`Status::Unrecognized`] instead of failing.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub enum Status {
            $($(#[$doc])* $variant,)+
            Unrecognized(u8),
        }

        impl Status {
            pub fn from_code(code: u8) -> Self {
                match code {
                    $($code => Self::$variant,)+
                    other => Self::Unrecognized(other),
                }
            }

            pub fn code(&self) -> u8 {
                match self {
                    $(Self::$variant => $code,)+
                    Self::Unrecognized(code) => *code,
                }
            }

            /// Name of the status as listed in the reader manual.
            pub fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant),)+
                    Self::Unrecognized(_) => "Unrecognized",
                }
            }
        }
    };
}

status_table! {
    /// 00h OK / Success
    Ok = 0x00,
    /// 01h No Transponder
    NoTransponder = 0x01,
    DataFalse = 0x02,
    WriteError = 0x03,
    AddressError = 0x04,
    WrongTransponderType = 0x05,
    AuthenticationError = 0x08,
    CollisionError = 0x0B,
    GeneralError = 0x0E,
    EepromFailure = 0x10,
    ParameterRangeError = 0x11,
    LoginRequest = 0x13,
    LoginError = 0x14,
    ReadProtect = 0x15,
    WriteProtect = 0x16,
    FirmwareActivationRequired = 0x17,
    NoSamDetected = 0x31,
    RequestedSamIsNotActivated = 0x32,
    RequestedSamIsAlreadyActivated = 0x33,
    RequestedProtocolNotSupportedBySam = 0x34,
    SamCommunicationError = 0x35,
    SamTimeout = 0x36,
    SamUnsupportedBaudrate = 0x37,
    UnknownCommand = 0x80,
    LengthError = 0x81,
    CommandNotAvailable = 0x82,
    RfCommunicationError = 0x83,
    RfWarning = 0x84,
    EpcError = 0x85,
    DataBufferOverflow = 0x93,
    /// 94h More Data: repeat the request in continuation mode
    MoreData = 0x94,
    Iso15693Error = 0x95,
    Iso14443Error = 0x96,
    CryptoProcessingError = 0x97,
    HardwareWarning = 0xF1,
}

impl Status {
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok)
    }
}

impl From<u8> for Status {
    fn from(code: u8) -> Self {
        Self::from_code(code)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unrecognized(code) => write!(f, "Unrecognized({:#04x})", code),
            other => f.write_str(other.name()),
        }
    }
}
