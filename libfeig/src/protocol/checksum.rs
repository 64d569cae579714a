// libfeig/src/protocol/checksum.rs

use crc16::{MCRF4XX, State};

/// Checksum primitive used by the frame codec.
///
/// The returned value is written big-endian behind the frame and compared
/// big-endian on decode, so implementations return it in wire order.
pub trait Checksum: Send + Sync {
    fn checksum(&self, bytes: &[u8]) -> u16;
}

impl<F> Checksum for F
where
    F: Fn(&[u8]) -> u16 + Send + Sync,
{
    fn checksum(&self, bytes: &[u8]) -> u16 {
        self(bytes)
    }
}

/// CRC-16 used by FEIG readers: polynomial 0x8408 (reflected 0x1021),
/// preset 0xFFFF, no final XOR. The reader sends the low byte first.
#[derive(Debug, Clone, Copy, Default)]
pub struct FeigCrc16;

impl Checksum for FeigCrc16 {
    fn checksum(&self, bytes: &[u8]) -> u16 {
        crc16(bytes).swap_bytes()
    }
}

/// Raw CRC register value over `bytes` (not in wire order).
pub fn crc16(bytes: &[u8]) -> u16 {
    State::<MCRF4XX>::calculate(bytes)
}
