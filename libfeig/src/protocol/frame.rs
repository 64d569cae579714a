// libfeig/src/protocol/frame.rs

use std::fmt;
use std::sync::Arc;

use derive_more::Display;

use crate::constants::{
    FRAME_BROADCAST_ADDRESS, FRAME_CHECKSUM_LEN, FRAME_HEADER_LEN, FRAME_MIN_LEN, FRAME_START,
};
use crate::protocol::checksum::{Checksum, FeigCrc16};
use crate::protocol::responses::Response;
use crate::{Error, Result};

/// Status of a single decode step, numbered like the reader SDK does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[repr(i8)]
pub enum ParseStatus {
    #[display(fmt = "success")]
    Success = 0,
    #[display(fmt = "more data needed")]
    MoreDataNeeded = 1,
    #[display(fmt = "checksum error")]
    ChecksumError = -1,
    #[display(fmt = "frame error")]
    FrameError = -2,
}

/// Result of [`FrameCodec::try_decode`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome {
    MoreDataNeeded,
    Success {
        response: Response,
        frame_len: usize,
    },
    ChecksumError {
        expected: u16,
        actual: u16,
        frame_len: usize,
    },
    /// The buffer does not start with a frame; discard all of it.
    FrameError { reason: String },
}

impl ParseOutcome {
    pub fn status(&self) -> ParseStatus {
        match self {
            Self::MoreDataNeeded => ParseStatus::MoreDataNeeded,
            Self::Success { .. } => ParseStatus::Success,
            Self::ChecksumError { .. } => ParseStatus::ChecksumError,
            Self::FrameError { .. } => ParseStatus::FrameError,
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::MoreDataNeeded)
    }

    /// Convert a terminal outcome into what the waiting caller receives.
    pub fn into_result(self) -> Option<Result<Response>> {
        match self {
            Self::MoreDataNeeded => None,
            Self::Success { response, .. } => Some(Ok(response)),
            Self::ChecksumError {
                expected, actual, ..
            } => Some(Err(Error::ChecksumMismatch { expected, actual })),
            Self::FrameError { reason } => Some(Err(Error::FrameFormat(reason))),
        }
    }
}

/// Advanced Protocol frame codec.
///
/// Format: [STX(1)] [LEN(2, BE)] [ADDR/STATUS(1)] [CMD(1)] [DATA(n)] [CRC(2, BE)]
/// LEN counts the whole frame including itself and the checksum.
#[derive(Clone)]
pub struct FrameCodec {
    checksum: Arc<dyn Checksum>,
}

impl FrameCodec {
    pub fn new() -> Self {
        Self::with_checksum(FeigCrc16)
    }

    pub fn with_checksum(checksum: impl Checksum + 'static) -> Self {
        Self {
            checksum: Arc::new(checksum),
        }
    }

    /// Encode a request frame for `opcode` carrying `data`.
    ///
    /// `data` must leave the total length within the 16-bit length field.
    pub fn encode(&self, opcode: u8, data: &[u8]) -> Vec<u8> {
        let length = 1 + data.len() + 6;
        let mut out = Vec::with_capacity(length);
        out.push(FRAME_START);
        out.push((length >> 8) as u8);
        out.push((length & 0xFF) as u8);
        out.push(FRAME_BROADCAST_ADDRESS);
        out.push(opcode);
        out.extend_from_slice(data);
        let crc = self.checksum.checksum(&out);
        out.extend_from_slice(&crc.to_be_bytes());
        out
    }

    /// One step of the streaming parser over the bytes received so far.
    ///
    /// Only the frame at the front of `buf` is examined; bytes past its
    /// declared length are left for the next call.
    pub fn try_decode(&self, buf: &[u8]) -> ParseOutcome {
        if buf.len() < 3 {
            return ParseOutcome::MoreDataNeeded;
        }
        let length = u16::from_be_bytes([buf[1], buf[2]]) as usize;
        if buf.len() < length {
            return ParseOutcome::MoreDataNeeded;
        }
        if buf[0] != FRAME_START {
            return ParseOutcome::FrameError {
                reason: format!("invalid start marker {:#04x}", buf[0]),
            };
        }
        if length < FRAME_MIN_LEN {
            return ParseOutcome::FrameError {
                reason: format!("declared length {} below minimum {}", length, FRAME_MIN_LEN),
            };
        }

        let body_end = length - FRAME_CHECKSUM_LEN;
        let expected = self.checksum.checksum(&buf[..body_end]);
        let actual = u16::from_be_bytes([buf[body_end], buf[body_end + 1]]);
        if expected != actual {
            return ParseOutcome::ChecksumError {
                expected,
                actual,
                frame_len: length,
            };
        }

        ParseOutcome::Success {
            response: Response::new(buf[3], buf[4], buf[FRAME_HEADER_LEN..body_end].to_vec()),
            frame_len: length,
        }
    }
}

impl Default for FrameCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for FrameCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FrameCodec").finish_non_exhaustive()
    }
}

/// Receive accumulator: collects transport chunks and yields every
/// terminal decode result they complete.
#[derive(Debug, Default)]
pub struct FrameAccumulator {
    codec: FrameCodec,
    buffer: Vec<u8>,
}

impl FrameAccumulator {
    pub fn new(codec: FrameCodec) -> Self {
        Self {
            codec,
            buffer: Vec::new(),
        }
    }

    /// Append a chunk and drain all frames it completes.
    ///
    /// After a success or checksum error the frame's bytes are removed and
    /// decoding continues on whatever followed it in the same chunk. A frame
    /// error discards the whole buffer.
    pub fn push(&mut self, chunk: &[u8]) -> Vec<ParseOutcome> {
        self.buffer.extend_from_slice(chunk);

        let mut outcomes = Vec::new();
        while !self.buffer.is_empty() {
            let outcome = self.codec.try_decode(&self.buffer);
            match &outcome {
                ParseOutcome::MoreDataNeeded => break,
                ParseOutcome::Success { frame_len, .. }
                | ParseOutcome::ChecksumError { frame_len, .. } => {
                    self.buffer.drain(..*frame_len);
                }
                ParseOutcome::FrameError { .. } => self.buffer.clear(),
            }
            outcomes.push(outcome);
        }
        outcomes
    }

    pub fn pending_bytes(&self) -> usize {
        self.buffer.len()
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }
}
