// libfeig/src/protocol/codec.rs

use crate::{Error, Result};

use super::commands::Command;
use super::frame::{FrameCodec, ParseOutcome};
use super::responses::Response;

/// Encode a Command into a complete request frame.
pub fn encode_command_frame(codec: &FrameCodec, cmd: &Command) -> Result<Vec<u8>> {
    let data = cmd.encode()?;
    if data.len() + crate::constants::FRAME_MIN_LEN > crate::constants::FRAME_MAX_LEN {
        return Err(Error::InvalidArgument(format!(
            "{} data bytes exceed the frame length field",
            data.len()
        )));
    }
    Ok(codec.encode(cmd.opcode(), &data))
}

/// Decode one complete response frame held in `frame`.
///
/// Unlike the streaming path this requires the buffer to be exactly one
/// frame long.
pub fn decode_response_frame(codec: &FrameCodec, frame: &[u8]) -> Result<Response> {
    match codec.try_decode(frame) {
        ParseOutcome::Success {
            response,
            frame_len,
        } if frame_len == frame.len() => Ok(response),
        ParseOutcome::Success { frame_len, .. } => Err(Error::InvalidLength {
            expected: frame_len,
            actual: frame.len(),
        }),
        ParseOutcome::MoreDataNeeded => Err(Error::InvalidLength {
            expected: frame
                .get(1..3)
                .map(|b| u16::from_be_bytes([b[0], b[1]]) as usize)
                .unwrap_or(crate::constants::FRAME_MIN_LEN),
            actual: frame.len(),
        }),
        other => match other.into_result() {
            Some(Err(e)) => Err(e),
            _ => Err(Error::FrameFormat("unexpected decode outcome".into())),
        },
    }
}
