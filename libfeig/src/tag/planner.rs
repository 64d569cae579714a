// libfeig/src/tag/planner.rs

//! Splits a tag payload into Write Multiple Blocks requests that fit the
//! reader's receive buffer.

use crate::protocol::blocks::pad_to_block_size;
use crate::{Error, Result};

/// Largest block count one request can carry (one-byte field).
const MAX_BLOCKS_PER_REQUEST: usize = 255;

/// One Write Multiple Blocks request of a plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteChunk {
    pub first_block: u8,
    /// Host-ordered data, a whole number of blocks.
    pub data: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WritePlan {
    pub block_size: u8,
    /// Payload bytes per chunk, rounded down to whole blocks.
    pub capacity_per_chunk: usize,
    /// The zero-padded payload.
    pub payload: Vec<u8>,
    pub chunks: Vec<WriteChunk>,
}

impl WritePlan {
    pub fn is_chunked(&self) -> bool {
        self.chunks.len() > 1
    }
}

/// Plan the requests for writing `data` from `start_block` on.
///
/// The whole payload goes in one request when it fits next to the frame
/// overhead; otherwise it is cut into `capacity_per_chunk` slices, each
/// addressed at `start_block + offset / block_size`.
pub fn plan_write(
    data: &[u8],
    start_block: u8,
    block_size: u8,
    rx_buffer_size: usize,
    frame_overhead: usize,
) -> Result<WritePlan> {
    if data.is_empty() {
        return Err(Error::InvalidArgument("nothing to write".into()));
    }
    if block_size == 0 {
        return Err(Error::InvalidArgument("block size must be non-zero".into()));
    }
    let bs = block_size as usize;

    let mut capacity = rx_buffer_size.saturating_sub(frame_overhead);
    capacity -= capacity % bs;
    capacity = capacity.min(MAX_BLOCKS_PER_REQUEST * bs);
    if capacity == 0 {
        return Err(Error::InvalidArgument(format!(
            "rx buffer of {} bytes leaves no room for a {} byte block",
            rx_buffer_size, block_size
        )));
    }

    let payload = pad_to_block_size(data, bs);
    let fits_whole =
        payload.len() + frame_overhead <= rx_buffer_size && payload.len() <= capacity;
    let step = if fits_whole { payload.len() } else { capacity };

    let mut chunks = Vec::with_capacity(payload.len().div_ceil(step));
    for (i, slice) in payload.chunks(step).enumerate() {
        let block = start_block as usize + i * step / bs;
        let first_block = u8::try_from(block).map_err(|_| {
            Error::InvalidArgument(format!("block address {} past the last block 255", block))
        })?;
        chunks.push(WriteChunk {
            first_block,
            data: slice.to_vec(),
        });
    }

    Ok(WritePlan {
        block_size,
        capacity_per_chunk: capacity,
        payload,
        chunks,
    })
}
