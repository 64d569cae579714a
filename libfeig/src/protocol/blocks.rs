// libfeig/src/protocol/blocks.rs

//! Block layout helpers.
//!
//! ISO15693 tags exchange each block least-significant byte first, while the
//! host keeps data in natural order. Both directions reverse every block.

/// Pad `data` with zeros up to the next multiple of `block_size`.
pub fn pad_to_block_size(data: &[u8], block_size: usize) -> Vec<u8> {
    let mut out = data.to_vec();
    if block_size == 0 {
        return out;
    }
    let rem = out.len() % block_size;
    if rem != 0 {
        out.resize(out.len() + block_size - rem, 0);
    }
    out
}

/// Reverse the bytes of each `block_size` chunk in place.
/// A trailing partial chunk is reversed as-is.
pub fn reverse_blocks(data: &mut [u8], block_size: usize) {
    if block_size == 0 {
        return;
    }
    for block in data.chunks_mut(block_size) {
        block.reverse();
    }
}

/// Number of blocks needed to hold `len` bytes.
pub fn blocks_for(len: usize, block_size: usize) -> usize {
    if block_size == 0 {
        return 0;
    }
    len.div_ceil(block_size)
}
