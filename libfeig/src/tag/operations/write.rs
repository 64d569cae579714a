// libfeig/src/tag/operations/write.rs

use log::{debug, warn};

use crate::device::Reader;
use crate::tag::planner::plan_write;
use crate::tag::WriteReport;
use crate::types::Uid;
use crate::{Error, Result};

/// Write `data` to the tag from `start_block` on, split into as many Write
/// Multiple Blocks exchanges as the reader's receive buffer requires.
///
/// A single-request write fails with the plain error. When a chunked write
/// fails, the chunks already written stay on the tag and the error is
/// [`Error::PartialWrite`] carrying their responses.
pub async fn write_tag(
    reader: &Reader,
    uid: &Uid,
    start_block: u8,
    data: &[u8],
    block_size: u8,
) -> Result<WriteReport> {
    let plan = plan_write(
        data,
        start_block,
        block_size,
        reader.rx_buffer_size(),
        reader.config().write_frame_overhead,
    )?;
    debug!(
        "reader {}: writing {} bytes to {} in {} chunk(s) of up to {} bytes",
        reader.id(),
        plan.payload.len(),
        uid,
        plan.chunks.len(),
        plan.capacity_per_chunk
    );

    let chunked = plan.is_chunked();
    let mut responses = Vec::with_capacity(plan.chunks.len());
    for chunk in &plan.chunks {
        match reader
            .write_multiple_blocks(uid, chunk.first_block, plan.block_size, &chunk.data)
            .await
        {
            Ok(resp) => responses.push(resp),
            Err(e) if chunked => {
                warn!(
                    "reader {}: write to {} failed at block {} after {} chunk(s): {}",
                    reader.id(),
                    uid,
                    chunk.first_block,
                    responses.len(),
                    e
                );
                return Err(Error::PartialWrite {
                    completed: responses,
                    source: Box::new(e),
                });
            }
            Err(e) => return Err(e),
        }
    }

    Ok(WriteReport {
        uid: *uid,
        afi: None,
        data: plan.payload,
        responses,
    })
}

/// Write the AFI and then the data. A rejected AFI is logged and left out
/// of the report; the data is written regardless.
pub async fn write_tag_with_afi(
    reader: &Reader,
    uid: &Uid,
    afi: i64,
    start_block: u8,
    data: &[u8],
    block_size: u8,
) -> Result<WriteReport> {
    let written_afi = match reader.write_afi(uid, afi).await {
        Ok(done) => Some(done.afi),
        Err(e) => {
            warn!("reader {}: writing AFI to {} failed: {}", reader.id(), uid, e);
            None
        }
    };
    let report = write_tag(reader, uid, start_block, data, block_size).await?;
    Ok(WriteReport {
        afi: written_afi,
        ..report
    })
}
