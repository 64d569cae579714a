// libfeig/src/tag/operations/erase.rs

use crate::device::Reader;
use crate::tag::WriteReport;
use crate::tag::operations::write::write_tag;
use crate::types::Uid;
use crate::Result;

/// Overwrite the tag from block 0.
///
/// With `fill` the given bytes are written using `block_size`. Without it
/// the whole memory is zeroed: system information supplies the block count
/// and the tag's own block size, and `block_size` is ignored.
pub async fn erase_tag(
    reader: &Reader,
    uid: &Uid,
    fill: Option<&[u8]>,
    block_size: u8,
) -> Result<WriteReport> {
    match fill {
        Some(data) => write_tag(reader, uid, 0, data, block_size).await,
        None => {
            let info = reader.get_system_information(uid).await?;
            let zeros = vec![0u8; info.memory_size()];
            write_tag(reader, uid, 0, &zeros, info.block_size).await
        }
    }
}
