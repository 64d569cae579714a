// libfeig/src/tag/operations/read.rs

use log::warn;

use crate::device::Reader;
use crate::protocol::BlockRead;
use crate::tag::{Tag, TagReading};
use crate::types::Uid;
use crate::Result;

/// Blocks requested per Read Multiple Blocks exchange (one-byte count).
const MAX_BLOCKS_PER_READ: u16 = 255;

/// Read system information and then every block of the tag.
pub async fn read_tag(reader: &Reader, uid: &Uid) -> Result<Tag> {
    let info = reader.get_system_information(uid).await?;

    let mut blocks = BlockRead::default();
    let mut first: u16 = 0;
    while first < info.block_count {
        let count = (info.block_count - first).min(MAX_BLOCKS_PER_READ);
        // block_count is at most 256, so `first` never passes 255
        let read = reader
            .read_multiple_blocks(uid, first as u8, count as u8)
            .await?;
        blocks.extend(read);
        first += count;
    }

    Ok(Tag::new(*uid)
        .with_system_information(&info)
        .with_blocks(blocks))
}

/// Inventory the field and fully read every tag found.
///
/// A tag that fails to read keeps its error in [`TagReading::outcome`];
/// the remaining tags are still read. Only a failed inventory fails the
/// whole call.
pub async fn read_tags(reader: &Reader) -> Result<Vec<TagReading>> {
    let records = reader.inventory_all().await?;

    let mut readings = Vec::with_capacity(records.len());
    for record in records {
        let outcome = match Tag::from_record(&record) {
            Ok(tag) => read_tag(reader, &tag.uid).await.map(|full| Tag {
                transponder_type: tag.transponder_type,
                ..full
            }),
            Err(e) => Err(e),
        };
        if let Err(e) = &outcome {
            warn!(
                "reader {}: reading tag {} failed: {}",
                reader.id(),
                record.identifier_hex(),
                e
            );
        }
        readings.push(TagReading { record, outcome });
    }
    Ok(readings)
}
