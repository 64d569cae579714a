#![cfg(feature = "usb")]

//! Inventory the field and dump every tag found.
//!
//! Usage:
//!   RUST_LOG=debug cargo run -p libfeig --example read_tags --features usb --release

use libfeig::tag::read_tags;
use libfeig::{ReaderBuilder, Result, bytes_to_hex_spaced};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let reader = ReaderBuilder::new().with_usb()?.connect().await?;
    let info = reader.get_reader_info().await?;
    println!("reader rx buffer: {} bytes", info.rx_buffer_size);

    reader.rf_on().await?;
    let readings = read_tags(&reader).await;
    reader.rf_off().await?;

    for reading in readings? {
        match &reading.outcome {
            Ok(tag) => {
                println!(
                    "{} afi={:?} blocks={:?}x{:?}",
                    tag.uid, tag.afi, tag.block_count, tag.block_size
                );
                if let Some(bs) = tag.block_size {
                    for (n, block) in tag.data.chunks(bs as usize).enumerate() {
                        println!("  {:3}: {}", n, bytes_to_hex_spaced(block));
                    }
                }
            }
            Err(e) => println!("{} failed: {}", reading.record.identifier_hex(), e),
        }
    }

    reader.close().await
}
