// Reader setup shared by the async integration tests

use std::sync::Arc;

use libfeig::device::{Reader, ReaderConfig};
use libfeig::test_support;
use libfeig::transport::MockTransport;

/// Reader on a mock transport with default settings.
pub async fn mock_reader() -> (Arc<MockTransport>, Reader) {
    test_support::mock_reader(ReaderConfig::default())
        .await
        .unwrap()
}

/// Reader on a mock transport with a small receive buffer.
pub async fn mock_reader_with_rx(rx_buffer_size: usize) -> (Arc<MockTransport>, Reader) {
    test_support::mock_reader(ReaderConfig::default().with_rx_buffer_size(rx_buffer_size))
        .await
        .unwrap()
}

/// Undo the per-block reversal of a Write Multiple Blocks request and
/// return (first_block, block_count, host-ordered data).
pub fn decode_write_request(frame: &[u8]) -> (u8, u8, Vec<u8>) {
    assert_eq!(frame[4], 0xB0);
    assert_eq!(frame[5], 0x24);
    let first = frame[15];
    let count = frame[16];
    let bs = frame[17] as usize;
    let mut data = frame[18..frame.len() - 2].to_vec();
    for block in data.chunks_mut(bs) {
        block.reverse();
    }
    (first, count, data)
}
