// libfeig/src/transport/traits.rs

use async_trait::async_trait;

use crate::Result;

/// Byte-oriented link to the reader.
///
/// Reads return whatever arrived, with no regard to frame boundaries. All
/// methods take `&self` so one transport can be shared between the receive
/// loop and the sending side.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Claim the device so transfers can start.
    async fn open(&self) -> Result<()>;

    /// Release the device. Pending and later reads fail afterwards.
    async fn close(&self) -> Result<()>;

    /// Send raw bytes to the device.
    async fn write(&self, data: &[u8]) -> Result<()>;

    /// Receive up to `max_len` bytes. An empty chunk means nothing arrived
    /// within the transport's poll interval.
    async fn read(&self, max_len: usize) -> Result<Vec<u8>>;
}
