// libfeig/src/device/config.rs

use std::time::Duration;

use crate::constants::{
    DEFAULT_READ_CHUNK_SIZE, DEFAULT_RX_BUFFER_SIZE, FEIG_PRODUCT_ID, FEIG_VENDOR_ID,
    WRITE_MULTIPLE_BLOCKS_OVERHEAD,
};

/// USB ids used to pick the reader on the bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UsbFilter {
    pub vendor_id: u16,
    pub product_id: u16,
}

impl Default for UsbFilter {
    fn default() -> Self {
        Self {
            vendor_id: FEIG_VENDOR_ID,
            product_id: FEIG_PRODUCT_ID,
        }
    }
}

/// Reader session settings.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct ReaderConfig {
    /// Label used in logs and results.
    pub id: String,
    /// Receive buffer size of the reader. Replaced by Get Reader Info.
    pub rx_buffer_size: usize,
    /// Maximum bytes requested per transport read.
    pub read_chunk_size: usize,
    /// Frame bytes around the block data of a Write Multiple Blocks request.
    pub write_frame_overhead: usize,
    /// Upper bound for one exchange. `None` waits until the reader answers
    /// or the transport fails.
    pub exchange_timeout: Option<Duration>,
    pub usb: UsbFilter,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            id: "usb".to_string(),
            rx_buffer_size: DEFAULT_RX_BUFFER_SIZE,
            read_chunk_size: DEFAULT_READ_CHUNK_SIZE,
            write_frame_overhead: WRITE_MULTIPLE_BLOCKS_OVERHEAD,
            exchange_timeout: None,
            usb: UsbFilter::default(),
        }
    }
}

impl ReaderConfig {
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_rx_buffer_size(mut self, size: usize) -> Self {
        self.rx_buffer_size = size;
        self
    }

    pub fn with_read_chunk_size(mut self, size: usize) -> Self {
        self.read_chunk_size = size;
        self
    }

    pub fn with_write_frame_overhead(mut self, overhead: usize) -> Self {
        self.write_frame_overhead = overhead;
        self
    }

    pub fn with_exchange_timeout(mut self, timeout: Duration) -> Self {
        self.exchange_timeout = Some(timeout);
        self
    }

    pub fn with_usb_filter(mut self, vendor_id: u16, product_id: u16) -> Self {
        self.usb = UsbFilter {
            vendor_id,
            product_id,
        };
        self
    }
}
