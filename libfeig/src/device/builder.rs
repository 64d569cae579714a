// libfeig/src/device/builder.rs

use std::sync::Arc;

use crate::device::config::ReaderConfig;
use crate::device::handle::Reader;
use crate::protocol::{Checksum, FrameCodec};
use crate::transport::Transport;
use crate::{Error, Result};

/// Helper to assemble a [`Reader`] from a transport, settings and an
/// optional checksum provider.
#[derive(Default)]
pub struct ReaderBuilder {
    transport: Option<Arc<dyn Transport>>,
    config: ReaderConfig,
    codec: FrameCodec,
}

impl ReaderBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Provide an already-created transport instance (e.g. MockTransport)
    pub fn with_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn with_config(mut self, config: ReaderConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace the CRC used to build and check frames.
    pub fn with_checksum(mut self, checksum: impl Checksum + 'static) -> Self {
        self.codec = FrameCodec::with_checksum(checksum);
        self
    }

    /// Open the first USB reader matching the configured filter.
    #[cfg(feature = "usb")]
    pub fn with_usb(mut self) -> Result<Self> {
        let usb = crate::transport::UsbTransport::open(&self.config.usb)?;
        self.transport = Some(Arc::new(usb));
        Ok(self)
    }

    /// Open the transport and start the session.
    /// Requires a transport to be provided; otherwise returns DeviceNotFound.
    pub async fn connect(self) -> Result<Reader> {
        let transport = self.transport.ok_or(Error::DeviceNotFound)?;
        Reader::connect(transport, self.codec, self.config).await
    }
}
