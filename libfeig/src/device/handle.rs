// libfeig/src/device/handle.rs

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use log::{debug, info};

use crate::constants::mode;
use crate::device::config::ReaderConfig;
use crate::device::correlator::Correlator;
use crate::protocol::{
    BlockRead, Command, FrameCodec, InventoryRecord, InventoryResult, ReaderInfo, Response,
    SystemInformation, decode_inventory, decode_read_multiple_blocks, decode_reader_info,
    decode_system_information,
};
use crate::tag::AfiWritten;
use crate::transport::Transport;
use crate::types::Uid;
use crate::{Error, Result};

/// Connected reader session.
///
/// Every method is one exchange (or a short sequence of them) through the
/// single-in-flight correlator. Calling a second method while one is still
/// waiting for the reader yields [`Error::Busy`].
pub struct Reader {
    correlator: Correlator,
    config: ReaderConfig,
    rx_buffer_size: AtomicUsize,
}

impl Reader {
    /// Open `transport` and start the receive loop. Must be called from
    /// within a tokio runtime.
    pub async fn connect(
        transport: Arc<dyn Transport>,
        codec: FrameCodec,
        config: ReaderConfig,
    ) -> Result<Self> {
        transport.open().await?;
        let correlator = Correlator::start(
            transport,
            codec,
            config.read_chunk_size,
            config.exchange_timeout,
        );
        info!("reader {} connected", config.id);
        Ok(Self {
            correlator,
            rx_buffer_size: AtomicUsize::new(config.rx_buffer_size),
            config,
        })
    }

    pub fn id(&self) -> &str {
        &self.config.id
    }

    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    /// Receive buffer size used to plan chunked writes.
    pub fn rx_buffer_size(&self) -> usize {
        self.rx_buffer_size.load(Ordering::Relaxed)
    }

    pub fn set_rx_buffer_size(&self, size: usize) {
        self.rx_buffer_size.store(size, Ordering::Relaxed);
    }

    pub fn is_idle(&self) -> bool {
        self.correlator.is_idle()
    }

    /// Send a command and return the response whatever its status.
    pub async fn send(&self, cmd: &Command) -> Result<Response> {
        let data = cmd.encode()?;
        self.correlator.send(cmd.opcode(), &data).await
    }

    /// Send an arbitrary opcode with a caller-built payload.
    pub async fn send_raw(&self, opcode: u8, data: &[u8]) -> Result<Response> {
        self.correlator.send(opcode, data).await
    }

    /// Send a command and require status OK.
    pub async fn execute(&self, cmd: &Command) -> Result<Response> {
        self.send(cmd).await?.ensure_ok()
    }

    pub async fn system_reset(&self) -> Result<()> {
        self.execute(&Command::SystemReset).await.map(|_| ())
    }

    pub async fn cpu_reset(&self) -> Result<()> {
        self.execute(&Command::CpuReset).await.map(|_| ())
    }

    pub async fn rf_reset(&self) -> Result<()> {
        self.execute(&Command::RfReset).await.map(|_| ())
    }

    pub async fn rf_on(&self) -> Result<()> {
        self.execute(&Command::RfOutput { on: true }).await.map(|_| ())
    }

    pub async fn rf_off(&self) -> Result<()> {
        self.execute(&Command::RfOutput { on: false }).await.map(|_| ())
    }

    /// Switch RF off even when an exchange is stuck: the outstanding
    /// exchange is released first and its caller gets [`Error::Aborted`].
    pub async fn rf_off_forced(&self) -> Result<()> {
        if self.correlator.abort_pending() {
            debug!("reader {}: released pending exchange for rf off", self.id());
        }
        self.rf_off().await
    }

    /// Release a stuck exchange. Returns whether one was pending.
    pub fn abort_pending(&self) -> bool {
        self.correlator.abort_pending()
    }

    pub async fn get_software_version(&self) -> Result<Vec<u8>> {
        Ok(self
            .execute(&Command::GetSoftwareVersion)
            .await?
            .into_data())
    }

    /// Query the receive buffer size and adopt it for chunked writes.
    pub async fn get_reader_info(&self) -> Result<ReaderInfo> {
        let resp = self
            .execute(&Command::GetReaderInfo {
                mode: mode::READER_INFO_BUFFERS,
            })
            .await?;
        let info = decode_reader_info(resp.data())?;
        self.set_rx_buffer_size(info.rx_buffer_size as usize);
        info!(
            "reader {}: rx buffer size {} bytes",
            self.id(),
            info.rx_buffer_size
        );
        Ok(info)
    }

    /// One inventory round; `more` continues after a `MoreData` answer.
    pub async fn inventory(&self, more: bool) -> Result<InventoryResult> {
        let resp = self.send(&Command::Inventory { more_data: more }).await?;
        decode_inventory(resp)
    }

    /// Inventory, continuing while the reader reports more records.
    pub async fn inventory_all(&self) -> Result<Vec<InventoryRecord>> {
        let mut result = self.inventory(false).await?;
        let mut records = std::mem::take(&mut result.records);
        while result.more_data {
            result = self.inventory(true).await?;
            records.append(&mut result.records);
        }
        debug!("reader {}: inventory found {} tag(s)", self.id(), records.len());
        Ok(records)
    }

    pub async fn get_system_information(&self, uid: &Uid) -> Result<SystemInformation> {
        let resp = self
            .execute(&Command::GetSystemInformation { uid: *uid })
            .await?;
        decode_system_information(resp.data())
    }

    pub async fn read_multiple_blocks(
        &self,
        uid: &Uid,
        first_block: u8,
        block_count: u8,
    ) -> Result<BlockRead> {
        let resp = self
            .execute(&Command::ReadMultipleBlocks {
                uid: *uid,
                first_block,
                block_count,
            })
            .await?;
        decode_read_multiple_blocks(resp.data())
    }

    /// One Write Multiple Blocks exchange. `data` is padded to whole blocks.
    /// Large payloads go through [`crate::tag::operations::write_tag`].
    pub async fn write_multiple_blocks(
        &self,
        uid: &Uid,
        first_block: u8,
        block_size: u8,
        data: &[u8],
    ) -> Result<Response> {
        self.execute(&Command::WriteMultipleBlocks {
            uid: *uid,
            first_block,
            block_size,
            data: data.to_vec(),
        })
        .await
    }

    /// Write the AFI byte. Values outside 0..=255 are rejected before the
    /// reader is contacted.
    pub async fn write_afi(&self, uid: &Uid, afi: i64) -> Result<AfiWritten> {
        let afi = u8::try_from(afi)
            .map_err(|_| Error::InvalidArgument(format!("AFI {} outside 0..=255", afi)))?;
        self.execute(&Command::WriteAfi { uid: *uid, afi }).await?;
        Ok(AfiWritten { uid: *uid, afi })
    }

    /// Stop the receive loop and close the transport.
    pub async fn close(&self) -> Result<()> {
        info!("reader {} closing", self.id());
        self.correlator.close().await
    }
}
