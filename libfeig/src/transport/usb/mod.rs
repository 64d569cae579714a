// libfeig/src/transport/usb/mod.rs

#![cfg(feature = "usb")]

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info};
use rusb::{Context, DeviceHandle, UsbContext};

use crate::device::config::UsbFilter;
use crate::transport::traits::Transport;
use crate::utils::default_read_timeout;
use crate::{Error, Result};

mod descriptor;
pub use descriptor::{Endpoints, FALLBACK_ENDPOINTS, find_endpoints};

/// USB bulk transport for FEIG readers.
///
/// rusb is blocking, so every transfer runs on tokio's blocking pool. Reads
/// poll with a short timeout and report an expired poll as an empty chunk.
pub struct UsbTransport {
    handle: Mutex<Option<Arc<DeviceHandle<Context>>>>,
    endpoints: Endpoints,
    read_timeout: Duration,
    write_timeout: Duration,
}

impl UsbTransport {
    /// Open and claim the first device matching `filter`.
    pub fn open(filter: &UsbFilter) -> Result<Self> {
        let ctx = Context::new()?;
        for device in ctx.devices()?.iter() {
            let dd = device.device_descriptor()?;
            if dd.vendor_id() != filter.vendor_id || dd.product_id() != filter.product_id {
                continue;
            }

            let mut handle = device.open()?;
            let endpoints = find_endpoints(&device);
            // The kernel may have bound a HID driver; detach is best-effort
            // and claim_interface reports the real failure.
            if let Ok(true) = handle.kernel_driver_active(endpoints.interface) {
                let _ = handle.detach_kernel_driver(endpoints.interface);
            }
            handle.claim_interface(endpoints.interface)?;
            info!(
                "opened reader {:04x}:{:04x} on bus {} address {} ({:?})",
                filter.vendor_id,
                filter.product_id,
                device.bus_number(),
                device.address(),
                endpoints
            );

            return Ok(Self {
                handle: Mutex::new(Some(Arc::new(handle))),
                endpoints,
                read_timeout: default_read_timeout(),
                write_timeout: default_read_timeout(),
            });
        }

        Err(Error::DeviceNotFound)
    }

    pub fn endpoints(&self) -> Endpoints {
        self.endpoints
    }

    fn handle(&self) -> Result<Arc<DeviceHandle<Context>>> {
        self.handle
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
            .ok_or(Error::ConnectionClosed)
    }
}

async fn blocking<T, F>(f: F) -> Result<T>
where
    F: FnOnce() -> Result<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| Error::Transport(format!("usb worker failed: {}", e)))?
}

/// Repeat `write` until all of `data` is out. A transfer that moves no
/// bytes fails instead of retrying forever.
fn write_all<F>(data: &[u8], mut write: F) -> Result<()>
where
    F: FnMut(&[u8]) -> rusb::Result<usize>,
{
    let mut sent = 0;
    while sent < data.len() {
        match write(&data[sent..])? {
            0 => {
                return Err(Error::Transport(format!(
                    "short usb write: {} of {} bytes",
                    sent,
                    data.len()
                )));
            }
            n => sent += n,
        }
    }
    Ok(())
}

#[async_trait]
impl Transport for UsbTransport {
    async fn open(&self) -> Result<()> {
        // Claimed in the constructor; only check the handle is still there.
        self.handle().map(|_| ())
    }

    async fn close(&self) -> Result<()> {
        let handle = self
            .handle
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(handle) = handle {
            let iface = self.endpoints.interface;
            blocking(move || {
                // Dropping the last handle closes the device.
                match Arc::try_unwrap(handle) {
                    Ok(mut handle) => {
                        let _ = handle.release_interface(iface);
                    }
                    Err(_) => debug!("usb handle still in use, released on drop"),
                }
                Ok(())
            })
            .await?;
        }
        Ok(())
    }

    async fn write(&self, data: &[u8]) -> Result<()> {
        let handle = self.handle()?;
        let ep = self.endpoints.bulk_out;
        let timeout = self.write_timeout;
        let data = data.to_vec();
        blocking(move || write_all(&data, |rest| handle.write_bulk(ep, rest, timeout))).await
    }

    async fn read(&self, max_len: usize) -> Result<Vec<u8>> {
        let handle = self.handle()?;
        let ep = self.endpoints.bulk_in;
        let timeout = self.read_timeout;
        blocking(move || {
            let mut buf = vec![0u8; max_len];
            match handle.read_bulk(ep, &mut buf, timeout) {
                Ok(n) => {
                    buf.truncate(n);
                    Ok(buf)
                }
                Err(rusb::Error::Timeout) => Ok(Vec::new()),
                Err(rusb::Error::NoDevice) => Err(Error::ConnectionClosed),
                Err(e) => Err(e.into()),
            }
        })
        .await
    }
}
