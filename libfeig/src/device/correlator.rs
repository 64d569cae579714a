// libfeig/src/device/correlator.rs

//! Single-in-flight request/response correlation.
//!
//! One exchange may be outstanding at a time. A second send while the
//! first is unanswered fails at once with [`Error::Busy`]; nothing is
//! queued. A background task reads the transport for the whole lifetime of
//! the connection, feeds the [`FrameAccumulator`] and hands every terminal
//! decode result to the waiting caller.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use log::{debug, warn};
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

use crate::constants::{FRAME_MAX_LEN, FRAME_MIN_LEN};
use crate::protocol::{FrameAccumulator, FrameCodec, ParseOutcome, Response};
use crate::transport::Transport;
use crate::utils::{bytes_to_hex_spaced, with_optional_timeout};
use crate::{Error, Result};

struct PendingExchange {
    id: u64,
    opcode: u8,
    tx: oneshot::Sender<Result<Response>>,
}

struct Session {
    idle: bool,
    closed: bool,
    pending: Option<PendingExchange>,
    next_id: u64,
}

type Shared = Arc<Mutex<Session>>;

fn lock(shared: &Shared) -> MutexGuard<'_, Session> {
    shared.lock().unwrap_or_else(PoisonError::into_inner)
}

pub struct Correlator {
    codec: FrameCodec,
    transport: Arc<dyn Transport>,
    shared: Shared,
    exchange_timeout: Option<Duration>,
    receiver: JoinHandle<()>,
}

impl Correlator {
    /// Start the receive loop on the current tokio runtime.
    pub fn start(
        transport: Arc<dyn Transport>,
        codec: FrameCodec,
        read_chunk_size: usize,
        exchange_timeout: Option<Duration>,
    ) -> Self {
        let shared = Arc::new(Mutex::new(Session {
            idle: true,
            closed: false,
            pending: None,
            next_id: 0,
        }));
        let receiver = tokio::spawn(receive_loop(
            transport.clone(),
            shared.clone(),
            FrameAccumulator::new(codec.clone()),
            read_chunk_size,
        ));
        Self {
            codec,
            transport,
            shared,
            exchange_timeout,
            receiver,
        }
    }

    pub fn codec(&self) -> &FrameCodec {
        &self.codec
    }

    pub fn is_idle(&self) -> bool {
        lock(&self.shared).idle
    }

    pub fn is_closed(&self) -> bool {
        lock(&self.shared).closed
    }

    /// Send one request frame and wait for the matching response.
    ///
    /// The response is returned whatever its device status; checking the
    /// status is up to the caller.
    pub async fn send(&self, opcode: u8, data: &[u8]) -> Result<Response> {
        if data.len() + FRAME_MIN_LEN > FRAME_MAX_LEN {
            return Err(Error::InvalidArgument(format!(
                "{} data bytes exceed the frame length field",
                data.len()
            )));
        }
        let (id, rx) = self.arm(opcode)?;

        let frame = self.codec.encode(opcode, data);
        debug!(">>> {}", bytes_to_hex_spaced(&frame));
        if let Err(e) = self.transport.write(&frame).await {
            self.disarm(id);
            return Err(e);
        }

        match with_optional_timeout(self.exchange_timeout, rx).await {
            Ok(Ok(result)) => result,
            // sender dropped without an answer: the session went away
            Ok(Err(_)) => Err(Error::ConnectionClosed),
            Err(e) => {
                if self.disarm(id) {
                    warn!("exchange for opcode {:#04x} timed out", opcode);
                }
                Err(e)
            }
        }
    }

    /// Force-release the outstanding exchange, if any. Its caller receives
    /// [`Error::Aborted`]. Returns whether an exchange was pending.
    pub fn abort_pending(&self) -> bool {
        let pending = {
            let mut session = lock(&self.shared);
            session.idle = true;
            session.pending.take()
        };
        match pending {
            Some(p) => {
                warn!("aborting exchange for opcode {:#04x}", p.opcode);
                let _ = p.tx.send(Err(Error::Aborted));
                true
            }
            None => false,
        }
    }

    /// Stop the receive loop and close the transport.
    pub async fn close(&self) -> Result<()> {
        self.receiver.abort();
        let pending = {
            let mut session = lock(&self.shared);
            session.closed = true;
            session.idle = true;
            session.pending.take()
        };
        if let Some(p) = pending {
            let _ = p.tx.send(Err(Error::ConnectionClosed));
        }
        self.transport.close().await
    }

    fn arm(&self, opcode: u8) -> Result<(u64, oneshot::Receiver<Result<Response>>)> {
        let mut session = lock(&self.shared);
        if session.closed {
            return Err(Error::ConnectionClosed);
        }
        if !session.idle {
            return Err(Error::Busy);
        }
        let (tx, rx) = oneshot::channel();
        let id = session.next_id;
        session.next_id = session.next_id.wrapping_add(1);
        session.idle = false;
        session.pending = Some(PendingExchange { id, opcode, tx });
        Ok((id, rx))
    }

    /// Release the slot if it still belongs to exchange `id`.
    fn disarm(&self, id: u64) -> bool {
        let mut session = lock(&self.shared);
        match &session.pending {
            Some(p) if p.id == id => {
                session.pending = None;
                session.idle = true;
                true
            }
            _ => false,
        }
    }
}

impl Drop for Correlator {
    fn drop(&mut self) {
        self.receiver.abort();
    }
}

async fn receive_loop(
    transport: Arc<dyn Transport>,
    shared: Shared,
    mut accumulator: FrameAccumulator,
    read_chunk_size: usize,
) {
    loop {
        let chunk = match transport.read(read_chunk_size).await {
            Ok(chunk) => chunk,
            Err(e) => {
                warn!("receive loop stopped: {}", e);
                let pending = {
                    let mut session = lock(&shared);
                    session.closed = true;
                    session.idle = true;
                    session.pending.take()
                };
                if let Some(p) = pending {
                    let _ = p.tx.send(Err(e));
                }
                return;
            }
        };
        if chunk.is_empty() {
            tokio::task::yield_now().await;
            continue;
        }
        debug!("<<< {}", bytes_to_hex_spaced(&chunk));

        for outcome in accumulator.push(&chunk) {
            match &outcome {
                ParseOutcome::ChecksumError {
                    expected, actual, ..
                } => warn!(
                    "checksum mismatch: expected {:#06x}, got {:#06x}",
                    expected, actual
                ),
                ParseOutcome::FrameError { reason } => warn!("frame error: {}", reason),
                _ => {}
            }
            let Some(result) = outcome.into_result() else {
                continue;
            };

            // idle is restored before the caller is woken so it can send
            // its next command straight away
            let pending = {
                let mut session = lock(&shared);
                // late reply to a timed out or aborted exchange
                let stale = match (&result, &session.pending) {
                    (Ok(resp), Some(p)) if resp.opcode() != p.opcode => {
                        Some((resp.opcode(), p.opcode))
                    }
                    _ => None,
                };
                if let Some((got, want)) = stale {
                    warn!(
                        "reply for opcode {:#04x} while {:#04x} is pending, dropping it",
                        got, want
                    );
                    continue;
                }
                session.idle = true;
                session.pending.take()
            };
            match pending {
                Some(p) => {
                    let _ = p.tx.send(result);
                }
                None => warn!("no exchange pending, dropping frame: {:?}", result),
            }
        }
    }
}
