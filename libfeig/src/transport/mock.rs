// libfeig/src/transport/mock.rs

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use tokio::sync::{mpsc, watch};

use crate::transport::traits::Transport;
use crate::{Error, Result};

/// Mock transport for tests.
///
/// Every write is recorded. Each write consumes one scripted reply, whose
/// chunks are then delivered to `read` one by one, so tests control how a
/// response frame is split. Chunks can also be injected at any time.
#[derive(Debug)]
pub struct MockTransport {
    state: Mutex<MockState>,
    inbound: tokio::sync::Mutex<Inbound>,
    writes: watch::Sender<usize>,
}

#[derive(Debug, Default)]
struct MockState {
    written: Vec<Vec<u8>>,
    replies: VecDeque<Vec<Vec<u8>>>,
    fail_next_write: Option<String>,
    opened: bool,
    sender: Option<mpsc::UnboundedSender<Vec<u8>>>,
}

#[derive(Debug)]
struct Inbound {
    rx: mpsc::UnboundedReceiver<Vec<u8>>,
    leftover: Vec<u8>,
}

impl MockTransport {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let (writes, _) = watch::channel(0);
        Self {
            state: Mutex::new(MockState {
                sender: Some(tx),
                ..MockState::default()
            }),
            inbound: tokio::sync::Mutex::new(Inbound {
                rx,
                leftover: Vec::new(),
            }),
            writes,
        }
    }

    fn lock(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Queue the reply to the next unanswered write, split into `chunks`.
    /// An empty list means the write goes unanswered.
    pub fn push_reply(&self, chunks: Vec<Vec<u8>>) {
        self.lock().replies.push_back(chunks);
    }

    /// Queue a reply delivered as one chunk.
    pub fn push_frame(&self, frame: Vec<u8>) {
        self.push_reply(vec![frame]);
    }

    /// Deliver a chunk right away, independent of any write.
    pub fn push_chunk(&self, chunk: Vec<u8>) {
        if let Some(tx) = &self.lock().sender {
            let _ = tx.send(chunk);
        }
    }

    /// Make the next write fail with a transport error.
    pub fn fail_next_write(&self, reason: impl Into<String>) {
        self.lock().fail_next_write = Some(reason.into());
    }

    /// Simulate unplugging: the pending read fails with `ConnectionClosed`
    /// once the already delivered chunks are drained.
    pub fn disconnect(&self) {
        self.lock().sender = None;
    }

    pub fn written(&self) -> Vec<Vec<u8>> {
        self.lock().written.clone()
    }

    pub fn write_count(&self) -> usize {
        self.lock().written.len()
    }

    pub fn is_open(&self) -> bool {
        self.lock().opened
    }

    /// Wait until at least `count` writes have been recorded.
    pub async fn wait_for_writes(&self, count: usize) {
        let mut rx = self.writes.subscribe();
        let _ = rx.wait_for(|n| *n >= count).await;
    }
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn open(&self) -> Result<()> {
        self.lock().opened = true;
        Ok(())
    }

    async fn close(&self) -> Result<()> {
        let mut state = self.lock();
        state.opened = false;
        state.sender = None;
        Ok(())
    }

    async fn write(&self, data: &[u8]) -> Result<()> {
        let count = {
            let mut state = self.lock();
            if let Some(reason) = state.fail_next_write.take() {
                return Err(Error::Transport(reason));
            }
            let Some(tx) = state.sender.clone() else {
                return Err(Error::ConnectionClosed);
            };
            state.written.push(data.to_vec());
            if let Some(chunks) = state.replies.pop_front() {
                for chunk in chunks {
                    let _ = tx.send(chunk);
                }
            }
            state.written.len()
        };
        self.writes.send_replace(count);
        Ok(())
    }

    async fn read(&self, max_len: usize) -> Result<Vec<u8>> {
        let mut inbound = self.inbound.lock().await;
        if inbound.leftover.is_empty() {
            match inbound.rx.recv().await {
                Some(chunk) => inbound.leftover = chunk,
                None => return Err(Error::ConnectionClosed),
            }
        }
        let take = inbound.leftover.len().min(max_len.max(1));
        Ok(inbound.leftover.drain(..take).collect())
    }
}
