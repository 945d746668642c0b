//! Model asset handoff
//!
//! Model bytes arrive from an external loader as an opaque buffer. The
//! decode runs on a worker thread and the decoded payload crosses back
//! to the render thread through a one-shot channel polled once per tick.
//! No entity or GPU resource is touched off the render thread.

use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use crate::error::{Error, Result};

/// Decodes raw model bytes into a renderer-ready payload.
///
/// External collaborator boundary: the core never interprets model
/// bytes itself.
pub trait ModelDecoder: Send + Sync {
    fn decode(&self, bytes: &[u8]) -> Result<DecodedModel>;
}

/// Decoded model payload, opaque to the frame loop.
///
/// The render engine binding consumes it in `attach_model`; the frame
/// loop only moves it across the thread boundary.
#[derive(Debug, Clone)]
pub struct DecodedModel {
    name: String,
    mesh_count: usize,
    payload: Vec<u8>,
}

impl DecodedModel {
    pub fn new(name: impl Into<String>, mesh_count: usize, payload: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mesh_count,
            payload,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mesh_count(&self) -> usize {
        self.mesh_count
    }

    pub fn payload(&self) -> &[u8] {
        &self.payload
    }
}

/// A model to place: decoder + raw bytes.
///
/// Cloneable so a re-created surface can re-run scene bootstrap with the
/// same source.
#[derive(Clone)]
pub struct ModelSource {
    decoder: Arc<dyn ModelDecoder>,
    bytes: Arc<[u8]>,
}

impl ModelSource {
    pub fn new(decoder: Arc<dyn ModelDecoder>, bytes: impl Into<Arc<[u8]>>) -> Self {
        Self {
            decoder,
            bytes: bytes.into(),
        }
    }
}

/// One-shot handoff of a decode result from a worker to the render thread.
///
/// Dropping the handoff cancels interest in the result; the worker's send
/// simply fails and the thread exits.
pub struct ModelHandoff {
    receiver: Receiver<Result<DecodedModel>>,
}

impl ModelHandoff {
    /// Start decoding `source` on a worker thread.
    pub fn spawn(source: &ModelSource) -> Self {
        let (sender, receiver) = mpsc::channel();
        let decoder = source.decoder.clone();
        let bytes = source.bytes.clone();
        thread::spawn(move || {
            let _ = sender.send(decoder.decode(&bytes));
        });
        Self { receiver }
    }

    /// Poll for the decode result without blocking.
    ///
    /// Returns `None` while the worker is still running, then the result
    /// exactly once. A worker that died without sending surfaces as a
    /// decode failure.
    pub fn poll(&mut self) -> Option<Result<DecodedModel>> {
        match self.receiver.try_recv() {
            Ok(result) => Some(result),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(Err(Error::AssetDecode(
                "model decode worker terminated without a result".to_string(),
            ))),
        }
    }
}

#[cfg(test)]
#[path = "asset_tests.rs"]
mod tests;
