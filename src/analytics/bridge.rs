//! Outbound side of the analytics agent.

use std::io::Write;

use parking_lot::Mutex;

use super::types::{AnalyticsMessage, BridgeError};

/// Delivers messages to whatever hosts the analytics agent.
pub trait MessageBridge: Send + Sync {
    fn post(&self, message: &AnalyticsMessage) -> Result<(), BridgeError>;
}

/// Writes each message as one JSON line.
pub struct JsonLinesBridge<W: Write + Send> {
    writer: Mutex<W>,
}

impl<W: Write + Send> JsonLinesBridge<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}

impl<W: Write + Send> MessageBridge for JsonLinesBridge<W> {
    fn post(&self, message: &AnalyticsMessage) -> Result<(), BridgeError> {
        let line = serde_json::to_string(message)?;
        let mut writer = self.writer.lock();
        writeln!(writer, "{}", line)?;
        writer.flush()?;
        Ok(())
    }
}

/// Bridge with no agent behind it. Every post fails with
/// [`BridgeError::TargetMissing`].
pub struct DetachedBridge;

impl MessageBridge for DetachedBridge {
    fn post(&self, _message: &AnalyticsMessage) -> Result<(), BridgeError> {
        Err(BridgeError::TargetMissing)
    }
}
