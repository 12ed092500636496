//! Log sink forwarding update progress to `tracing`

use nixopus_core::{LogLevel, LogSink};
use tracing::{debug, error, info};

/// Sink that emits each message as a `tracing` event of the same level
pub struct TracingLogSink;

impl LogSink for TracingLogSink {
    fn write(&mut self, level: LogLevel, message: &str) {
        match level {
            LogLevel::Debug => debug!("{}", message),
            LogLevel::Info => info!("{}", message),
            LogLevel::Error => error!("{}", message),
        }
    }
}
