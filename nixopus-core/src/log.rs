//! Log sink abstraction
//!
//! The update sequence reports progress through a `LogSink` rather than
//! calling a logger directly, so the CLI can forward messages to `tracing`
//! while tests record them in order.

/// Severity of a progress message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Step-by-step progress, shown with `--verbose`
    Debug,
    /// Start and completion of a run
    Info,
    /// A phase failed; the message carries the captured diagnostic
    Error,
}

/// Trait for log sinks
///
/// Implement this trait to decide where update progress messages go.
pub trait LogSink: Send {
    /// Write a log message
    ///
    /// # Arguments
    /// * `level` - The log level (Debug, Info, Error)
    /// * `message` - The pre-formatted message
    fn write(&mut self, level: LogLevel, message: &str);

    /// Write a debug-level message
    fn debug(&mut self, message: &str) {
        self.write(LogLevel::Debug, message);
    }

    /// Write an info-level message
    fn info(&mut self, message: &str) {
        self.write(LogLevel::Info, message);
    }

    /// Write an error-level message
    fn error(&mut self, message: &str) {
        self.write(LogLevel::Error, message);
    }
}
