use log::Level;

/// Configuration for [`LoggingCallback`](crate::callbacks::logging::LoggingCallback).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfiguration {
    /// Log target used for every record (default: `"capture_callback"`).
    pub target: String,

    /// Level for regular lifecycle events (default: `Info`).
    /// Failures and lost buffers are always logged at `Warn`.
    pub level: Level,

    /// Log progress events too (default: false, they arrive per partial result).
    pub include_progress: bool,
}

impl LoggingConfiguration {
    /// Checks that the target is not blank.
    pub fn validate(&self) -> Result<(), String> {
        if self.target.trim().is_empty() {
            return Err("log target must not be empty".into());
        }
        Ok(())
    }
}

impl Default for LoggingConfiguration {
    fn default() -> Self {
        Self {
            target: "capture_callback".into(),
            level: Level::Info,
            include_progress: false,
        }
    }
}

/// Configuration for [`RecordingCallback`](crate::callbacks::recording::RecordingCallback).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecorderConfiguration {
    /// Maximum number of events kept; older ones are dropped (default: 1024).
    pub capacity: usize,

    /// Record progress events (default: true).
    pub include_progress: bool,
}

impl RecorderConfiguration {
    /// Checks that the capacity is at least 1.
    pub fn validate(&self) -> Result<(), String> {
        if self.capacity == 0 {
            return Err("recorder capacity must be at least 1".into());
        }
        Ok(())
    }
}

impl Default for RecorderConfiguration {
    fn default() -> Self {
        Self {
            capacity: 1024,
            include_progress: true,
        }
    }
}
