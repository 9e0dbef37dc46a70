use log::Level;

use super::handle::CaptureCallbackHandle;
use crate::models::config::LoggingConfiguration;
use crate::models::error::CallbackError;
use crate::models::events::{
    CaptureBufferLost, CaptureCompleted, CaptureFailed, CaptureProgressed,
    CaptureSequenceAborted, CaptureSequenceCompleted, CaptureStarted,
};
use crate::traits::capture_callback::CaptureCallback;

/// Writes capture events to the `log` facade.
///
/// Never fails, so it is safe to register anywhere in a combo.
#[derive(Debug, Clone)]
pub struct LoggingCallback {
    config: LoggingConfiguration,
}

impl LoggingCallback {
    /// Creates a logger after validating `config`.
    pub fn new(config: LoggingConfiguration) -> Result<Self, CallbackError> {
        config.validate().map_err(CallbackError::InvalidConfiguration)?;
        Ok(Self { config })
    }

    /// Creates a logger with [`LoggingConfiguration::default`].
    pub fn with_defaults() -> Self {
        Self {
            config: LoggingConfiguration::default(),
        }
    }

    pub fn config(&self) -> &LoggingConfiguration {
        &self.config
    }

    /// Wraps this logger in a concrete handle.
    pub fn into_handle(self) -> CaptureCallbackHandle {
        CaptureCallbackHandle::concrete(self)
    }

    fn target(&self) -> &str {
        &self.config.target
    }
}

impl CaptureCallback for LoggingCallback {
    fn on_capture_buffer_lost(&self, event: &CaptureBufferLost) -> Result<(), CallbackError> {
        log::log!(
            target: self.target(),
            Level::Warn,
            "[{}] buffer lost: request={} surface={} frame={}",
            event.session,
            event.request.id,
            event.surface.0,
            event.frame_number
        );
        Ok(())
    }

    fn on_capture_completed(&self, event: &CaptureCompleted) -> Result<(), CallbackError> {
        log::log!(
            target: self.target(),
            self.config.level,
            "[{}] capture completed: request={} frame={} partials={}",
            event.session,
            event.request.id,
            event.result.frame_number(),
            event.result.partial_results.len()
        );
        Ok(())
    }

    fn on_capture_failed(&self, event: &CaptureFailed) -> Result<(), CallbackError> {
        log::log!(
            target: self.target(),
            Level::Warn,
            "[{}] capture failed: request={} frame={} reason={:?} image_captured={}",
            event.session,
            event.request.id,
            event.failure.frame_number,
            event.failure.reason,
            event.failure.was_image_captured
        );
        Ok(())
    }

    fn on_capture_progressed(&self, event: &CaptureProgressed) -> Result<(), CallbackError> {
        if self.config.include_progress {
            log::log!(
                target: self.target(),
                self.config.level,
                "[{}] capture progressed: request={} frame={} entries={}",
                event.session,
                event.request.id,
                event.partial_result.frame_number,
                event.partial_result.entries.len()
            );
        }
        Ok(())
    }

    fn on_capture_sequence_aborted(
        &self,
        event: &CaptureSequenceAborted,
    ) -> Result<(), CallbackError> {
        log::log!(
            target: self.target(),
            self.config.level,
            "[{}] sequence {} aborted",
            event.session,
            event.sequence_id
        );
        Ok(())
    }

    fn on_capture_sequence_completed(
        &self,
        event: &CaptureSequenceCompleted,
    ) -> Result<(), CallbackError> {
        log::log!(
            target: self.target(),
            self.config.level,
            "[{}] sequence {} completed at frame {}",
            event.session,
            event.sequence_id,
            event.frame_number
        );
        Ok(())
    }

    fn on_capture_started(&self, event: &CaptureStarted) -> Result<(), CallbackError> {
        log::log!(
            target: self.target(),
            self.config.level,
            "[{}] capture started: request={} frame={} timestamp={}ns",
            event.session,
            event.request.id,
            event.frame_number,
            event.timestamp_nanos
        );
        Ok(())
    }
}
