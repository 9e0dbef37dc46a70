use crate::models::error::CallbackError;
use crate::models::events::{
    CaptureBufferLost, CaptureCompleted, CaptureFailed, CaptureProgressed,
    CaptureSequenceAborted, CaptureSequenceCompleted, CaptureStarted,
};
use crate::traits::capture_callback::CaptureCallback;

/// A callback that ignores every event and never fails.
///
/// Register [`CaptureCallbackHandle::NoOp`](crate::CaptureCallbackHandle::NoOp)
/// rather than wrapping this type, so combo callbacks can drop it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoOpCallback;

impl CaptureCallback for NoOpCallback {
    fn on_capture_buffer_lost(&self, _event: &CaptureBufferLost) -> Result<(), CallbackError> {
        Ok(())
    }

    fn on_capture_completed(&self, _event: &CaptureCompleted) -> Result<(), CallbackError> {
        Ok(())
    }

    fn on_capture_failed(&self, _event: &CaptureFailed) -> Result<(), CallbackError> {
        Ok(())
    }

    fn on_capture_progressed(&self, _event: &CaptureProgressed) -> Result<(), CallbackError> {
        Ok(())
    }

    fn on_capture_sequence_aborted(
        &self,
        _event: &CaptureSequenceAborted,
    ) -> Result<(), CallbackError> {
        Ok(())
    }

    fn on_capture_sequence_completed(
        &self,
        _event: &CaptureSequenceCompleted,
    ) -> Result<(), CallbackError> {
        Ok(())
    }

    fn on_capture_started(&self, _event: &CaptureStarted) -> Result<(), CallbackError> {
        Ok(())
    }
}
