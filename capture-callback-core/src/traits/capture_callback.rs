use crate::models::error::CallbackError;
use crate::models::events::{
    CaptureBufferLost, CaptureCompleted, CaptureFailed, CaptureProgressed,
    CaptureSequenceAborted, CaptureSequenceCompleted, CaptureStarted,
};

/// Lifecycle callbacks raised by a capture session.
///
/// The session calls one method at a time, possibly from a different thread
/// on each call, but never concurrently on the same callback value.
/// Returning `Err` signals a failure back to the session; when the callback
/// sits inside a [`ComboCallback`](crate::ComboCallback), callbacks registered
/// after it are skipped for that event.
///
/// Keep implementations cheap: they run on the session's delivery thread.
pub trait CaptureCallback: Send + Sync {
    /// A buffer for one of the request's target surfaces was lost.
    fn on_capture_buffer_lost(&self, event: &CaptureBufferLost) -> Result<(), CallbackError>;

    /// All results for a request are available.
    fn on_capture_completed(&self, event: &CaptureCompleted) -> Result<(), CallbackError>;

    /// The hardware could not produce a result for the request.
    fn on_capture_failed(&self, event: &CaptureFailed) -> Result<(), CallbackError>;

    /// A partial result is available.
    fn on_capture_progressed(&self, event: &CaptureProgressed) -> Result<(), CallbackError>;

    /// A sequence was aborted before any frame of it was produced.
    fn on_capture_sequence_aborted(
        &self,
        event: &CaptureSequenceAborted,
    ) -> Result<(), CallbackError>;

    /// Every frame of a sequence has been delivered.
    fn on_capture_sequence_completed(
        &self,
        event: &CaptureSequenceCompleted,
    ) -> Result<(), CallbackError>;

    /// Exposure of the frame started.
    fn on_capture_started(&self, event: &CaptureStarted) -> Result<(), CallbackError>;
}
