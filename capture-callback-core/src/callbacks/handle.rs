use std::fmt;
use std::sync::Arc;

use super::noop::NoOpCallback;
use crate::models::error::CallbackError;
use crate::models::events::{
    CaptureBufferLost, CaptureCompleted, CaptureFailed, CaptureProgressed,
    CaptureSequenceAborted, CaptureSequenceCompleted, CaptureStarted,
};
use crate::traits::capture_callback::CaptureCallback;

/// A callback as handed to a capture session.
///
/// The no-op case is its own variant so combo callbacks can drop it with a
/// match instead of inspecting the callback's type. Cloning only clones the
/// `Arc`; the caller keeps sharing the concrete callback.
#[derive(Clone, Default)]
pub enum CaptureCallbackHandle {
    #[default]
    NoOp,
    Concrete(Arc<dyn CaptureCallback>),
}

impl CaptureCallbackHandle {
    /// Wraps `callback` in a new `Arc`.
    pub fn concrete<C: CaptureCallback + 'static>(callback: C) -> Self {
        Self::Concrete(Arc::new(callback))
    }

    /// Whether this is the no-op variant.
    pub fn is_no_op(&self) -> bool {
        matches!(self, Self::NoOp)
    }

    fn as_callback(&self) -> &dyn CaptureCallback {
        match self {
            Self::NoOp => &NoOpCallback,
            Self::Concrete(callback) => callback.as_ref(),
        }
    }
}

impl fmt::Debug for CaptureCallbackHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoOp => f.write_str("NoOp"),
            Self::Concrete(_) => f.write_str("Concrete(..)"),
        }
    }
}

impl<C: CaptureCallback + 'static> From<Arc<C>> for CaptureCallbackHandle {
    fn from(callback: Arc<C>) -> Self {
        Self::Concrete(callback)
    }
}

impl CaptureCallback for CaptureCallbackHandle {
    fn on_capture_buffer_lost(&self, event: &CaptureBufferLost) -> Result<(), CallbackError> {
        self.as_callback().on_capture_buffer_lost(event)
    }

    fn on_capture_completed(&self, event: &CaptureCompleted) -> Result<(), CallbackError> {
        self.as_callback().on_capture_completed(event)
    }

    fn on_capture_failed(&self, event: &CaptureFailed) -> Result<(), CallbackError> {
        self.as_callback().on_capture_failed(event)
    }

    fn on_capture_progressed(&self, event: &CaptureProgressed) -> Result<(), CallbackError> {
        self.as_callback().on_capture_progressed(event)
    }

    fn on_capture_sequence_aborted(
        &self,
        event: &CaptureSequenceAborted,
    ) -> Result<(), CallbackError> {
        self.as_callback().on_capture_sequence_aborted(event)
    }

    fn on_capture_sequence_completed(
        &self,
        event: &CaptureSequenceCompleted,
    ) -> Result<(), CallbackError> {
        self.as_callback().on_capture_sequence_completed(event)
    }

    fn on_capture_started(&self, event: &CaptureStarted) -> Result<(), CallbackError> {
        self.as_callback().on_capture_started(event)
    }
}
