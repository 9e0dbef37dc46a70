use std::fmt;
use std::sync::Arc;

use super::handle::CaptureCallbackHandle;
use crate::models::error::CallbackError;
use crate::models::events::{
    CaptureBufferLost, CaptureCompleted, CaptureFailed, CaptureProgressed,
    CaptureSequenceAborted, CaptureSequenceCompleted, CaptureStarted,
};
use crate::traits::capture_callback::CaptureCallback;

/// Fans every capture event out to a fixed list of callbacks.
///
/// ```text
/// session ── on_capture_x(&event) ──► ComboCallback
///                                       ├──► callback 1 ── Ok
///                                       ├──► callback 2 ── Err ─► returned to session
///                                       └──► callback 3    (skipped)
/// ```
///
/// - Members are called in the order they were given, on the caller's thread,
///   with the same event reference.
/// - The first error stops the fan-out and is returned unchanged.
/// - Membership is fixed at construction; dispatch takes no locks.
pub struct ComboCallback {
    callbacks: Vec<Arc<dyn CaptureCallback>>,
}

impl ComboCallback {
    /// Builds the combo, dropping every [`CaptureCallbackHandle::NoOp`].
    ///
    /// Duplicates are kept. An empty result is valid and ignores all events.
    pub fn new<I>(handles: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<CaptureCallbackHandle>,
    {
        let mut elided = 0usize;
        let callbacks: Vec<_> = handles
            .into_iter()
            .filter_map(|handle| match handle.into() {
                CaptureCallbackHandle::NoOp => {
                    elided += 1;
                    None
                }
                CaptureCallbackHandle::Concrete(callback) => Some(callback),
            })
            .collect();

        log::debug!(
            "combo callback built with {} member(s), {} no-op(s) elided",
            callbacks.len(),
            elided
        );

        Self { callbacks }
    }

    /// Number of callbacks events are fanned out to.
    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    /// Whether there is no callback to forward to.
    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }

    fn fan_out(
        &self,
        mut call: impl FnMut(&dyn CaptureCallback) -> Result<(), CallbackError>,
    ) -> Result<(), CallbackError> {
        for callback in &self.callbacks {
            call(callback.as_ref())?;
        }
        Ok(())
    }
}

impl fmt::Debug for ComboCallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComboCallback")
            .field("members", &self.callbacks.len())
            .finish()
    }
}

impl CaptureCallback for ComboCallback {
    fn on_capture_buffer_lost(&self, event: &CaptureBufferLost) -> Result<(), CallbackError> {
        self.fan_out(|callback| callback.on_capture_buffer_lost(event))
    }

    fn on_capture_completed(&self, event: &CaptureCompleted) -> Result<(), CallbackError> {
        self.fan_out(|callback| callback.on_capture_completed(event))
    }

    fn on_capture_failed(&self, event: &CaptureFailed) -> Result<(), CallbackError> {
        self.fan_out(|callback| callback.on_capture_failed(event))
    }

    fn on_capture_progressed(&self, event: &CaptureProgressed) -> Result<(), CallbackError> {
        self.fan_out(|callback| callback.on_capture_progressed(event))
    }

    fn on_capture_sequence_aborted(
        &self,
        event: &CaptureSequenceAborted,
    ) -> Result<(), CallbackError> {
        self.fan_out(|callback| callback.on_capture_sequence_aborted(event))
    }

    fn on_capture_sequence_completed(
        &self,
        event: &CaptureSequenceCompleted,
    ) -> Result<(), CallbackError> {
        self.fan_out(|callback| callback.on_capture_sequence_completed(event))
    }

    fn on_capture_started(&self, event: &CaptureStarted) -> Result<(), CallbackError> {
        self.fan_out(|callback| callback.on_capture_started(event))
    }
}
