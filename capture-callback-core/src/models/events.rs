//! Parameter structs for each capture callback, plus [`CaptureEvent`], an owned
//! value that can hold any of them.

use serde::{Deserialize, Serialize};

use super::capture_models::{
    CaptureFailure, CaptureRequest, CaptureResult, SessionId, SurfaceId, TotalCaptureResult,
};
use super::error::CallbackError;
use crate::traits::capture_callback::CaptureCallback;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureBufferLost {
    pub session: SessionId,
    pub request: CaptureRequest,
    pub surface: SurfaceId,
    pub frame_number: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureCompleted {
    pub session: SessionId,
    pub request: CaptureRequest,
    pub result: TotalCaptureResult,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureFailed {
    pub session: SessionId,
    pub request: CaptureRequest,
    pub failure: CaptureFailure,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureProgressed {
    pub session: SessionId,
    pub request: CaptureRequest,
    pub partial_result: CaptureResult,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureSequenceAborted {
    pub session: SessionId,
    pub sequence_id: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureSequenceCompleted {
    pub session: SessionId,
    pub sequence_id: i32,
    pub frame_number: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureStarted {
    pub session: SessionId,
    pub request: CaptureRequest,
    /// Start-of-exposure time in nanoseconds, in the session's clock domain.
    pub timestamp_nanos: i64,
    pub frame_number: i64,
}

/// Which callback an event belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaptureEventKind {
    BufferLost,
    Completed,
    Failed,
    Progressed,
    SequenceAborted,
    SequenceCompleted,
    Started,
}

impl CaptureEventKind {
    pub const ALL: [CaptureEventKind; 7] = [
        Self::BufferLost,
        Self::Completed,
        Self::Failed,
        Self::Progressed,
        Self::SequenceAborted,
        Self::SequenceCompleted,
        Self::Started,
    ];

    /// Stable snake_case name, as used in serialized events.
    pub fn name(&self) -> &'static str {
        match self {
            Self::BufferLost => "buffer_lost",
            Self::Completed => "completed",
            Self::Failed => "failed",
            Self::Progressed => "progressed",
            Self::SequenceAborted => "sequence_aborted",
            Self::SequenceCompleted => "sequence_completed",
            Self::Started => "started",
        }
    }
}

/// An owned capture event. Used for recording and replaying callbacks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum CaptureEvent {
    BufferLost(CaptureBufferLost),
    Completed(CaptureCompleted),
    Failed(CaptureFailed),
    Progressed(CaptureProgressed),
    SequenceAborted(CaptureSequenceAborted),
    SequenceCompleted(CaptureSequenceCompleted),
    Started(CaptureStarted),
}

impl CaptureEvent {
    /// Which callback this event is delivered to.
    pub fn kind(&self) -> CaptureEventKind {
        match self {
            Self::BufferLost(_) => CaptureEventKind::BufferLost,
            Self::Completed(_) => CaptureEventKind::Completed,
            Self::Failed(_) => CaptureEventKind::Failed,
            Self::Progressed(_) => CaptureEventKind::Progressed,
            Self::SequenceAborted(_) => CaptureEventKind::SequenceAborted,
            Self::SequenceCompleted(_) => CaptureEventKind::SequenceCompleted,
            Self::Started(_) => CaptureEventKind::Started,
        }
    }

    /// Session that raised the event.
    pub fn session(&self) -> SessionId {
        match self {
            Self::BufferLost(e) => e.session,
            Self::Completed(e) => e.session,
            Self::Failed(e) => e.session,
            Self::Progressed(e) => e.session,
            Self::SequenceAborted(e) => e.session,
            Self::SequenceCompleted(e) => e.session,
            Self::Started(e) => e.session,
        }
    }

    /// Invoke the matching method on `callback`.
    pub fn dispatch_to(&self, callback: &dyn CaptureCallback) -> Result<(), CallbackError> {
        match self {
            Self::BufferLost(e) => callback.on_capture_buffer_lost(e),
            Self::Completed(e) => callback.on_capture_completed(e),
            Self::Failed(e) => callback.on_capture_failed(e),
            Self::Progressed(e) => callback.on_capture_progressed(e),
            Self::SequenceAborted(e) => callback.on_capture_sequence_aborted(e),
            Self::SequenceCompleted(e) => callback.on_capture_sequence_completed(e),
            Self::Started(e) => callback.on_capture_started(e),
        }
    }
}
