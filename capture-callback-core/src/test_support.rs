//! Sample events and a call-tracing callback shared by the unit tests.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::models::capture_models::{
    CaptureFailure, CaptureRequest, CaptureResult, FailureReason, SessionId, SurfaceId,
    TotalCaptureResult,
};
use crate::models::error::CallbackError;
use crate::models::events::{
    CaptureBufferLost, CaptureCompleted, CaptureEvent, CaptureEventKind, CaptureFailed,
    CaptureProgressed, CaptureSequenceAborted, CaptureSequenceCompleted, CaptureStarted,
};
use crate::traits::capture_callback::CaptureCallback;

fn request(frame: i64) -> CaptureRequest {
    CaptureRequest::new(frame as u64)
        .with_target(SurfaceId(1))
        .with_tag("test")
}

pub fn started(frame: i64) -> CaptureStarted {
    CaptureStarted {
        session: SessionId::new(),
        request: request(frame),
        timestamp_nanos: frame * 33_333_333,
        frame_number: frame,
    }
}

pub fn completed(frame: i64) -> CaptureCompleted {
    CaptureCompleted {
        session: SessionId::new(),
        request: request(frame),
        result: TotalCaptureResult {
            result: CaptureResult::new(frame as u64, frame, 0).with_entry("sensor.exposure", "10ms"),
            partial_results: vec![CaptureResult::new(frame as u64, frame, 0)],
        },
    }
}

/// One event of every kind, all on the same session.
pub fn every_event() -> Vec<CaptureEvent> {
    let session = SessionId::new();
    vec![
        CaptureEvent::BufferLost(CaptureBufferLost {
            session,
            request: request(1),
            surface: SurfaceId(1),
            frame_number: 1,
        }),
        CaptureEvent::Completed(CaptureCompleted {
            session,
            ..completed(2)
        }),
        CaptureEvent::Failed(CaptureFailed {
            session,
            request: request(3),
            failure: CaptureFailure {
                request_id: 3,
                frame_number: 3,
                sequence_id: 0,
                reason: FailureReason::Flushed,
                was_image_captured: false,
            },
        }),
        CaptureEvent::Progressed(CaptureProgressed {
            session,
            request: request(4),
            partial_result: CaptureResult::new(4, 4, 0),
        }),
        CaptureEvent::SequenceAborted(CaptureSequenceAborted {
            session,
            sequence_id: 1,
        }),
        CaptureEvent::SequenceCompleted(CaptureSequenceCompleted {
            session,
            sequence_id: 0,
            frame_number: 4,
        }),
        CaptureEvent::Started(CaptureStarted {
            session,
            ..started(5)
        }),
    ]
}

/// Shared, ordered record of callback invocations.
#[derive(Clone, Default)]
pub struct CallLog {
    calls: Arc<Mutex<Vec<(String, Option<i64>)>>>,
}

impl CallLog {
    pub fn entries(&self) -> Vec<String> {
        self.calls.lock().iter().map(|(name, _)| name.clone()).collect()
    }

    pub fn frames(&self) -> Vec<i64> {
        self.calls.lock().iter().filter_map(|(_, frame)| *frame).collect()
    }

    pub fn clear(&self) {
        self.calls.lock().clear();
    }

    fn push(&self, entry: String, frame: Option<i64>) {
        self.calls.lock().push((entry, frame));
    }
}

/// Logs `"{name}.{event}"` for every call and optionally fails one event kind.
pub struct TracingCallback {
    name: String,
    log: CallLog,
    fail_on: Option<CaptureEventKind>,
}

impl TracingCallback {
    pub fn new(name: &str, log: &CallLog) -> Self {
        Self {
            name: name.to_string(),
            log: log.clone(),
            fail_on: None,
        }
    }

    pub fn failing_on(mut self, kind: CaptureEventKind) -> Self {
        self.fail_on = Some(kind);
        self
    }

    fn trace(&self, kind: CaptureEventKind, frame: Option<i64>) -> Result<(), CallbackError> {
        self.log.push(format!("{}.{}", self.name, kind.name()), frame);
        if self.fail_on == Some(kind) {
            return Err(CallbackError::handler_failed(
                self.name.clone(),
                format!("{} rejected", kind.name()),
            ));
        }
        Ok(())
    }
}

impl CaptureCallback for TracingCallback {
    fn on_capture_buffer_lost(&self, event: &CaptureBufferLost) -> Result<(), CallbackError> {
        self.trace(CaptureEventKind::BufferLost, Some(event.frame_number))
    }

    fn on_capture_completed(&self, event: &CaptureCompleted) -> Result<(), CallbackError> {
        self.trace(CaptureEventKind::Completed, Some(event.result.frame_number()))
    }

    fn on_capture_failed(&self, event: &CaptureFailed) -> Result<(), CallbackError> {
        self.trace(CaptureEventKind::Failed, Some(event.failure.frame_number))
    }

    fn on_capture_progressed(&self, event: &CaptureProgressed) -> Result<(), CallbackError> {
        self.trace(CaptureEventKind::Progressed, Some(event.partial_result.frame_number))
    }

    fn on_capture_sequence_aborted(
        &self,
        _event: &CaptureSequenceAborted,
    ) -> Result<(), CallbackError> {
        self.trace(CaptureEventKind::SequenceAborted, None)
    }

    fn on_capture_sequence_completed(
        &self,
        event: &CaptureSequenceCompleted,
    ) -> Result<(), CallbackError> {
        self.trace(CaptureEventKind::SequenceCompleted, Some(event.frame_number))
    }

    fn on_capture_started(&self, event: &CaptureStarted) -> Result<(), CallbackError> {
        self.trace(CaptureEventKind::Started, Some(event.frame_number))
    }
}
