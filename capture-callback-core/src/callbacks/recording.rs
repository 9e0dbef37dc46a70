use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::history::event_ring::EventRing;
use crate::models::config::RecorderConfiguration;
use crate::models::error::CallbackError;
use crate::models::events::{
    CaptureBufferLost, CaptureCompleted, CaptureEvent, CaptureFailed, CaptureProgressed,
    CaptureSequenceAborted, CaptureSequenceCompleted, CaptureStarted,
};
use crate::traits::capture_callback::CaptureCallback;

/// A capture event as seen by a [`RecordingCallback`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordedEvent {
    /// Arrival order across the recorder's lifetime, starting at 0.
    pub sequence: u64,
    pub received_at: DateTime<Utc>,
    pub event: CaptureEvent,
}

struct History {
    ring: EventRing<RecordedEvent>,
    next_sequence: u64,
}

/// Keeps a bounded history of the capture events it receives.
///
/// Meant for diagnostics: register it next to the real callbacks, then inspect
/// the history or replay it into another callback. [`RecordedEvent`] is
/// serializable for export.
pub struct RecordingCallback {
    config: RecorderConfiguration,
    history: Mutex<History>,
}

impl RecordingCallback {
    /// Creates a recorder after validating `config`.
    pub fn new(config: RecorderConfiguration) -> Result<Self, CallbackError> {
        config.validate().map_err(CallbackError::InvalidConfiguration)?;
        Ok(Self::from_config(config))
    }

    /// Creates a recorder with [`RecorderConfiguration::default`].
    pub fn with_defaults() -> Self {
        Self::from_config(RecorderConfiguration::default())
    }

    fn from_config(config: RecorderConfiguration) -> Self {
        Self {
            history: Mutex::new(History {
                ring: EventRing::new(config.capacity),
                next_sequence: 0,
            }),
            config,
        }
    }

    pub fn config(&self) -> &RecorderConfiguration {
        &self.config
    }

    /// Maximum number of events kept before the oldest are dropped.
    pub fn capacity(&self) -> usize {
        self.history.lock().ring.capacity()
    }

    /// Forgets every recorded event and resets the drop count.
    ///
    /// Sequence numbers keep counting from where they were.
    pub fn clear(&self) {
        self.history.lock().ring.reset();
    }

    /// Recorded events, oldest first.
    pub fn events(&self) -> Vec<RecordedEvent> {
        self.history.lock().ring.snapshot()
    }

    /// Removes and returns every recorded event.
    pub fn take_events(&self) -> Vec<RecordedEvent> {
        let mut history = self.history.lock();
        let count = history.ring.count();
        history.ring.drain(count)
    }

    /// Number of events currently held.
    pub fn len(&self) -> usize {
        self.history.lock().ring.count()
    }

    /// Whether no events are held.
    pub fn is_empty(&self) -> bool {
        self.history.lock().ring.is_empty()
    }

    /// Events evicted because the history was full.
    pub fn dropped(&self) -> u64 {
        self.history.lock().ring.dropped()
    }

    /// Re-dispatches the recorded events into `callback`, stopping at the first error.
    ///
    /// Works on a snapshot, so replaying into this recorder is allowed.
    pub fn replay_into(&self, callback: &dyn CaptureCallback) -> Result<(), CallbackError> {
        for recorded in self.events() {
            recorded.event.dispatch_to(callback)?;
        }
        Ok(())
    }

    fn record(&self, event: CaptureEvent) -> Result<(), CallbackError> {
        let mut history = self.history.lock();
        let sequence = history.next_sequence;
        history.next_sequence += 1;
        history.ring.push(RecordedEvent {
            sequence,
            received_at: Utc::now(),
            event,
        });
        Ok(())
    }
}

impl CaptureCallback for RecordingCallback {
    fn on_capture_buffer_lost(&self, event: &CaptureBufferLost) -> Result<(), CallbackError> {
        self.record(CaptureEvent::BufferLost(event.clone()))
    }

    fn on_capture_completed(&self, event: &CaptureCompleted) -> Result<(), CallbackError> {
        self.record(CaptureEvent::Completed(event.clone()))
    }

    fn on_capture_failed(&self, event: &CaptureFailed) -> Result<(), CallbackError> {
        self.record(CaptureEvent::Failed(event.clone()))
    }

    fn on_capture_progressed(&self, event: &CaptureProgressed) -> Result<(), CallbackError> {
        if !self.config.include_progress {
            return Ok(());
        }
        self.record(CaptureEvent::Progressed(event.clone()))
    }

    fn on_capture_sequence_aborted(
        &self,
        event: &CaptureSequenceAborted,
    ) -> Result<(), CallbackError> {
        self.record(CaptureEvent::SequenceAborted(event.clone()))
    }

    fn on_capture_sequence_completed(
        &self,
        event: &CaptureSequenceCompleted,
    ) -> Result<(), CallbackError> {
        self.record(CaptureEvent::SequenceCompleted(event.clone()))
    }

    fn on_capture_started(&self, event: &CaptureStarted) -> Result<(), CallbackError> {
        self.record(CaptureEvent::Started(event.clone()))
    }
}
