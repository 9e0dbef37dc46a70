//! # capture-callback-core
//!
//! Lifecycle callbacks for a hardware capture session, and the pieces that
//! let one session feed several of them.
//!
//! A session holds a single [`CaptureCallbackHandle`]. That handle is either
//! the no-op callback or a [`ComboCallback`] that forwards each event, in
//! order, to the callbacks it was built from. Delivery is synchronous and
//! stops at the first callback that returns an error.
//!
//! ## Architecture
//!
//! ```text
//! capture-callback-core (this crate)
//! ├── traits/      ← CaptureCallback
//! ├── models/      ← event parameter structs, CaptureEvent, CallbackError, configurations
//! ├── callbacks/   ← NoOpCallback, ComboCallback, CaptureCallbackHandle, Logging/RecordingCallback
//! └── history/     ← EventRing (bounded event history)
//! ```
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use capture_callback_core::{
//!     create_combo_callback, create_no_op_callback, CaptureCallback, CaptureRequest,
//!     CaptureStarted, CaptureCallbackHandle, LoggingCallback, RecordingCallback, SessionId,
//! };
//!
//! let recorder = Arc::new(RecordingCallback::with_defaults());
//! let callback = create_combo_callback([
//!     LoggingCallback::with_defaults().into_handle(),
//!     create_no_op_callback(),
//!     CaptureCallbackHandle::from(Arc::clone(&recorder)),
//! ]);
//!
//! callback
//!     .on_capture_started(&CaptureStarted {
//!         session: SessionId::new(),
//!         request: CaptureRequest::new(1),
//!         timestamp_nanos: 0,
//!         frame_number: 0,
//!     })
//!     .unwrap();
//!
//! assert_eq!(recorder.len(), 1);
//! ```

pub mod callbacks;
pub mod history;
pub mod models;
pub mod traits;

#[cfg(test)]
mod test_support;

// Re-export key types at crate root for convenience.
pub use callbacks::combo::ComboCallback;
pub use callbacks::handle::CaptureCallbackHandle;
pub use callbacks::logging::LoggingCallback;
pub use callbacks::noop::NoOpCallback;
pub use callbacks::recording::{RecordedEvent, RecordingCallback};
pub use callbacks::{create_combo_callback, create_no_op_callback};
pub use history::event_ring::EventRing;
pub use models::capture_models::{
    CaptureFailure, CaptureRequest, CaptureResult, FailureReason, SessionId, SurfaceId,
    TotalCaptureResult,
};
pub use models::config::{LoggingConfiguration, RecorderConfiguration};
pub use models::error::CallbackError;
pub use models::events::{
    CaptureBufferLost, CaptureCompleted, CaptureEvent, CaptureEventKind, CaptureFailed,
    CaptureProgressed, CaptureSequenceAborted, CaptureSequenceCompleted, CaptureStarted,
};
pub use traits::capture_callback::CaptureCallback;
