use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifies the capture session that raised an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(Uuid);

impl SessionId {
    /// Creates a random (v4) session id.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Output surface a request renders into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SurfaceId(pub u64);

/// A single capture request as submitted to the hardware session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureRequest {
    pub id: u64,
    pub target_surfaces: Vec<SurfaceId>,
    pub tag: Option<String>,
}

impl CaptureRequest {
    pub fn new(id: u64) -> Self {
        Self {
            id,
            target_surfaces: Vec::new(),
            tag: None,
        }
    }

    /// Adds a target surface.
    pub fn with_target(mut self, surface: SurfaceId) -> Self {
        self.target_surfaces.push(surface);
        self
    }

    /// Sets the request tag.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }
}

/// Result metadata for a frame. Partial results arrive through progress events.
///
/// Entries are carried verbatim; nothing in this crate interprets them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureResult {
    pub request_id: u64,
    pub frame_number: i64,
    pub sequence_id: i32,
    pub entries: BTreeMap<String, String>,
}

impl CaptureResult {
    pub fn new(request_id: u64, frame_number: i64, sequence_id: i32) -> Self {
        Self {
            request_id,
            frame_number,
            sequence_id,
            entries: BTreeMap::new(),
        }
    }

    /// Adds or replaces a result entry.
    pub fn with_entry(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }
}

/// The final, merged result of a capture along with the partials it was built from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TotalCaptureResult {
    pub result: CaptureResult,
    pub partial_results: Vec<CaptureResult>,
}

impl TotalCaptureResult {
    pub fn frame_number(&self) -> i64 {
        self.result.frame_number
    }
}

/// Why the hardware gave up on a capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailureReason {
    /// The capture failed inside the pipeline.
    Error,
    /// The request was discarded by a flush before it completed.
    Flushed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureFailure {
    pub request_id: u64,
    pub frame_number: i64,
    pub sequence_id: i32,
    pub reason: FailureReason,
    pub was_image_captured: bool,
}
