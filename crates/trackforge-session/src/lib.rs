//! # Trackforge Session
//!
//! In-process registry mapping opaque session handles to generated
//! [`TrackResult`]s. The registry owns the results; callers control the
//! lifecycle explicitly: create on run, delete when done, no implicit
//! garbage collection.
//!
//! Segment mutations go through the registry so that concurrent edits
//! against the same handle are serialized by the write lock.

use std::collections::HashMap;
use std::fmt;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::debug;
use trackforge_core::Point;
use trackforge_geometry::TrackResult;
use uuid::Uuid;

/// Opaque handle identifying one stored track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(Uuid);

impl SessionId {
    /// Creates a fresh random handle.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
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

/// Registry of generated tracks, keyed by session handle.
#[derive(Debug, Default)]
pub struct TrackRegistry {
    tracks: RwLock<HashMap<SessionId, TrackResult>>,
}

impl TrackRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a track and returns its handle.
    pub fn insert(&self, track: TrackResult) -> SessionId {
        let id = SessionId::new();
        self.tracks.write().insert(id, track);
        debug!("Registered track for session {}", id);
        id
    }

    /// Replaces the track stored under an existing handle. Returns the
    /// previous track, or `None` when the handle was unknown (the new
    /// track is stored either way).
    pub fn replace(&self, id: SessionId, track: TrackResult) -> Option<TrackResult> {
        self.tracks.write().insert(id, track)
    }

    /// Returns a copy of the track for the handle, if present.
    pub fn get(&self, id: &SessionId) -> Option<TrackResult> {
        self.tracks.read().get(id).cloned()
    }

    /// Removes and returns the track for the handle.
    pub fn remove(&self, id: &SessionId) -> Option<TrackResult> {
        let removed = self.tracks.write().remove(id);
        if removed.is_some() {
            debug!("Removed track for session {}", id);
        }
        removed
    }

    /// Marks a segment range of the stored track as a curve. Returns
    /// `false` when the handle is unknown.
    pub fn mark_curve(
        &self,
        id: &SessionId,
        start_number: usize,
        end_number: usize,
        speed_limit: u32,
    ) -> bool {
        match self.tracks.write().get_mut(id) {
            Some(track) => {
                track.mark_curve(start_number, end_number, speed_limit);
                true
            }
            None => false,
        }
    }

    /// Repositions one segment center of the stored track. Returns
    /// `false` when the handle or the segment number is unknown.
    pub fn reposition(&self, id: &SessionId, segment_number: usize, new_center: Point) -> bool {
        match self.tracks.write().get_mut(id) {
            Some(track) => track.reposition_segment(segment_number, new_center),
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.tracks.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.read().is_empty()
    }
}
