use std::collections::HashMap;

use crate::{Num, PlaybackState, Vec2};

/// The rendering side of the diagram.
///
/// Implementations read the layout (how large each orbit ring currently is)
/// and write body coordinates back. Positions are offsets from the top-left
/// corner of the orbit's bounding box, y pointing down.
pub trait RenderHost {
    /// Current radius of the orbit ring of `body`, `None` if it can't be laid out
    fn orbit_radius(&self, body: &str) -> Option<Num>;

    fn place_body(&mut self, body: &str, position: Vec2);

    fn playback_changed(&mut self, _state: PlaybackState) {}
}

/// A host that keeps everything in memory.
#[derive(Debug, Clone, Default)]
pub struct RecordingHost {
    radii: HashMap<String, Num>,
    positions: HashMap<String, Vec2>,
    placements: usize,
    playback: Vec<PlaybackState>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_radius(mut self, body: impl Into<String>, radius: Num) -> Self {
        self.set_radius(body, radius);
        self
    }

    pub fn set_radius(&mut self, body: impl Into<String>, radius: Num) {
        self.radii.insert(body.into(), radius);
    }

    /// Last position pushed for `body`
    pub fn position(&self, body: &str) -> Option<Vec2> {
        self.positions.get(body).copied()
    }

    /// Total number of `place_body` calls
    pub fn placements(&self) -> usize {
        self.placements
    }

    /// Every playback signal received, oldest first
    pub fn playback_history(&self) -> &[PlaybackState] {
        &self.playback
    }
}

impl RenderHost for RecordingHost {
    fn orbit_radius(&self, body: &str) -> Option<Num> {
        self.radii.get(body).copied()
    }

    fn place_body(&mut self, body: &str, position: Vec2) {
        self.placements += 1;
        self.positions.insert(body.to_string(), position);
    }

    fn playback_changed(&mut self, state: PlaybackState) {
        self.playback.push(state);
    }
}
