//! Frame sources driving a [`SimulationController`].
//!
//! A browser would call back once per repaint. Here the callback becomes a
//! plain loop over timestamps so the clock can be swapped for a scripted one.

use std::collections::VecDeque;
use std::thread;
use std::time::{Duration, Instant};

use log::debug;

use crate::{Num, RenderHost, SimulationController, MS_PER_SECOND};

/// Yields frame timestamps in milliseconds. `None` means the host went away
/// and no further frames will come.
pub trait FrameSource {
    fn next_frame(&mut self) -> Option<Num>;
}

/// Ticks `controller` once per frame until `source` runs dry. Returns the
/// number of frames delivered.
pub fn drive<H, S>(controller: &mut SimulationController<H>, source: &mut S) -> usize
where
    H: RenderHost,
    S: FrameSource + ?Sized,
{
    let mut frames = 0;

    while let Some(timestamp) = source.next_frame() {
        controller.on_frame(timestamp);
        frames += 1;
    }

    debug!("Frame source ended after {frames} frames");

    frames
}

/// A fixed list of synthetic timestamps.
#[derive(Debug, Clone, Default)]
pub struct ScriptedFrames {
    timestamps: VecDeque<Num>,
}

impl ScriptedFrames {
    pub fn new(timestamps: impl IntoIterator<Item = Num>) -> Self {
        Self {
            timestamps: timestamps.into_iter().collect(),
        }
    }

    /// `count` frames, `interval_ms` apart, starting at `start_ms`
    pub fn evenly_spaced(start_ms: Num, interval_ms: Num, count: usize) -> Self {
        Self::new((0..count).map(|i| start_ms + interval_ms * i as Num))
    }

    pub fn remaining(&self) -> usize {
        self.timestamps.len()
    }
}

impl FrameSource for ScriptedFrames {
    fn next_frame(&mut self) -> Option<Num> {
        self.timestamps.pop_front()
    }
}

/// Wall-clock frames at a fixed rate.
///
/// Timestamps are milliseconds since the source was created. Without a frame
/// limit it never ends.
#[derive(Debug)]
pub struct IntervalFrames {
    origin: Instant,
    interval: Duration,
    next_deadline: Instant,
    remaining: Option<usize>,
}

impl IntervalFrames {
    pub const DEFAULT_FPS: u32 = 60;

    pub fn new(fps: u32) -> Self {
        let origin = Instant::now();

        Self {
            origin,
            interval: Duration::from_secs(1) / fps.max(1),
            next_deadline: origin,
            remaining: None,
        }
    }

    pub fn with_frame_limit(mut self, frames: usize) -> Self {
        self.remaining = Some(frames);
        self
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}

impl Default for IntervalFrames {
    fn default() -> Self {
        Self::new(Self::DEFAULT_FPS)
    }
}

impl FrameSource for IntervalFrames {
    fn next_frame(&mut self) -> Option<Num> {
        if let Some(remaining) = &mut self.remaining {
            if *remaining == 0 {
                return None;
            }
            *remaining -= 1;
        }

        let now = Instant::now();
        if now < self.next_deadline {
            thread::sleep(self.next_deadline - now);
        }

        // Don't try to catch up on frames missed while the host stalled
        self.next_deadline = self.next_deadline.max(now) + self.interval;

        let elapsed = self.origin.elapsed();

        Some(elapsed.as_secs_f64() as Num * MS_PER_SECOND)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Controls, RecordingHost, SceneDescriptor, SimulationConfig};

    fn controller() -> SimulationController<RecordingHost> {
        let scene = SceneDescriptor::new(Controls::all()).with_bodies(["earth"]);
        let host = RecordingHost::new().with_radius("earth", 50.0);

        SimulationController::new(&SimulationConfig::default(), &scene, host).unwrap()
    }

    #[test]
    fn defaults_to_sixty_fps() {
        let frames = IntervalFrames::default();

        assert_eq!(frames.interval(), Duration::from_secs(1) / 60);
    }

    #[test]
    fn scripted_frames_drain_in_order() {
        let mut frames = ScriptedFrames::new([3.0, 1.0, 2.0]);

        assert_eq!(frames.next_frame(), Some(3.0));
        assert_eq!(frames.next_frame(), Some(1.0));
        assert_eq!(frames.remaining(), 1);
        assert_eq!(frames.next_frame(), Some(2.0));
        assert_eq!(frames.next_frame(), None);
    }

    #[test]
    fn drive_delivers_every_frame() {
        let mut controller = controller();
        controller.start();

        let mut frames = ScriptedFrames::evenly_spaced(0.0, 100.0, 11);
        let delivered = drive(&mut controller, &mut frames);

        assert_eq!(delivered, 11);
        assert_eq!(controller.last_frame_time(), Some(1000.0));
        let angle = controller.body("earth").unwrap().angle();
        assert!((angle - 36.0).abs() < 1e-3, "angle = {angle}");
    }

    #[test]
    fn interval_frames_respect_limit_and_grow() {
        let mut frames = IntervalFrames::new(500).with_frame_limit(3);
        assert_eq!(frames.interval(), Duration::from_millis(2));

        let first = frames.next_frame().unwrap();
        let second = frames.next_frame().unwrap();
        let third = frames.next_frame().unwrap();

        assert!(first <= second && second <= third);
        assert!(third - first >= 2.0, "frames only {} ms apart", third - first);
        assert_eq!(frames.next_frame(), None);
    }
}
