use std::collections::HashMap;

use glam::Vec2;
use orrery::{Num, PlaybackState, RenderHost};

/// Bridges the controller to the bevy world.
///
/// Orbit radii come from the current window layout, positions are stored in
/// the ring-local screen space the controller produces and converted to world
/// space when the planet transforms are updated.
#[derive(Debug, Default)]
pub struct ViewerHost {
    radii: HashMap<String, Num>,
    positions: HashMap<String, orrery::Vec2>,
    playback: PlaybackState,
}

impl ViewerHost {
    pub fn set_radius(&mut self, body: &str, radius: Num) -> bool {
        let previous = self.radii.insert(body.to_string(), radius);

        previous != Some(radius)
    }

    pub fn radius(&self, body: &str) -> Option<Num> {
        self.radii.get(body).copied()
    }

    pub fn playback(&self) -> PlaybackState {
        self.playback
    }

    /// Position of `body` relative to the center of its orbit, y up
    pub fn world_position(&self, body: &str) -> Option<Vec2> {
        let radius = self.radius(body)?;
        let position = self.positions.get(body)?;

        Some(ring_to_world(*position, radius))
    }
}

impl RenderHost for ViewerHost {
    fn orbit_radius(&self, body: &str) -> Option<Num> {
        self.radius(body)
    }

    fn place_body(&mut self, body: &str, position: orrery::Vec2) {
        self.positions.insert(body.to_string(), position);
    }

    fn playback_changed(&mut self, state: PlaybackState) {
        self.playback = state;
    }
}

/// Converts an offset from the top-left corner of the ring's bounding box
/// (y down) to an offset from the ring's center (y up).
pub fn ring_to_world(position: orrery::Vec2, radius: Num) -> Vec2 {
    Vec2::new(
        (position.x - radius) as f32,
        (radius - position.y) as f32,
    )
}

#[cfg(test)]
mod tests {
    use orrery::{OrbitingBody, RenderHost};
    use test_case::test_case;

    use super::*;

    #[test_case(0.0, 0.0, 10.0 ; "top")]
    #[test_case(90.0, 10.0, 0.0 ; "right")]
    #[test_case(180.0, 0.0, -10.0 ; "bottom")]
    #[test_case(270.0, -10.0, 0.0 ; "left")]
    fn clockwise_from_the_top(angle: Num, x: f32, y: f32) {
        let body = OrbitingBody::new("earth", 10.0, angle);

        let world = ring_to_world(body.position_on_orbit(10.0), 10.0);

        assert!((world.x - x).abs() < 1e-3, "x = {}", world.x);
        assert!((world.y - y).abs() < 1e-3, "y = {}", world.y);
    }

    #[test]
    fn reports_radius_changes() {
        let mut host = ViewerHost::default();

        assert!(host.set_radius("earth", 10.0));
        assert!(!host.set_radius("earth", 10.0));
        assert!(host.set_radius("earth", 12.0));
    }

    #[test]
    fn needs_a_radius_to_place() {
        let mut host = ViewerHost::default();
        host.place_body("earth", orrery::vec2(1.0, 1.0));

        assert!(host.world_position("earth").is_none());

        host.set_radius("earth", 1.0);
        assert_eq!(host.world_position("earth"), Some(Vec2::ZERO));
    }
}
