use log::warn;

use crate::math::{deg2rad, degrees_per_ms};
use crate::{vec2, Num, Vec2, DEFAULT_ORBITAL_PERIOD, DEGREES_PER_REVOLUTION, FRAC_PI_2};

/// A single body on a circular orbit.
///
/// The angle is in degrees and is never wrapped, it keeps accumulating past
/// 360. The orbit radius is not part of the body, the host supplies it when
/// asking for a position since it depends on the current layout.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitingBody {
    name: String,
    orbital_period: Num,
    angle: Num,
    initial_angle: Num,
}

impl OrbitingBody {
    pub fn new(name: impl Into<String>, orbital_period: Num, initial_angle: Num) -> Self {
        let name = name.into();

        let orbital_period = if orbital_period.is_finite() && orbital_period > 0.0 {
            orbital_period
        } else {
            warn!(
                "Invalid orbital period {orbital_period} for {name}, using {DEFAULT_ORBITAL_PERIOD}"
            );
            DEFAULT_ORBITAL_PERIOD
        };

        let initial_angle = if initial_angle.is_finite() {
            initial_angle
        } else {
            warn!("Invalid initial angle {initial_angle} for {name}, using 0");
            0.0
        };

        Self {
            name,
            orbital_period,
            angle: initial_angle,
            initial_angle,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn orbital_period(&self) -> Num {
        self.orbital_period
    }

    /// Accumulated angle in degrees, 0 being the top of the orbit
    pub fn angle(&self) -> Num {
        self.angle
    }

    pub fn initial_angle(&self) -> Num {
        self.initial_angle
    }

    /// Number of revolutions completed since the start angle of 0
    pub fn revolutions(&self) -> Num {
        self.angle / DEGREES_PER_REVOLUTION
    }

    /// Moves the body along its orbit.
    ///
    /// `elapsed_ms` is wall-clock time since the last advance, `speed_factor`
    /// scales it uniformly. Non-finite input leaves the angle untouched.
    pub fn advance(&mut self, elapsed_ms: Num, speed_factor: Num) {
        if !elapsed_ms.is_finite() || !speed_factor.is_finite() {
            warn!(
                "Ignoring advance of {} (elapsed = {elapsed_ms}, speed = {speed_factor})",
                self.name
            );
            return;
        }

        let next = self.angle + degrees_per_ms(self.orbital_period) * elapsed_ms * speed_factor;

        if !next.is_finite() {
            warn!("Angle of {} overflowed, keeping {}", self.name, self.angle);
            return;
        }

        self.angle = next;
    }

    /// Offset of the body from the top-left corner of the orbit's bounding box,
    /// in screen coordinates (y grows downwards).
    ///
    /// Angle 0 is the top of the orbit and angles grow clockwise.
    pub fn position_on_orbit(&self, orbit_radius: Num) -> Vec2 {
        let r = if orbit_radius.is_finite() {
            orbit_radius.max(0.0)
        } else {
            0.0
        };

        let theta = deg2rad(self.angle) - FRAC_PI_2;

        vec2(r + r * theta.cos(), r + r * theta.sin())
    }

    pub fn reset_angle(&mut self) {
        self.angle = self.initial_angle;
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    const TOLERANCE: Num = 1e-3;

    fn earth() -> OrbitingBody {
        OrbitingBody::new("earth", 10.0, 0.0)
    }

    #[test]
    fn one_second_at_unit_speed() {
        let mut body = earth();

        body.advance(1000.0, 1.0);

        assert!((body.angle() - 36.0).abs() < TOLERANCE, "angle = {}", body.angle());
    }

    #[test]
    fn zero_elapsed_is_a_noop() {
        let mut body = OrbitingBody::new("mars", 18.8, 42.0);

        body.advance(0.0, 3.0);

        assert_eq!(body.angle(), 42.0);
    }

    #[test]
    fn advance_is_monotonic() {
        let mut body = earth();
        let mut previous = body.angle();

        for elapsed in [0.0, 16.6, 1.0, 250.0, 0.0, 4000.0] {
            body.advance(elapsed, 0.1);
            assert!(body.angle() >= previous);
            previous = body.angle();
        }
    }

    #[test]
    fn angle_is_not_wrapped() {
        let mut body = earth();

        // Three full revolutions
        body.advance(30_000.0, 1.0);

        assert!((body.angle() - 1080.0).abs() < TOLERANCE);
        assert!((body.revolutions() - 3.0).abs() < TOLERANCE);
    }

    #[test_case(Num::NAN, 1.0 ; "nan elapsed")]
    #[test_case(Num::INFINITY, 1.0 ; "infinite elapsed")]
    #[test_case(100.0, Num::NAN ; "nan speed")]
    #[test_case(100.0, Num::NEG_INFINITY ; "infinite speed")]
    fn non_finite_input_is_ignored(elapsed: Num, speed: Num) {
        let mut body = OrbitingBody::new("venus", 6.2, 12.0);

        body.advance(elapsed, speed);

        assert_eq!(body.angle(), 12.0);
    }

    #[test]
    fn reset_restores_initial_angle() {
        let mut body = OrbitingBody::new("jupiter", 118.6, 90.0);

        body.advance(123_456.0, 4.2);
        body.advance(17.0, 0.3);
        body.reset_angle();

        assert_eq!(body.angle(), 90.0);
        assert_eq!(body.initial_angle(), 90.0);
    }

    #[test_case(0.0, 50.0, 0.0 ; "top")]
    #[test_case(90.0, 100.0, 50.0 ; "right")]
    #[test_case(180.0, 50.0, 100.0 ; "bottom")]
    #[test_case(270.0, 0.0, 50.0 ; "left")]
    #[test_case(360.0, 50.0, 0.0 ; "full turn")]
    #[test_case(-90.0, 0.0, 50.0 ; "negative angle")]
    fn position_on_orbit(angle: Num, x: Num, y: Num) {
        let body = OrbitingBody::new("earth", 10.0, angle);

        let position = body.position_on_orbit(50.0);

        assert!((position.x - x).abs() < TOLERANCE, "x = {}", position.x);
        assert!((position.y - y).abs() < TOLERANCE, "y = {}", position.y);
    }

    #[test_case(-5.0 ; "negative")]
    #[test_case(Num::NAN ; "nan")]
    fn degenerate_radius_collapses_to_origin(radius: Num) {
        let body = OrbitingBody::new("earth", 10.0, 45.0);

        let position = body.position_on_orbit(radius);

        assert_eq!(position, Vec2::ZERO);
    }

    #[test_case(0.0 ; "zero")]
    #[test_case(-1.0 ; "negative")]
    #[test_case(Num::NAN ; "nan")]
    fn invalid_period_falls_back(period: Num) {
        let body = OrbitingBody::new("pluto", period, 0.0);

        assert_eq!(body.orbital_period(), DEFAULT_ORBITAL_PERIOD);
    }

    #[test_case(Num::NAN ; "nan")]
    #[test_case(Num::INFINITY ; "infinite")]
    fn invalid_initial_angle_falls_back(initial_angle: Num) {
        let body = OrbitingBody::new("earth", 10.0, initial_angle);

        assert_eq!(body.initial_angle(), 0.0);
        assert_eq!(body.angle(), 0.0);
    }

    #[test]
    fn overflowing_advance_keeps_angle() {
        // Angular speed alone is already infinite
        let mut body = OrbitingBody::new("x", Num::MIN_POSITIVE, 0.0);

        body.advance(Num::MAX, 5.0);

        assert_eq!(body.angle(), 0.0);
    }
}
