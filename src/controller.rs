use std::collections::HashSet;

use log::{debug, error, info, warn};

use crate::math::parse_number;
use crate::{
    Controls, Num, OrbitingBody, OrreryError, RenderHost, SceneDescriptor, SimulationConfig,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    #[default]
    Paused,
    Running,
}

/// A user interaction coming from one of the host's controls.
#[derive(Debug, Clone, PartialEq)]
pub enum ControlAction {
    Start,
    Pause,
    Reset,
    /// Raw value of the speed input, as typed or reported by a slider
    SetSpeed(String),
}

/// Owns the bodies and the playback state, and publishes positions to its
/// host every time they change.
///
/// The controller never drives itself. Something outside has to call
/// [`SimulationController::on_frame`] once per display frame, see
/// [`crate::scheduler`].
#[derive(Debug)]
pub struct SimulationController<H> {
    bodies: Vec<OrbitingBody>,
    state: PlaybackState,
    speed_factor: Num,
    min_speed: Num,
    max_speed: Num,
    last_frame_time: Option<Num>,
    controls: Controls,
    /// Bodies the host had no radius for on the last publish
    unplaced: HashSet<String>,
    host: H,
}

impl<H: RenderHost> SimulationController<H> {
    pub fn new(
        config: &SimulationConfig,
        scene: &SceneDescriptor,
        host: H,
    ) -> Result<Self, OrreryError> {
        config.validate()?;

        if scene.controls.is_empty() {
            error!("No playback controls found, the orrery can't be operated");
            return Err(OrreryError::NoControls);
        }

        for control in scene.controls.missing() {
            error!("Missing {control} control, it will stay inert");
        }

        let bodies: Vec<_> = scene
            .bodies
            .iter()
            .filter_map(|element| {
                if !element.has_visual {
                    error!("Body {} has no visual element, skipping it", element.id);
                    return None;
                }

                let body = match config.catalog.get(&element.id) {
                    Some(params) => {
                        OrbitingBody::new(&element.id, params.orbital_period, params.initial_angle)
                    }
                    None => {
                        warn!(
                            "Unknown body {}, using default period {}",
                            element.id, config.default_period
                        );
                        OrbitingBody::new(&element.id, config.default_period, 0.0)
                    }
                };

                Some(body)
            })
            .collect();

        info!("Orrery initialized with {} bodies", bodies.len());

        let speed_factor = if config.initial_speed.is_finite() {
            config.initial_speed.clamp(config.min_speed, config.max_speed)
        } else {
            warn!("Invalid initial speed, using {}", config.min_speed);
            config.min_speed
        };

        let mut controller = Self {
            bodies,
            state: PlaybackState::Paused,
            speed_factor,
            min_speed: config.min_speed,
            max_speed: config.max_speed,
            last_frame_time: None,
            controls: scene.controls,
            unplaced: HashSet::new(),
            host,
        };

        controller.publish_positions();

        Ok(controller)
    }

    pub fn start(&mut self) {
        self.transition(PlaybackState::Running);
    }

    pub fn pause(&mut self) {
        self.transition(PlaybackState::Paused);
    }

    /// Pauses and puts every body back on its initial angle. Positions are
    /// republished right away, the diagram doesn't wait for a running frame.
    pub fn reset(&mut self) {
        self.transition(PlaybackState::Paused);

        for body in &mut self.bodies {
            body.reset_angle();
        }

        self.publish_positions();
    }

    fn transition(&mut self, next: PlaybackState) {
        if self.state == next {
            return;
        }

        debug!("Playback {:?} -> {:?}", self.state, next);

        self.state = next;
        self.host.playback_changed(next);
    }

    /// Clamps `raw` to the speed bounds. Non-finite values are ignored.
    pub fn set_speed_factor(&mut self, raw: Num) {
        if !raw.is_finite() {
            warn!("Ignoring invalid speed {raw}, keeping {}", self.speed_factor);
            return;
        }

        self.speed_factor = raw.clamp(self.min_speed, self.max_speed);
    }

    pub fn set_speed_factor_str(&mut self, raw: &str) {
        match parse_number(raw) {
            Some(value) => self.set_speed_factor(value),
            None => warn!("Ignoring invalid speed {raw:?}, keeping {}", self.speed_factor),
        }
    }

    /// Dispatches a UI action. Actions of controls missing at construction
    /// are dropped.
    pub fn handle(&mut self, action: ControlAction) {
        let available = match action {
            ControlAction::Start => self.controls.start,
            ControlAction::Pause => self.controls.pause,
            ControlAction::Reset => self.controls.reset,
            ControlAction::SetSpeed(_) => self.controls.speed,
        };

        if !available {
            debug!("Dropping {action:?}, control is not available");
            return;
        }

        match action {
            ControlAction::Start => self.start(),
            ControlAction::Pause => self.pause(),
            ControlAction::Reset => self.reset(),
            ControlAction::SetSpeed(raw) => self.set_speed_factor_str(&raw),
        }
    }

    /// Per-frame tick, `timestamp` in milliseconds.
    ///
    /// The first frame only records the timestamp. A paused controller keeps
    /// tracking time but nothing moves.
    pub fn on_frame(&mut self, timestamp: Num) {
        if !timestamp.is_finite() {
            warn!("Ignoring frame with invalid timestamp {timestamp}");
            return;
        }

        let elapsed = match self.last_frame_time {
            Some(last) => (timestamp - last).max(0.0),
            None => 0.0,
        };

        self.last_frame_time = Some(timestamp);

        if self.state != PlaybackState::Running {
            return;
        }

        for body in &mut self.bodies {
            body.advance(elapsed, self.speed_factor);
        }

        self.publish_positions();
    }

    pub fn publish_positions(&mut self) {
        for body in &self.bodies {
            let Some(radius) = self.host.orbit_radius(body.name()) else {
                if self.unplaced.insert(body.name().to_string()) {
                    warn!("No orbit radius for {}, not placing it", body.name());
                }
                continue;
            };

            self.unplaced.remove(body.name());

            self.host
                .place_body(body.name(), body.position_on_orbit(radius));
        }
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == PlaybackState::Running
    }

    pub fn speed_factor(&self) -> Num {
        self.speed_factor
    }

    pub fn speed_bounds(&self) -> (Num, Num) {
        (self.min_speed, self.max_speed)
    }

    pub fn last_frame_time(&self) -> Option<Num> {
        self.last_frame_time
    }

    pub fn controls(&self) -> Controls {
        self.controls
    }

    pub fn bodies(&self) -> &[OrbitingBody] {
        &self.bodies
    }

    /// Whether `name` couldn't be placed last time positions were published
    pub fn is_unplaced(&self, name: &str) -> bool {
        self.unplaced.contains(name)
    }

    pub fn body(&self, name: &str) -> Option<&OrbitingBody> {
        self.bodies.iter().find(|body| body.name() == name)
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }
}
