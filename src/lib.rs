//! Animated circular orbit diagrams.
//!
//! Bodies revolve around a common center at their own angular speed. A
//! [`SimulationController`] owns the bodies and the play/pause state, and is
//! ticked once per display frame by whatever host draws the diagram. The host
//! only sees plain data through the [`RenderHost`] trait.

pub mod body;
pub mod catalog;
pub mod config;
pub mod constants;
pub mod controller;
pub mod error;
pub mod host;
pub mod math;
pub mod scene;
pub mod scheduler;

pub use body::OrbitingBody;
pub use catalog::{BodyCatalog, BodyParams};
pub use config::SimulationConfig;
pub use constants::*;
pub use controller::{ControlAction, PlaybackState, SimulationController};
pub use error::OrreryError;
pub use host::{RecordingHost, RenderHost};
pub use scene::{BodyElement, Controls, SceneDescriptor};
pub use scheduler::{drive, FrameSource, IntervalFrames, ScriptedFrames};

#[cfg(feature = "f32")]
pub type Num = f32;
#[cfg(not(feature = "f32"))]
pub type Num = f64;

#[cfg(feature = "f32")]
pub use glam::{vec2, Vec2};
#[cfg(not(feature = "f32"))]
pub use glam::{dvec2 as vec2, DVec2 as Vec2};
