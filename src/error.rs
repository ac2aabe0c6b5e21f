use crate::Num;

/// Errors raised while setting up a simulation.
///
/// Once a [`crate::SimulationController`] exists nothing it does returns an
/// error, runtime problems are logged and the previous state is kept.
#[derive(Debug, thiserror::Error)]
pub enum OrreryError {
    /// None of the start, pause, reset or speed controls were found
    #[error("no playback controls available")]
    NoControls,

    #[error("invalid speed bounds: min = {min}, max = {max}")]
    InvalidSpeedBounds { min: Num, max: Num },

    #[error("invalid orbital period {value} for {body}")]
    InvalidPeriod { body: String, value: Num },

    #[cfg(feature = "serde")]
    #[error("failed to parse config: {0}")]
    Parse(#[source] ron::error::SpannedError),
}
