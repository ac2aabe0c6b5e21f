use crate::Num;

#[cfg(feature = "f32")]
pub use std::f32::consts::{FRAC_PI_2, PI};
#[cfg(not(feature = "f32"))]
pub use std::f64::consts::{FRAC_PI_2, PI};

pub const DEGREES_PER_REVOLUTION: Num = 360.0;

pub const MS_PER_SECOND: Num = 1000.0;

/// Lower bound of the speed factor
pub const DEFAULT_MIN_SPEED: Num = 0.1;

/// Upper bound of the speed factor
pub const DEFAULT_MAX_SPEED: Num = 5.0;

pub const DEFAULT_SPEED: Num = 1.0;

/// Period used for bodies missing from the catalog, Earth's
pub const DEFAULT_ORBITAL_PERIOD: Num = 10.0;
