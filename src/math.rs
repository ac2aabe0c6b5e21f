use crate::{Num, DEGREES_PER_REVOLUTION, MS_PER_SECOND, PI};

pub fn deg2rad(deg: Num) -> Num {
    deg * PI / 180.0
}

/// Angular speed, in degrees per millisecond, of a body completing one
/// revolution every `period` time units.
#[inline]
pub fn degrees_per_ms(period: Num) -> Num {
    (DEGREES_PER_REVOLUTION / period) / MS_PER_SECOND
}

/// Parses user speed input, e.g. the value of a range slider.
pub fn parse_number(raw: &str) -> Option<Num> {
    raw.trim().parse::<Num>().ok().filter(|v| v.is_finite())
}
