use crate::{Num, OrreryError};

/// Orbital and layout parameters of a known body.
///
/// `visual_size` and `orbit_radius` are layout hints for the host, the
/// simulation itself only looks at the period and the initial angle.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BodyParams {
    pub orbital_period: Num,
    pub visual_size: Num,
    pub orbit_radius: Num,
    #[cfg_attr(feature = "serde", serde(default))]
    pub initial_angle: Num,
}

impl BodyParams {
    pub fn new(orbital_period: Num, visual_size: Num, orbit_radius: Num) -> Self {
        Self {
            orbital_period,
            visual_size,
            orbit_radius,
            initial_angle: 0.0,
        }
    }

    pub fn with_initial_angle(mut self, initial_angle: Num) -> Self {
        self.initial_angle = initial_angle;
        self
    }
}

/// Ordered name -> parameters table. Names are matched case-insensitively.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct BodyCatalog {
    entries: Vec<(String, BodyParams)>,
}

impl BodyCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// The eight planets, with Earth's year taking 10 time units and every
    /// other period scaled by its real sidereal ratio to Earth.
    pub fn solar_system() -> Self {
        let mut catalog = Self::new();

        catalog.insert("mercury", BodyParams::new(2.41, 8.0, 60.0));
        catalog.insert("venus", BodyParams::new(6.15, 12.0, 90.0));
        catalog.insert("earth", BodyParams::new(10.0, 14.0, 125.0));
        catalog.insert("mars", BodyParams::new(18.81, 10.0, 160.0));
        catalog.insert("jupiter", BodyParams::new(118.6, 30.0, 215.0));
        catalog.insert("saturn", BodyParams::new(294.6, 26.0, 270.0));
        catalog.insert("uranus", BodyParams::new(840.1, 20.0, 320.0));
        catalog.insert("neptune", BodyParams::new(1647.9, 20.0, 365.0));

        catalog
    }

    /// Adds or replaces an entry, keeping the original position on replace.
    pub fn insert(&mut self, name: impl Into<String>, params: BodyParams) {
        let name = name.into();

        match self
            .entries
            .iter_mut()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(&name))
        {
            Some((_, existing)) => *existing = params,
            None => self.entries.push((name, params)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&BodyParams> {
        self.entries
            .iter()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(name.trim()))
            .map(|(_, params)| params)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &BodyParams)> {
        self.entries.iter().map(|(name, params)| (name.as_str(), params))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn validate(&self) -> Result<(), OrreryError> {
        for (name, params) in &self.entries {
            if !params.orbital_period.is_finite() || params.orbital_period <= 0.0 {
                return Err(OrreryError::InvalidPeriod {
                    body: name.clone(),
                    value: params.orbital_period,
                });
            }
        }

        Ok(())
    }
}
