use crate::{
    BodyCatalog, Num, OrreryError, DEFAULT_MAX_SPEED, DEFAULT_MIN_SPEED, DEFAULT_ORBITAL_PERIOD,
    DEFAULT_SPEED,
};

/// Tunables of a simulation. Missing fields fall back to their defaults when
/// deserialized.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimulationConfig {
    pub min_speed: Num,
    pub max_speed: Num,
    /// Speed factor at startup, clamped to the bounds
    pub initial_speed: Num,
    /// Period given to bodies missing from the catalog
    pub default_period: Num,
    pub catalog: BodyCatalog,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            min_speed: DEFAULT_MIN_SPEED,
            max_speed: DEFAULT_MAX_SPEED,
            initial_speed: DEFAULT_SPEED,
            default_period: DEFAULT_ORBITAL_PERIOD,
            catalog: BodyCatalog::solar_system(),
        }
    }
}

impl SimulationConfig {
    pub fn with_speed_bounds(mut self, min_speed: Num, max_speed: Num) -> Self {
        self.min_speed = min_speed;
        self.max_speed = max_speed;
        self
    }

    pub fn with_catalog(mut self, catalog: BodyCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn validate(&self) -> Result<(), OrreryError> {
        let (min, max) = (self.min_speed, self.max_speed);

        if !min.is_finite() || !max.is_finite() || min <= 0.0 || min > max {
            return Err(OrreryError::InvalidSpeedBounds { min, max });
        }

        if !self.default_period.is_finite() || self.default_period <= 0.0 {
            return Err(OrreryError::InvalidPeriod {
                body: "<default>".to_string(),
                value: self.default_period,
            });
        }

        self.catalog.validate()
    }

    #[cfg(feature = "serde")]
    pub fn from_ron(source: &str) -> Result<Self, OrreryError> {
        let config: Self = ron::from_str(source).map_err(OrreryError::Parse)?;

        config.validate()?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = SimulationConfig::default();

        assert!(config.validate().is_ok());
        assert_eq!(config.min_speed, 0.1);
        assert_eq!(config.max_speed, 5.0);
        assert_eq!(config.default_period, 10.0);
        assert_eq!(config.catalog.len(), 8);
    }

    #[test_case(0.0, 5.0 ; "zero min")]
    #[test_case(-1.0, 5.0 ; "negative min")]
    #[test_case(3.0, 2.0 ; "inverted")]
    #[test_case(0.1, Num::INFINITY ; "infinite max")]
    fn rejects_bad_speed_bounds(min: Num, max: Num) {
        let config = SimulationConfig::default().with_speed_bounds(min, max);

        assert!(matches!(
            config.validate(),
            Err(OrreryError::InvalidSpeedBounds { .. })
        ));
    }

    #[test_case(0.0 ; "zero")]
    #[test_case(-10.0 ; "negative")]
    #[test_case(Num::NAN ; "nan")]
    fn rejects_bad_default_period(default_period: Num) {
        let config = SimulationConfig {
            default_period,
            ..SimulationConfig::default()
        };

        assert!(matches!(
            config.validate(),
            Err(OrreryError::InvalidPeriod { .. })
        ));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn missing_fields_use_defaults() {
        let config = SimulationConfig::from_ron("(max_speed: 10.0)").unwrap();

        assert_eq!(config.max_speed, 10.0);
        assert_eq!(config.min_speed, 0.1);
        assert_eq!(config.catalog, BodyCatalog::solar_system());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn custom_catalog() {
        let source = r#"(
            catalog: [
                ("moon", (orbital_period: 0.75, visual_size: 4.0, orbit_radius: 30.0)),
            ],
        )"#;

        let config = SimulationConfig::from_ron(source).unwrap();

        assert_eq!(config.catalog.len(), 1);
        assert_eq!(config.catalog.get("moon").map(|p| p.initial_angle), Some(0.0));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn parse_errors_are_reported() {
        assert!(matches!(
            SimulationConfig::from_ron("(max_speed: "),
            Err(OrreryError::Parse(_))
        ));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn invalid_values_are_rejected() {
        assert!(matches!(
            SimulationConfig::from_ron("(min_speed: 8.0, max_speed: 2.0)"),
            Err(OrreryError::InvalidSpeedBounds { .. })
        ));
    }
}
