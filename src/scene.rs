//! What the host found on its side when the diagram was set up.
//!
//! The controller validates this once at construction. A control that is
//! missing here stays inert for the whole session.

/// Playback controls present in the host UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Controls {
    pub start: bool,
    pub pause: bool,
    pub reset: bool,
    pub speed: bool,
}

impl Controls {
    pub fn all() -> Self {
        Self {
            start: true,
            pause: true,
            reset: true,
            speed: true,
        }
    }

    pub fn none() -> Self {
        Self {
            start: false,
            pause: false,
            reset: false,
            speed: false,
        }
    }

    pub fn is_empty(&self) -> bool {
        !(self.start || self.pause || self.reset || self.speed)
    }

    /// Names of the controls that are absent
    pub fn missing(&self) -> Vec<&'static str> {
        [
            ("start", self.start),
            ("pause", self.pause),
            ("reset", self.reset),
            ("speed", self.speed),
        ]
        .into_iter()
        .filter(|(_, present)| !present)
        .map(|(name, _)| name)
        .collect()
    }
}

impl Default for Controls {
    fn default() -> Self {
        Self::all()
    }
}

/// A body discovered in the host, e.g. a planet element inside its orbit ring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BodyElement {
    pub id: String,
    /// Whether the host could associate a visual with this body
    pub has_visual: bool,
}

impl BodyElement {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            has_visual: true,
        }
    }

    pub fn without_visual(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            has_visual: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SceneDescriptor {
    pub controls: Controls,
    pub bodies: Vec<BodyElement>,
}

impl SceneDescriptor {
    pub fn new(controls: Controls) -> Self {
        Self {
            controls,
            bodies: Vec::new(),
        }
    }

    pub fn with_body(mut self, body: BodyElement) -> Self {
        self.bodies.push(body);
        self
    }

    pub fn with_bodies<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.bodies.extend(ids.into_iter().map(BodyElement::new));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_missing_controls() {
        let controls = Controls {
            pause: false,
            speed: false,
            ..Controls::all()
        };

        assert_eq!(controls.missing(), ["pause", "speed"]);
        assert!(!controls.is_empty());
        assert!(Controls::none().is_empty());
    }

    #[test]
    fn builds_body_list_in_order() {
        let scene = SceneDescriptor::default()
            .with_bodies(["earth", "mars"])
            .with_body(BodyElement::without_visual("ghost"));

        let ids: Vec<_> = scene.bodies.iter().map(|b| b.id.as_str()).collect();

        assert_eq!(ids, ["earth", "mars", "ghost"]);
        assert!(!scene.bodies[2].has_visual);
    }
}
