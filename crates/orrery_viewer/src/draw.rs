use bevy::prelude::*;

use crate::planet::{planet_color, Planet};
use crate::{Orrery, State};

pub fn orbits(
    mut gizmos: Gizmos,
    orrery: Res<Orrery>,
    state: Res<State>,
    planets: Query<&Planet>,
) {
    if !state.draw_orbits {
        return;
    }

    let host = orrery.controller.host();

    for planet in planets.iter() {
        let Some(radius) = host.radius(&planet.name) else {
            continue;
        };

        let color = planet_color(&planet.name).with_a(0.35);

        gizmos.circle_2d(Vec2::ZERO, radius as f32, color);
    }
}
