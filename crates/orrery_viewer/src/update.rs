use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::planet::Planet;
use crate::{Orrery, State};

/// Fraction of the smaller window dimension the outermost ring may span
const VIEWPORT_FILL: f32 = 0.9;

/// Keeps the orbit radii in sync with the window size, the ring radii from
/// the catalog are only relative sizes.
pub fn layout(
    windows: Query<&Window, With<PrimaryWindow>>,
    mut orrery: ResMut<Orrery>,
    state: Res<State>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };

    let half_extent = window.width().min(window.height()) * 0.5 * VIEWPORT_FILL;
    if state.largest_orbit <= 0.0 {
        return;
    }

    let scale = half_extent / state.largest_orbit;

    let mut changed = false;
    for (name, ring) in &state.ring_radii {
        changed |= orrery
            .controller
            .host_mut()
            .set_radius(name, (ring * scale) as orrery::Num);
    }

    if changed {
        orrery.controller.publish_positions();
    }
}

pub fn frame(time: Res<Time>, mut orrery: ResMut<Orrery>) {
    let timestamp = time.elapsed_seconds_f64() * 1000.0;

    orrery.controller.on_frame(timestamp as orrery::Num);
}

pub fn planets(orrery: Res<Orrery>, mut planets: Query<(&Planet, &mut Transform)>) {
    let host = orrery.controller.host();

    for (planet, mut transform) in planets.iter_mut() {
        let Some(position) = host.world_position(&planet.name) else {
            continue;
        };

        transform.translation = position.extend(transform.translation.z);
    }
}
