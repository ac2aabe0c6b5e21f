use bevy::prelude::*;
use bevy_egui::EguiPlugin;
use orrery::{Controls, SceneDescriptor, SimulationConfig, SimulationController};

use crate::host::ViewerHost;
use crate::planet::{planet_color, Planet, Star};

const CONFIG_PATH: &str = "orrery.ron";
const STAR_SIZE: f32 = 40.0;

mod draw;
mod host;
mod planet;
mod ui;
mod update;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins)
        .add_plugins(EguiPlugin)
        .init_resource::<ui::UiState>()
        .add_systems(Startup, setup)
        .add_systems(
            Update,
            (
                ui::render,
                update::layout,
                update::frame,
                update::planets,
                draw::orbits,
            )
                .chain()
                .run_if(resource_exists::<Orrery>()),
        )
        .add_systems(
            Update,
            ui::failure.run_if(resource_exists::<StartupFailure>()),
        )
        .run();
}

#[derive(Resource)]
struct Orrery {
    controller: SimulationController<ViewerHost>,
}

#[derive(Resource)]
struct State {
    draw_orbits: bool,
    /// Relative ring radius of every body, from the catalog
    ring_radii: Vec<(String, f32)>,
    largest_orbit: f32,
}

#[derive(Resource)]
struct StartupFailure(String);

fn load_config() -> SimulationConfig {
    let source = match std::fs::read_to_string(CONFIG_PATH) {
        Ok(source) => source,
        Err(_) => {
            info!("No {CONFIG_PATH} found, using the default solar system");
            return SimulationConfig::default();
        }
    };

    match SimulationConfig::from_ron(&source) {
        Ok(config) => config,
        Err(err) => {
            warn!("Ignoring {CONFIG_PATH}: {err}");
            SimulationConfig::default()
        }
    }
}

fn setup(mut commands: Commands) {
    commands.insert_resource(ClearColor(Color::BLACK));

    commands.spawn(Camera2dBundle::default());

    let config = load_config();

    commands
        .spawn(SpriteBundle {
            sprite: Sprite {
                color: Color::YELLOW,
                custom_size: Some(Vec2::splat(STAR_SIZE)),
                ..default()
            },
            ..default()
        })
        .insert(Star)
        .insert(Name::new("Sun"));

    let mut ring_radii = Vec::new();

    for (name, params) in config.catalog.iter() {
        let visual_size = params.visual_size as f32;

        commands
            .spawn(SpriteBundle {
                sprite: Sprite {
                    color: planet_color(name),
                    custom_size: Some(Vec2::splat(visual_size)),
                    ..default()
                },
                transform: Transform::from_xyz(0.0, 0.0, 1.0),
                ..default()
            })
            .insert(Planet {
                name: name.to_string(),
            })
            .insert(Name::new(name.to_string()));

        ring_radii.push((name.to_string(), params.orbit_radius as f32));
    }

    let largest_orbit = ring_radii
        .iter()
        .map(|(_, radius)| *radius)
        .fold(0.0, f32::max);

    commands.insert_resource(State {
        draw_orbits: true,
        ring_radii,
        largest_orbit,
    });

    let scene = SceneDescriptor::new(Controls::all()).with_bodies(config.catalog.names());

    // Catalog radii until the first layout pass scales them to the window
    let mut host = ViewerHost::default();
    for (name, params) in config.catalog.iter() {
        host.set_radius(name, params.orbit_radius);
    }

    match SimulationController::new(&config, &scene, host) {
        Ok(controller) => commands.insert_resource(Orrery { controller }),
        Err(err) => {
            error!("Failed to start the orrery: {err}");
            commands.insert_resource(StartupFailure(err.to_string()));
        }
    }
}
