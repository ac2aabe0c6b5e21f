//! Runs the solar system for two seconds of wall-clock time at double speed
//! without a window and prints where every planet ended up.

use orrery::{
    drive, BodyCatalog, Controls, IntervalFrames, RecordingHost, SceneDescriptor,
    SimulationConfig, SimulationController,
};

const FRAMES: usize = 2 * IntervalFrames::DEFAULT_FPS as usize;

fn main() -> Result<(), orrery::OrreryError> {
    let catalog = BodyCatalog::solar_system();

    let mut host = RecordingHost::new();
    for (name, params) in catalog.iter() {
        host.set_radius(name, params.orbit_radius);
    }

    let scene = SceneDescriptor::new(Controls::all()).with_bodies(catalog.names());
    let mut controller = SimulationController::new(&SimulationConfig::default(), &scene, host)?;

    controller.set_speed_factor(2.0);
    controller.start();

    let mut frames = IntervalFrames::default().with_frame_limit(FRAMES);
    let delivered = drive(&mut controller, &mut frames);

    println!("{delivered} frames");

    for body in controller.bodies() {
        let Some(position) = controller.host().position(body.name()) else {
            continue;
        };

        println!(
            "{:>8}: {:7.2}° at ({:6.1}, {:6.1})",
            body.name(),
            body.angle() % 360.0,
            position.x,
            position.y
        );
    }

    Ok(())
}
