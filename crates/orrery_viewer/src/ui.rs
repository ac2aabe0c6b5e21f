use bevy::prelude::*;
use bevy_egui::egui::{self, Slider, Ui};
use bevy_egui::EguiContexts;
use orrery::{ControlAction, PlaybackState};

use crate::{Orrery, State, StartupFailure};

#[derive(Resource, Debug, Clone, Default)]
pub struct UiState {
    readouts_visible: bool,
    about_visible: bool,
}

pub fn render(
    mut ui_state: ResMut<UiState>,
    mut egui_context: EguiContexts,
    mut state: ResMut<State>,
    mut orrery: ResMut<Orrery>,
) {
    let ctx = egui_context.ctx_mut();

    egui::TopBottomPanel::top("Top").show(ctx, |ui| {
        ui.horizontal(|ui| {
            if ui.button("Readouts").clicked() {
                ui_state.readouts_visible = !ui_state.readouts_visible;
            }

            if ui.button("About").clicked() {
                ui_state.about_visible = !ui_state.about_visible;
            }

            ui.checkbox(&mut state.draw_orbits, "Draw orbits");
        });
    });

    egui::TopBottomPanel::bottom("Bottom").show(ctx, |ui| {
        ui.horizontal(|ui| playback_controls(ui, &mut orrery));
    });

    egui::Window::new("Readouts")
        .open(&mut ui_state.readouts_visible)
        .show(ctx, |ui| {
            for body in orrery.controller.bodies() {
                ui.label(format!(
                    "{}: {:.1}° ({:.2} revolutions)",
                    body.name(),
                    body.angle() % 360.0,
                    body.revolutions()
                ));
            }
        });

    egui::Window::new("About")
        .open(&mut ui_state.about_visible)
        .show(ctx, |ui| {
            ui.heading("Hello!");

            ui.label("Planets circle the sun, each at its own pace.");
            ui.label("Earth completes an orbit every 10 seconds at 1x speed, the others are scaled to match.");

            ui.heading("Controls");
            ui.label("Start and Pause toggle the animation");
            ui.label("Reset puts every planet back to its starting point");
            ui.label("Drag the speed slider to go faster or slower");
        });
}

fn playback_controls(ui: &mut Ui, orrery: &mut Orrery) {
    let controller = &mut orrery.controller;
    let running = controller.host().playback() == PlaybackState::Running;

    if ui.selectable_label(running, "Start").clicked() {
        controller.handle(ControlAction::Start);
    }

    if ui.selectable_label(!running, "Pause").clicked() {
        controller.handle(ControlAction::Pause);
    }

    if ui.button("Reset").clicked() {
        controller.handle(ControlAction::Reset);
    }

    ui.separator();

    let (min, max) = controller.speed_bounds();
    let mut speed = controller.speed_factor();

    if ui
        .add(Slider::new(&mut speed, min..=max).text("Speed"))
        .changed()
    {
        controller.handle(ControlAction::SetSpeed(speed.to_string()));
    }

    ui.label(format!("{:.1}x", controller.speed_factor()));
}

/// Shown instead of the diagram when the orrery couldn't be set up.
pub fn failure(mut egui_context: EguiContexts, failure: Res<StartupFailure>) {
    egui::CentralPanel::default().show(egui_context.ctx_mut(), |ui| {
        ui.heading("The orrery could not be started");
        ui.label(failure.0.as_str());
    });
}
