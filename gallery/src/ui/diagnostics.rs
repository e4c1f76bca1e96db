//! Diagnostics overlay: position, facing, camera perturbation, FPS.

use bevy::diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin};
use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::nav::NavigationState;
use crate::scene::Navigation;

#[derive(Resource, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DiagnosticsState {
    pub visible: bool,
}

pub fn diagnostics_plugin(app: &mut App) {
    super::ensure_egui(app);
    if !app.is_plugin_added::<FrameTimeDiagnosticsPlugin>() {
        app.add_plugins(FrameTimeDiagnosticsPlugin);
    }
    app.init_resource::<DiagnosticsState>()
        .add_systems(Update, diagnostics_overlay_system);
}

/// Lines shown in the overlay, one value per line.
pub fn diagnostic_lines(state: &NavigationState) -> Vec<String> {
    let camera = &state.camera;
    vec![
        format!("Position  ({}, {})", state.cell.x, state.cell.y),
        format!("Facing    {}", state.facing),
        format!("Tilt      {:.3}", camera.tilt),
        format!("Pan       {:.3}", camera.pan),
        format!("Roll      {:.3}", camera.roll),
        format!("Aspect    {:.3}", camera.aspect),
        format!("FOV       {:.3}", camera.fov),
        format!("Forward   {:.3}", camera.forward_offset),
        format!("Phase     {}", state.animation_phase),
    ]
}

fn diagnostics_overlay_system(
    mut contexts: EguiContexts,
    overlay: Res<DiagnosticsState>,
    navigation: Res<Navigation>,
    diagnostics: Res<DiagnosticsStore>,
) {
    if !overlay.visible {
        return;
    }
    let fps = diagnostics
        .get(&FrameTimeDiagnosticsPlugin::FPS)
        .and_then(|d| d.smoothed())
        .unwrap_or(0.0);

    egui::Window::new("Diagnostics")
        .anchor(egui::Align2::LEFT_TOP, [10.0, 10.0])
        .resizable(false)
        .collapsible(false)
        .title_bar(false)
        .frame(super::overlay_frame())
        .show(contexts.ctx_mut(), |ui| {
            ui.style_mut().override_text_style = Some(egui::TextStyle::Monospace);
            ui.visuals_mut().override_text_color = Some(egui::Color32::BLACK);
            for line in diagnostic_lines(navigation.controller.state()) {
                ui.label(line);
            }
            ui.separator();
            ui.label(format!("FPS       {fps:.0}"));
        });
}
