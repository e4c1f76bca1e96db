mod diagnostics;
mod welcome;

use bevy::prelude::*;
use bevy_egui::EguiPlugin;

pub use diagnostics::{diagnostics_plugin, DiagnosticsState};
pub use welcome::{welcome_plugin, WelcomePlaque, WELCOME_TEXT};

/// Both overlays share one egui context.
pub(crate) fn ensure_egui(app: &mut App) {
    if !app.is_plugin_added::<EguiPlugin>() {
        app.add_plugins(EguiPlugin);
    }
}

fn overlay_frame() -> bevy_egui::egui::Frame {
    use bevy_egui::egui;
    egui::Frame::default()
        .fill(egui::Color32::from_rgba_premultiplied(245, 245, 245, 230))
        .stroke(egui::Stroke::new(2.0, egui::Color32::BLACK))
        .inner_margin(egui::Margin::same(12))
        .corner_radius(egui::CornerRadius::same(6))
}
