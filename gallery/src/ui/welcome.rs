//! Instructions shown at the start cell until the visitor first moves.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::scene::GalleryCue;

pub const WELCOME_TEXT: &str = "\
WELCOME TO THE OP-ART GALLERY

Use the arrow keys to turn left or right
and to step forwards or backwards, or
click the edges of the screen.

Step onto a circle on the floor and face
the wall to see the artwork transform.

Turn LEFT to begin.";

#[derive(Resource, Clone, Copy, Debug, PartialEq, Eq)]
pub struct WelcomePlaque {
    pub visible: bool,
}

impl Default for WelcomePlaque {
    fn default() -> Self {
        Self { visible: true }
    }
}

pub fn welcome_plugin(app: &mut App) {
    super::ensure_egui(app);
    app.init_resource::<WelcomePlaque>()
        .add_systems(Update, (dismiss_on_first_move, welcome_overlay_system).chain());
}

fn dismiss_on_first_move(mut cues: EventReader<GalleryCue>, mut plaque: ResMut<WelcomePlaque>) {
    if cues.read().any(|cue| *cue == GalleryCue::Move) && plaque.visible {
        info!("gallery: visitor set off, hiding welcome plaque");
        plaque.visible = false;
    }
}

fn welcome_overlay_system(mut contexts: EguiContexts, plaque: Res<WelcomePlaque>) {
    if !plaque.visible {
        return;
    }
    egui::Window::new("Welcome")
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .resizable(false)
        .collapsible(false)
        .title_bar(false)
        .frame(super::overlay_frame())
        .show(contexts.ctx_mut(), |ui| {
            ui.visuals_mut().override_text_color = Some(egui::Color32::BLACK);
            ui.vertical_centered(|ui| {
                for (i, paragraph) in WELCOME_TEXT.split("\n\n").enumerate() {
                    let text = egui::RichText::new(paragraph);
                    ui.label(if i == 0 { text.size(18.0).strong() } else { text });
                    ui.add_space(6.0);
                }
            });
        });
}
