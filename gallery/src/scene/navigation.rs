//! Navigation resource, intent intake, and the fixed-rate tick.

use bevy::prelude::*;

use crate::art::ArtworkId;
use crate::nav::{FrameReport, Intent, NavEvent, NavigationController};
use crate::scene::Gallery;

#[derive(Resource, Debug)]
pub struct Navigation {
    pub controller: NavigationController,
    pub last_report: Option<FrameReport>,
}

impl Navigation {
    pub fn new(controller: NavigationController) -> Self {
        Self {
            controller,
            last_report: None,
        }
    }

    pub fn exclusive(&self) -> bool {
        self.last_report.as_ref().is_some_and(|r| r.exclusive)
    }
}

/// A request from an input device to start an action.
#[derive(Event, Clone, Copy, Debug, PartialEq, Eq)]
pub struct IntentRequested(pub Intent);

/// Audible moments. Playback is left to whoever listens.
#[derive(Event, Clone, Copy, Debug, PartialEq, Eq)]
pub enum GalleryCue {
    Move,
    Inaction,
    ArtworkTriggered(ArtworkId),
    Transform(ArtworkId),
    EffectFinished(ArtworkId),
}

pub fn navigation_plugin(app: &mut App) {
    app.add_event::<IntentRequested>()
        .add_event::<GalleryCue>()
        .add_systems(Update, apply_intents)
        .add_systems(FixedUpdate, advance_navigation);
}

pub fn apply_intents(
    mut requests: EventReader<IntentRequested>,
    mut navigation: ResMut<Navigation>,
    mut cues: EventWriter<GalleryCue>,
) {
    for IntentRequested(intent) in requests.read() {
        if navigation.controller.submit(*intent) {
            cues.send(GalleryCue::Move);
        } else {
            cues.send(GalleryCue::Inaction);
        }
    }
}

pub fn advance_navigation(
    gallery: Res<Gallery>,
    mut navigation: ResMut<Navigation>,
    mut cues: EventWriter<GalleryCue>,
) {
    let report = navigation.controller.advance_frame(gallery.layout.artworks());

    for event in &report.events {
        let title = |id: &ArtworkId| {
            gallery
                .layout
                .artwork(*id)
                .map_or("unknown artwork", |art| art.kind.title())
        };
        match event {
            NavEvent::ActionCompleted => {
                debug!("gallery: at {} facing {}", report.cell, report.facing);
            }
            NavEvent::ArtworkTriggered(id) => {
                info!("gallery: {} triggered at {}", title(id), report.cell);
                cues.send(GalleryCue::ArtworkTriggered(*id));
            }
            NavEvent::EffectStarted(id) => {
                info!("gallery: {} effect started", title(id));
                cues.send(GalleryCue::Transform(*id));
            }
            NavEvent::EffectFinished(id) => {
                info!("gallery: {} effect finished at {}", title(id), report.cell);
                cues.send(GalleryCue::EffectFinished(*id));
            }
        }
    }

    navigation.last_report = Some(report);
}
