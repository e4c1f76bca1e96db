//! Walks the shipped gallery through the public API.

use std::f32::consts::FRAC_PI_2;

use bevy::math::IVec2;
use gallery::prelude::*;

fn gallery() -> (MapLayout, NavigationController) {
    let layout = MapLayout::default_gallery().expect("default layout decodes");
    let nav = NavigationController::new(FrameTiming::default(), layout.start(), layout.start_facing());
    (layout, nav)
}

/// Submits `intent` and ticks until the controller accepts input again.
fn perform(nav: &mut NavigationController, layout: &MapLayout, intent: Intent) -> Vec<NavEvent> {
    assert!(nav.submit(intent), "{intent:?} rejected");
    let mut events = Vec::new();
    for _ in 0..500 {
        events.extend(nav.advance_frame(layout.artworks()).events);
        if nav.is_idle() {
            return events;
        }
    }
    panic!("{intent:?} never completed");
}

fn id_of(layout: &MapLayout, kind: ArtworkKind) -> ArtworkId {
    layout
        .artworks()
        .iter()
        .position(|art| art.kind == kind)
        .expect("artwork in default layout")
}

#[test]
fn start_cell_faces_north() {
    let (layout, nav) = gallery();
    assert_eq!(layout.start(), IVec2::new(6, 9));
    assert_eq!(nav.state().facing, Direction::North);
    assert_eq!(layout.artworks().len(), 6);
}

#[test]
fn void_neighbours_always_grow_walls() {
    let (layout, _) = gallery();
    let codes: Vec<char> = DEFAULT_LAYOUT.chars().collect();
    let code_at = |cell: IVec2| -> char {
        if layout.contains(cell) {
            codes[cell.y as usize * layout.width() + cell.x as usize]
        } else {
            ' '
        }
    };

    for (cell, _) in layout.cells() {
        if !matches!(code_at(cell), '#' | 'm') {
            continue;
        }
        for side in Direction::ALL {
            if matches!(code_at(cell + side.offset()), ' ' | '-') {
                assert!(layout.wall_at(cell, side), "{cell} missing {side} wall");
            }
        }
    }
}

#[test]
fn step_there_and_back_returns_home() {
    let (layout, mut nav) = gallery();
    perform(&mut nav, &layout, Intent::TurnLeft);
    let home = nav.state().cell;

    perform(&mut nav, &layout, Intent::StepForward);
    assert_eq!(nav.state().cell, home + IVec2::new(-1, 0));
    assert_eq!(nav.state().camera.forward_offset, 0.0);

    perform(&mut nav, &layout, Intent::StepBackward);
    assert_eq!(nav.state().cell, home);
    assert_eq!(nav.state().camera.forward_offset, 0.0);
}

#[test]
fn idle_frames_change_nothing() {
    let (layout, mut nav) = gallery();
    let before = nav.state().clone();
    for _ in 0..100 {
        let report = nav.advance_frame(layout.artworks());
        assert!(report.events.is_empty());
    }
    assert_eq!(nav.state(), &before);
}

#[test]
fn walking_to_the_squares_plays_its_effect() {
    let (layout, mut nav) = gallery();
    let squares = id_of(&layout, ArtworkKind::MovementInSquares);
    let timing = nav.timing();

    perform(&mut nav, &layout, Intent::TurnLeft);
    for _ in 0..3 {
        perform(&mut nav, &layout, Intent::StepForward);
    }
    perform(&mut nav, &layout, Intent::TurnRight);
    perform(&mut nav, &layout, Intent::StepForward);
    assert_eq!(nav.state().active_artwork, None);

    assert!(nav.submit(Intent::StepForward));
    let mut triggered = false;
    for _ in 0..timing.step {
        let report = nav.advance_frame(layout.artworks());
        triggered |= report.events.contains(&NavEvent::ArtworkTriggered(squares));
    }
    assert!(triggered);
    assert_eq!(nav.state().cell, IVec2::new(3, 7));
    assert_eq!(nav.state().active_artwork, Some(squares));
    assert_eq!(nav.state().pause_frames_remaining, timing.pause);
    assert!(!nav.submit(Intent::TurnLeft));

    let mut events = Vec::new();
    let mut narrowest = FRAC_PI_2;
    for _ in 0..(timing.pause + timing.effect) {
        let report = nav.advance_frame(layout.artworks());
        narrowest = narrowest.min(report.camera.fov);
        events.extend(report.events);
    }

    assert!(events.contains(&NavEvent::EffectStarted(squares)));
    assert!(events.contains(&NavEvent::EffectFinished(squares)));
    assert!(narrowest < FRAC_PI_2);
    assert_eq!(nav.state().camera.fov, FRAC_PI_2);
    assert_eq!(nav.state().active_artwork, None);
    assert_eq!(nav.state().placement(), layout.artworks()[squares].teleport);
    assert!(nav.is_idle());
}

#[test]
fn wrong_facing_does_not_trigger() {
    let (layout, mut nav) = gallery();
    perform(&mut nav, &layout, Intent::TurnLeft);
    for _ in 0..3 {
        perform(&mut nav, &layout, Intent::StepForward);
    }
    perform(&mut nav, &layout, Intent::TurnRight);
    perform(&mut nav, &layout, Intent::StepForward);
    perform(&mut nav, &layout, Intent::TurnRight);
    perform(&mut nav, &layout, Intent::TurnRight);
    assert_eq!(nav.state().facing, Direction::South);

    // Backs onto the anchor with the artwork behind the visitor.
    let events = perform(&mut nav, &layout, Intent::StepBackward);
    assert_eq!(nav.state().cell, IVec2::new(3, 7));
    assert_eq!(nav.state().active_artwork, None);
    assert!(!events
        .iter()
        .any(|e| matches!(e, NavEvent::ArtworkTriggered(_))));
}
