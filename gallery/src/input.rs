//! Keyboard, mouse and touch mapped onto the four navigation intents.

use bevy::prelude::*;

use crate::nav::Intent;
use crate::scene::{apply_intents, IntentRequested};
use crate::ui::DiagnosticsState;

pub fn key_intent(key: KeyCode) -> Option<Intent> {
    match key {
        KeyCode::ArrowUp => Some(Intent::StepForward),
        KeyCode::ArrowDown => Some(Intent::StepBackward),
        KeyCode::ArrowLeft => Some(Intent::TurnLeft),
        KeyCode::ArrowRight => Some(Intent::TurnRight),
        _ => None,
    }
}

/// Splits the window along both diagonals. `cursor` is in window
/// coordinates with the origin at the top left.
pub fn pointer_intent(cursor: Vec2, window_size: Vec2) -> Intent {
    let n = cursor / window_size.max(Vec2::ONE);
    let above_main = n.x > n.y;
    let above_anti = 1.0 - n.x > n.y;
    match (above_main, above_anti) {
        (true, true) => Intent::StepForward,
        (false, false) => Intent::StepBackward,
        (false, true) => Intent::TurnLeft,
        (true, false) => Intent::TurnRight,
    }
}

pub fn input_plugin(app: &mut App) {
    app.add_systems(
        Update,
        (keyboard_intents, pointer_intents).before(apply_intents),
    );
}

fn keyboard_intents(
    keys: Res<ButtonInput<KeyCode>>,
    diagnostics: Option<ResMut<DiagnosticsState>>,
    mut requests: EventWriter<IntentRequested>,
) {
    for key in keys.get_just_pressed() {
        if let Some(intent) = key_intent(*key) {
            requests.send(IntentRequested(intent));
        }
    }
    if keys.just_pressed(KeyCode::Enter) {
        if let Some(mut diagnostics) = diagnostics {
            diagnostics.visible = !diagnostics.visible;
        }
    }
}

fn pointer_intents(
    mouse: Res<ButtonInput<MouseButton>>,
    touches: Res<Touches>,
    windows: Query<&Window>,
    mut requests: EventWriter<IntentRequested>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };
    let size = window.size();

    if mouse.just_pressed(MouseButton::Left) {
        if let Some(cursor) = window.cursor_position() {
            requests.send(IntentRequested(pointer_intent(cursor, size)));
        }
    }
    for touch in touches.iter_just_pressed() {
        requests.send(IntentRequested(pointer_intent(touch.position(), size)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: Vec2 = Vec2::new(800.0, 800.0);

    #[test]
    fn arrows_map_to_intents() {
        assert_eq!(key_intent(KeyCode::ArrowUp), Some(Intent::StepForward));
        assert_eq!(key_intent(KeyCode::ArrowDown), Some(Intent::StepBackward));
        assert_eq!(key_intent(KeyCode::ArrowLeft), Some(Intent::TurnLeft));
        assert_eq!(key_intent(KeyCode::ArrowRight), Some(Intent::TurnRight));
        assert_eq!(key_intent(KeyCode::Enter), None);
    }

    #[test]
    fn diagonal_quadrants() {
        assert_eq!(pointer_intent(Vec2::new(400.0, 50.0), WINDOW), Intent::StepForward);
        assert_eq!(pointer_intent(Vec2::new(400.0, 750.0), WINDOW), Intent::StepBackward);
        assert_eq!(pointer_intent(Vec2::new(50.0, 400.0), WINDOW), Intent::TurnLeft);
        assert_eq!(pointer_intent(Vec2::new(750.0, 400.0), WINDOW), Intent::TurnRight);
    }

    #[test]
    fn quadrants_scale_with_window_shape() {
        let wide = Vec2::new(1600.0, 400.0);
        assert_eq!(pointer_intent(Vec2::new(800.0, 20.0), wide), Intent::StepForward);
        assert_eq!(pointer_intent(Vec2::new(100.0, 200.0), wide), Intent::TurnLeft);
    }

    #[test]
    fn keyboard_system_sends_requests() {
        let mut app = App::new();
        app.add_event::<IntentRequested>()
            .init_resource::<ButtonInput<KeyCode>>()
            .insert_resource(DiagnosticsState::default())
            .add_systems(Update, keyboard_intents);

        {
            let mut keys = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
            keys.press(KeyCode::ArrowLeft);
            keys.press(KeyCode::Enter);
        }
        app.update();

        let events = app.world().resource::<Events<IntentRequested>>();
        let sent: Vec<_> = events.get_cursor().read(events).copied().collect();
        assert_eq!(sent, vec![IntentRequested(Intent::TurnLeft)]);
        assert!(app.world().resource::<DiagnosticsState>().visible);
    }
}
