//! Pointer input capture
//!
//! Normalizes mouse and touch input into a single stream of pointer events
//! in window-local logical coordinates, so the gesture systems never care
//! which device produced a sample. Only the primary button / first touch
//! drives a gesture.

use bevy::input::touch::Touches;
use bevy::prelude::*;

/// A normalized pointer sample
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Pointer went down at a position; a gesture starts here.
    Pressed(Vec2),
    /// Pointer moved while down.
    Moved(Vec2),
    /// Pointer went up; the gesture ends.
    Released,
}

/// Plugin emitting normalized pointer events ahead of the main schedule
pub struct PointerPlugin;

impl Plugin for PointerPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<PointerEvent>()
            .add_systems(PreUpdate, (emit_mouse_events, emit_touch_events));
    }
}

fn emit_mouse_events(
    mouse: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window>,
    mut events: EventWriter<PointerEvent>,
) {
    let cursor = windows.single().ok().and_then(|w| w.cursor_position());

    if mouse.just_pressed(MouseButton::Left) {
        if let Some(position) = cursor {
            events.write(PointerEvent::Pressed(position));
        }
    } else if mouse.pressed(MouseButton::Left) {
        if let Some(position) = cursor {
            events.write(PointerEvent::Moved(position));
        }
    }

    // A release is delivered even when the cursor has left the window.
    if mouse.just_released(MouseButton::Left) {
        events.write(PointerEvent::Released);
    }
}

fn emit_touch_events(touches: Res<Touches>, mut events: EventWriter<PointerEvent>) {
    if let Some(touch) = touches.iter_just_pressed().next() {
        events.write(PointerEvent::Pressed(touch.position()));
    } else if let Some(touch) = touches.iter().next() {
        events.write(PointerEvent::Moved(touch.position()));
    }

    let ended = touches.iter_just_released().next().is_some()
        || touches.iter_just_canceled().next().is_some();
    if ended && touches.iter().next().is_none() {
        events.write(PointerEvent::Released);
    }
}
