//! Camera management
//!
//! One fixed 2D camera. The canvas sprite is kept sized to the window, so
//! there is no pan or zoom.

use bevy::prelude::*;

pub fn spawn_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}
