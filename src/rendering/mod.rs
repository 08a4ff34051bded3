//! Rendering and Composition
//!
//! This module contains all rendering functionality:
//! - CPU paint surfaces and the committed/frame layer pair
//! - The per-tick compositor and canvas upload
//! - Camera management

pub mod cameras;
pub mod compositor;
pub mod layers;
pub mod surface;

use crate::effect::EffectSet;
use bevy::prelude::*;

// Re-export commonly used items
pub use layers::InkLayers;
pub use surface::PaintSurface;

/// Plugin for the canvas: layer setup, composition, and upload
pub struct CanvasRenderingPlugin;

impl Plugin for CanvasRenderingPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (cameras::spawn_camera, compositor::setup_canvas))
            .add_systems(
                Update,
                (
                    layers::handle_resize,
                    compositor::compose_frame_system,
                    compositor::upload_frame,
                )
                    .chain()
                    .in_set(EffectSet::Compose)
                    .run_if(resource_exists::<InkLayers>),
            );
    }
}
