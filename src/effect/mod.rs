//! The cutting effect
//!
//! Gesture capture and completion, and the drip simulation. All randomness
//! flows through the injectable [`EffectRng`] resource so seeded runs are
//! fully reproducible.

pub mod drips;
pub mod gesture;

use bevy::prelude::*;
use rand::rngs::StdRng;

// Re-export commonly used items
pub use drips::{ActiveDrips, Drip, DripState};
pub use gesture::ActiveGesture;

/// Random source for every sampled quantity in the effect
#[derive(Resource)]
pub struct EffectRng(pub StdRng);

/// Update-schedule phases of the effect
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EffectSet {
    /// Gesture lifecycle driven by pointer events.
    Input,
    /// Frame composition and upload.
    Compose,
}

/// Plugin for the gesture-driven cutting effect
pub struct EffectPlugin;

impl Plugin for EffectPlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(Update, (EffectSet::Input, EffectSet::Compose).chain())
            .add_systems(
                Update,
                gesture::handle_gesture_input
                    .in_set(EffectSet::Input)
                    .run_if(resource_exists::<crate::rendering::layers::InkLayers>),
            );
    }
}
