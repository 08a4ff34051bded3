//! Plugin management and configuration for the Kerf canvas
//!
//! Organized into logical groups for clarity and maintainability

use bevy::app::{PluginGroup, PluginGroupBuilder};
use bevy::log::{Level, LogPlugin};
use bevy::prelude::*;

use crate::core::settings::{DEFAULT_WINDOW_SIZE, WINDOW_TITLE};

/// Configure logging with performance optimization for release builds
pub fn configure_logging() -> LogPlugin {
    #[cfg(debug_assertions)]
    {
        // Debug builds: Show more detailed logging for development
        LogPlugin {
            level: Level::INFO,
            filter: "kerf=info,bevy_render=warn,bevy_winit=warn,wgpu=warn,winit=warn"
                .to_string(),
            ..default()
        }
    }

    #[cfg(not(debug_assertions))]
    {
        // Release builds: Quieter logging, focus on warnings and errors
        LogPlugin {
            level: Level::WARN,
            filter: "kerf=warn,bevy=warn,wgpu=error,winit=error".to_string(),
            ..default()
        }
    }
}

/// Configure default Bevy plugins for the application
pub fn configure_default_plugins() -> PluginGroupBuilder {
    DefaultPlugins
        .set(WindowPlugin {
            primary_window: Some(Window {
                title: WINDOW_TITLE.to_string(),
                resolution: DEFAULT_WINDOW_SIZE.into(),
                ..default()
            }),
            ..default()
        })
        .set(configure_logging())
}

/// Plugin group for the cutting effect
#[derive(Default)]
pub struct EffectPluginGroup;

impl PluginGroup for EffectPluginGroup {
    fn build(self) -> PluginGroupBuilder {
        use crate::effect::EffectPlugin;
        use crate::io::pointer::PointerPlugin;
        use crate::rendering::CanvasRenderingPlugin;

        PluginGroupBuilder::start::<Self>()
            .add(PointerPlugin)
            .add(EffectPlugin)
            .add(CanvasRenderingPlugin)
    }
}
