//! Application builder and initialization
//!
//! This module provides the main app creation function

use super::plugins::{configure_default_plugins, EffectPluginGroup};
use crate::core::cli::CliArgs;
use crate::core::settings::EffectSettings;
use crate::effect::{ActiveDrips, ActiveGesture, EffectRng};
use anyhow::Result;
use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Creates a fully configured Kerf application.
///
/// This is the main entry point for the canvas. It creates a complete Bevy
/// application with all plugins, resources, and systems configured for the
/// cutting effect.
pub fn create_app(cli_args: CliArgs) -> Result<App> {
    cli_args
        .validate()
        .map_err(|e| anyhow::anyhow!("CLI validation failed: {}", e))?;

    let mut app = App::new();
    configure_resources(&mut app, cli_args);
    app.add_plugins(configure_default_plugins());
    app.add_plugins(EffectPluginGroup);
    // Runs before gesture input so an Escape that cancels a cut in progress
    // is not also treated as quit.
    app.add_systems(Update, exit_on_esc.before(crate::effect::EffectSet::Input));
    Ok(app)
}

/// Sets up application resources and configuration
fn configure_resources(app: &mut App, cli_args: CliArgs) {
    let theme = cli_args.resolved_theme();
    let rng = match cli_args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let [r, g, b, _] = theme.background;
    app.insert_resource(cli_args)
        .insert_resource(theme)
        .insert_resource(EffectSettings::default())
        .insert_resource(EffectRng(rng))
        .init_resource::<ActiveGesture>()
        .init_resource::<ActiveDrips>()
        .insert_resource(ClearColor(Color::srgb_u8(r, g, b)));
}

/// Quit on Escape, unless a cut is in progress (Escape then cancels the cut)
fn exit_on_esc(
    keyboard: Res<ButtonInput<KeyCode>>,
    gesture: Res<ActiveGesture>,
    mut exit_events: EventWriter<AppExit>,
) {
    if keyboard.just_pressed(KeyCode::Escape) && !gesture.is_cutting() {
        exit_events.write(AppExit::Success);
    }
}
