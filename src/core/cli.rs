//! Command line interface for the Kerf canvas
//!
//! Handles parsing command line arguments and provides
//! validation for user inputs. Options are documented with
//! examples to help users understand the expected format.

use crate::core::config_file::ConfigFile;
use crate::core::settings::EffectTheme;
use bevy::prelude::*;
use clap::Parser;

/// Kerf CLI arguments
///
/// Examples:
///   kerf                          # Default red ink on white
///   kerf --ink '#400080'          # Purple ink
///   kerf --background black       # Cut a dark canvas
///   kerf --seed 7                 # Reproducible drip trajectories
#[derive(Parser, Debug, Resource, Clone)]
#[clap(
    name = "kerf",
    version,
    about = "An interactive cutting-effect canvas built with Rust and Bevy",
    long_about = "Kerf is a cross-platform toy canvas: drag across the window to slash a thin tapered cut mark, and watch ink drips run down from it and soak permanently into the canvas."
)]
pub struct CliArgs {
    /// Ink color for cuts and drips
    ///
    /// Accepts any CSS color string: hex (#aa0000), names (crimson),
    /// rgb()/hsl() functions.
    #[clap(
        long = "ink",
        short = 'i',
        help = "Ink color (CSS color string)",
        long_help = "Color used for cut marks and drips. Accepts any CSS color string: hex values like '#aa0000', named colors like 'crimson', or rgb()/hsl() functions. Overrides the user config file."
    )]
    pub ink: Option<String>,

    /// Background color of the canvas
    #[clap(
        long = "background",
        short = 'b',
        help = "Canvas background color (CSS color string)",
        long_help = "Color the canvas starts as and is refilled with on resize. Accepts any CSS color string. Overrides the user config file."
    )]
    pub background: Option<String>,

    /// Seed for the random number generator
    ///
    /// Drip sizes, speeds, lifetimes, wiggle, and spawn positions are all
    /// sampled from one generator; a fixed seed reproduces them exactly.
    #[clap(
        long = "seed",
        help = "Seed the random number generator",
        long_help = "Seed for the random number generator driving drip sizes, speeds, lifetimes, wiggle, and spawn positions. Runs with the same seed and the same gestures reproduce the same drips. Defaults to an entropy seed."
    )]
    pub seed: Option<u64>,

    /// Initialize user configuration directory with a settings file
    ///
    /// This creates the ~/.config/kerf directory with a settings.json
    /// holding the default colors, ready to customize.
    #[clap(
        long = "new-config",
        help = "Initialize user config directory with a settings file",
        long_help = "Initialize the ~/.config/kerf directory with a settings.json file holding the default ink and background colors. Edit it to change colors without command line arguments."
    )]
    pub new_config: bool,
}

impl CliArgs {
    /// Validate the CLI arguments after parsing
    ///
    /// This ensures color strings parse before the application starts,
    /// providing clear error messages for common mistakes.
    pub fn validate(&self) -> Result<(), String> {
        if let Some(ink) = &self.ink {
            csscolorparser::parse(ink)
                .map_err(|e| format!("Invalid ink color '{ink}': {e}"))?;
        }
        if let Some(background) = &self.background {
            csscolorparser::parse(background)
                .map_err(|e| format!("Invalid background color '{background}': {e}"))?;
        }
        Ok(())
    }

    /// Resolve the paint colors from CLI args, config file, or defaults
    ///
    /// Priority order:
    /// 1. CLI argument (--ink / --background)
    /// 2. Config file setting (~/.config/kerf/settings.json)
    /// 3. Built-in default (red ink on white)
    pub fn resolved_theme(&self) -> EffectTheme {
        let config = ConfigFile::load().unwrap_or_default();
        let defaults = EffectTheme::default();

        let ink = resolve_color(
            self.ink.as_deref(),
            config.ink_color.as_deref(),
            defaults.ink,
        );
        let background = resolve_color(
            self.background.as_deref(),
            config.background_color.as_deref(),
            defaults.background,
        );

        EffectTheme { ink, background }
    }
}

fn resolve_color(cli: Option<&str>, config: Option<&str>, default: [u8; 4]) -> [u8; 4] {
    if let Some(value) = cli {
        if let Some(color) = parse_color(value) {
            debug!("Using color from CLI: {}", value);
            return color;
        }
    }
    if let Some(value) = config {
        if let Some(color) = parse_color(value) {
            debug!("Using color from config file: {}", value);
            return color;
        }
        warn!("Ignoring unparseable color in config file: {}", value);
    }
    default
}

fn parse_color(value: &str) -> Option<[u8; 4]> {
    csscolorparser::parse(value).ok().map(|c| c.to_rgba8())
}
