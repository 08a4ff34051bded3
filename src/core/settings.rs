//! Application settings
//!
//! Tuning values for gesture sampling, the ribbon profile, and the drip
//! simulation live in one resource so systems and tests share a single
//! source of numbers. Paint colors are resolved separately at startup from
//! CLI arguments and the user config file.

use bevy::prelude::*;

/// Window title used by the window plugin configuration
pub const WINDOW_TITLE: &str = "Kerf";

/// Default window size (logical pixels)
pub const DEFAULT_WINDOW_SIZE: (f32, f32) = (1024.0, 768.0);

/// Resolved paint colors, as straight RGBA bytes.
///
/// Priority at resolution time: CLI argument, then user config file, then
/// these built-in defaults.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct EffectTheme {
    pub ink: [u8; 4],
    pub background: [u8; 4],
}

impl Default for EffectTheme {
    fn default() -> Self {
        Self {
            ink: [0xaa, 0x00, 0x00, 0xff],
            background: [0xff, 0xff, 0xff, 0xff],
        }
    }
}

/// All tuning values for the cutting effect
#[derive(Resource, Debug, Clone, Default)]
pub struct EffectSettings {
    pub sampling: SamplingSettings,
    pub ribbon: RibbonSettings,
    pub drip: DripSettings,
    pub spawn: SpawnSettings,
}

/// Pointer sampling behavior while a gesture is active
#[derive(Debug, Clone)]
pub struct SamplingSettings {
    /// Minimum distance between consecutive gesture samples, in logical
    /// pixels. Closer samples are dropped to avoid zero-length segments.
    pub min_distance: f32,
}

impl Default for SamplingSettings {
    fn default() -> Self {
        Self { min_distance: 2.0 }
    }
}

/// Shape of the committed cut mark
#[derive(Debug, Clone)]
pub struct RibbonSettings {
    /// Half-width grows with stroke length by this ratio...
    pub width_ratio: f32,
    /// ...but never past this cap, so long slashes stay thin.
    pub max_half_width: f32,
}

impl Default for RibbonSettings {
    fn default() -> Self {
        Self {
            width_ratio: 0.05,
            max_half_width: 4.0,
        }
    }
}

/// Drip construction ranges and per-frame behavior
#[derive(Debug, Clone)]
pub struct DripSettings {
    pub min_radius: f32,
    pub max_radius: f32,
    pub min_speed: f32,
    pub max_speed: f32,
    /// Frame-count lifetime range a drip's limit is sampled from.
    pub min_life: u32,
    pub max_life: u32,
    /// Total horizontal jitter per frame (organic wiggle).
    pub wiggle: f32,
    /// The pooling blob painted at spawn, relative to the drip radius.
    pub pool_scale: f32,
    /// Trail stroke width relative to the drip radius; kept below the head
    /// diameter so the moving tip reads as the thickest part.
    pub neck_width_scale: f32,
    /// How far below the bottom edge a drip may fall before it terminates.
    pub offscreen_margin: f32,
}

impl Default for DripSettings {
    fn default() -> Self {
        Self {
            min_radius: 2.0,
            max_radius: 4.0,
            min_speed: 0.5,
            max_speed: 2.0,
            min_life: 1200,
            max_life: 3200,
            wiggle: 0.15,
            pool_scale: 1.5,
            neck_width_scale: 1.4,
            offscreen_margin: 20.0,
        }
    }
}

/// How many drips a finished cut seeds
#[derive(Debug, Clone)]
pub struct SpawnSettings {
    /// One extra drip candidate per this many gesture points.
    pub points_per_drip: usize,
    /// Candidates every cut gets regardless of length.
    pub base_count: usize,
    /// Probability that each candidate actually spawns.
    pub keep_probability: f64,
}

impl Default for SpawnSettings {
    fn default() -> Self {
        Self {
            points_per_drip: 5,
            base_count: 2,
            keep_probability: 0.9,
        }
    }
}
