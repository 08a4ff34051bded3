//! Ink layers
//!
//! The committed layer accumulates every baked mark for the whole session;
//! the frame layer is recomposed from it every tick and shown on screen.
//! Nothing painted only on the frame layer survives to the next tick.

use crate::rendering::surface::PaintSurface;
use anyhow::Result;
use bevy::prelude::*;
use bevy::window::{WindowResized, WindowScaleFactorChanged};

#[derive(Resource)]
pub struct InkLayers {
    /// Permanent ink: ribbons, drip trails, baked drip heads.
    pub committed: PaintSurface,
    /// Composition target, rebuilt every tick and uploaded to the canvas.
    pub frame: PaintSurface,
    background: [u8; 4],
}

impl InkLayers {
    pub fn new(width: u32, height: u32, scale: f32, background: [u8; 4]) -> Result<Self> {
        let mut committed = PaintSurface::new(width, height, scale)?;
        committed.clear(background);
        let frame = committed.clone();
        Ok(Self {
            committed,
            frame,
            background,
        })
    }

    pub fn background(&self) -> [u8; 4] {
        self.background
    }

    /// Replace both surfaces at the new size, carrying the committed ink over
    /// rescaled. On allocation failure the old surfaces are kept.
    pub fn resize(&mut self, width: u32, height: u32, scale: f32) {
        if width == self.committed.physical_width()
            && height == self.committed.physical_height()
            && scale == self.committed.scale()
        {
            return;
        }

        match self.committed.rescaled(width, height, scale, self.background) {
            Ok(committed) => {
                self.frame = committed.clone();
                self.committed = committed;
                debug!("Resized ink layers to {}x{} (scale {})", width, height, scale);
            }
            Err(error) => {
                warn!(
                    "Keeping previous ink layers; failed to allocate {}x{}: {}",
                    width, height, error
                );
            }
        }
    }
}

/// React to window size or scale factor changes by rescaling the layers.
pub fn handle_resize(
    mut resized: EventReader<WindowResized>,
    mut scale_changed: EventReader<WindowScaleFactorChanged>,
    windows: Query<&Window>,
    mut layers: ResMut<InkLayers>,
) {
    let size_changed = resized.read().last().is_some();
    let factor_changed = scale_changed.read().last().is_some();
    if !size_changed && !factor_changed {
        return;
    }
    let Ok(window) = windows.single() else {
        return;
    };
    layers.resize(
        window.physical_width(),
        window.physical_height(),
        window.scale_factor(),
    );
}
