//! Cutting gesture lifecycle
//!
//! Accumulates pointer samples while the pointer is down, commits the
//! tapered ribbon on release, and seeds drips along the finished cut.
//! While the pointer is down the stroke only exists as a live preview;
//! it becomes permanent ink the moment the gesture ends.

use crate::core::settings::{EffectSettings, EffectTheme, SpawnSettings};
use crate::effect::drips::{ActiveDrips, Drip};
use crate::effect::EffectRng;
use crate::geometry::ribbon;
use crate::io::pointer::PointerEvent;
use crate::rendering::layers::InkLayers;
use crate::rendering::surface::PaintSurface;
use bevy::prelude::*;
use rand::Rng;

/// The point buffer for the gesture currently being drawn
#[derive(Resource, Debug, Default)]
pub struct ActiveGesture {
    points: Vec<Vec2>,
    cutting: bool,
}

impl ActiveGesture {
    /// Start a new gesture at `position`, discarding any abandoned buffer.
    pub fn begin(&mut self, position: Vec2) {
        self.points.clear();
        self.points.push(position);
        self.cutting = true;
    }

    /// Append a sample, dropping it if it is closer than `min_distance` to
    /// the previous sample. Keeps consecutive points far enough apart that
    /// no segment degenerates to zero length.
    pub fn extend(&mut self, position: Vec2, min_distance: f32) {
        if !self.cutting {
            return;
        }
        if let Some(last) = self.points.last() {
            if last.distance(position) < min_distance {
                return;
            }
        }
        self.points.push(position);
    }

    /// Abort the gesture without committing anything.
    pub fn cancel(&mut self) {
        self.points.clear();
        self.cutting = false;
    }

    /// End the gesture and take its points; empties the buffer
    /// unconditionally.
    pub fn finish(&mut self) -> Vec<Vec2> {
        self.cutting = false;
        std::mem::take(&mut self.points)
    }

    pub fn is_cutting(&self) -> bool {
        self.cutting
    }

    pub fn points(&self) -> &[Vec2] {
        &self.points
    }
}

/// How many drip candidates a finished gesture produces.
pub fn drip_candidates(point_count: usize, settings: &SpawnSettings) -> usize {
    point_count / settings.points_per_drip + settings.base_count
}

/// Commit a finished gesture: bake the ribbon into the committed layer, then
/// seed drips at random points along it. Gestures of 2 points or fewer
/// commit nothing.
pub fn complete_gesture(
    points: &[Vec2],
    committed: &mut PaintSurface,
    drips: &mut ActiveDrips,
    rng: &mut impl Rng,
    settings: &EffectSettings,
    ink: [u8; 4],
) {
    if points.len() <= 2 {
        return;
    }

    ribbon::paint_ribbon(points, committed, ink, &settings.ribbon);

    let candidates = drip_candidates(points.len(), &settings.spawn);
    for _ in 0..candidates {
        if !rng.gen_bool(settings.spawn.keep_probability) {
            continue;
        }
        let origin = points[rng.gen_range(0..points.len())];
        drips
            .0
            .push(Drip::spawn(origin, rng, &settings.drip, committed, ink));
    }
}

/// Drive the gesture lifecycle from normalized pointer events.
pub fn handle_gesture_input(
    mut events: EventReader<PointerEvent>,
    keyboard: Res<ButtonInput<KeyCode>>,
    mut gesture: ResMut<ActiveGesture>,
    mut layers: ResMut<InkLayers>,
    mut drips: ResMut<ActiveDrips>,
    mut rng: ResMut<EffectRng>,
    settings: Res<EffectSettings>,
    theme: Res<EffectTheme>,
) {
    if keyboard.just_pressed(KeyCode::Escape) && gesture.is_cutting() {
        gesture.cancel();
        debug!("Cut gesture cancelled");
    }

    for event in events.read() {
        match *event {
            PointerEvent::Pressed(position) => {
                gesture.begin(position);
                debug!("Cut started at {:?}", position);
            }
            PointerEvent::Moved(position) => {
                gesture.extend(position, settings.sampling.min_distance);
            }
            PointerEvent::Released => {
                if !gesture.is_cutting() {
                    continue;
                }
                let points = gesture.finish();
                let before = drips.0.len();
                complete_gesture(
                    &points,
                    &mut layers.committed,
                    &mut drips,
                    &mut rng.0,
                    &settings,
                    theme.ink,
                );
                if points.len() > 2 {
                    info!(
                        "Committed cut with {} points, spawned {} drips",
                        points.len(),
                        drips.0.len() - before
                    );
                }
            }
        }
    }
}
