//! Drip simulation
//!
//! Each finished cut seeds a handful of drips: ink runs that crawl down the
//! canvas, baking their trail into the committed layer frame by frame until
//! they run off screen or exhaust their lifetime. The moving head is drawn
//! separately each frame and only baked once the drip terminates.

use crate::core::settings::DripSettings;
use crate::rendering::surface::PaintSurface;
use bevy::prelude::*;
use rand::Rng;

/// Lifecycle of a single drip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DripState {
    /// Still crawling downward, extending its trail every frame.
    #[default]
    Falling,
    /// Finished; its pixels live on in the committed layer only.
    Done,
}

/// One falling ink run
#[derive(Debug, Clone, PartialEq)]
pub struct Drip {
    pub position: Vec2,
    /// Head radius; also the basis for trail and pool sizes.
    pub radius: f32,
    /// Vertical advance per frame.
    pub speed: f32,
    /// Frames lived so far.
    pub life: u32,
    /// Frame count after which the drip terminates.
    pub max_life: u32,
    pub state: DripState,
}

/// The set of drips currently animating
#[derive(Resource, Debug, Default)]
pub struct ActiveDrips(pub Vec<Drip>);

impl Drip {
    /// Create a drip at `origin` with randomized radius, speed, and lifetime,
    /// and bake its initial pooling blob into the committed layer.
    pub fn spawn(
        origin: Vec2,
        rng: &mut impl Rng,
        settings: &DripSettings,
        committed: &mut PaintSurface,
        ink: [u8; 4],
    ) -> Self {
        let drip = Self {
            position: origin,
            radius: rng.gen_range(settings.min_radius..settings.max_radius),
            speed: rng.gen_range(settings.min_speed..settings.max_speed),
            life: 0,
            max_life: rng.gen_range(settings.min_life..settings.max_life),
            state: DripState::Falling,
        };
        committed.fill_circle(origin, drip.radius * settings.pool_scale, ink);
        drip
    }

    pub fn is_done(&self) -> bool {
        self.state == DripState::Done
    }

    /// One frame of simulation.
    ///
    /// While falling, bakes a round-cap trail segment into the committed
    /// layer and moves down with a little horizontal wiggle. On termination
    /// (off the bottom edge, or lifetime exhausted) bakes the final head blob
    /// and transitions to [`DripState::Done`]; the transition fires once, and
    /// a finished drip never draws or moves again.
    pub fn advance(
        &mut self,
        rng: &mut impl Rng,
        committed: &mut PaintSurface,
        surface_height: f32,
        settings: &DripSettings,
        ink: [u8; 4],
    ) {
        if self.is_done() {
            return;
        }

        self.life += 1;
        if self.position.y > surface_height + settings.offscreen_margin
            || self.life > self.max_life
        {
            self.state = DripState::Done;
            committed.fill_circle(self.position, self.radius, ink);
            return;
        }

        let from = self.position;
        self.position.x += (rng.gen::<f32>() - 0.5) * settings.wiggle;
        self.position.y += self.speed;
        committed.stroke_segment(
            from,
            self.position,
            self.radius * settings.neck_width_scale,
            ink,
        );
    }

    /// Paint the head blob at the current position onto `target`.
    /// Render-only: no state changes, so it can target the frame layer
    /// every tick without committing anything.
    pub fn draw_head(&self, target: &mut PaintSurface, ink: [u8; 4]) {
        target.fill_circle(self.position, self.radius, ink);
    }
}
