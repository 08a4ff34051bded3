//! CPU paint surfaces
//!
//! `PaintSurface` is the drawable surface the effect paints on: a pixel
//! buffer supporting filled polygons and circles, round-cap segment strokes,
//! full-surface blits, and bilinear rescales. Callers work in logical
//! (device-independent) coordinates; the device pixel ratio is applied as a
//! transform at paint time.

use anyhow::{anyhow, Result};
use bevy::math::Vec2;
use tiny_skia::{
    Color, FillRule, FilterQuality, LineCap, Paint, PathBuilder, Pixmap, PixmapPaint, Stroke,
    Transform,
};

#[derive(Clone)]
pub struct PaintSurface {
    pixmap: Pixmap,
    scale: f32,
}

impl PaintSurface {
    /// Allocate a surface of `width` x `height` physical pixels; `scale` is
    /// the device pixel ratio applied to all paint coordinates.
    pub fn new(width: u32, height: u32, scale: f32) -> Result<Self> {
        let pixmap = Pixmap::new(width, height)
            .ok_or_else(|| anyhow!("invalid surface dimensions {width}x{height}"))?;
        Ok(Self { pixmap, scale })
    }

    pub fn physical_width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn physical_height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Logical width, in device-independent pixels.
    pub fn width(&self) -> f32 {
        self.pixmap.width() as f32 / self.scale
    }

    /// Logical height, in device-independent pixels.
    pub fn height(&self) -> f32 {
        self.pixmap.height() as f32 / self.scale
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    fn transform(&self) -> Transform {
        Transform::from_scale(self.scale, self.scale)
    }

    fn solid_paint(rgba: [u8; 4]) -> Paint<'static> {
        let mut paint = Paint::default();
        paint.set_color(Color::from_rgba8(rgba[0], rgba[1], rgba[2], rgba[3]));
        paint.anti_alias = true;
        paint
    }

    /// Flood the whole surface with one color.
    pub fn clear(&mut self, rgba: [u8; 4]) {
        self.pixmap
            .fill(Color::from_rgba8(rgba[0], rgba[1], rgba[2], rgba[3]));
    }

    /// Fill a closed polygon. Degenerate outlines (fewer than 3 vertices, or
    /// a path that collapses to nothing) paint nothing.
    pub fn fill_polygon(&mut self, outline: &[Vec2], rgba: [u8; 4]) {
        if outline.len() < 3 {
            return;
        }
        let mut builder = PathBuilder::new();
        builder.move_to(outline[0].x, outline[0].y);
        for point in &outline[1..] {
            builder.line_to(point.x, point.y);
        }
        builder.close();
        let Some(path) = builder.finish() else {
            return;
        };
        self.pixmap.fill_path(
            &path,
            &Self::solid_paint(rgba),
            FillRule::Winding,
            self.transform(),
            None,
        );
    }

    /// Fill a circle of radius `radius` centered at `center`.
    pub fn fill_circle(&mut self, center: Vec2, radius: f32, rgba: [u8; 4]) {
        let Some(path) = PathBuilder::from_circle(center.x, center.y, radius) else {
            return;
        };
        self.pixmap.fill_path(
            &path,
            &Self::solid_paint(rgba),
            FillRule::Winding,
            self.transform(),
            None,
        );
    }

    /// Stroke a single segment with round caps.
    pub fn stroke_segment(&mut self, from: Vec2, to: Vec2, width: f32, rgba: [u8; 4]) {
        let mut builder = PathBuilder::new();
        builder.move_to(from.x, from.y);
        builder.line_to(to.x, to.y);
        let Some(path) = builder.finish() else {
            return;
        };
        let stroke = Stroke {
            width,
            line_cap: LineCap::Round,
            ..Stroke::default()
        };
        self.pixmap.stroke_path(
            &path,
            &Self::solid_paint(rgba),
            &stroke,
            self.transform(),
            None,
        );
    }

    /// Copy the full contents of `other` onto this surface, 1:1.
    pub fn blit_from(&mut self, other: &PaintSurface) {
        self.pixmap.draw_pixmap(
            0,
            0,
            other.pixmap.as_ref(),
            &PixmapPaint::default(),
            Transform::identity(),
            None,
        );
    }

    /// Allocate a new surface of the given size holding this surface's
    /// contents rescaled into it, over `background`.
    pub fn rescaled(
        &self,
        width: u32,
        height: u32,
        scale: f32,
        background: [u8; 4],
    ) -> Result<Self> {
        let mut surface = Self::new(width, height, scale)?;
        surface.clear(background);

        let sx = width as f32 / self.pixmap.width() as f32;
        let sy = height as f32 / self.pixmap.height() as f32;
        let paint = PixmapPaint {
            quality: FilterQuality::Bilinear,
            ..PixmapPaint::default()
        };
        surface.pixmap.draw_pixmap(
            0,
            0,
            self.pixmap.as_ref(),
            &paint,
            Transform::from_scale(sx, sy),
            None,
        );
        Ok(surface)
    }

    /// Raw premultiplied RGBA bytes, row-major.
    pub fn data(&self) -> &[u8] {
        self.pixmap.data()
    }

    /// Premultiplied RGBA of the physical pixel at (x, y). Equal to straight
    /// RGBA wherever only opaque paint has been applied.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        self.pixmap
            .pixel(x, y)
            .map(|c| [c.red(), c.green(), c.blue(), c.alpha()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INK: [u8; 4] = [0xaa, 0x00, 0x00, 0xff];
    const WHITE: [u8; 4] = [0xff, 0xff, 0xff, 0xff];

    #[test]
    fn test_new_rejects_zero_dimensions() {
        assert!(PaintSurface::new(0, 10, 1.0).is_err());
        assert!(PaintSurface::new(100, 100, 1.0).is_ok());
    }

    #[test]
    fn test_clear_floods_every_pixel() {
        let mut surface = PaintSurface::new(8, 8, 1.0).unwrap();
        surface.clear(WHITE);
        assert_eq!(surface.pixel(0, 0), Some(WHITE));
        assert_eq!(surface.pixel(7, 7), Some(WHITE));
    }

    #[test]
    fn test_fill_polygon_covers_interior() {
        let mut surface = PaintSurface::new(100, 100, 1.0).unwrap();
        surface.clear(WHITE);
        let square = [
            Vec2::new(20.0, 20.0),
            Vec2::new(80.0, 20.0),
            Vec2::new(80.0, 80.0),
            Vec2::new(20.0, 80.0),
        ];
        surface.fill_polygon(&square, INK);
        assert_eq!(surface.pixel(50, 50), Some(INK));
        // Outside stays background
        assert_eq!(surface.pixel(5, 5), Some(WHITE));
    }

    #[test]
    fn test_degenerate_polygon_is_noop() {
        let mut surface = PaintSurface::new(16, 16, 1.0).unwrap();
        surface.clear(WHITE);
        surface.fill_polygon(&[Vec2::new(2.0, 2.0), Vec2::new(10.0, 10.0)], INK);
        assert_eq!(surface.pixel(6, 6), Some(WHITE));
    }

    #[test]
    fn test_fill_circle_covers_center() {
        let mut surface = PaintSurface::new(40, 40, 1.0).unwrap();
        surface.clear(WHITE);
        surface.fill_circle(Vec2::new(20.0, 20.0), 8.0, INK);
        assert_eq!(surface.pixel(20, 20), Some(INK));
        assert_eq!(surface.pixel(2, 2), Some(WHITE));
    }

    #[test]
    fn test_stroke_segment_covers_midpoint() {
        let mut surface = PaintSurface::new(60, 60, 1.0).unwrap();
        surface.clear(WHITE);
        surface.stroke_segment(Vec2::new(10.0, 30.0), Vec2::new(50.0, 30.0), 6.0, INK);
        assert_eq!(surface.pixel(30, 30), Some(INK));
        // Round cap extends past the endpoint
        assert_eq!(surface.pixel(51, 30), Some(INK));
    }

    #[test]
    fn test_blit_copies_contents() {
        let mut source = PaintSurface::new(20, 20, 1.0).unwrap();
        source.clear(WHITE);
        source.fill_circle(Vec2::new(10.0, 10.0), 5.0, INK);

        let mut dest = PaintSurface::new(20, 20, 1.0).unwrap();
        dest.clear([0, 0, 0, 255]);
        dest.blit_from(&source);
        assert_eq!(dest.pixel(10, 10), Some(INK));
        assert_eq!(dest.pixel(1, 1), Some(WHITE));
    }

    #[test]
    fn test_rescale_preserves_painted_region() {
        let mut surface = PaintSurface::new(50, 50, 1.0).unwrap();
        surface.clear(WHITE);
        let square = [
            Vec2::new(10.0, 10.0),
            Vec2::new(40.0, 10.0),
            Vec2::new(40.0, 40.0),
            Vec2::new(10.0, 40.0),
        ];
        surface.fill_polygon(&square, INK);

        let doubled = surface.rescaled(100, 100, 1.0, WHITE).unwrap();
        assert_eq!(doubled.physical_width(), 100);
        // The square's center maps to the doubled center and keeps its color
        assert_eq!(doubled.pixel(50, 50), Some(INK));
        assert_eq!(doubled.pixel(5, 5), Some(WHITE));
    }

    #[test]
    fn test_scale_applies_to_paint_coordinates() {
        // A 2x surface: logical (10, 10) lands on physical (20, 20)
        let mut surface = PaintSurface::new(40, 40, 2.0).unwrap();
        surface.clear(WHITE);
        surface.fill_circle(Vec2::new(10.0, 10.0), 4.0, INK);
        assert_eq!(surface.width(), 20.0);
        assert_eq!(surface.pixel(20, 20), Some(INK));
    }
}
