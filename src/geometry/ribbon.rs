//! Tapered ribbon rasterization
//!
//! Turns a smoothed polyline into the filled lens-shaped polygon that reads
//! as a knife cut: zero width at both ends, widest at the middle, with the
//! width capped so long slashes stay thin.

use crate::core::settings::RibbonSettings;
use crate::geometry::smoothing::smooth_polyline;
use crate::rendering::surface::PaintSurface;
use bevy::prelude::*;

/// Maximum half-width for a stroke of the given arc length.
pub fn max_half_width(stroke_len: f32, settings: &RibbonSettings) -> f32 {
    (stroke_len * settings.width_ratio).min(settings.max_half_width)
}

/// Half-width of the ribbon at normalized position `t` in [0, 1] along the
/// stroke. Sine profile: zero at both ends, `max_half_width` at the midpoint.
pub fn half_width(t: f32, max_half_width: f32) -> f32 {
    max_half_width * (t * std::f32::consts::PI).sin()
}

/// Build the closed outline polygon for a raw stroke: the upper offset
/// boundary in order, then the lower boundary reversed.
///
/// Returns `None` for degenerate strokes (fewer than 2 points, or total arc
/// length below 1). For reasonably spaced samples the result is a simple
/// polygon; extremely sharp turnbacks may self-intersect, which renders as a
/// harmless overdraw artifact.
pub fn ribbon_outline(raw_points: &[Vec2], settings: &RibbonSettings) -> Option<Vec<Vec2>> {
    if raw_points.len() < 2 {
        return None;
    }
    let points = smooth_polyline(raw_points);

    let mut distances = Vec::with_capacity(points.len());
    distances.push(0.0_f32);
    let mut stroke_len = 0.0_f32;
    for pair in points.windows(2) {
        stroke_len += pair[0].distance(pair[1]);
        distances.push(stroke_len);
    }
    if stroke_len < 1.0 {
        return None;
    }

    let max_w = max_half_width(stroke_len, settings);
    let last = points.len() - 1;
    let mut upper = Vec::with_capacity(points.len() * 2);
    let mut lower = Vec::with_capacity(points.len());
    for (i, point) in points.iter().enumerate() {
        // Forward difference at the first point, backward at the last,
        // central elsewhere.
        let tangent = if i == 0 {
            points[1] - points[0]
        } else if i == last {
            points[last] - points[last - 1]
        } else {
            points[i + 1] - points[i - 1]
        };
        // A zero tangent would divide by zero; fall back to unit magnitude.
        let mut mag = tangent.length();
        if mag == 0.0 {
            mag = 1.0;
        }
        let normal = Vec2::new(-tangent.y, tangent.x) / mag;
        let w = half_width(distances[i] / stroke_len, max_w);
        upper.push(*point + normal * w);
        lower.push(*point - normal * w);
    }

    upper.extend(lower.into_iter().rev());
    Some(upper)
}

/// Fill the stroke's ribbon onto `target` in a single solid color.
/// Degenerate strokes paint nothing.
pub fn paint_ribbon(
    raw_points: &[Vec2],
    target: &mut PaintSurface,
    ink: [u8; 4],
    settings: &RibbonSettings,
) {
    if let Some(outline) = ribbon_outline(raw_points, settings) {
        target.fill_polygon(&outline, ink);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> RibbonSettings {
        RibbonSettings::default()
    }

    #[test]
    fn test_half_width_tapers_to_zero_at_ends() {
        let max_w = 4.0;
        assert!(half_width(0.0, max_w).abs() < 1e-6);
        assert!(half_width(1.0, max_w).abs() < 1e-5);
        assert!((half_width(0.5, max_w) - max_w).abs() < 1e-6);
    }

    #[test]
    fn test_half_width_never_exceeds_cap() {
        let settings = settings();
        // Long stroke: capped at max_half_width
        assert_eq!(max_half_width(1000.0, &settings), 4.0);
        // Short stroke: scales with length
        assert_eq!(max_half_width(20.0, &settings), 1.0);
        for i in 0..=100 {
            let t = i as f32 / 100.0;
            assert!(half_width(t, 4.0) <= 4.0 + 1e-6);
        }
    }

    #[test]
    fn test_degenerate_strokes_yield_no_outline() {
        let settings = settings();
        assert!(ribbon_outline(&[], &settings).is_none());
        assert!(ribbon_outline(&[Vec2::new(5.0, 5.0)], &settings).is_none());
        // Two points closer than unit arc length
        let tiny = [Vec2::new(0.0, 0.0), Vec2::new(0.3, 0.4)];
        assert!(ribbon_outline(&tiny, &settings).is_none());
    }

    #[test]
    fn test_outline_point_count() {
        let settings = settings();
        let points = [
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(20.0, 0.0),
        ];
        let outline = ribbon_outline(&points, &settings).unwrap();
        assert_eq!(outline.len(), points.len() * 2);
    }

    #[test]
    fn test_straight_stroke_outline_is_symmetric() {
        let settings = settings();
        let points = [
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(20.0, 0.0),
        ];
        let outline = ribbon_outline(&points, &settings).unwrap();
        let n = points.len();
        // outline[i] and outline[2n-1-i] are the same centerline point offset
        // in opposite directions
        for i in 0..n {
            let up = outline[i];
            let down = outline[2 * n - 1 - i];
            assert!((up.x - down.x).abs() < 1e-6);
            assert!((up.y + down.y).abs() < 1e-6);
        }
        // Stroke length 20 gives max half-width min(20 * 0.05, 4) = 1 at the
        // middle point, zero at the ends
        assert!((outline[0].y - 0.0).abs() < 1e-5);
        assert!((outline[1].y - 1.0).abs() < 1e-6);
        assert!((outline[2].y - 0.0).abs() < 1e-5);
    }

    #[test]
    fn test_coincident_samples_do_not_panic() {
        let settings = settings();
        // Repeated points produce zero tangents; the fallback magnitude keeps
        // the outline finite
        let points = [
            Vec2::new(0.0, 0.0),
            Vec2::new(0.0, 0.0),
            Vec2::new(0.0, 0.0),
            Vec2::new(30.0, 0.0),
        ];
        let outline = ribbon_outline(&points, &settings).unwrap();
        assert!(outline.iter().all(|p| p.x.is_finite() && p.y.is_finite()));
    }
}
