//! Polyline smoothing
//!
//! Light local averaging applied to raw pointer samples before a stroke is
//! rasterized; takes the hand wobble out of a cut mark without shortening it.

use bevy::prelude::*;

/// Smooth a polyline with a 1-2-1 weighted average of each interior point's
/// neighborhood: `(p[i-1] + 2*p[i] + p[i+1]) / 4`.
///
/// Endpoints pass through unchanged, so the stroke keeps its exact extent,
/// and the output always has the same length as the input. Inputs with fewer
/// than 3 points are returned as-is.
pub fn smooth_polyline(points: &[Vec2]) -> Vec<Vec2> {
    if points.len() < 3 {
        return points.to_vec();
    }

    let mut smoothed = Vec::with_capacity(points.len());
    smoothed.push(points[0]);
    for window in points.windows(3) {
        smoothed.push((window[0] + 2.0 * window[1] + window[2]) / 4.0);
    }
    smoothed.push(points[points.len() - 1]);
    smoothed
}
