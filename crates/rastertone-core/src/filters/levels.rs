use crate::consts::{SAMPLE_MAX, SAMPLE_MIN};
use crate::grid::PixelGrid;

/// Shift every sample by `delta`, clipping into [0, 255]. In place.
///
/// Pure elementwise integer arithmetic; the addition saturates so an extreme
/// stored sample cannot wrap before the clip.
pub fn adjust_brightness(grid: &mut PixelGrid, delta: i32) {
    grid.data
        .mapv_inplace(|v| v.saturating_add(delta).clamp(SAMPLE_MIN, SAMPLE_MAX));
}

/// Scale every sample's distance from the grid mean by `factor`, rounding to
/// the nearest integer and clipping into [0, 255]. In place.
///
/// The mean is taken from the pre-adjustment samples, once, so every output
/// value is computed against the same reference level.
pub fn adjust_contrast(grid: &mut PixelGrid, factor: f64) {
    let mean = grid.mean();
    grid.data.mapv_inplace(|v| {
        let adjusted = (factor * (v as f64 - mean) + mean).round() as i32;
        adjusted.clamp(SAMPLE_MIN, SAMPLE_MAX)
    });
}
