use ndarray::Array2;
use rayon::prelude::*;
use tracing::debug;

use crate::consts::PARALLEL_PIXEL_THRESHOLD;
use crate::grid::PixelGrid;
use crate::kernel::Kernel;

/// Cross-correlate a grid with a kernel, zero-padding at the borders.
///
/// Returns a new grid of the same dimensions; the input is never mutated.
/// Weighted sums are accumulated in f64 and written back rounded to the
/// nearest integer, without clamping — out-of-range results survive in the
/// i32 samples until a tone adjustment clips them.
pub fn convolve(grid: &PixelGrid, kernel: &Kernel) -> PixelGrid {
    PixelGrid::from_data(convolve_array(&grid.data, kernel))
}

/// Cross-correlate a raw sample array.
pub fn convolve_array(data: &Array2<i32>, kernel: &Kernel) -> Array2<i32> {
    let (h, w) = data.dim();
    debug!(
        "convolving {w}x{h} grid with {}x{} kernel",
        kernel.width(),
        kernel.height()
    );

    if h * w >= PARALLEL_PIXEL_THRESHOLD {
        let rows: Vec<Vec<i32>> = (0..h)
            .into_par_iter()
            .map(|row| convolve_row(data, kernel, row))
            .collect();

        let mut result = Array2::<i32>::zeros((h, w));
        for (row, row_data) in rows.into_iter().enumerate() {
            for (col, val) in row_data.into_iter().enumerate() {
                result[[row, col]] = val;
            }
        }
        result
    } else {
        let mut result = Array2::<i32>::zeros((h, w));
        for row in 0..h {
            for (col, val) in convolve_row(data, kernel, row).into_iter().enumerate() {
                result[[row, col]] = val;
            }
        }
        result
    }
}

/// One output row: each cell is the kernel-weighted sum of its neighborhood.
/// Out-of-grid neighbors contribute 0.
fn convolve_row(data: &Array2<i32>, kernel: &Kernel, row: usize) -> Vec<i32> {
    let (h, w) = data.dim();
    let ry = kernel.radius_y() as isize;
    let rx = kernel.radius_x() as isize;

    (0..w)
        .map(|col| {
            let mut sum = 0.0f64;
            for ((kr, kc), &weight) in kernel.weights().indexed_iter() {
                let src_row = row as isize + kr as isize - ry;
                let src_col = col as isize + kc as isize - rx;
                if src_row < 0 || src_row >= h as isize || src_col < 0 || src_col >= w as isize {
                    continue;
                }
                sum += data[[src_row as usize, src_col as usize]] as f64 * weight;
            }
            sum.round() as i32
        })
        .collect()
}
