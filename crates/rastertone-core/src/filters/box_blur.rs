use crate::filters::convolve::convolve_array;
use crate::grid::PixelGrid;
use crate::kernel::Kernel;

/// Blur a grid in place with the uniform 3x3 averaging kernel.
///
/// Same zero-padding and rounding semantics as `convolve`; only the storage
/// handling differs, in that the grid's own samples are replaced by the
/// result.
pub fn box_blur(grid: &mut PixelGrid) {
    grid.data = convolve_array(&grid.data, &Kernel::box_blur());
}
