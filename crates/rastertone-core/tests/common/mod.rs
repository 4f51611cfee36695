use ndarray::Array2;
use rastertone_core::grid::PixelGrid;

/// Build a grid with every sample set to `fill`.
pub fn make_grid(width: usize, height: usize, fill: i32) -> PixelGrid {
    PixelGrid::new(width, height, fill).expect("valid dimensions")
}

/// Build a grid from literal rows. Rows must be rectangular.
pub fn grid_from_rows(rows: &[&[i32]]) -> PixelGrid {
    let h = rows.len();
    let w = rows[0].len();
    let flat: Vec<i32> = rows.iter().flat_map(|r| r.iter().copied()).collect();
    PixelGrid::from_data(Array2::from_shape_vec((h, w), flat).expect("rectangular rows"))
}
