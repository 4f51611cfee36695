use ndarray::Array2;

use crate::error::{GridError, Result};

/// A single-channel raster image held entirely in memory.
///
/// Samples are `i32`, nominally 8-bit: the tone adjustments keep every value
/// in `[0, 255]`, while raw writes and convolution output may store values
/// outside that range until the next adjustment clips them.
#[derive(Clone, Debug)]
pub struct PixelGrid {
    /// Pixel data, row-major, shape = (height, width)
    pub data: Array2<i32>,
}

impl PixelGrid {
    /// Create a grid with every sample set to `initial_value`.
    pub fn new(width: usize, height: usize, initial_value: i32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(GridError::InvalidDimensions { width, height });
        }
        Ok(Self {
            data: Array2::from_elem((height, width), initial_value),
        })
    }

    /// Wrap an existing sample array.
    pub fn from_data(data: Array2<i32>) -> Self {
        Self { data }
    }

    pub fn width(&self) -> usize {
        self.data.ncols()
    }

    pub fn height(&self) -> usize {
        self.data.nrows()
    }

    /// Read the sample at `(x, y)`.
    ///
    /// Coordinates are signed so that a negative index reports `OutOfBounds`
    /// instead of wrapping.
    pub fn get_pixel(&self, x: isize, y: isize) -> Result<i32> {
        let (col, row) = self.checked_coords(x, y)?;
        Ok(self.data[[row, col]])
    }

    /// Overwrite the sample at `(x, y)`.
    ///
    /// The value is stored verbatim; clipping to `[0, 255]` happens only in
    /// the tone adjustments. Nothing is written on an out-of-bounds failure.
    pub fn set_pixel(&mut self, x: isize, y: isize, value: i32) -> Result<()> {
        let (col, row) = self.checked_coords(x, y)?;
        self.data[[row, col]] = value;
        Ok(())
    }

    /// Arithmetic mean of all samples.
    pub fn mean(&self) -> f64 {
        let sum: f64 = self.data.iter().map(|&v| v as f64).sum();
        sum / self.data.len() as f64
    }

    fn checked_coords(&self, x: isize, y: isize) -> Result<(usize, usize)> {
        let (width, height) = (self.width(), self.height());
        if x < 0 || y < 0 || x as usize >= width || y as usize >= height {
            return Err(GridError::OutOfBounds {
                x,
                y,
                width,
                height,
            });
        }
        Ok((x as usize, y as usize))
    }
}
