use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::error::{GridError, Result};

/// Convolution weight matrix, anchored at its geometric center cell.
///
/// Dimensions are validated at construction (both odd, at least 1x1), so a
/// `Kernel` handed to the filters is always well-formed.
#[derive(Clone, Debug)]
pub struct Kernel {
    weights: Array2<f64>,
}

impl Kernel {
    /// Validate a weight matrix. Both dimensions must be odd and nonzero.
    pub fn new(weights: Array2<f64>) -> Result<Self> {
        let (rows, cols) = weights.dim();
        if rows == 0 || cols == 0 {
            return Err(GridError::InvalidKernel("kernel is empty".into()));
        }
        if rows % 2 == 0 || cols % 2 == 0 {
            return Err(GridError::InvalidKernel(format!(
                "kernel dimensions must be odd, got {rows}x{cols}"
            )));
        }
        Ok(Self { weights })
    }

    /// Build a kernel from row vectors, rejecting ragged shapes.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|row| row.len() != width) {
            return Err(GridError::InvalidKernel(
                "kernel rows have unequal lengths".into(),
            ));
        }
        let flat: Vec<f64> = rows.iter().flatten().copied().collect();
        let weights = Array2::from_shape_vec((height, width), flat)
            .map_err(|e| GridError::InvalidKernel(e.to_string()))?;
        Self::new(weights)
    }

    /// The uniform 3x3 averaging kernel (all weights 1/9).
    pub fn box_blur() -> Self {
        Self {
            weights: Array2::from_elem((3, 3), 1.0 / 9.0),
        }
    }

    pub fn height(&self) -> usize {
        self.weights.nrows()
    }

    pub fn width(&self) -> usize {
        self.weights.ncols()
    }

    /// Rows between the center and the top/bottom edge.
    pub fn radius_y(&self) -> usize {
        self.weights.nrows() / 2
    }

    /// Columns between the center and the left/right edge.
    pub fn radius_x(&self) -> usize {
        self.weights.ncols() / 2
    }

    pub fn weights(&self) -> &Array2<f64> {
        &self.weights
    }
}

/// Declarative kernel description, e.g. loaded from a TOML preset file.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct KernelPreset {
    pub rows: Vec<Vec<f64>>,
}

impl KernelPreset {
    /// Convert into a validated `Kernel`.
    pub fn build(&self) -> Result<Kernel> {
        Kernel::from_rows(&self.rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_odd_kernel_accepted() {
        let k = Kernel::new(Array2::from_elem((3, 5), 1.0)).unwrap();
        assert_eq!(k.height(), 3);
        assert_eq!(k.width(), 5);
        assert_eq!(k.radius_y(), 1);
        assert_eq!(k.radius_x(), 2);
    }

    #[test]
    fn test_even_kernel_rejected() {
        assert!(Kernel::new(Array2::from_elem((2, 3), 1.0)).is_err());
        assert!(Kernel::new(Array2::from_elem((3, 4), 1.0)).is_err());
        assert!(Kernel::new(Array2::from_elem((4, 4), 1.0)).is_err());
    }

    #[test]
    fn test_empty_kernel_rejected() {
        assert!(Kernel::new(Array2::from_elem((0, 0), 1.0)).is_err());
        assert!(Kernel::from_rows(&[]).is_err());
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let rows = vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0]];
        assert!(Kernel::from_rows(&rows).is_err());
    }

    #[test]
    fn test_box_blur_weights() {
        let k = Kernel::box_blur();
        assert_eq!(k.height(), 3);
        assert_eq!(k.width(), 3);
        let total: f64 = k.weights().iter().sum();
        assert!((total - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_preset_roundtrip() {
        let preset = KernelPreset {
            rows: vec![vec![0.0, 1.0, 0.0]],
        };
        let json = serde_json::to_string(&preset).unwrap();
        let back: KernelPreset = serde_json::from_str(&json).unwrap();
        let k = back.build().unwrap();
        assert_eq!(k.height(), 1);
        assert_eq!(k.width(), 3);
    }
}
