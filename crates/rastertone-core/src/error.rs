use thiserror::Error;

#[derive(Error, Debug)]
pub enum GridError {
    #[error("Invalid grid dimensions: {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("Pixel ({x}, {y}) out of bounds for {width}x{height} grid")]
    OutOfBounds {
        x: isize,
        y: isize,
        width: usize,
        height: usize,
    },

    #[error("Invalid kernel: {0}")]
    InvalidKernel(String),
}

pub type Result<T> = std::result::Result<T, GridError>;
