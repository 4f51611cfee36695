/// Minimum pixel count (h*w) to use row-level Rayon parallelism.
pub const PARALLEL_PIXEL_THRESHOLD: usize = 65_536;

/// Lower bound of the sample range enforced by the tone adjustments.
pub const SAMPLE_MIN: i32 = 0;

/// Upper bound of the sample range enforced by the tone adjustments.
pub const SAMPLE_MAX: i32 = 255;
