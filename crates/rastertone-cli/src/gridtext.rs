//! Text form of a pixel grid: one row per line, samples space-separated.
//!
//! This is both the console rendering of a grid and the CLI's on-disk
//! interchange format. Parsing accepts any whitespace between samples and
//! skips blank lines; rows must be rectangular.

use anyhow::{bail, Context, Result};
use ndarray::Array2;
use rastertone_core::grid::PixelGrid;

/// Parse a grid from its text form.
pub fn parse_grid(text: &str) -> Result<PixelGrid> {
    let mut rows: Vec<(usize, Vec<i32>)> = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let row: Vec<i32> = line
            .split_whitespace()
            .map(|tok| {
                tok.parse::<i32>()
                    .with_context(|| format!("Invalid sample {tok:?} on line {}", idx + 1))
            })
            .collect::<Result<_>>()?;
        rows.push((idx + 1, row));
    }

    if rows.is_empty() {
        bail!("Grid contains no samples");
    }
    let width = rows[0].1.len();
    for (line_no, row) in &rows {
        if row.len() != width {
            bail!(
                "Line {line_no} has {} samples, expected {width}",
                row.len()
            );
        }
    }

    let height = rows.len();
    let flat: Vec<i32> = rows.into_iter().flat_map(|(_, row)| row).collect();
    let data = Array2::from_shape_vec((height, width), flat)
        .context("Grid rows do not form a rectangle")?;
    Ok(PixelGrid::from_data(data))
}

/// Render a grid to its text form, one row per line.
pub fn format_grid(grid: &PixelGrid) -> String {
    let mut out = String::new();
    for row in grid.data.rows() {
        let line: Vec<String> = row.iter().map(i32::to_string).collect();
        out.push_str(&line.join(" "));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_format_roundtrip() {
        let text = "1 2 3\n4 5 6\n";
        let grid = parse_grid(text).unwrap();
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);
        assert_eq!(format_grid(&grid), text);
    }

    #[test]
    fn test_parse_tolerates_extra_whitespace() {
        let grid = parse_grid("  10\t 20 \n\n 30   40 \n").unwrap();
        assert_eq!(grid.get_pixel(1, 1).unwrap(), 40);
    }

    #[test]
    fn test_parse_negative_and_wide_samples() {
        // The format carries raw i32 samples, not just the 8-bit range.
        let grid = parse_grid("-5 300\n").unwrap();
        assert_eq!(grid.get_pixel(0, 0).unwrap(), -5);
        assert_eq!(grid.get_pixel(1, 0).unwrap(), 300);
    }

    #[test]
    fn test_parse_rejects_ragged_rows() {
        assert!(parse_grid("1 2 3\n4 5\n").is_err());
    }

    #[test]
    fn test_parse_rejects_empty_input() {
        assert!(parse_grid("").is_err());
        assert!(parse_grid("   \n\n").is_err());
    }

    #[test]
    fn test_parse_rejects_non_integer_samples() {
        assert!(parse_grid("1 2\n3 x\n").is_err());
        assert!(parse_grid("1.5 2\n").is_err());
    }
}
