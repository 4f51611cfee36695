use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use serde::Deserialize;
use tracing::debug;

use rastertone_core::filters::box_blur::box_blur;
use rastertone_core::filters::convolve::convolve;
use rastertone_core::filters::levels::{adjust_brightness, adjust_contrast};
use rastertone_core::kernel::{Kernel, KernelPreset};

use crate::gridtext::{format_grid, parse_grid};

#[derive(Args)]
pub struct FilterArgs {
    /// Input grid file (integers, one row per line)
    pub file: PathBuf,

    /// Brightness offset added to every sample (e.g. 50 or -30)
    #[arg(long)]
    pub brightness: Option<i32>,

    /// Contrast factor about the grid mean (1.0 = no change)
    #[arg(long)]
    pub contrast: Option<f64>,

    /// Inline kernel: rows separated by ';', weights by ',' (e.g. "0,-1,0;-1,5,-1;0,-1,0")
    #[arg(long)]
    pub kernel: Option<String>,

    /// TOML file with a [kernel] table holding the weight rows
    #[arg(long)]
    pub kernel_file: Option<PathBuf>,

    /// Apply the fixed 3x3 box blur
    #[arg(long)]
    pub blur: bool,

    /// Output file path
    #[arg(short, long, default_value = "filtered.txt")]
    pub output: PathBuf,
}

pub fn run(args: &FilterArgs) -> Result<()> {
    let text = fs::read_to_string(&args.file)
        .with_context(|| format!("Failed to read {}", args.file.display()))?;
    let mut grid = parse_grid(&text)?;

    println!("Loaded {}x{} grid", grid.width(), grid.height());

    if let Some(delta) = args.brightness {
        println!("Adjusting brightness by {delta}");
        adjust_brightness(&mut grid, delta);
    }

    if let Some(factor) = args.contrast {
        println!("Adjusting contrast by factor {factor}");
        adjust_contrast(&mut grid, factor);
    }

    if let Some(ref kernel_str) = args.kernel {
        let kernel = parse_inline_kernel(kernel_str)?;
        println!(
            "Convolving with {}x{} kernel",
            kernel.width(),
            kernel.height()
        );
        grid = convolve(&grid, &kernel);
    }

    if let Some(ref path) = args.kernel_file {
        let kernel = load_kernel_file(path)?;
        debug!("loaded kernel from {}", path.display());
        println!(
            "Convolving with {}x{} kernel from {}",
            kernel.width(),
            kernel.height(),
            path.display()
        );
        grid = convolve(&grid, &kernel);
    }

    if args.blur {
        println!("Applying box blur");
        box_blur(&mut grid);
    }

    fs::write(&args.output, format_grid(&grid))
        .with_context(|| format!("Failed to write {}", args.output.display()))?;
    println!("Saved to {}", args.output.display());

    Ok(())
}

/// Parse a "a,b;c,d"-style kernel argument.
fn parse_inline_kernel(s: &str) -> Result<Kernel> {
    let rows: Vec<Vec<f64>> = s
        .split(';')
        .map(|row| {
            row.split(',')
                .map(|tok| tok.trim().parse::<f64>())
                .collect::<std::result::Result<_, _>>()
        })
        .collect::<std::result::Result<_, _>>()
        .context("Invalid kernel format (expected weight rows like '0,-1,0;-1,5,-1;0,-1,0')")?;
    Ok(Kernel::from_rows(&rows)?)
}

#[derive(Debug, Deserialize)]
struct KernelFile {
    kernel: KernelPreset,
}

fn load_kernel_file(path: &Path) -> Result<Kernel> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let file: KernelFile =
        toml::from_str(&text).with_context(|| format!("Invalid kernel file {}", path.display()))?;
    Ok(file.kernel.build()?)
}
