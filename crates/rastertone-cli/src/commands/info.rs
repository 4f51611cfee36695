use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use crate::gridtext::parse_grid;

#[derive(Args)]
pub struct InfoArgs {
    /// Input grid file (integers, one row per line)
    pub file: PathBuf,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let text = fs::read_to_string(&args.file)
        .with_context(|| format!("Failed to read {}", args.file.display()))?;
    let grid = parse_grid(&text)?;

    let min = grid.data.iter().min().copied().context("Empty grid")?;
    let max = grid.data.iter().max().copied().context("Empty grid")?;

    println!("Dimensions: {}x{}", grid.width(), grid.height());
    println!("Samples:    {}", grid.data.len());
    println!("Min:        {min}");
    println!("Max:        {max}");
    println!("Mean:       {:.2}", grid.mean());

    Ok(())
}
