use anyhow::Result;
use clap::Args;

use rastertone_core::filters::box_blur::box_blur;
use rastertone_core::filters::convolve::convolve;
use rastertone_core::filters::levels::{adjust_brightness, adjust_contrast};
use rastertone_core::grid::PixelGrid;
use rastertone_core::kernel::Kernel;

use crate::gridtext::format_grid;

#[derive(Args)]
pub struct DemoArgs {
    /// Width and height of the demo grid
    #[arg(long, default_value_t = 5)]
    pub size: usize,
}

/// Walk a synthetic grid through every operation, printing each stage:
/// uniform fill with a center spike, brightness +50, contrast x1.2,
/// convolution with the box kernel, and the in-place blur.
pub fn run(args: &DemoArgs) -> Result<()> {
    let mut grid = PixelGrid::new(args.size, args.size, 100)?;
    let center = args.size as isize / 2;
    grid.set_pixel(center, center, 255)?;

    println!("Original grid:");
    print!("{}", format_grid(&grid));

    adjust_brightness(&mut grid, 50);
    println!("\nAfter brightness adjustment (+50):");
    print!("{}", format_grid(&grid));

    adjust_contrast(&mut grid, 1.2);
    println!("\nAfter contrast adjustment (x1.2):");
    print!("{}", format_grid(&grid));

    let convolved = convolve(&grid, &Kernel::box_blur());
    println!("\nAfter convolution with the box kernel:");
    print!("{}", format_grid(&convolved));

    box_blur(&mut grid);
    println!("\nAfter in-place box blur:");
    print!("{}", format_grid(&grid));

    Ok(())
}
