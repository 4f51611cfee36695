mod commands;
mod gridtext;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "rastertone", about = "Single-channel raster grid processing tool")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show grid dimensions and sample statistics
    Info(commands::info::InfoArgs),
    /// Apply tone adjustments and convolution filters to a grid file
    Filter(commands::filter::FilterArgs),
    /// Run the example walkthrough on a synthetic grid
    Demo(commands::demo::DemoArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &cli.command {
        Commands::Info(args) => commands::info::run(args),
        Commands::Filter(args) => commands::filter::run(args),
        Commands::Demo(args) => commands::demo::run(args),
    }
}
