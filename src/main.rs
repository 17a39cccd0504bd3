#![warn(non_snake_case)]
//! # mine_gen Entry Point
//!
//! Generates one mine level and prints it to stdout, either as the glyph
//! grid (`#` wall, space floor, `.` resource, `E` entry) or as JSON.
//!
//! ## License
//! Licensed under the MIT License.

use clap::Parser;
use log::info;
use mine_gen::{GeneratorConfig, MineGenerator, SizeSpec};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::error::Error;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "mine_gen", about = "Procedurally generate a mine level")]
struct Args {
    /// Seed for a reproducible level. Drawn from the OS when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Fix the grid width instead of drawing it from the configured range.
    #[arg(long)]
    width: Option<usize>,

    /// Fix the grid height instead of drawing it from the configured range.
    #[arg(long)]
    height: Option<usize>,

    /// JSON configuration file. Missing fields use the reference values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the level as JSON instead of glyphs.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    // Initialize logging.
    env_logger::init();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => GeneratorConfig::from_json_file(path)?,
        None => GeneratorConfig::default(),
    };
    if let Some(width) = args.width {
        config.width = SizeSpec::Fixed(width);
    }
    if let Some(height) = args.height {
        config.height = SizeSpec::Fixed(height);
    }

    let generator = MineGenerator::new(config)?;
    let mut rng = match args.seed {
        Some(seed) => {
            info!("using seed {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_os_rng(),
    };

    let level = generator.generate(&mut rng);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&level)?);
    } else {
        print!("{}", level.grid);
    }
    Ok(())
}
