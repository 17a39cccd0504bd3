// src/lib.rs

pub mod error;
pub mod generator;
pub mod map;
pub mod noise;
pub mod templates;
pub mod utils;

pub use error::{ConfigError, Diagnostic, Diagnostics};
pub use generator::{GenerationStats, GeneratorConfig, MineGenerator, MineLevel, SizeSpec};
pub use map::{Grid, GridPos, Tile};
