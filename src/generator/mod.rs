// src/generator/mod.rs
//! # Mine Generator
//!
//! The generation pipeline, in order:
//!
//! 1. stamp the start area and the auxiliary room templates onto a
//!    wall-filled grid,
//! 2. flip Wall cells to Floor at random,
//! 3. smooth with the cellular automaton,
//! 4. carve corridors until every open cell is reachable from the entry,
//! 5. scatter resources with gradient noise.
//!
//! One random source is threaded through every stage, so a seeded source
//! reproduces the same level.

pub mod automaton;
pub mod config;
pub mod connectivity;
pub mod scatter;
pub mod seeder;

pub use config::{GeneratorConfig, SizeSpec, MAX_DIMENSION};
pub use scatter::ScatterParams;

use crate::error::{ConfigError, Diagnostic, Diagnostics};
use crate::map::{Grid, GridPos, Tile};
use crate::noise::PermutationTable;
use crate::templates::{place_random, place_start_area, AUXILIARY_ROOMS};
use crate::utils::Point2D;
use log::{debug, info};
use rand::Rng;
use serde::Serialize;

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationStats {
    pub templates_placed: usize,
    pub templates_skipped: usize,
    pub cells_flipped: usize,
    pub automaton_passes: usize,
    pub regions_connected: usize,
    pub resources_placed: usize,
}

/// A finished level.
#[derive(Debug, Clone, Serialize)]
pub struct MineLevel {
    pub grid: Grid,
    pub entry: Option<GridPos>,
    pub stats: GenerationStats,
    #[serde(skip)]
    pub diagnostics: Vec<Diagnostic>,
}

#[derive(Debug, Clone)]
pub struct MineGenerator {
    config: GeneratorConfig,
}

impl MineGenerator {
    /// Validates the configuration up front; generation itself cannot fail.
    pub fn new(config: GeneratorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(MineGenerator { config })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> MineLevel {
        let config = &self.config;
        let mut diagnostics = Diagnostics::new();
        let mut stats = GenerationStats::default();

        let width = config.width.resolve(rng);
        let height = config.height.resolve(rng);
        let table = PermutationTable::from_rng(rng);
        info!("generating {}x{} mine level", width, height);

        let mut grid = Grid::new(width, height);

        // Templates
        let start = place_start_area(&mut grid);
        stats.templates_placed += 1;
        for template in AUXILIARY_ROOMS.iter() {
            let placed = place_random(
                &mut grid,
                template,
                config.margin_x,
                config.margin_y,
                rng,
                &mut diagnostics,
            );
            match placed {
                Some(_) => stats.templates_placed += 1,
                None => stats.templates_skipped += 1,
            }
        }
        debug!("grid after inserting templates:\n{}", grid);

        // Later templates may have stamped over the entry.
        let entry = start
            .entry
            .filter(|&pos| grid.at(pos) == Some(Tile::Entry));
        if entry.is_none() {
            diagnostics.report(Diagnostic::EntryNotFound);
        }

        stats.cells_flipped = seeder::seed(&mut grid, config.flip_probability, rng);
        debug!("grid after noise seeding:\n{}", grid);

        grid = automaton::relax(
            grid,
            config.automaton_radius,
            config.automaton_threshold,
            config.automaton_passes,
        );
        stats.automaton_passes = config.automaton_passes;

        if let Some(entry) = entry {
            stats.regions_connected = connectivity::repair(&mut grid, entry, &mut diagnostics);
        }

        let center = match entry {
            Some(pos) => Point2D::from(pos),
            None => Point2D::new(start.origin_x as f64, start.origin_y as f64),
        };
        let params = ScatterParams {
            noise_scale: config.mineral_noise_scale,
            threshold: config.mineral_threshold,
            center,
            safe_radius: config.entry_safe_radius,
        };
        stats.resources_placed = scatter::scatter(&mut grid, &table, &params);

        info!(
            "level done: {} templates placed, {} skipped, {} regions connected, {} resources",
            stats.templates_placed,
            stats.templates_skipped,
            stats.regions_connected,
            stats.resources_placed
        );
        debug!("final grid:\n{}", grid);

        MineLevel {
            grid,
            entry,
            stats,
            diagnostics: diagnostics.into_vec(),
        }
    }
}
