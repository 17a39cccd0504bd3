// src/error.rs
//! Fatal configuration errors and the recoverable diagnostics a generation
//! run reports while still producing a best-effort level.

use crate::map::GridPos;
use log::warn;
use thiserror::Error;

/// Rejected before the pipeline starts.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("grid {axis} must be at least 1")]
    ZeroDimension { axis: &'static str },

    #[error("grid {axis} range is inverted ({min} > {max})")]
    InvertedRange {
        axis: &'static str,
        min: usize,
        max: usize,
    },

    #[error("grid {axis} of {value} exceeds the maximum of {max}")]
    DimensionTooLarge {
        axis: &'static str,
        value: usize,
        max: usize,
    },

    #[error("automaton radius {value} exceeds the maximum of {max}")]
    RadiusTooLarge { value: usize, max: usize },

    #[error("automaton wall threshold must be finite, got {0}")]
    NonFiniteThreshold(f64),

    #[error("{name} must lie in [0, 1], got {value}")]
    OutOfUnitRange { name: &'static str, value: f64 },

    #[error("mineral noise scale must be positive and finite, got {0}")]
    InvalidNoiseScale(f64),

    #[error("entry safe radius must be non-negative, got {0}")]
    NegativeSafeRadius(f64),

    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse configuration: {0}")]
    Json(#[from] serde_json::Error),
}

/// Local, recoverable conditions. None of these abort generation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Diagnostic {
    #[error(
        "template `{template}` ({template_width}x{template_height}) does not fit a \
         {grid_width}x{grid_height} grid with margins ({margin_x}, {margin_y}); skipped"
    )]
    PlacementSkipped {
        template: &'static str,
        template_width: usize,
        template_height: usize,
        grid_width: usize,
        grid_height: usize,
        margin_x: usize,
        margin_y: usize,
    },

    #[error("no entry tile present after stamping the start area; connectivity repair skipped")]
    EntryNotFound,

    #[error("flood fill seed {pos} is not traversable")]
    FloodFillSeedUntraversable { pos: GridPos },
}

/// Collects diagnostics for the caller and mirrors each one to the log.
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    reported: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn report(&mut self, diagnostic: Diagnostic) {
        warn!("{}", diagnostic);
        self.reported.push(diagnostic);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.reported.iter()
    }

    pub fn len(&self) -> usize {
        self.reported.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reported.is_empty()
    }

    pub fn contains(&self, diagnostic: &Diagnostic) -> bool {
        self.reported.contains(diagnostic)
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.reported
    }
}
