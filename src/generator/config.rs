// src/generator/config.rs

use crate::error::ConfigError;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Largest accepted grid width or height. Keeps every coordinate inside `i32`.
pub const MAX_DIMENSION: usize = 4096;

/// A grid dimension: either fixed or drawn uniformly from an inclusive range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SizeSpec {
    Fixed(usize),
    Between { min: usize, max: usize },
}

impl SizeSpec {
    fn validate(&self, axis: &'static str) -> Result<(), ConfigError> {
        match *self {
            SizeSpec::Fixed(0) | SizeSpec::Between { min: 0, .. } => {
                Err(ConfigError::ZeroDimension { axis })
            }
            SizeSpec::Between { min, max } if min > max => {
                Err(ConfigError::InvertedRange { axis, min, max })
            }
            SizeSpec::Fixed(value) | SizeSpec::Between { max: value, .. }
                if value > MAX_DIMENSION =>
            {
                Err(ConfigError::DimensionTooLarge {
                    axis,
                    value,
                    max: MAX_DIMENSION,
                })
            }
            _ => Ok(()),
        }
    }

    pub fn resolve<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        match *self {
            SizeSpec::Fixed(n) => n,
            SizeSpec::Between { min, max } => rng.random_range(min..=max),
        }
    }
}

/// Options recognized by the generation pipeline. `Default` is the reference
/// configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub width: SizeSpec,
    pub height: SizeSpec,
    /// Chebyshev radius of the automaton neighborhood.
    pub automaton_radius: usize,
    /// Wall-like neighbor count at which a cell becomes Wall.
    pub automaton_threshold: f64,
    pub automaton_passes: usize,
    /// Chance that the seeder turns a Wall cell into Floor.
    pub flip_probability: f64,
    pub mineral_noise_scale: f64,
    /// Remapped noise value a Floor cell must exceed to become Resource.
    pub mineral_threshold: f64,
    pub entry_safe_radius: f64,
    pub margin_x: usize,
    pub margin_y: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            width: SizeSpec::Between { min: 10, max: 40 },
            height: SizeSpec::Between { min: 10, max: 40 },
            automaton_radius: 1,
            automaton_threshold: 4.0,
            automaton_passes: 3,
            flip_probability: 0.70,
            mineral_noise_scale: 11.0,
            mineral_threshold: 0.70,
            entry_safe_radius: 5.0,
            margin_x: 10,
            margin_y: 10,
        }
    }
}

impl GeneratorConfig {
    /// Load a JSON configuration. Missing fields take their reference values.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let config: GeneratorConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.width.validate("width")?;
        self.height.validate("height")?;

        if self.automaton_radius > MAX_DIMENSION {
            return Err(ConfigError::RadiusTooLarge {
                value: self.automaton_radius,
                max: MAX_DIMENSION,
            });
        }
        if !self.automaton_threshold.is_finite() {
            return Err(ConfigError::NonFiniteThreshold(self.automaton_threshold));
        }
        check_unit("flip probability", self.flip_probability)?;
        check_unit("mineral threshold", self.mineral_threshold)?;
        if !(self.mineral_noise_scale.is_finite() && self.mineral_noise_scale > 0.0) {
            return Err(ConfigError::InvalidNoiseScale(self.mineral_noise_scale));
        }
        if self.entry_safe_radius.is_nan() || self.entry_safe_radius < 0.0 {
            return Err(ConfigError::NegativeSafeRadius(self.entry_safe_radius));
        }
        Ok(())
    }
}

fn check_unit(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfUnitRange { name, value })
    }
}
