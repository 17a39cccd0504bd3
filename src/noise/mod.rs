// src/noise/mod.rs
//! # Coherent Noise
//!
//! 2-D gradient noise driven by a shuffled permutation table. The table is
//! built once per run from the injected random source and only read after
//! that, so a table can be shared by reference with every sampler.

pub mod perlin;
pub mod permutation;

pub use perlin::{gradient_noise, GRADIENTS};
pub use permutation::{PermutationError, PermutationTable, TABLE_SIZE};
