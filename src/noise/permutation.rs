// src/noise/permutation.rs

use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;

/// Number of distinct entries. Must stay a power of two.
pub const TABLE_SIZE: usize = 256;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PermutationError {
    #[error("permutation must have 256 entries, got {0}")]
    WrongLength(usize),
    #[error("value {0} appears more than once")]
    Duplicate(u8),
}

/// Each of `0..TABLE_SIZE` exactly once, stored twice back to back so that
/// `perm[perm[y] + x]` never needs wrapping for `x, y` in `0..=TABLE_SIZE`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermutationTable {
    perm: [u8; TABLE_SIZE * 2],
}

impl PermutationTable {
    /// Shuffle `0..TABLE_SIZE` with the given random source.
    pub fn from_rng<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut values = [0u8; TABLE_SIZE];
        for (i, slot) in values.iter_mut().enumerate() {
            *slot = i as u8;
        }
        values.shuffle(rng);
        Self::doubled(&values)
    }

    /// Build from an externally produced shuffle.
    pub fn from_permutation(values: &[u8]) -> Result<Self, PermutationError> {
        if values.len() != TABLE_SIZE {
            return Err(PermutationError::WrongLength(values.len()));
        }
        let mut seen = [false; TABLE_SIZE];
        for &v in values {
            if std::mem::replace(&mut seen[v as usize], true) {
                return Err(PermutationError::Duplicate(v));
            }
        }
        Ok(Self::doubled(values))
    }

    fn doubled(values: &[u8]) -> Self {
        let mut perm = [0u8; TABLE_SIZE * 2];
        perm[..TABLE_SIZE].copy_from_slice(values);
        perm[TABLE_SIZE..].copy_from_slice(values);
        PermutationTable { perm }
    }

    #[inline]
    pub fn get(&self, index: usize) -> u8 {
        self.perm[index]
    }

    /// Hash of an integer lattice corner. Both coordinates must already be
    /// reduced to `0..=TABLE_SIZE`.
    #[inline]
    pub fn hash(&self, x: usize, y: usize) -> u8 {
        self.perm[self.perm[y] as usize + x]
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.perm
    }
}
