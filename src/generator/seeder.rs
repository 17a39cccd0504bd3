// src/generator/seeder.rs

use crate::map::{Grid, Tile};
use rand::Rng;

/// Turn each Wall cell into Floor with probability `flip_probability`,
/// drawing one uniform `[0, 1)` value per Wall cell. Other tiles are left
/// alone. Returns the number of cells flipped.
pub fn seed<R: Rng + ?Sized>(grid: &mut Grid, flip_probability: f64, rng: &mut R) -> usize {
    let positions: Vec<_> = grid.positions().collect();
    let mut flipped = 0;
    for pos in positions {
        if grid.at(pos) != Some(Tile::Wall) {
            continue;
        }
        let roll: f64 = rng.random();
        if roll < flip_probability {
            grid.put(pos, Tile::Floor);
            flipped += 1;
        }
    }
    flipped
}
