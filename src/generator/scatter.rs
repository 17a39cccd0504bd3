// src/generator/scatter.rs

use crate::map::{Grid, GridPos, Tile};
use crate::noise::{gradient_noise, PermutationTable};
use crate::utils::util::to_unit_range;
use crate::utils::Point2D;

/// Parameters for [`scatter`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScatterParams {
    pub noise_scale: f64,
    /// Remapped `[0, 1]` noise value a cell must exceed.
    pub threshold: f64,
    pub center: Point2D,
    /// Cells closer than this to `center` are never converted.
    pub safe_radius: f64,
}

/// Convert Floor cells into Resource where the remapped noise at
/// `(x / scale, y / scale)` exceeds the threshold. Cells within the safe
/// radius and non-Floor cells are never touched. Returns the number of
/// resources placed.
pub fn scatter(grid: &mut Grid, table: &PermutationTable, params: &ScatterParams) -> usize {
    let candidates: Vec<GridPos> = grid
        .positions()
        .filter(|&pos| grid.at(pos) == Some(Tile::Floor))
        .collect();

    let mut placed = 0;
    for pos in candidates {
        if Point2D::from(pos).distance_to(&params.center) < params.safe_radius {
            continue;
        }
        let value = gradient_noise(
            table,
            pos.x as f64 / params.noise_scale,
            pos.y as f64 / params.noise_scale,
        );
        if to_unit_range(value) > params.threshold {
            grid.put(pos, Tile::Resource);
            placed += 1;
        }
    }
    placed
}
