// src/generator/automaton.rs
// Cellular automaton smoothing. Every pass reads a full snapshot and writes a
// separate buffer; the buffers are swapped between passes.

use crate::map::{Grid, GridPos, Tile};
use log::debug;

/// Count wall-like positions in the square of Chebyshev radius `radius`
/// around `pos`, the cell itself included. Positions outside the interior
/// `[1, dimension - 2]` always count as wall.
///
/// Only the part of the square that overlaps the interior is visited; every
/// other position is wall-like by definition. The window size saturates at
/// `usize::MAX`.
pub fn wall_like_neighbors(grid: &Grid, pos: GridPos, radius: usize) -> usize {
    let side = radius.saturating_mul(2).saturating_add(1);
    let window = side.saturating_mul(side);

    if grid.width() < 3 || grid.height() < 3 {
        return window;
    }
    let (max_x, max_y) = (grid.width() - 2, grid.height() - 2);
    let x_lo = pos.x.saturating_sub(radius).max(1);
    let x_hi = pos.x.saturating_add(radius).min(max_x);
    let y_lo = pos.y.saturating_sub(radius).max(1);
    let y_hi = pos.y.saturating_add(radius).min(max_y);

    let mut open = 0;
    if x_lo <= x_hi && y_lo <= y_hi {
        for y in y_lo..=y_hi {
            for x in x_lo..=x_hi {
                if grid.at(GridPos::new(x, y)) != Some(Tile::Wall) {
                    open += 1;
                }
            }
        }
    }
    window - open
}

/// One smoothing pass from `current` into `next`. Entry and Resource cells
/// are copied unchanged; everything else becomes Wall when its wall-like
/// count reaches `threshold`, Floor otherwise.
pub fn relax_into(current: &Grid, next: &mut Grid, radius: usize, threshold: f64) {
    for pos in current.positions() {
        let tile = match current.at(pos) {
            Some(tile) if tile.is_protected() => tile,
            _ => {
                if wall_like_neighbors(current, pos, radius) as f64 >= threshold {
                    Tile::Wall
                } else {
                    Tile::Floor
                }
            }
        };
        next.put(pos, tile);
    }
}

/// A single pass producing a fresh grid.
pub fn relax_pass(grid: &Grid, radius: usize, threshold: f64) -> Grid {
    let mut next = grid.clone();
    relax_into(grid, &mut next, radius, threshold);
    next
}

/// Run `passes` smoothing passes, consuming the grid and returning the result.
pub fn relax(grid: Grid, radius: usize, threshold: f64, passes: usize) -> Grid {
    let mut current = grid;
    let mut next = current.clone();
    for pass in 0..passes {
        relax_into(&current, &mut next, radius, threshold);
        std::mem::swap(&mut current, &mut next);
        debug!("automaton pass {}:\n{}", pass + 1, current);
    }
    current
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn random_grid(width: usize, height: usize, seed: u64) -> Grid {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut grid = Grid::new(width, height);
        for pos in grid.positions().collect::<Vec<_>>() {
            let tile = match rng.random_range(0..10) {
                0..=4 => Tile::Wall,
                5..=7 => Tile::Floor,
                8 => Tile::Resource,
                _ => Tile::Entry,
            };
            grid.put(pos, tile);
        }
        grid
    }

    #[test]
    fn test_threshold_tie_becomes_wall() {
        // Centre (2, 2) of a 5x5 grid sees only interior cells.
        let mut grid = Grid::filled(5, 5, Tile::Floor);
        for (x, y) in [(1, 1), (2, 1), (3, 1), (1, 2)] {
            grid.set(x, y, Tile::Wall);
        }
        let centre = GridPos::new(2, 2);
        assert_eq!(wall_like_neighbors(&grid, centre, 1), 4);
        assert_eq!(relax_pass(&grid, 1, 4.0).at(centre), Some(Tile::Wall));

        grid.set(1, 2, Tile::Floor);
        assert_eq!(wall_like_neighbors(&grid, centre, 1), 3);
        assert_eq!(relax_pass(&grid, 1, 4.0).at(centre), Some(Tile::Floor));
    }

    #[test]
    fn test_centre_cell_counts_itself() {
        let mut grid = Grid::filled(5, 5, Tile::Floor);
        grid.set(2, 2, Tile::Wall);
        assert_eq!(wall_like_neighbors(&grid, GridPos::new(2, 2), 1), 1);
        assert_eq!(wall_like_neighbors(&grid, GridPos::new(2, 2), 0), 1);
    }

    #[test]
    fn test_border_counts_as_wall() {
        let grid = Grid::filled(8, 8, Tile::Floor);
        // Corner: 9 positions, 5 of them in row 0 / column 0 or beyond.
        assert_eq!(wall_like_neighbors(&grid, GridPos::new(1, 1), 1), 5);
        // Interior margin: x = 0 and x = -1 columns both count.
        assert_eq!(wall_like_neighbors(&grid, GridPos::new(0, 4), 1), 6);

        let relaxed = relax_pass(&grid, 1, 4.0);
        for x in 0..8 {
            assert_eq!(relaxed.get(x, 0), Some(Tile::Wall));
            assert_eq!(relaxed.get(x, 7), Some(Tile::Wall));
            assert_eq!(relaxed.get(0, x), Some(Tile::Wall));
            assert_eq!(relaxed.get(7, x), Some(Tile::Wall));
        }
    }

    #[test]
    fn test_huge_radius_still_counts_walls() {
        let mut grid = Grid::filled(6, 6, Tile::Floor);
        grid.set(2, 2, Tile::Wall);
        let centre = GridPos::new(2, 2);

        // Radius 10 on a 6x6 grid: 441 positions, 15 open interior cells.
        assert_eq!(wall_like_neighbors(&grid, centre, 10), 441 - 15);
        assert_eq!(wall_like_neighbors(&grid, centre, usize::MAX), usize::MAX - 15);
        assert_eq!(relax_pass(&grid, usize::MAX, 4.0).count(Tile::Wall), 36);
    }

    #[test]
    fn test_degenerate_grid_is_all_wall_like() {
        let grid = Grid::filled(2, 5, Tile::Floor);
        assert_eq!(wall_like_neighbors(&grid, GridPos::new(0, 2), 1), 9);
    }

    #[test]
    fn test_protected_tiles_survive_passes() {
        let grid = random_grid(20, 16, 9);
        let relaxed = relax(grid.clone(), 1, 4.0, 3);
        for pos in grid.positions() {
            let before = grid.at(pos).unwrap();
            if before.is_protected() {
                assert_eq!(relaxed.at(pos), Some(before), "at {}", pos);
            }
        }
    }

    #[test]
    fn test_pass_reads_snapshot_only() {
        // A mirror-symmetric grid stays symmetric; in-place updates would not.
        let mut grid = random_grid(12, 12, 31);
        for y in 0..12 {
            for x in 0..6 {
                let tile = grid.get(x, y).unwrap();
                grid.set(11 - x, y, tile);
            }
        }
        let relaxed = relax_pass(&grid, 1, 4.0);
        for y in 0..12 {
            for x in 0..6 {
                assert_eq!(relaxed.get(x, y), relaxed.get(11 - x, y));
            }
        }
    }

    #[test]
    fn test_zero_passes_is_identity() {
        let grid = random_grid(10, 10, 2);
        assert_eq!(relax(grid.clone(), 1, 4.0, 0), grid);
    }

    #[test]
    fn test_relax_matches_repeated_single_passes() {
        let grid = random_grid(15, 11, 77);
        let mut expected = grid.clone();
        for _ in 0..3 {
            expected = relax_pass(&expected, 1, 4.0);
        }
        assert_eq!(relax(grid, 1, 4.0, 3), expected);
    }
}
