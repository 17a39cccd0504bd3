// src/generator/connectivity.rs
// Flood-fill reachability and the repair pass that carves L-shaped corridors
// until every open cell is reachable from the entry.

use std::collections::VecDeque;

use crate::error::{Diagnostic, Diagnostics};
use crate::map::{Grid, GridPos, Reachability, Tile};
use log::{debug, info};

/// Breadth-first 4-directional flood fill over traversable tiles
/// (Floor, Resource, Entry).
///
/// An untraversable or out-of-bounds `start` yields an empty set and a
/// `FloodFillSeedUntraversable` diagnostic.
pub fn flood_fill(grid: &Grid, start: GridPos, diagnostics: &mut Diagnostics) -> Reachability {
    let mut visited = Reachability::empty(grid.width(), grid.height());

    match grid.at(start) {
        Some(tile) if tile.is_traversable() => {}
        _ => {
            diagnostics.report(Diagnostic::FloodFillSeedUntraversable { pos: start });
            return visited;
        }
    }

    let mut queue = VecDeque::new();
    visited.mark(start);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        for next in grid.neighbors(current) {
            let open = grid.at(next).is_some_and(|t| t.is_traversable());
            if open && visited.mark(next) {
                queue.push_back(next);
            }
        }
    }
    visited
}

fn clear(grid: &mut Grid, x: usize, y: usize) {
    let pos = GridPos::new(x, y);
    if matches!(grid.at(pos), Some(Tile::Wall) | Some(Tile::Resource)) {
        grid.put(pos, Tile::Floor);
    }
}

/// Carve an L-shaped corridor from `from` to `to`: horizontally along
/// `from`'s row, then vertically along `to`'s column. Wall and Resource cells
/// on the path, landing cell included, become Floor.
pub fn connect_points(grid: &mut Grid, from: GridPos, to: GridPos) {
    let (mut x, mut y) = (from.x, from.y);
    while x != to.x {
        clear(grid, x, y);
        if x < to.x {
            x += 1;
        } else {
            x -= 1;
        }
    }
    while y != to.y {
        clear(grid, x, y);
        if y < to.y {
            y += 1;
        } else {
            y -= 1;
        }
    }
    clear(grid, x, y);
}

/// Connect every isolated open region to the region containing `entry`.
///
/// Cells are scanned row-major. Each Floor or Resource cell that the entry
/// cannot reach seeds a flood fill over a snapshot of the grid; the first
/// cell of that region in row-major order becomes its anchor and is joined
/// to the entry with [`connect_points`]. Reachability is recomputed after
/// every connection. Returns the number of regions connected.
///
/// If `entry` is not traversable nothing is carved.
pub fn repair(grid: &mut Grid, entry: GridPos, diagnostics: &mut Diagnostics) -> usize {
    let mut reachable = flood_fill(grid, entry, diagnostics);
    if reachable.is_empty() {
        return 0;
    }

    let mut connected = 0;
    let positions: Vec<_> = grid.positions().collect();
    for pos in positions {
        let orphan = matches!(grid.at(pos), Some(Tile::Floor) | Some(Tile::Resource));
        if !orphan || reachable.contains(pos) {
            continue;
        }

        let snapshot = grid.clone();
        let region = flood_fill(&snapshot, pos, diagnostics);
        let Some(anchor) = region.first() else {
            continue;
        };

        debug!(
            "connecting isolated region of {} cells at {} to {}",
            region.len(),
            anchor,
            entry
        );
        connect_points(grid, anchor, entry);
        connected += 1;
        reachable = flood_fill(grid, entry, diagnostics);
    }

    if connected == 0 {
        info!("no isolated regions found");
    } else {
        info!("connected {} isolated regions", connected);
        debug!("grid after connecting regions:\n{}", grid);
    }
    connected
}

/// Open cells (Floor or Resource) the entry cannot reach.
pub fn unreachable_cells(grid: &Grid, entry: GridPos) -> Vec<GridPos> {
    let mut diagnostics = Diagnostics::new();
    let reachable = flood_fill(grid, entry, &mut diagnostics);
    grid.positions()
        .filter(|&pos| matches!(grid.at(pos), Some(Tile::Floor) | Some(Tile::Resource)))
        .filter(|&pos| !reachable.contains(pos))
        .collect()
}
