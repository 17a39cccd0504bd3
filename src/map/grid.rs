// src/map/grid.rs

use crate::map::Tile;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// 4-directional offsets (down, up, right, left).
static NEIGHBOR_OFFSETS: [(i32, i32); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

/// A cell coordinate inside a grid. `x` is the column, `y` the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct GridPos {
    pub x: usize,
    pub y: usize,
}

impl GridPos {
    pub fn new(x: usize, y: usize) -> Self {
        GridPos { x, y }
    }
}

impl fmt::Display for GridPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseGridError {
    #[error("grid has no rows")]
    Empty,
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        found: usize,
        expected: usize,
    },
    #[error("unknown glyph {glyph:?} at ({x}, {y})")]
    UnknownGlyph { glyph: char, x: usize, y: usize },
}

/// The mutable 2-D tile buffer a level is generated into.
///
/// Tiles are stored row-major. Every signed access is bounds-checked; writes
/// outside the grid are dropped and reads outside it return `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Grid {
    width: usize,
    height: usize,
    tiles: Vec<Tile>,
}

impl Grid {
    /// Create a wall-filled grid.
    pub fn new(width: usize, height: usize) -> Self {
        Self::filled(width, height, Tile::Wall)
    }

    pub fn filled(width: usize, height: usize, tile: Tile) -> Self {
        Grid {
            width,
            height,
            tiles: vec![tile; width * height],
        }
    }

    /// Parse a grid from glyph rows (`#`, space, `.`, `E`).
    pub fn from_rows(rows: &[&str]) -> Result<Self, ParseGridError> {
        let width = rows.first().ok_or(ParseGridError::Empty)?.chars().count();
        let mut tiles = Vec::with_capacity(width * rows.len());

        for (y, row) in rows.iter().enumerate() {
            let found = row.chars().count();
            if found != width {
                return Err(ParseGridError::RaggedRow {
                    row: y,
                    found,
                    expected: width,
                });
            }
            for (x, glyph) in row.chars().enumerate() {
                let tile = Tile::from_glyph(glyph)
                    .ok_or(ParseGridError::UnknownGlyph { glyph, x, y })?;
                tiles.push(tile);
            }
        }

        Ok(Grid {
            width,
            height: rows.len(),
            tiles,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x < self.width && y < self.height {
            Some(y * self.width + x)
        } else {
            None
        }
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        self.index(x, y).is_some()
    }

    pub fn get(&self, x: i32, y: i32) -> Option<Tile> {
        self.index(x, y).map(|i| self.tiles[i])
    }

    /// Write a tile. Returns `false` (and writes nothing) when out of bounds.
    pub fn set(&mut self, x: i32, y: i32, tile: Tile) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.tiles[i] = tile;
                true
            }
            None => false,
        }
    }

    pub fn at(&self, pos: GridPos) -> Option<Tile> {
        if pos.x < self.width && pos.y < self.height {
            Some(self.tiles[pos.y * self.width + pos.x])
        } else {
            None
        }
    }

    pub fn put(&mut self, pos: GridPos, tile: Tile) -> bool {
        if pos.x < self.width && pos.y < self.height {
            self.tiles[pos.y * self.width + pos.x] = tile;
            true
        } else {
            false
        }
    }

    /// All positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = GridPos> {
        let width = self.width;
        (0..self.height).flat_map(move |y| (0..width).map(move |x| GridPos::new(x, y)))
    }

    /// In-bounds 4-directional neighbors of `pos`.
    pub fn neighbors(&self, pos: GridPos) -> impl Iterator<Item = GridPos> + '_ {
        NEIGHBOR_OFFSETS.iter().filter_map(move |&(dx, dy)| {
            let nx = pos.x as i32 + dx;
            let ny = pos.y as i32 + dy;
            if self.in_bounds(nx, ny) {
                Some(GridPos::new(nx as usize, ny as usize))
            } else {
                None
            }
        })
    }

    pub fn count(&self, tile: Tile) -> usize {
        self.tiles.iter().filter(|&&t| t == tile).count()
    }

    /// First cell holding `tile` inside the given rectangle, scanning row-major.
    /// The rectangle is clipped to the grid.
    pub fn find_in(
        &self,
        tile: Tile,
        origin_x: i32,
        origin_y: i32,
        width: usize,
        height: usize,
    ) -> Option<GridPos> {
        for y in origin_y..origin_y + height as i32 {
            for x in origin_x..origin_x + width as i32 {
                if self.get(x, y) == Some(tile) {
                    return Some(GridPos::new(x as usize, y as usize));
                }
            }
        }
        None
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> {
        self.tiles.chunks(self.width.max(1))
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for tile in row {
                write!(f, "{} ", tile.glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// The set of cells visited by a flood fill. Recomputed, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reachability {
    width: usize,
    height: usize,
    visited: Vec<bool>,
}

impl Reachability {
    pub fn empty(width: usize, height: usize) -> Self {
        Reachability {
            width,
            height,
            visited: vec![false; width * height],
        }
    }

    /// Mark a cell. Returns `true` if it was not visited before.
    pub fn mark(&mut self, pos: GridPos) -> bool {
        if pos.x >= self.width || pos.y >= self.height {
            return false;
        }
        let slot = &mut self.visited[pos.y * self.width + pos.x];
        let fresh = !*slot;
        *slot = true;
        fresh
    }

    pub fn contains(&self, pos: GridPos) -> bool {
        pos.x < self.width && pos.y < self.height && self.visited[pos.y * self.width + pos.x]
    }

    pub fn len(&self) -> usize {
        self.visited.iter().filter(|&&v| v).count()
    }

    pub fn is_empty(&self) -> bool {
        !self.visited.contains(&true)
    }

    /// First visited cell in row-major order.
    pub fn first(&self) -> Option<GridPos> {
        self.visited
            .iter()
            .position(|&v| v)
            .map(|i| GridPos::new(i % self.width, i / self.width))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_wall_filled() {
        let grid = Grid::new(12, 7);
        assert_eq!(grid.width(), 12);
        assert_eq!(grid.height(), 7);
        assert_eq!(grid.count(Tile::Wall), 84);
    }

    #[test]
    fn test_out_of_bounds_access() {
        let mut grid = Grid::new(10, 10);
        assert_eq!(grid.get(-1, 0), None);
        assert_eq!(grid.get(0, 10), None);
        assert!(!grid.set(10, 0, Tile::Floor));
        assert!(!grid.set(0, -3, Tile::Floor));
        assert_eq!(grid.count(Tile::Wall), 100);

        assert!(grid.set(9, 9, Tile::Floor));
        assert_eq!(grid.get(9, 9), Some(Tile::Floor));
        assert_eq!(grid.at(GridPos::new(9, 9)), Some(Tile::Floor));
        assert!(!grid.put(GridPos::new(10, 2), Tile::Floor));
    }

    #[test]
    fn test_neighbors_clipped_at_corner() {
        let grid = Grid::new(4, 4);
        let corner: Vec<_> = grid.neighbors(GridPos::new(0, 0)).collect();
        assert_eq!(corner.len(), 2);
        assert!(corner.contains(&GridPos::new(1, 0)));
        assert!(corner.contains(&GridPos::new(0, 1)));
        assert_eq!(grid.neighbors(GridPos::new(2, 2)).count(), 4);
    }

    #[test]
    fn test_from_rows_and_display() {
        let grid = Grid::from_rows(&["###", "#E#", "#.#"]).unwrap();
        assert_eq!(grid.get(1, 1), Some(Tile::Entry));
        assert_eq!(grid.get(1, 2), Some(Tile::Resource));
        assert_eq!(grid.to_string(), "# # # \n# E # \n# . # \n");
    }

    #[test]
    fn test_from_rows_rejects_bad_input() {
        assert_eq!(Grid::from_rows(&[]), Err(ParseGridError::Empty));
        assert_eq!(
            Grid::from_rows(&["###", "##"]),
            Err(ParseGridError::RaggedRow {
                row: 1,
                found: 2,
                expected: 3
            })
        );
        assert_eq!(
            Grid::from_rows(&["#x#"]),
            Err(ParseGridError::UnknownGlyph {
                glyph: 'x',
                x: 1,
                y: 0
            })
        );
    }

    #[test]
    fn test_find_in_clips_rectangle() {
        let mut grid = Grid::new(6, 6);
        grid.set(4, 2, Tile::Entry);
        assert_eq!(grid.find_in(Tile::Entry, 3, 1, 10, 10), Some(GridPos::new(4, 2)));
        assert_eq!(grid.find_in(Tile::Entry, -5, -5, 8, 8), None);
    }

    #[test]
    fn test_reachability_first_is_row_major() {
        let mut reach = Reachability::empty(5, 5);
        assert!(reach.is_empty());
        assert!(reach.mark(GridPos::new(3, 2)));
        assert!(reach.mark(GridPos::new(1, 3)));
        assert!(!reach.mark(GridPos::new(3, 2)));
        assert_eq!(reach.len(), 2);
        assert_eq!(reach.first(), Some(GridPos::new(3, 2)));
        assert!(!reach.contains(GridPos::new(0, 0)));
    }
}
