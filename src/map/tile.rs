// src/map/tile.rs

use serde::{Deserialize, Serialize};
use std::fmt;

/// The atomic cell value of a mine level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tile {
    Wall,
    Floor,
    Resource,
    Entry,
}

impl Tile {
    pub fn glyph(&self) -> char {
        match self {
            Tile::Wall => '#',
            Tile::Floor => ' ',
            Tile::Resource => '.',
            Tile::Entry => 'E',
        }
    }

    pub fn from_glyph(glyph: char) -> Option<Self> {
        match glyph {
            '#' => Some(Tile::Wall),
            ' ' => Some(Tile::Floor),
            '.' => Some(Tile::Resource),
            'E' => Some(Tile::Entry),
            _ => None,
        }
    }

    /// Entry and Resource tiles survive automaton smoothing untouched.
    pub fn is_protected(&self) -> bool {
        matches!(self, Tile::Entry | Tile::Resource)
    }

    /// Tiles a flood fill may walk through.
    pub fn is_traversable(&self) -> bool {
        !matches!(self, Tile::Wall)
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}
