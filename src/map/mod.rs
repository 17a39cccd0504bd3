// src/map/mod.rs
pub mod grid;
pub mod tile;

pub use grid::{Grid, GridPos, ParseGridError, Reachability};
pub use tile::Tile;
