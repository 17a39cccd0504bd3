// src/templates/mod.rs
pub mod catalog;
pub mod placer;

pub use catalog::{
    by_name, Template, AUXILIARY_ROOMS, BASIC_CORRIDOR, CATALOG, CURVED_CORRIDOR,
    FOUR_WAY_CROSSROADS, NARROW_TUNNEL, OPEN_CHAMBER, ROCK_BLOCKAGE, SMALL_MINERAL_ROOM,
    START_AREA, TREASURE_ROOM, T_JUNCTION,
};
pub use placer::{place, place_random, place_start_area, random_origin, StartArea};
