// src/templates/catalog.rs
// Hand-authored room and corridor patterns. Immutable, shared by reference.

use crate::map::Tile;

const W: Tile = Tile::Wall;
const F: Tile = Tile::Floor;
const R: Tile = Tile::Resource;
const E: Tile = Tile::Entry;

/// A named rectangular pattern of tiles.
#[derive(Debug, PartialEq, Eq)]
pub struct Template {
    pub name: &'static str,
    rows: &'static [&'static [Tile]],
}

impl Template {
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, |row| row.len())
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn get(&self, x: usize, y: usize) -> Option<Tile> {
        self.rows.get(y).and_then(|row| row.get(x)).copied()
    }

    pub fn rows(&self) -> &'static [&'static [Tile]] {
        self.rows
    }
}

pub static START_AREA: Template = Template {
    name: "start_area",
    rows: &[
        &[W, W, W, W, W],
        &[W, F, E, F, W],
        &[W, F, F, F, W],
        &[W, W, W, W, W],
    ],
};

pub static BASIC_CORRIDOR: Template = Template {
    name: "basic_corridor",
    rows: &[
        &[W, W, W],
        &[W, F, W],
        &[W, W, W],
    ],
};

pub static CURVED_CORRIDOR: Template = Template {
    name: "curved_corridor",
    rows: &[
        &[W, W, W, W],
        &[W, F, F, W],
        &[W, F, W, W],
        &[W, F, F, W],
        &[W, W, W, W],
    ],
};

pub static FOUR_WAY_CROSSROADS: Template = Template {
    name: "four_way_crossroads",
    rows: &[
        &[W, W, W, W, W],
        &[W, F, W, F, W],
        &[W, F, F, F, W],
        &[W, F, W, F, W],
        &[W, W, W, W, W],
    ],
};

pub static T_JUNCTION: Template = Template {
    name: "t_junction",
    rows: &[
        &[W, W, W, W, W],
        &[W, F, W, F, W],
        &[W, F, F, F, W],
        &[W, W, W, W, W],
    ],
};

pub static SMALL_MINERAL_ROOM: Template = Template {
    name: "small_mineral_room",
    rows: &[
        &[W, W, W, W, W, W, W],
        &[W, R, F, F, R, F, W],
        &[W, F, R, R, R, R, W],
        &[W, F, R, F, R, F, W],
        &[W, W, W, W, W, W, W],
    ],
};

pub static OPEN_CHAMBER: Template = Template {
    name: "open_chamber",
    rows: &[
        &[F, F, F, F, F, F, F, F, F],
        &[F, W, W, W, W, W, W, W, F],
        &[F, W, R, W, W, W, W, W, F],
        &[F, W, W, R, R, W, W, W, F],
        &[F, R, W, R, W, W, W, W, F],
        &[F, W, W, W, W, W, W, W, F],
        &[F, F, F, F, F, F, F, F, F],
    ],
};

pub static TREASURE_ROOM: Template = Template {
    name: "treasure_room",
    rows: &[
        &[W, W, W, W, W, W, W],
        &[W, F, F, F, F, F, W],
        &[W, F, W, W, W, F, W],
        &[W, F, F, F, F, F, W],
        &[W, F, W, W, W, F, W],
        &[W, F, F, F, F, F, W],
        &[W, W, W, W, W, W, W],
    ],
};

pub static NARROW_TUNNEL: Template = Template {
    name: "narrow_tunnel",
    rows: &[
        &[W, W, W],
        &[W, F, W],
        &[W, F, W],
        &[W, F, W],
        &[W, W, W],
    ],
};

pub static ROCK_BLOCKAGE: Template = Template {
    name: "rock_blockage",
    rows: &[
        &[W, W, W, W, W],
        &[W, W, F, W, W],
        &[W, W, W, W, W],
    ],
};

/// Every template in the library.
pub static CATALOG: [&Template; 10] = [
    &START_AREA,
    &BASIC_CORRIDOR,
    &CURVED_CORRIDOR,
    &FOUR_WAY_CROSSROADS,
    &T_JUNCTION,
    &SMALL_MINERAL_ROOM,
    &OPEN_CHAMBER,
    &TREASURE_ROOM,
    &NARROW_TUNNEL,
    &ROCK_BLOCKAGE,
];

/// Auxiliary rooms scattered after the start area, in placement order.
pub static AUXILIARY_ROOMS: [&Template; 9] = [
    &SMALL_MINERAL_ROOM,
    &FOUR_WAY_CROSSROADS,
    &TREASURE_ROOM,
    &NARROW_TUNNEL,
    &CURVED_CORRIDOR,
    &BASIC_CORRIDOR,
    &T_JUNCTION,
    &OPEN_CHAMBER,
    &ROCK_BLOCKAGE,
];

pub fn by_name(name: &str) -> Option<&'static Template> {
    CATALOG.iter().copied().find(|t| t.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_templates_are_rectangular() {
        for template in CATALOG.iter() {
            assert!(template.height() > 0, "{} is empty", template.name);
            for row in template.rows() {
                assert_eq!(row.len(), template.width(), "{} is ragged", template.name);
            }
        }
    }

    #[test]
    fn test_only_start_area_has_entry() {
        for template in CATALOG.iter() {
            let entries = template
                .rows()
                .iter()
                .flat_map(|row| row.iter())
                .filter(|&&t| t == Tile::Entry)
                .count();
            let expected = if template.name == START_AREA.name { 1 } else { 0 };
            assert_eq!(entries, expected, "{}", template.name);
        }
    }

    #[test]
    fn test_lookup_by_name() {
        assert_eq!(by_name("treasure_room"), Some(&TREASURE_ROOM));
        assert_eq!(by_name("missing"), None);
        assert_eq!(SMALL_MINERAL_ROOM.width(), 7);
        assert_eq!(SMALL_MINERAL_ROOM.height(), 5);
        assert_eq!(START_AREA.get(2, 1), Some(Tile::Entry));
        assert_eq!(START_AREA.get(5, 0), None);
    }
}
