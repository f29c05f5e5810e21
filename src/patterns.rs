use log::debug;

use crate::{pos, Grid, Pos};

/// A named shape, cells relative to its top-left corner.
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [Pos],
}

impl Pattern {
    pub fn placed_at(&self, origin: Pos) -> impl Iterator<Item = Pos> + '_ {
        self.cells.iter().map(move |&cell| origin + cell)
    }
}

pub const BLINKER: Pattern = Pattern {
    name: "blinker",
    cells: &[pos!(0, 0), pos!(0, 1), pos!(0, 2)],
};

pub const BLOCK: Pattern = Pattern {
    name: "block",
    cells: &[pos!(0, 0), pos!(0, 1), pos!(1, 0), pos!(1, 1)],
};

pub const GLIDER: Pattern = Pattern {
    name: "glider",
    cells: &[pos!(0, 1), pos!(1, 2), pos!(2, 0), pos!(2, 1), pos!(2, 2)],
};

/// The startup arrangement: a blinker, a block and two gliders.
pub const SEED: &[(Pattern, Pos)] = &[
    (BLINKER, pos!(9, 9)),
    (BLOCK, pos!(20, 20)),
    (GLIDER, pos!(2, 11)),
    (GLIDER, pos!(2, 16)),
];

pub fn seed_actives() -> impl Iterator<Item = Pos> {
    SEED.iter()
        .flat_map(|(pattern, origin)| pattern.placed_at(*origin))
}

pub fn seed_grid(rows: usize, cols: usize) -> Grid {
    for (pattern, origin) in SEED {
        debug!("seeding {} at {origin:?}", pattern.name);
    }
    Grid::with_actives(rows, cols, seed_actives())
}
