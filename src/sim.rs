use crate::{pos, Grid, Pos};

/// Counts the live cells around `pos` over the edge-clamped window.
///
/// The window is scanned as the `top` row and the `bottom` row across
/// `[left, right]`, plus the `left` and `right` cells of the center row.
/// On a border the clamped indices collapse onto the center row or
/// column, so cells there (the center included) can be counted more than
/// once. Interior cells see exactly their eight neighbors. Positions
/// outside the grid have no neighbors.
pub fn neighbor_count(grid: &Grid, pos: Pos) -> usize {
    if !grid.contains(pos) {
        return 0;
    }
    let Pos { row, col } = pos;
    let top = row.saturating_sub(1);
    let bottom = (row + 1).min(grid.rows() - 1);
    let left = col.saturating_sub(1);
    let right = (col + 1).min(grid.cols() - 1);

    let scan = |row: usize| {
        (left..=right)
            .filter(|&col| grid.is_alive(pos!(row, col)))
            .count()
    };

    scan(top)
        + scan(bottom)
        + grid.is_alive(pos!(row, left)) as usize
        + grid.is_alive(pos!(row, right)) as usize
}

/// B3/S23.
pub fn next_state(is_active: bool, neighbor_count: usize) -> bool {
    match (is_active, neighbor_count) {
        (true, count) if count < 2 || count > 3 => false, // dies
        (true, _) => true,                                // stays
        (false, 3) => true,                               // becomes alive
        _ => false,                                       // stays dead
    }
}

/// Computes the next generation into a fresh grid; `grid` is only read.
pub fn step(grid: &Grid) -> Grid {
    let mut next = Grid::new(grid.rows(), grid.cols());
    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            let pos = pos!(row, col);
            let alive = next_state(grid.is_alive(pos), neighbor_count(grid, pos));
            next.set(pos, alive.into());
        }
    }
    next
}

/// Owns the current generation.
#[derive(Debug, Clone)]
pub struct Sim {
    grid: Grid,
    generation: u64,
}

impl Sim {
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            generation: 0,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Replaces the grid with its successor.
    pub fn tick(&mut self) -> &Grid {
        self.grid = step(&self.grid);
        self.generation += 1;
        &self.grid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROWS: usize = 32;
    const COLS: usize = 64;

    fn grid(actives: &[(usize, usize)]) -> Grid {
        Grid::with_actives(ROWS, COLS, actives.iter().map(|&(r, c)| pos!(r, c)))
    }

    #[test]
    fn rule_table() {
        assert!(!next_state(true, 0));
        assert!(!next_state(true, 1));
        assert!(next_state(true, 2));
        assert!(next_state(true, 3));
        assert!(!next_state(true, 4));
        assert!(!next_state(true, 8));
        assert!(next_state(false, 3));
        assert!(!next_state(false, 2));
        assert!(!next_state(false, 4));
    }

    #[test]
    fn step_keeps_dimensions() {
        for (rows, cols) in [(32, 64), (1, 1), (1, 5), (7, 1), (3, 3)] {
            let grid = Grid::with_actives(rows, cols, [pos!(0, 0)]);
            let next = step(&grid);
            assert_eq!((next.rows(), next.cols()), (rows, cols));
        }
    }

    #[test]
    fn dead_grid_stays_dead() {
        let next = step(&Grid::new(ROWS, COLS));
        assert_eq!(next.population(), 0);
    }

    #[test]
    fn interior_count_sees_eight_neighbors() {
        let all: Vec<_> = (9..=11)
            .flat_map(|r| (9..=11).map(move |c| (r, c)))
            .collect();
        let grid = grid(&all);
        assert_eq!(neighbor_count(&grid, pos!(10, 10)), 8);
        assert_eq!(neighbor_count(&grid, pos!(9, 9)), 3);
        assert_eq!(neighbor_count(&grid, pos!(8, 10)), 3);
    }

    #[test]
    fn exactly_three_neighbors_gives_life() {
        let dead_center = grid(&[(10, 9), (9, 11), (11, 10)]);
        assert!(step(&dead_center).is_alive(pos!(10, 10)));

        let live_center = grid(&[(10, 10), (10, 9), (9, 11), (11, 10)]);
        assert!(step(&live_center).is_alive(pos!(10, 10)));
    }

    #[test]
    fn block_is_still_life() {
        let block = grid(&[(20, 20), (20, 21), (21, 20), (21, 21)]);
        assert_eq!(step(&block), block);
    }

    #[test]
    fn blinker_has_period_two() {
        let horizontal = grid(&[(9, 9), (9, 10), (9, 11)]);
        let vertical = grid(&[(8, 10), (9, 10), (10, 10)]);
        let next = step(&horizontal);
        assert_eq!(next, vertical);
        assert_eq!(step(&next), horizontal);
    }

    #[test]
    fn input_is_not_mutated() {
        let horizontal = grid(&[(9, 9), (9, 10), (9, 11)]);
        let copy = horizontal.clone();
        let _ = step(&horizontal);
        assert_eq!(horizontal, copy);
    }

    #[test]
    fn lone_corner_cell_counts_itself_twice() {
        let corner = grid(&[(0, 0)]);
        assert_eq!(neighbor_count(&corner, pos!(0, 0)), 2);
        assert!(step(&corner).is_alive(pos!(0, 0)));

        let far_corner = grid(&[(ROWS - 1, COLS - 1)]);
        assert_eq!(neighbor_count(&far_corner, pos!(ROWS - 1, COLS - 1)), 2);
        assert!(step(&far_corner).is_alive(pos!(ROWS - 1, COLS - 1)));
    }

    #[test]
    fn lone_edge_cell_counts_itself_once() {
        let top = grid(&[(0, 5)]);
        assert_eq!(neighbor_count(&top, pos!(0, 5)), 1);
        assert_eq!(step(&top).population(), 0);

        let left = grid(&[(5, 0)]);
        assert_eq!(neighbor_count(&left, pos!(5, 0)), 1);
        assert_eq!(step(&left).population(), 0);
    }

    #[test]
    fn corner_birth_from_two_neighbors() {
        let grid = grid(&[(0, 1), (1, 0)]);
        assert_eq!(neighbor_count(&grid, pos!(0, 0)), 3);
        assert!(step(&grid).is_alive(pos!(0, 0)));
    }

    #[test]
    fn count_outside_grid_is_zero() {
        assert_eq!(neighbor_count(&Grid::new(0, 0), pos!(0, 0)), 0);
        assert_eq!(neighbor_count(&Grid::new(0, 5), pos!(0, 2)), 0);
        let full = Grid::with_actives(2, 2, [pos!(0, 0), pos!(0, 1), pos!(1, 0), pos!(1, 1)]);
        assert_eq!(neighbor_count(&full, pos!(2, 1)), 0);
        assert_eq!(step(&Grid::new(0, 0)), Grid::new(0, 0));
    }

    #[test]
    fn sim_ticks_replace_grid() {
        let mut sim = Sim::new(grid(&[(9, 9), (9, 10), (9, 11)]));
        assert_eq!(sim.generation(), 0);
        sim.tick();
        assert!(sim.grid().is_alive(pos!(8, 10)));
        sim.tick();
        assert_eq!(sim.generation(), 2);
        assert!(sim.grid().is_alive(pos!(9, 9)));
    }
}
