use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::grid::Grid;

pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

// Cell positions assume a board of roughly 50x50; anything that falls off a
// smaller board is simply skipped.
pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Glider",
        cells: &[(5, 6), (6, 7), (7, 5), (7, 6), (7, 7)],
    },
    Pattern {
        name: "Blinker",
        cells: &[(24, 23), (24, 24), (24, 25)],
    },
    Pattern {
        name: "Toad",
        cells: &[(23, 24), (23, 25), (23, 26), (24, 23), (24, 24), (24, 25)],
    },
    Pattern {
        name: "Beacon",
        cells: &[(9, 9), (9, 10), (10, 9), (10, 10), (11, 11), (11, 12), (12, 11), (12, 12)],
    },
    Pattern {
        name: "Pulsar",
        cells: &[
            // Top section
            (19, 23), (19, 24), (19, 25), (19, 29), (19, 30), (19, 31),
            (21, 21), (21, 26), (21, 28), (21, 33),
            (22, 21), (22, 26), (22, 28), (22, 33),
            (23, 21), (23, 26), (23, 28), (23, 33),
            (24, 23), (24, 24), (24, 25), (24, 29), (24, 30), (24, 31),
            // Bottom section (mirrored)
            (26, 23), (26, 24), (26, 25), (26, 29), (26, 30), (26, 31),
            (27, 21), (27, 26), (27, 28), (27, 33),
            (28, 21), (28, 26), (28, 28), (28, 33),
            (29, 21), (29, 26), (29, 28), (29, 33),
            (31, 23), (31, 24), (31, 25), (31, 29), (31, 30), (31, 31),
        ],
    },
    Pattern {
        name: "R-pentomino",
        cells: &[(24, 24), (24, 25), (23, 25), (25, 24), (25, 23)],
    },
    Pattern {
        name: "Gosper Glider Gun",
        cells: &[
            (4, 0), (4, 1), (5, 0), (5, 1),
            (4, 10), (5, 10), (6, 10), (3, 11), (7, 11), (2, 12), (8, 12),
            (2, 13), (8, 13), (5, 14), (3, 15), (7, 15), (4, 16), (5, 16),
            (6, 16), (5, 17), (2, 20), (3, 20), (4, 20), (2, 21), (3, 21),
            (4, 21), (1, 22), (5, 22), (0, 24), (1, 24), (5, 24), (6, 24),
            (2, 34), (3, 34), (2, 35), (3, 35),
        ],
    },
];

pub fn apply_pattern(grid: &mut Grid, pattern: &Pattern) {
    // Clear the board first
    grid.clear();

    for &(row, col) in pattern.cells {
        if row < grid.rows() && col < grid.cols() {
            grid.set(row, col, true);
        }
    }
}

pub fn apply_random_pattern(grid: &mut Grid, seed_value: u32) {
    // Clear everything first
    grid.clear();

    // Simple pseudo-random generator
    let mut hasher = DefaultHasher::new();
    seed_value.hash(&mut hasher);
    let mut seed = hasher.finish();

    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            seed = seed.wrapping_mul(1103515245).wrapping_add(12345);
            grid.set(row, col, seed % 3 == 0); // ~33% chance of being alive
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_pattern_clears_before_seeding() {
        let mut grid = Grid::new(50, 50);
        grid.set(40, 40, true);

        let blinker = PATTERNS.iter().find(|p| p.name == "Blinker").unwrap();
        apply_pattern(&mut grid, blinker);

        assert_eq!(grid.live_cells(), blinker.cells.len());
        assert!(!grid.is_alive(40, 40));
        assert!(grid.is_alive(24, 24));
    }

    #[test]
    fn out_of_bounds_pattern_cells_are_skipped() {
        let mut grid = Grid::new(5, 5);
        let gun = PATTERNS.iter().find(|p| p.name == "Gosper Glider Gun").unwrap();
        apply_pattern(&mut grid, gun);

        let in_bounds = gun.cells.iter().filter(|&&(r, c)| r < 5 && c < 5).count();
        assert_eq!(grid.live_cells(), in_bounds);
    }

    #[test]
    fn random_fill_is_deterministic_per_seed() {
        let mut a = Grid::new(20, 20);
        let mut b = Grid::new(20, 20);
        apply_random_pattern(&mut a, 7);
        apply_random_pattern(&mut b, 7);
        assert_eq!(a, b);

        let mut c = Grid::new(20, 20);
        apply_random_pattern(&mut c, 8);
        assert_ne!(a, c);
    }
}
