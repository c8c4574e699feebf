// step.rs - one synchronous generation of Conway's rules

use crate::grid::Grid;

/// Compute the next generation of `current`.
///
/// Every output cell is derived from the frozen input board; the grid being
/// written is never read back within the same step. The result has the same
/// dimensions as the input, and the input is left unchanged.
pub fn step(current: &Grid) -> Grid {
    let mut next = Grid::new(current.rows(), current.cols());

    for row in 0..current.rows() {
        for col in 0..current.cols() {
            let count = live_neighbors(current, row, col);

            let alive = match (current.is_alive(row, col), count) {
                (true, 2) | (true, 3) => true,   // Survival
                (false, 3)            => true,   // Birth
                _                     => false,  // Death or stays dead
            };
            next.set(row, col, alive);
        }
    }

    next
}

/// Count live cells among the up-to-8 neighbors of (row, col). Coordinates
/// beyond the board edge are excluded, never wrapped.
fn live_neighbors(grid: &Grid, row: usize, col: usize) -> u32 {
    let (r, c) = (row as isize, col as isize);

    let neighbors = [
        (r - 1, c - 1), (r - 1, c), (r - 1, c + 1),
        (r,     c - 1),             (r,     c + 1),
        (r + 1, c - 1), (r + 1, c), (r + 1, c + 1),
    ];

    let mut count = 0;
    for &(nr, nc) in &neighbors {
        if nr >= 0
            && nc >= 0
            && (nr as usize) < grid.rows()
            && (nc as usize) < grid.cols()
            && grid.is_alive(nr as usize, nc as usize)
        {
            count += 1;
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn grid(rows: &[Vec<u8>]) -> Grid {
        Grid::from_rows(rows).unwrap()
    }

    #[test]
    fn blinker_oscillates_with_period_two() {
        let horizontal = grid(&[vec![0, 0, 0], vec![1, 1, 1], vec![0, 0, 0]]);
        let vertical = grid(&[vec![0, 1, 0], vec![0, 1, 0], vec![0, 1, 0]]);

        let once = step(&horizontal);
        assert_eq!(once, vertical);
        assert_eq!(step(&once), horizontal);
    }

    #[test]
    fn block_is_a_still_life() {
        let block = grid(&[
            vec![0, 0, 0, 0],
            vec![0, 1, 1, 0],
            vec![0, 1, 1, 0],
            vec![0, 0, 0, 0],
        ]);
        assert_eq!(step(&block), block);
    }

    #[test]
    fn lone_cell_dies_of_underpopulation() {
        let lonely = grid(&[vec![0, 0, 0], vec![0, 1, 0], vec![0, 0, 0]]);
        assert_eq!(step(&lonely).live_cells(), 0);
    }

    #[test]
    fn crowded_cell_dies_of_overpopulation() {
        let cross = grid(&[vec![0, 1, 0], vec![1, 1, 1], vec![0, 1, 0]]);
        assert!(!step(&cross).is_alive(1, 1));
    }

    #[test]
    fn exactly_three_neighbors_give_birth() {
        let corner_l = grid(&[vec![1, 1, 0], vec![1, 0, 0], vec![0, 0, 0]]);
        assert!(step(&corner_l).is_alive(1, 1));
    }

    #[test]
    fn edges_truncate_instead_of_wrapping() {
        // On a wrapping board every cell of a full 1x3 row would see two
        // neighbors and survive; here the ends see only one and die.
        let row = grid(&[vec![1, 1, 1]]);
        assert_eq!(step(&row), grid(&[vec![0, 1, 0]]));
    }

    #[test]
    fn corner_sees_at_most_three_neighbors() {
        let full = grid(&[vec![1, 1], vec![1, 1]]);
        assert_eq!(step(&full), full);
    }

    #[test]
    fn degenerate_grids_step_to_equally_empty_grids() {
        for (rows, cols) in [(0, 0), (0, 7), (4, 0)] {
            let next = step(&Grid::new(rows, cols));
            assert_eq!((next.rows(), next.cols()), (rows, cols));
        }
    }

    fn arb_grid() -> impl Strategy<Value = Grid> {
        (0usize..6, 0usize..6).prop_flat_map(|(rows, cols)| {
            proptest::collection::vec(0u8..=1, rows * cols).prop_map(move |cells| {
                let mut board = Grid::new(rows, cols);
                for row in 0..rows {
                    for col in 0..cols {
                        board.set(row, col, cells[row * cols + col] == 1);
                    }
                }
                board
            })
        })
    }

    proptest! {
        #[test]
        fn step_is_deterministic(board in arb_grid()) {
            prop_assert_eq!(step(&board), step(&board));
        }

        #[test]
        fn step_preserves_dimensions(board in arb_grid()) {
            let next = step(&board);
            prop_assert_eq!(next.rows(), board.rows());
            prop_assert_eq!(next.cols(), board.cols());
        }

        #[test]
        fn step_leaves_its_input_unchanged(board in arb_grid()) {
            let snapshot = board.clone();
            let _ = step(&board);
            prop_assert_eq!(board, snapshot);
        }

        #[test]
        fn step_produces_only_binary_cells(board in arb_grid()) {
            let next = step(&board);
            for row in 0..next.rows() {
                for col in 0..next.cols() {
                    prop_assert!(next.get(row, col) <= 1);
                }
            }
        }
    }
}
