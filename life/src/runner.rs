// runner.rs - paced presentation loop around the stepper

use std::thread;
use std::time::Duration;

use crate::grid::Grid;
use crate::step::step;

/// Advance `board` for `n_steps` generations, handing each new board and its
/// 1-based step index to `render`, pausing between frames.
///
/// The pause after the final frame is skipped, and `n_steps == 0` neither
/// steps nor renders. Returns the final board so a caller can continue from
/// where the run ended.
pub fn run<F>(mut board: Grid, n_steps: usize, pause: Duration, mut render: F) -> Grid
where
    F: FnMut(&Grid, usize),
{
    for step_index in 0..n_steps {
        board = step(&board);
        render(&board, step_index + 1);

        // Wait for the next step
        if step_index + 1 < n_steps {
            thread::sleep(pause);
        }
    }
    board
}
