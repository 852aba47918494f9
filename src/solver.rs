use crate::grid::Grid;

pub trait Solver {
    /// Attempts to fill `grid` in place. Returns `true` once a full solution
    /// is found; on `false` every originally-empty cell is left empty.
    fn solve(&mut self, grid: &mut Grid) -> bool;
    fn name(&self) -> String;
}

pub struct BacktrackingSolver;
// Exhaustive backtracking solver.
// This solver tries every digit in the first empty cell, in row-major order.
// If it hits a dead end, it will backtrack and try a different digit.

impl Solver for BacktrackingSolver {
    fn solve(&mut self, grid: &mut Grid) -> bool {
        let (row, col) = match grid.find_empty_cell() {
            Some(cell) => cell,
            None => return true, // all cells filled, solution found
        };

        for digit in 1..=9 {
            if grid.is_valid(row, col, digit) {
                grid.cells[row][col] = Some(digit);
                if self.solve(grid) {
                    return true;
                }
                grid.cells[row][col] = None; // undo the assignment
            }
        }

        false // no digit fits this cell
    }

    fn name(&self) -> String {
        "Backtracking Solver".to_string()
    }
}

impl BacktrackingSolver {
    pub fn new() -> BacktrackingSolver {
        BacktrackingSolver
    }
}

impl Default for BacktrackingSolver {
    fn default() -> Self {
        Self::new()
    }
}
