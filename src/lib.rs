pub mod grid;
pub mod solver;

pub use grid::Grid;
pub use solver::{BacktrackingSolver, Solver};
