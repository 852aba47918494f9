use std::env;
use std::fs::File;
use std::io::{prelude::*, BufReader};
use std::time::Instant;

use color_eyre::eyre::{Result, WrapErr};
use csv::Writer;
use log::{debug, info};
use prettytable::{format, Cell, Row, Table};

use sudoku_solver::{BacktrackingSolver, Grid, Solver};

// The starting puzzle, 0 marking blanks.
const DEFAULT_PUZZLE: [[u8; 9]; 9] = [
    [5, 3, 0, 0, 7, 0, 0, 0, 0],
    [6, 0, 0, 1, 9, 5, 0, 0, 0],
    [0, 9, 8, 0, 0, 0, 0, 6, 0],
    [8, 0, 0, 0, 6, 0, 0, 0, 3],
    [4, 0, 0, 8, 0, 3, 0, 0, 1],
    [7, 0, 0, 0, 2, 0, 0, 0, 6],
    [0, 6, 0, 0, 0, 0, 2, 8, 0],
    [0, 0, 0, 4, 1, 9, 0, 0, 5],
    [0, 0, 0, 0, 8, 0, 0, 7, 9],
];

fn main() -> Result<()> {
    color_eyre::install()?;
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    match args.get(1) {
        None => solve_default(),
        Some(path) => {
            let report = args.get(2).map(String::as_str).unwrap_or("report.csv");
            solve_batch(path, report)
        }
    }
}

/// Solves the built-in puzzle and prints it before and after.
fn solve_default() -> Result<()> {
    let mut grid = Grid::from_rows(DEFAULT_PUZZLE);
    println!("Puzzle:");
    print_grid(&grid);

    let mut solver = BacktrackingSolver::new();
    let start = Instant::now();
    let solved = solver.solve(&mut grid);
    info!("{} finished in {:?}", solver.name(), start.elapsed());

    if solved {
        println!("Solution:");
        print_grid(&grid);
    } else {
        println!("No solution exists!");
    }

    Ok(())
}

/// Solves one 81-character puzzle per line of `path` and writes a CSV report.
fn solve_batch(path: &str, report: &str) -> Result<()> {
    let file = File::open(path).wrap_err_with(|| format!("failed to open puzzle file {}", path))?;
    let reader = BufReader::new(file);

    let mut writer = Writer::from_path(report)?;
    writer.write_record(["Puzzle", "Solver", "Time", "Solved"])?;

    for line in reader.lines() {
        let line = line?;
        let puzzle = line.trim();
        if puzzle.is_empty() {
            continue;
        }
        let mut grid = Grid::from_line(puzzle)?;

        let mut solver = BacktrackingSolver::new();
        let start = Instant::now();
        let solved = solver.solve(&mut grid);
        let duration = start.elapsed();

        debug!("{} -> solved={} in {:?}", puzzle, solved, duration);

        let name = solver.name();
        let time = format!("{:?}", duration);
        let correct = (solved && grid.is_solved()).to_string();
        writer.write_record([puzzle, name.as_str(), time.as_str(), correct.as_str()])?;

        writer.flush()?;
    }

    info!("report written to {}", report);
    Ok(())
}

fn print_grid(grid: &Grid) {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_BOX_CHARS);
    for r in 0..9 {
        let cells = (0..9)
            .map(|c| match grid.get(r, c) {
                Some(digit) => Cell::new(&digit.to_string()),
                None => Cell::new("."),
            })
            .collect();
        table.add_row(Row::new(cells));
    }
    table.printstd();
}
