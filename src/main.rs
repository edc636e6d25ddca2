use std::process;
use sudoku_csp::{solve, Variant};

// the diagonal puzzle solved when no grid is passed on the command line
const EXAMPLE: &str =
    "2.............62....1....7...6..8...3...9...7...6..4...4....8....52.............3";

fn main() {
    env_logger::init();

    let line = std::env::args().nth(1).unwrap_or_else(|| EXAMPLE.to_string());
    match solve(&line, Variant::Diagonal) {
        Ok(solution) => println!("{}", solution),
        Err(err) => {
            eprintln!("{}", err);
            process::exit(1);
        }
    }
}
