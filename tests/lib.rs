use sudoku_csp::{
    solve, solve_traced, AssignmentLog, Candidates, Cell, GridParseError, SolveError, Solver,
    Variant,
};
use sudoku_csp::{Grid, Topology};

// Norvig's easy puzzle, fully determined by propagation alone
const EASY: &str =
    "..3.2.6..9..3.5..1..18.64....81.29..7.......8..67.82....26.95..8..2.3..9..5.1.3..";
const EASY_SOLUTION: &str =
    "483921657967345821251876493548132976729564138136798245372689514814253769695417382";

// needs guessing on top of propagation
const HARD: &str =
    "4.....8.5.3..........7......2.....6.....8.4......1.......6.3.7.5..2.....1.4......";

const DIAGONAL: &str =
    "2.............62....1....7...6..8...3...9...7...6..4...4....8....52.............3";

#[test]
fn easy_sudoku_has_known_solution() {
    let solution = solve(EASY, Variant::Standard).unwrap();
    assert_eq!(solution.to_str_line(), EASY_SOLUTION);
}

#[test]
fn easy_sudoku_solution_is_unique() {
    let grid = Grid::from_str_line(EASY).unwrap();
    let solution = Solver::new(Variant::Standard).solve_unique(&grid).unwrap();
    assert_eq!(solution.to_str_line(), EASY_SOLUTION);
}

#[test]
fn hard_sudoku_requires_search_and_solves() {
    let grid = Grid::from_str_line(HARD).unwrap();
    let solver = Solver::new(Variant::Standard);

    // propagation alone stalls on this puzzle
    let mut candidates = Candidates::from_grid(&grid);
    solver
        .propagate(&mut candidates, &mut AssignmentLog::new())
        .unwrap();
    assert!(!candidates.is_solved());

    let solution = solver.solve_one(&grid).unwrap();
    assert!(solution.is_solved(Variant::Standard));
    for cell in Cell::all() {
        if let Some(given) = grid.digit(cell) {
            assert_eq!(solution.digit(cell), Some(given));
        }
    }
}

#[test]
fn diagonal_example_solves_under_both_diagonals() {
    let solution = solve(DIAGONAL, Variant::Diagonal).unwrap();
    assert!(solution.is_solved(Variant::Diagonal));
    // a diagonal solution is in particular a standard solution
    assert!(solution.is_solved(Variant::Standard));

    let grid = Grid::from_str_line(DIAGONAL).unwrap();
    for cell in Cell::all() {
        if let Some(given) = grid.digit(cell) {
            assert_eq!(solution.digit(cell), Some(given));
        }
    }
}

#[test]
fn solving_is_deterministic() {
    for &(line, variant) in &[
        (EASY, Variant::Standard),
        (HARD, Variant::Standard),
        (DIAGONAL, Variant::Diagonal),
    ] {
        let first = solve(line, variant).unwrap();
        let second = solve(line, variant).unwrap();
        assert_eq!(first.to_str_line(), second.to_str_line());
    }
}

#[test]
fn propagation_is_idempotent_at_the_fixed_point() {
    let grid = Grid::from_str_line(HARD).unwrap();
    let solver = Solver::new(Variant::Standard);
    let mut log = AssignmentLog::new();

    let mut candidates = Candidates::from_grid(&grid);
    solver.propagate(&mut candidates, &mut log).unwrap();
    let fixed_point = candidates.clone();
    solver.propagate(&mut candidates, &mut log).unwrap();
    assert_eq!(candidates, fixed_point);
}

#[test]
fn propagation_never_grows_a_candidate_set() {
    let grid = Grid::from_str_line(HARD).unwrap();
    let before = Candidates::from_grid(&grid);
    let mut after = before.clone();
    Solver::new(Variant::Standard)
        .propagate(&mut after, &mut AssignmentLog::new())
        .unwrap();

    for cell in Cell::all() {
        assert!(before.at(cell).contains(after.at(cell)), "{}", cell);
    }
}

#[test]
fn contradictory_givens_yield_no_solution() {
    // two 5s in row A
    let line = format!("5...5{}", ".".repeat(76));
    assert_eq!(solve(&line, Variant::Standard), Err(SolveError::NoSolution));
}

#[test]
fn unsolvable_is_not_conflated_with_malformed() {
    let short = ".".repeat(80);
    match solve(&short, Variant::Standard) {
        Err(SolveError::Parse(GridParseError::NotEnoughCells(80))) => {}
        other => panic!("expected a parse error, got {:?}", other),
    }

    let long = ".".repeat(82);
    assert_eq!(
        solve(&long, Variant::Standard),
        Err(SolveError::Parse(GridParseError::TooManyCells)),
    );

    let letters = format!("{}a{}", ".".repeat(40), ".".repeat(40));
    match solve(&letters, Variant::Standard) {
        Err(SolveError::Parse(GridParseError::InvalidEntry(entry))) => {
            assert_eq!(entry.cell, 40);
            assert_eq!(entry.ch, 'a');
        }
        other => panic!("expected a parse error, got {:?}", other),
    }
}

#[test]
fn empty_grid_has_many_solutions() {
    let empty = Grid::from_str_line(&".".repeat(81)).unwrap();
    let solver = Solver::new(Variant::Standard);

    assert_eq!(
        solver.solve_unique(&empty),
        Err(SolveError::MultipleSolutions),
    );

    let solutions = solver.solve_at_most(&empty, 2).unwrap();
    assert_eq!(solutions.len(), 2);
    assert_ne!(solutions[0], solutions[1]);
    for solution in &solutions {
        assert!(solution.is_solved(Variant::Standard));
    }
}

#[test]
fn assignment_log_records_every_solved_cell() {
    let mut log = AssignmentLog::new();
    let solution = solve_traced(EASY, Variant::Standard, &mut log).unwrap();

    // propagation solves the easy puzzle without guessing, so each of the
    // initially open cells is recorded exactly once
    let grid = Grid::from_str_line(EASY).unwrap();
    assert_eq!(log.len(), 81 - grid.n_clues());

    let last = log.snapshots().last().unwrap();
    assert!(last.is_solved());
    assert_eq!(last.to_grid(), Some(solution));
}

#[test]
fn untraced_solving_matches_traced_solving() {
    let mut log = AssignmentLog::new();
    let traced = solve_traced(DIAGONAL, Variant::Diagonal, &mut log).unwrap();
    let untraced = solve(DIAGONAL, Variant::Diagonal).unwrap();
    assert_eq!(traced, untraced);
    assert!(!log.is_empty());
}

#[test]
fn peer_sets_grow_with_the_diagonal_variant() {
    let standard = Topology::get(Variant::Standard);
    let diagonal = Topology::get(Variant::Diagonal);
    let center = Cell::from_row_col(4, 4);
    assert!(diagonal.peers(center).len() > standard.peers(center).len());
    assert!(diagonal.peers(center).contains(Cell::from_row_col(0, 0)));
    assert!(diagonal.peers(center).contains(Cell::from_row_col(0, 8)));
}
