use crate::board::Digit;
use crate::candidates::Candidates;
use crate::errors::Contradiction;
use crate::helper::DigitArray;
use crate::topology::Topology;
use crate::trace::AssignmentLog;
use crunchy::unroll;

// A digit with exactly one remaining place in a unit must go there.
// A digit with no remaining place makes the unit impossible.
pub(crate) fn only_choice(
    candidates: &mut Candidates,
    topology: &Topology,
    assignments: &mut AssignmentLog,
) -> Result<bool, Contradiction> {
    let mut changed = false;
    for unit in topology.units() {
        let cells = unit.cells();

        let mut n_places = DigitArray([0u8; 9]);
        let mut place = DigitArray([cells[0]; 9]);
        for &cell in cells.iter() {
            for digit in candidates.at(cell) {
                n_places[digit] += 1;
                place[digit] = cell;
            }
        }

        unroll! {
            for index in 0..9 {
                let digit = Digit::from_index(index as u8);
                match n_places[digit] {
                    0 => return Err(Contradiction),
                    1 => {
                        let cell = place[digit];
                        if candidates.at(cell).len() > 1 {
                            candidates.set(cell, digit.as_set());
                            changed = true;
                            assignments.record(candidates);
                        }
                    }
                    _ => {}
                }
            }
        }
    }
    Ok(changed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Cell, Grid};
    use crate::topology::Variant;

    fn open_candidates() -> Candidates {
        Candidates::from_grid(&Grid::from_str_line(&".".repeat(81)).unwrap())
    }

    #[test]
    fn assigns_digit_with_a_single_place_in_a_unit() {
        let mut candidates = open_candidates();
        let five = Digit::new(5);
        for col in 1..9 {
            let cell = Cell::from_row_col(0, col);
            let digits = candidates.at(cell).without(five.as_set());
            candidates.set(cell, digits);
        }

        let changed = only_choice(
            &mut candidates,
            Topology::get(Variant::Standard),
            &mut AssignmentLog::disabled(),
        )
        .unwrap();

        assert!(changed);
        assert_eq!(candidates.at(Cell::new(0)), five.as_set());
    }

    #[test]
    fn no_change_on_an_open_board() {
        let mut candidates = open_candidates();
        let changed = only_choice(
            &mut candidates,
            Topology::get(Variant::Standard),
            &mut AssignmentLog::disabled(),
        )
        .unwrap();
        assert!(!changed);
    }

    #[test]
    fn digit_without_a_place_contradicts() {
        let mut candidates = open_candidates();
        let nine = Digit::new(9);
        for col in 0..9 {
            let cell = Cell::from_row_col(3, col);
            let digits = candidates.at(cell).without(nine.as_set());
            candidates.set(cell, digits);
        }

        let result = only_choice(
            &mut candidates,
            Topology::get(Variant::Standard),
            &mut AssignmentLog::disabled(),
        );
        assert_eq!(result, Err(Contradiction));
    }
}
