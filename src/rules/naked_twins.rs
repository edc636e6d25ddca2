use crate::bitset::Set;
use crate::board::Digit;
use crate::candidates::Candidates;
use crate::errors::Contradiction;
use crate::topology::Topology;
use crate::trace::AssignmentLog;

// Two cells of a unit sharing the same two-candidate set must take those two
// digits between them, so no other cell of the unit can hold either digit.
// Twins are unit-scoped; distinct twin values in one unit apply independently.
pub(crate) fn naked_twins(
    candidates: &mut Candidates,
    topology: &Topology,
    assignments: &mut AssignmentLog,
) -> Result<bool, Contradiction> {
    let mut changed = false;
    for unit in topology.units() {
        let cells = unit.cells();

        // at most four distinct two-digit sets can pair up in nine cells
        let mut twins = [Set::<Digit>::NONE; 4];
        let mut n_twins = 0;
        for (i, &cell) in cells.iter().enumerate() {
            let digits = candidates.at(cell);
            if digits.len() != 2 || twins[..n_twins].contains(&digits) {
                continue;
            }
            if cells[i + 1..]
                .iter()
                .any(|&other| candidates.at(other) == digits)
            {
                twins[n_twins] = digits;
                n_twins += 1;
            }
        }
        let twins = &twins[..n_twins];

        for &cell in cells.iter() {
            // cells that *are* a twin value keep it; everyone else loses both digits
            if twins.contains(&candidates.at(cell)) {
                continue;
            }
            for &twin in twins {
                let digits = candidates.at(cell);
                if !digits.overlaps(twin) {
                    continue;
                }
                let remaining = digits.without(twin);
                if remaining == Set::NONE {
                    return Err(Contradiction);
                }
                candidates.set(cell, remaining);
                changed = true;
                if remaining.len() == 1 {
                    assignments.record(candidates);
                }
            }
        }
    }
    Ok(changed)
}
