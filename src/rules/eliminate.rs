use crate::bitset::Set;
use crate::board::Cell;
use crate::candidates::Candidates;
use crate::errors::Contradiction;
use crate::topology::Topology;
use crate::trace::AssignmentLog;

// A solved cell excludes its digit from every peer.
pub(crate) fn eliminate(
    candidates: &mut Candidates,
    topology: &Topology,
    assignments: &mut AssignmentLog,
) -> Result<bool, Contradiction> {
    let mut changed = false;
    for cell in Cell::all() {
        let digit = match candidates.at(cell).unique() {
            Ok(Some(digit)) => digit,
            Ok(None) => continue,
            Err(empty) => return Err(empty.into()),
        };

        for peer in topology.peers(cell) {
            let peer_digits = candidates.at(peer);
            if !peer_digits.contains(digit) {
                continue;
            }
            let remaining = peer_digits.without(digit.as_set());
            if remaining == Set::NONE {
                return Err(Contradiction);
            }
            candidates.set(peer, remaining);
            changed = true;
            if remaining.len() == 1 {
                assignments.record(candidates);
            }
        }
    }
    Ok(changed)
}
