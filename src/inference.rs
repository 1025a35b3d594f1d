use std::fmt;

use crate::belief::{BeliefMap, Cell};

/// Which deduction a sensor reading triggered.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Rule {
    NoFire,
    AlreadyExplained,
    FullyDetermined,
    Ambiguous,
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Rule::NoFire => "no_fire",
            Rule::AlreadyExplained => "already_explained",
            Rule::FullyDetermined => "fully_determined",
            Rule::Ambiguous => "ambiguous",
        };
        write!(f, "{}", name)
    }
}

/**
* Applies one reading of the fire sensor at the robot's current position.
* `sensed` is the exact number of fires among the on-grid cardinal neighbors.
* Certainty is only concluded when the count leaves no alternative; otherwise
* the unknown neighbors are downgraded to suspected.
*/
pub fn infer(map: &mut BeliefMap, sensed: usize) -> Rule {
    let pos = map.current_pos();

    if sensed == 0 {
        map.reclassify_neighbors(pos, &[Cell::Unknown], Cell::Empty);
        return Rule::NoFire;
    }

    let confirmed = map.count_neighbors_matching(pos, &[Cell::ConfirmedHazard]);
    if confirmed == sensed {
        map.reclassify_neighbors(pos, &[Cell::Unknown], Cell::Empty);
        return Rule::AlreadyExplained;
    }

    let candidates = map.count_neighbors_matching(
        pos, &[Cell::Unknown, Cell::ConfirmedHazard, Cell::SuspectedHazard]);
    if sensed == candidates {
        map.reclassify_neighbors(pos, &[Cell::Unknown, Cell::SuspectedHazard], Cell::ConfirmedHazard);
        return Rule::FullyDetermined;
    }

    map.reclassify_neighbors(pos, &[Cell::Unknown], Cell::SuspectedHazard);
    Rule::Ambiguous
}
