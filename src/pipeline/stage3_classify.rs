use serde::Serialize;

use crate::gradebook::Gradebook;
use crate::model::standing::StudentStanding;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StandingTotals {
    pub students: usize,
    pub with_submissions: usize,
    pub satisfactory: usize,
    pub extra_credit: usize,
    pub submissions: usize,
}

/// One standing per roster entry, in registration order.
pub fn build_standings(book: &Gradebook) -> Vec<StudentStanding> {
    let query = book.query();
    book.roster()
        .names()
        .iter()
        .map(|name| query.standing(name))
        .collect()
}

pub fn summarize(standings: &[StudentStanding], total_submissions: usize) -> StandingTotals {
    let mut totals = StandingTotals {
        students: standings.len(),
        submissions: total_submissions,
        ..StandingTotals::default()
    };
    for s in standings {
        if s.submissions > 0 {
            totals.with_submissions += 1;
        }
        if s.satisfactory {
            totals.satisfactory += 1;
        }
        if s.extra_credit {
            totals.extra_credit += 1;
        }
    }
    totals
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_classify.rs"]
mod tests;
