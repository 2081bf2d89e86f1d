pub mod json;
pub mod text;

use serde::Serialize;

use crate::gradebook::Gradebook;
use crate::model::standing::StudentStanding;
use crate::pipeline::stage1_roster::RosterLoad;
use crate::pipeline::stage2_ingest::IngestReport;
use crate::pipeline::stage3_classify::{StandingTotals, build_standings, summarize};

#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub tool_name: String,
    pub tool_version: String,
    pub test_count: usize,
    pub satisfactory_threshold: usize,
    pub roster: RosterLoad,
    pub totals: StandingTotals,
    pub ingest: IngestReport,
    pub standings: Vec<StudentStanding>,
}

pub fn build_summary(book: &Gradebook, roster: RosterLoad, ingest: IngestReport) -> RunSummary {
    let standings = build_standings(book);
    let totals = summarize(&standings, book.store().len());
    RunSummary {
        tool_name: env!("CARGO_PKG_NAME").to_string(),
        tool_version: env!("CARGO_PKG_VERSION").to_string(),
        test_count: book.config().test_count(),
        satisfactory_threshold: book.config().satisfactory_threshold(),
        roster,
        totals,
        ingest,
        standings,
    }
}

pub fn yes_no(v: bool) -> &'static str {
    if v { "yes" } else { "no" }
}

pub fn fraction(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    count as f64 / total as f64
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
