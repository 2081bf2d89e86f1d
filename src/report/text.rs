use crate::model::standing::StudentStanding;
use crate::pipeline::stage2_ingest::{IngestReport, WorkerState};
use crate::report::{RunSummary, fraction, yes_no};

pub fn render_report_text(summary: &RunSummary) -> String {
    let mut out = String::new();

    out.push_str("Project Submission Report\n");
    out.push_str("=========================\n\n");

    out.push_str("1. Project\n");
    out.push_str(&format!("Tests per submission: {}\n", summary.test_count));
    out.push_str(&format!(
        "Satisfactory threshold: {} passing test(s)\n\n",
        summary.satisfactory_threshold
    ));

    out.push_str("2. Roster\n");
    out.push_str(&format!("Registered students: {}\n", summary.roster.registered));
    if !summary.roster.duplicates.is_empty() {
        out.push_str(&format!(
            "Duplicate entries skipped: {}\n",
            summary.roster.duplicates.join(", ")
        ));
    }
    out.push('\n');

    out.push_str("3. Ingestion\n");
    out.push_str(&render_ingest_lines(&summary.ingest));
    out.push('\n');

    out.push_str("4. Standings\n");
    let totals = &summary.totals;
    out.push_str(&format!("Submissions stored: {}\n", totals.submissions));
    out.push_str(&format!(
        "Students with submissions: {} of {}\n",
        totals.with_submissions, totals.students
    ));
    out.push_str(&format!(
        "Satisfactory: {} ({:.2})\n",
        totals.satisfactory,
        fraction(totals.satisfactory, totals.students)
    ));
    out.push_str(&format!("Extra credit: {}\n\n", totals.extra_credit));
    out.push_str(&render_standings_table(&summary.standings));

    out
}

fn render_ingest_lines(ingest: &IngestReport) -> String {
    let mut out = String::new();
    for file in &ingest.files {
        let state = match file.state {
            WorkerState::Completed => "completed",
            WorkerState::Failed => "failed",
            WorkerState::Created | WorkerState::Running => "incomplete",
        };
        out.push_str(&format!(
            "{}: {} (lines {}, accepted {}, rejected {}, unparsable {})",
            file.path.display(),
            state,
            file.lines_read,
            file.accepted,
            file.rejected,
            file.parse_failures
        ));
        if let Some(err) = &file.error {
            out.push_str(&format!(" - {}", err));
        }
        out.push('\n');
    }
    out
}

/// Fixed-width table for terminal output.
pub fn render_standings_table(standings: &[StudentStanding]) -> String {
    let name_width = standings
        .iter()
        .map(|s| s.student.len())
        .max()
        .unwrap_or(0)
        .max("student".len());

    let mut out = String::new();
    out.push_str(&format!(
        "{:<name_width$}  {:>11}  {:>10}  {:<12}  {}\n",
        "student", "submissions", "best_score", "satisfactory", "extra_credit"
    ));
    for s in standings {
        out.push_str(&format!(
            "{:<name_width$}  {:>11}  {:>10}  {:<12}  {}\n",
            s.student,
            s.submissions,
            s.best_score_label(),
            yes_no(s.satisfactory),
            yes_no(s.extra_credit)
        ));
    }
    out
}
