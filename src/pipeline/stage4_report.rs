use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::model::standing::StudentStanding;
use crate::pipeline::stage2_ingest::{IngestReport, WorkerState};
use crate::report::json::render_summary_json;
use crate::report::text::render_report_text;
use crate::report::{RunSummary, yes_no};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Text,
    Json,
    All,
}

impl ReportFormat {
    fn wants_text(self) -> bool {
        matches!(self, ReportFormat::Text | ReportFormat::All)
    }

    fn wants_json(self) -> bool {
        matches!(self, ReportFormat::Json | ReportFormat::All)
    }
}

pub fn write_reports(
    summary: &RunSummary,
    out_dir: &Path,
    format: ReportFormat,
) -> std::io::Result<()> {
    fs::create_dir_all(out_dir)?;

    write_standings_tsv(&summary.standings, &out_dir.join("standings.tsv"))?;
    write_ingest_tsv(&summary.ingest, &out_dir.join("ingest.tsv"))?;

    if format.wants_text() {
        write_text(&out_dir.join("report.txt"), &render_report_text(summary))?;
    }
    if format.wants_json() {
        let json = render_summary_json(summary)?;
        write_text(&out_dir.join("summary.json"), &json)?;
    }

    info!(out_dir = %out_dir.display(), "reports written");
    Ok(())
}

fn write_standings_tsv(standings: &[StudentStanding], path: &Path) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    let header = [
        "student",
        "submissions",
        "best_score",
        "satisfactory",
        "extra_credit",
    ]
    .join("\t");
    writeln!(w, "{}", header)?;
    for s in standings {
        let best = s.best_score.map(|v| v.to_string()).unwrap_or_default();
        writeln!(
            w,
            "{}\t{}\t{}\t{}\t{}",
            s.student,
            s.submissions,
            best,
            yes_no(s.satisfactory),
            yes_no(s.extra_credit)
        )?;
    }
    w.flush()
}

fn write_ingest_tsv(ingest: &IngestReport, path: &Path) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    let header = [
        "file",
        "state",
        "lines",
        "accepted",
        "rejected",
        "parse_failures",
        "error",
    ]
    .join("\t");
    writeln!(w, "{}", header)?;
    for f in &ingest.files {
        let state = match f.state {
            WorkerState::Created => "created",
            WorkerState::Running => "running",
            WorkerState::Completed => "completed",
            WorkerState::Failed => "failed",
        };
        writeln!(
            w,
            "{}\t{}\t{}\t{}\t{}\t{}\t{}",
            f.path.display(),
            state,
            f.lines_read,
            f.accepted,
            f.rejected,
            f.parse_failures,
            f.error.as_deref().unwrap_or("")
        )?;
    }
    w.flush()
}

fn write_text(path: &Path, contents: &str) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    w.write_all(contents.as_bytes())?;
    w.flush()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_report.rs"]
mod tests;
