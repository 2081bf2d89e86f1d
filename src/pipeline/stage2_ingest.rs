use std::path::{Path, PathBuf};
use std::thread;

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::gradebook::Gradebook;
use crate::input::line::parse_line;
use crate::input::{InputError, next_line, open_maybe_gz};
use crate::store::Acceptance;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IngestError {
    #[error("no submission files given")]
    EmptyBatch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkerState {
    Created,
    Running,
    Completed,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CoordinatorPhase {
    Dispatched,
    AwaitingAll,
    Done,
}

#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub path: PathBuf,
    pub state: WorkerState,
    pub lines_read: usize,
    pub accepted: usize,
    pub rejected: usize,
    pub parse_failures: usize,
    pub error: Option<String>,
}

impl FileReport {
    fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            state: WorkerState::Created,
            lines_read: 0,
            accepted: 0,
            rejected: 0,
            parse_failures: 0,
            error: None,
        }
    }

    fn fail(&mut self, reason: String) {
        self.state = WorkerState::Failed;
        self.error = Some(reason);
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct IngestReport {
    pub files: Vec<FileReport>,
}

impl IngestReport {
    pub fn accepted(&self) -> usize {
        self.files.iter().map(|f| f.accepted).sum()
    }

    pub fn rejected(&self) -> usize {
        self.files.iter().map(|f| f.rejected).sum()
    }

    pub fn parse_failures(&self) -> usize {
        self.files.iter().map(|f| f.parse_failures).sum()
    }

    pub fn failed_files(&self) -> usize {
        self.files
            .iter()
            .filter(|f| f.state == WorkerState::Failed)
            .count()
    }
}

/// Fans submission files out to one worker thread each and joins them all.
/// Every record goes through the gradebook's acceptance gate; failures stay
/// local to the line or file they occur in.
pub struct IngestionCoordinator<'a> {
    book: &'a Gradebook,
}

impl<'a> IngestionCoordinator<'a> {
    pub fn new(book: &'a Gradebook) -> Self {
        Self { book }
    }

    pub fn ingest_concurrently<P: AsRef<Path> + Sync>(&self, files: &[P]) -> bool {
        self.ingest(files).is_ok()
    }

    pub fn ingest<P: AsRef<Path> + Sync>(&self, files: &[P]) -> Result<IngestReport, IngestError> {
        if files.is_empty() {
            return Err(IngestError::EmptyBatch);
        }

        let book = self.book;
        let reports = thread::scope(|scope| {
            let handles: Vec<_> = files
                .iter()
                .map(|file| {
                    let path: &Path = file.as_ref();
                    (path, scope.spawn(move || run_worker(book, path)))
                })
                .collect();
            log_phase(CoordinatorPhase::Dispatched, files.len());

            log_phase(CoordinatorPhase::AwaitingAll, handles.len());
            handles
                .into_iter()
                .map(|(path, handle)| {
                    handle.join().unwrap_or_else(|_| {
                        warn!(file = %path.display(), "submission worker panicked");
                        let mut report = FileReport::new(path);
                        report.fail("worker panicked".to_string());
                        report
                    })
                })
                .collect::<Vec<_>>()
        });
        log_phase(CoordinatorPhase::Done, reports.len());

        let report = IngestReport { files: reports };
        info!(
            files = report.files.len(),
            failed_files = report.failed_files(),
            accepted = report.accepted(),
            rejected = report.rejected(),
            parse_failures = report.parse_failures(),
            "ingestion finished"
        );
        Ok(report)
    }
}

fn log_phase(phase: CoordinatorPhase, workers: usize) {
    debug!(?phase, workers, "ingestion coordinator");
}

fn run_worker(book: &Gradebook, path: &Path) -> FileReport {
    let mut report = FileReport::new(path);
    report.state = WorkerState::Running;
    debug!(file = %path.display(), "submission worker started");

    if let Err(err) = stream_file(book, path, &mut report) {
        warn!(
            file = %path.display(),
            error = %err,
            "submission file could not be read; worker stopped"
        );
        report.fail(err.to_string());
        return report;
    }

    if report.parse_failures > 0 {
        report.fail(format!(
            "{} unparsable line(s) skipped",
            report.parse_failures
        ));
    } else {
        report.state = WorkerState::Completed;
    }
    debug!(
        file = %path.display(),
        lines = report.lines_read,
        accepted = report.accepted,
        rejected = report.rejected,
        "submission worker finished"
    );
    report
}

fn stream_file(book: &Gradebook, path: &Path, report: &mut FileReport) -> Result<(), InputError> {
    let mut reader = open_maybe_gz(path)?;
    let mut raw = Vec::new();
    let mut buf = String::new();

    while next_line(&mut reader, &mut raw, &mut buf)? {
        report.lines_read += 1;
        let parsed = match parse_line(&buf) {
            Ok(parsed) => parsed,
            Err(err) => {
                warn!(
                    file = %path.display(),
                    line = report.lines_read,
                    error = %err,
                    "skipping unparsable submission line"
                );
                report.parse_failures += 1;
                continue;
            }
        };

        match book.submit(&parsed.name, &parsed.scores) {
            Acceptance::Accepted => report.accepted += 1,
            Acceptance::Rejected(reason) => {
                debug!(
                    file = %path.display(),
                    line = report.lines_read,
                    student = %parsed.name,
                    %reason,
                    "submission rejected"
                );
                report.rejected += 1;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_ingest.rs"]
mod tests;
