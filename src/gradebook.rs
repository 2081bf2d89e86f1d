use std::path::Path;

use crate::model::config::{ConfigError, ProjectConfig};
use crate::pipeline::stage2_ingest::{IngestError, IngestReport, IngestionCoordinator};
use crate::query::QueryEngine;
use crate::roster::Roster;
use crate::store::{Acceptance, SubmissionStore};

/// Owns the roster and submission store for one project and exposes the
/// registration, acceptance, ingestion and query entry points over them.
#[derive(Debug)]
pub struct Gradebook {
    roster: Roster,
    store: SubmissionStore,
}

impl Gradebook {
    pub fn new(test_count: usize) -> Result<Self, ConfigError> {
        Ok(Self::with_config(ProjectConfig::new(test_count)?))
    }

    pub fn with_config(config: ProjectConfig) -> Self {
        Self {
            roster: Roster::new(),
            store: SubmissionStore::new(config),
        }
    }

    pub fn config(&self) -> &ProjectConfig {
        self.store.config()
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Read access to the accepted submissions. Writes only go through
    /// [`Gradebook::submit`], which validates against this book's roster and
    /// test count.
    ///
    /// ```compile_fail
    /// let book = scorebook::Gradebook::new(5).unwrap();
    /// book.store().submit(book.roster(), "GinnyGiraffe", &[1, 1]);
    /// ```
    pub fn store(&self) -> &SubmissionStore {
        &self.store
    }

    pub fn register(&self, name: &str) -> bool {
        self.roster.register(name)
    }

    pub fn student_count(&self) -> usize {
        self.roster.count()
    }

    pub fn submit(&self, name: &str, scores: &[i32]) -> Acceptance {
        self.store.submit(&self.roster, name, scores)
    }

    pub fn try_accept(&self, name: &str, scores: &[i32]) -> bool {
        self.submit(name, scores).is_accepted()
    }

    pub fn ingest<P: AsRef<Path> + Sync>(&self, files: &[P]) -> Result<IngestReport, IngestError> {
        IngestionCoordinator::new(self).ingest(files)
    }

    pub fn ingest_concurrently<P: AsRef<Path> + Sync>(&self, files: &[P]) -> bool {
        IngestionCoordinator::new(self).ingest_concurrently(files)
    }

    pub fn query(&self) -> QueryEngine<'_> {
        QueryEngine::new(self)
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/gradebook.rs"]
mod tests;
