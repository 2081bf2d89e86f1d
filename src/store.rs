use std::sync::{Mutex, MutexGuard, PoisonError};

use thiserror::Error;

use crate::model::config::ProjectConfig;
use crate::model::submission::Submission;
use crate::roster::Roster;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("student name is empty")]
    EmptyName,
    #[error("student {0:?} is not on the roster")]
    UnknownStudent(String),
    #[error("no scores given")]
    EmptyScores,
    #[error("expected {expected} scores, found {found}")]
    WrongLength { expected: usize, found: usize },
    #[error("score {position} is negative ({value})")]
    NegativeScore { position: usize, value: i32 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Acceptance {
    Accepted,
    Rejected(Rejection),
}

impl Acceptance {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Acceptance::Accepted)
    }
}

/// Append-only submission log for one project. The test count is fixed at
/// construction, so every stored score vector has the same length.
#[derive(Debug)]
pub struct SubmissionStore {
    config: ProjectConfig,
    submissions: Mutex<Vec<Submission>>,
}

impl SubmissionStore {
    pub(crate) fn new(config: ProjectConfig) -> Self {
        Self {
            config,
            submissions: Mutex::new(Vec::new()),
        }
    }

    pub fn config(&self) -> &ProjectConfig {
        &self.config
    }

    pub(crate) fn lock(&self) -> MutexGuard<'_, Vec<Submission>> {
        // Pushes are the only mutation; a panicking holder cannot leave a
        // half-built entry behind.
        self.submissions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn snapshot(&self) -> Vec<Submission> {
        self.lock().clone()
    }

    /// Acceptance gate. The store lock is held across validation and the
    /// append, and the roster is only consulted while it is held
    /// (lock order: store, then roster).
    pub(crate) fn submit(&self, roster: &Roster, name: &str, scores: &[i32]) -> Acceptance {
        let mut submissions = self.lock();
        match validate(&self.config, roster, name, scores) {
            Ok(checked) => {
                submissions.push(Submission::new(name, checked));
                Acceptance::Accepted
            }
            Err(rejection) => Acceptance::Rejected(rejection),
        }
    }
}

fn validate(
    config: &ProjectConfig,
    roster: &Roster,
    name: &str,
    scores: &[i32],
) -> Result<Vec<u32>, Rejection> {
    if name.is_empty() {
        return Err(Rejection::EmptyName);
    }
    if !roster.contains(name) {
        return Err(Rejection::UnknownStudent(name.to_string()));
    }
    if scores.is_empty() {
        return Err(Rejection::EmptyScores);
    }
    if scores.len() != config.test_count() {
        return Err(Rejection::WrongLength {
            expected: config.test_count(),
            found: scores.len(),
        });
    }
    scores
        .iter()
        .enumerate()
        .map(|(idx, &value)| {
            u32::try_from(value).map_err(|_| Rejection::NegativeScore {
                position: idx + 1,
                value,
            })
        })
        .collect()
}

#[cfg(test)]
#[path = "../tests/src_inline/store.rs"]
mod tests;
