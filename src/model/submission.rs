use serde::Serialize;

/// One graded attempt. Scores have already passed the acceptance gate, so
/// every entry is non-negative and the vector has the configured length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Submission {
    student: String,
    scores: Vec<u32>,
    total: u64,
}

impl Submission {
    pub(crate) fn new(student: &str, scores: Vec<u32>) -> Self {
        let total = scores.iter().map(|&s| u64::from(s)).sum();
        Self {
            student: student.to_string(),
            scores,
            total,
        }
    }

    pub fn student(&self) -> &str {
        &self.student
    }

    pub fn scores(&self) -> &[u32] {
        &self.scores
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn belongs_to(&self, name: &str) -> bool {
        self.student == name
    }

    pub fn passing_count(&self) -> usize {
        self.scores.iter().filter(|&&s| s > 0).count()
    }

    /// Zero counts as failing.
    pub fn all_passed(&self) -> bool {
        self.scores.iter().all(|&s| s > 0)
    }

    pub fn is_satisfactory(&self, threshold: usize) -> bool {
        self.passing_count() >= threshold
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/submission.rs"]
mod tests;
