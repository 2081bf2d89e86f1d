use crate::gradebook::Gradebook;
use crate::model::standing::StudentStanding;
use crate::model::submission::Submission;

/// Read-only aggregations over the submission store. Each call scans the
/// whole store under its lock.
pub struct QueryEngine<'a> {
    book: &'a Gradebook,
}

impl<'a> QueryEngine<'a> {
    pub fn new(book: &'a Gradebook) -> Self {
        Self { book }
    }

    fn for_student<T>(&self, name: &str, f: impl FnOnce(Vec<&Submission>) -> T) -> T {
        let submissions = self.book.store().lock();
        let matching = submissions.iter().filter(|s| s.belongs_to(name)).collect();
        f(matching)
    }

    pub fn best_score(&self, name: &str) -> Option<u64> {
        if name.is_empty() {
            return None;
        }
        self.for_student(name, |subs| subs.iter().map(|s| s.total()).max())
    }

    pub fn submission_count(&self, name: &str) -> usize {
        if name.is_empty() {
            return 0;
        }
        self.for_student(name, |subs| subs.len())
    }

    pub fn total_submission_count(&self) -> usize {
        self.book.store().len()
    }

    pub fn is_satisfactory(&self, name: &str) -> bool {
        if name.is_empty() {
            return false;
        }
        let threshold = self.book.config().satisfactory_threshold();
        self.for_student(name, |subs| {
            subs.iter().any(|s| s.is_satisfactory(threshold))
        })
    }

    /// Only a first-and-only submission with every test passing qualifies.
    pub fn has_extra_credit(&self, name: &str) -> bool {
        if name.is_empty() {
            return false;
        }
        self.for_student(name, |subs| match subs.as_slice() {
            [only] => only.all_passed(),
            _ => false,
        })
    }

    pub fn standing(&self, name: &str) -> StudentStanding {
        StudentStanding {
            student: name.to_string(),
            submissions: self.submission_count(name),
            best_score: self.best_score(name),
            satisfactory: self.is_satisfactory(name),
            extra_credit: self.has_extra_credit(name),
        }
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/query.rs"]
mod tests;
