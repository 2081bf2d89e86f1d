use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard, PoisonError};

#[derive(Debug, Default)]
struct RosterInner {
    order: Vec<String>,
    index: HashSet<String>,
}

/// Registered students, in registration order. Membership check and insert
/// happen under one lock so concurrent registrations cannot both succeed for
/// the same name.
#[derive(Debug, Default)]
pub struct Roster {
    inner: Mutex<RosterInner>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, RosterInner> {
        // Entries are only ever appended whole, so a poisoned guard is still
        // consistent.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn register(&self, name: &str) -> bool {
        if name.is_empty() {
            return false;
        }
        let mut inner = self.lock();
        if !inner.index.insert(name.to_string()) {
            return false;
        }
        inner.order.push(name.to_string());
        true
    }

    pub fn contains(&self, name: &str) -> bool {
        !name.is_empty() && self.lock().index.contains(name)
    }

    pub fn count(&self) -> usize {
        self.lock().order.len()
    }

    pub fn names(&self) -> Vec<String> {
        self.lock().order.clone()
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/roster.rs"]
mod tests;
