use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("test count must be positive (got {0})")]
    NonPositiveTestCount(usize),
}

/// Project-wide scoring parameters, fixed once the gradebook is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectConfig {
    test_count: usize,
}

impl ProjectConfig {
    pub fn new(test_count: usize) -> Result<Self, ConfigError> {
        if test_count == 0 {
            return Err(ConfigError::NonPositiveTestCount(test_count));
        }
        Ok(Self { test_count })
    }

    pub fn test_count(&self) -> usize {
        self.test_count
    }

    /// Minimum number of strictly positive entries for a submission to count
    /// as satisfactory. Floor of half the test count.
    pub fn satisfactory_threshold(&self) -> usize {
        self.test_count / 2
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/config.rs"]
mod tests;
