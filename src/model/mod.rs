pub mod config;
pub mod standing;
pub mod submission;
