pub mod gradebook;
pub mod input;
pub mod logging;
pub mod model;
pub mod pipeline;
pub mod query;
pub mod report;
pub mod roster;
pub mod store;

pub use gradebook::Gradebook;
pub use model::config::{ConfigError, ProjectConfig};
pub use query::QueryEngine;
pub use store::{Acceptance, Rejection};
