//! Pure domain types: configuration schema, artifact naming and the error taxonomy.

mod comparator;
pub mod config;
mod diff_artifact;
mod error;
mod warning;

pub use comparator::{ComparatorInvocation, ComparatorOutput};
pub use config::CompareConfig;
pub use diff_artifact::{DIFF_EXTENSION, DiffPattern, SUPPORTED_PAIR_SHAPES};
pub use error::AppError;
pub use warning::Warning;
