//! shotdiff: configuration checks and orchestration around an external image comparator.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    CheckOptions, CheckOutcome, CompareOptions, CompareOutcome, ConfigSummary, check_config,
    run_compare,
};
pub use domain::{AppError, CompareConfig, Warning};
