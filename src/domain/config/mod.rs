pub mod parse;
pub mod paths;
mod schema;

pub use parse::{REQUIRED_KEYS, first_missing_key, parse_config_content, parse_document};
pub use schema::{CompareConfig, OutputSettings};
