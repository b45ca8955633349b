#![allow(dead_code, unused_imports)]

pub(crate) mod fake_comparator;
pub(crate) mod test_context;

pub(crate) use test_context::{DEFAULT_CONFIG, TestContext};
