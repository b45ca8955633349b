//! Naming convention for difference images written by the comparator.

use std::ffi::OsStr;

/// Suffix shared by every difference image.
pub const DIFF_EXTENSION: &str = ".png";

/// Pair shapes the comparator recognises, shown after a cleanup.
pub const SUPPORTED_PAIR_SHAPES: [&str; 2] = [
    "scrolling capture: prefix_A_index.png vs prefix_B_index.png",
    "full-page capture: prefix_A_full.png vs prefix_B_full.png",
];

/// Matches file names produced by the comparator for a configured prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffPattern {
    prefix: String,
}

impl DiffPattern {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self { prefix: prefix.into() }
    }

    /// True when `file_name` starts with the prefix and ends with `.png`.
    ///
    /// Compared byte-wise, so names that are not valid UTF-8 still match.
    pub fn matches(&self, file_name: impl AsRef<OsStr>) -> bool {
        let bytes = file_name.as_ref().as_encoded_bytes();
        bytes.starts_with(self.prefix.as_bytes()) && bytes.ends_with(DIFF_EXTENSION.as_bytes())
    }

    /// Matching names from `names`, sorted.
    pub fn select<'a, I, N>(&self, names: I) -> Vec<N>
    where
        I: IntoIterator<Item = &'a N>,
        N: AsRef<OsStr> + Clone + Ord + 'a,
    {
        let mut selected: Vec<N> =
            names.into_iter().filter(|name| self.matches(name)).cloned().collect();
        selected.sort();
        selected
    }
}
