use crate::ports::{Comparator, ImageStore};

/// The image store and comparator a comparison pass runs against.
///
/// Commands take the context rather than concrete adapters, so unit tests can
/// run them over in-memory fakes.
pub struct AppContext<S: ImageStore, C: Comparator> {
    store: S,
    comparator: C,
}

impl<S: ImageStore, C: Comparator> AppContext<S, C> {
    pub fn new(store: S, comparator: C) -> Self {
        Self { store, comparator }
    }

    /// Filesystem view used for config, script and image directory access.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Launcher for the external comparison script.
    pub fn comparator(&self) -> &C {
        &self.comparator
    }
}
