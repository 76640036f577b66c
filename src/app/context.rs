use crate::ports::{LayoutStore, SourceStore};

/// Application context holding dependencies for command execution.
pub struct AppContext<L: LayoutStore, S: SourceStore> {
    layout_store: L,
    source_store: S,
}

impl<L: LayoutStore, S: SourceStore> AppContext<L, S> {
    /// Create a new application context.
    pub fn new(layout_store: L, source_store: S) -> Self {
        Self { layout_store, source_store }
    }

    /// Get a reference to the layout store.
    pub fn layout_store(&self) -> &L {
        &self.layout_store
    }

    /// Get a reference to the source store.
    pub fn source_store(&self) -> &S {
        &self.source_store
    }
}
