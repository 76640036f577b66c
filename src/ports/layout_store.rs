use crate::domain::{AppError, ProjectLayout};

/// Materializes a project layout on the target filesystem.
pub trait LayoutStore {
    /// Create the layout root and all subdirectories.
    ///
    /// Create-if-absent semantics: pre-existing directories are not an error,
    /// and parent directories are created recursively.
    fn create_structure(&self, layout: &ProjectLayout) -> Result<(), AppError>;
}
