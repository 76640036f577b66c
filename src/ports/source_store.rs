use std::path::{Path, PathBuf};

use crate::domain::AppError;

/// Access to the files staged on the source root, plus the mechanics of
/// unpacking the copied archives.
pub trait SourceStore {
    /// Copy `filename` from the source root into `destination`, returning the
    /// path of the copied file.
    fn copy_into(&self, filename: &str, destination: &Path) -> Result<PathBuf, AppError>;

    /// Extract a previously copied zip archive into `destination`.
    ///
    /// Members are unpacked as-is; no filtering or content validation.
    fn extract_archive(&self, archive: &Path, destination: &Path) -> Result<(), AppError>;
}
