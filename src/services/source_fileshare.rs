use std::fs::{self, File};
use std::path::{Path, PathBuf};

use tracing::info;
use zip::ZipArchive;

use crate::domain::AppError;
use crate::ports::SourceStore;

/// Source store reading from a mounted file share (or any directory).
#[derive(Debug, Clone)]
pub struct FileshareSourceStore {
    base: PathBuf,
}

impl FileshareSourceStore {
    /// Create a store rooted at the share's base directory.
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }
}

impl SourceStore for FileshareSourceStore {
    fn copy_into(&self, filename: &str, destination: &Path) -> Result<PathBuf, AppError> {
        let source = self.base.join(filename);
        let target = destination.join(filename);
        fs::copy(&source, &target).map_err(|err| {
            AppError::file_operation(
                format!("failed to copy {} from {}", filename, self.base.display()),
                err,
            )
        })?;
        info!(path = %target.display(), "copied file");
        Ok(target)
    }

    fn extract_archive(&self, archive: &Path, destination: &Path) -> Result<(), AppError> {
        let file = File::open(archive).map_err(|err| {
            AppError::file_operation(format!("failed to open archive {}", archive.display()), err)
        })?;
        let mut zip = ZipArchive::new(file).map_err(|err| {
            AppError::file_operation(format!("failed to read archive {}", archive.display()), err)
        })?;
        zip.extract(destination).map_err(|err| {
            AppError::file_operation(
                format!("failed to extract archive {}", archive.display()),
                err,
            )
        })?;
        info!(path = %destination.display(), entries = zip.len(), "extracted archive");
        Ok(())
    }
}
