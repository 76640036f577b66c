use std::fs;

use tracing::info;

use crate::domain::{AppError, ProjectLayout};
use crate::ports::LayoutStore;

/// Filesystem-backed layout store.
#[derive(Debug, Clone, Copy, Default)]
pub struct FilesystemLayoutStore;

impl LayoutStore for FilesystemLayoutStore {
    fn create_structure(&self, layout: &ProjectLayout) -> Result<(), AppError> {
        for dir in layout.directories() {
            fs::create_dir_all(&dir)
                .map_err(|source| AppError::DirectoryCreation { path: dir.clone(), source })?;
            info!(path = %dir.display(), "created directory");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use tempfile::TempDir;

    use super::*;
    use crate::domain::ProjectName;

    fn layout_in(dir: &Path) -> ProjectLayout {
        let name = ProjectName::parse("demo1").expect("valid name");
        ProjectLayout::new(dir, &name)
    }

    #[test]
    fn creates_root_and_four_subdirectories() {
        let dir = TempDir::new().expect("failed to create temp dir");
        let layout = layout_in(dir.path());

        FilesystemLayoutStore.create_structure(&layout).expect("creation should succeed");

        assert!(layout.root().is_dir());
        assert!(layout.test_path().is_dir());
        assert!(layout.launch_path().is_dir());
        assert!(layout.source_path().is_dir());
        assert!(layout.config_path().is_dir());
    }

    #[test]
    fn creation_is_idempotent() {
        let dir = TempDir::new().expect("failed to create temp dir");
        let layout = layout_in(dir.path());

        FilesystemLayoutStore.create_structure(&layout).expect("first creation should succeed");
        FilesystemLayoutStore.create_structure(&layout).expect("second creation should succeed");

        let entries: Vec<_> = fs::read_dir(layout.root())
            .expect("root should be readable")
            .collect::<Result<_, _>>()
            .expect("entries should be readable");
        assert_eq!(entries.len(), 4);
    }

    #[test]
    fn filesystem_failure_surfaces_as_directory_creation_error() {
        let dir = TempDir::new().expect("failed to create temp dir");
        // A regular file where a parent directory is expected.
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "").expect("failed to create blocker file");

        let layout = layout_in(&blocker);
        let err =
            FilesystemLayoutStore.create_structure(&layout).expect_err("creation should fail");
        assert!(matches!(err, AppError::DirectoryCreation { .. }));
    }
}
