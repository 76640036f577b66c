//! The fixed project directory tree created for every run.

use std::path::{Path, PathBuf};

use crate::domain::ProjectName;

/// Subdirectory holding the VectorCAST unit-test workareas.
pub const TEST_DIR: &str = "VCAST_UT";

/// Subdirectory the launch package is extracted into.
pub const LAUNCH_DIR: &str = "VectorCAST_patch_for_Tasking_Tricore_TC297TA_T32_Simulator";

/// Subdirectory the source archive is extracted into.
pub const SOURCE_DIR: &str = "SourceCode";

/// Subdirectory the master configuration file is copied into.
pub const CONFIG_DIR: &str = "Master_CFG";

/// Derived per-run directory tree: `<destination>/<project name>` plus the
/// four fixed-name subdirectories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    root: PathBuf,
}

impl ProjectLayout {
    /// Compute the layout for a destination folder and project name.
    pub fn new(destination: &Path, name: &ProjectName) -> Self {
        Self { root: destination.join(name.as_str()) }
    }

    /// The project root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn test_path(&self) -> PathBuf {
        self.root.join(TEST_DIR)
    }

    pub fn launch_path(&self) -> PathBuf {
        self.root.join(LAUNCH_DIR)
    }

    pub fn source_path(&self) -> PathBuf {
        self.root.join(SOURCE_DIR)
    }

    pub fn config_path(&self) -> PathBuf {
        self.root.join(CONFIG_DIR)
    }

    /// All directories of the layout, root first, in creation order.
    pub fn directories(&self) -> [PathBuf; 5] {
        [
            self.root.clone(),
            self.test_path(),
            self.launch_path(),
            self.source_path(),
            self.config_path(),
        ]
    }
}
