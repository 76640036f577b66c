//! The fixed set of files staged on the source root.

use std::path::PathBuf;

use crate::domain::ProjectLayout;

/// Default filename of the launch package archive.
pub const LAUNCH_PACKAGE_FILE: &str = "Launch_VC_Tricore_AURIX_TC23x_t32sim.zip";

/// Default filename of the source code archive.
pub const SOURCE_CODE_FILE: &str = "SourceCode.zip";

/// Default filename of the master configuration file.
pub const CONFIG_FILE: &str = "CCAST_.cfg";

/// The three files fetched from the source root for every project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceManifest {
    pub launch_package: String,
    pub source_code: String,
    pub config_file: String,
}

impl Default for SourceManifest {
    fn default() -> Self {
        Self {
            launch_package: LAUNCH_PACKAGE_FILE.to_string(),
            source_code: SOURCE_CODE_FILE.to_string(),
            config_file: CONFIG_FILE.to_string(),
        }
    }
}

/// One planned acquisition: copy `filename` into `destination`, then extract
/// the copied archive in place when `extract` is set.
#[derive(Debug, Clone)]
pub struct TransferStep {
    pub filename: String,
    pub destination: PathBuf,
    pub description: &'static str,
    pub extract: bool,
}

impl SourceManifest {
    /// Plan the three transfer steps for a project layout.
    ///
    /// The launch package and source archive are extracted into their target
    /// directories; the configuration file is copied only.
    pub fn steps(&self, layout: &ProjectLayout) -> [TransferStep; 3] {
        [
            TransferStep {
                filename: self.launch_package.clone(),
                destination: layout.launch_path(),
                description: "VectorCAST launch package",
                extract: true,
            },
            TransferStep {
                filename: self.source_code.clone(),
                destination: layout.source_path(),
                description: "source code package",
                extract: true,
            },
            TransferStep {
                filename: self.config_file.clone(),
                destination: layout.config_path(),
                description: "configuration file",
                extract: false,
            },
        ]
    }
}
