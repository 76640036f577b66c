//! Setup configuration: compiled-in defaults with optional `vcbench.toml`
//! overrides. Command-line flags take final precedence over both.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::{
    AppError, SourceManifest, CONFIG_FILE, LAUNCH_PACKAGE_FILE, SOURCE_CODE_FILE,
};
use crate::logging::LogFormat;

/// Config file looked up in the working directory when `--config` is absent.
pub const CONFIG_FILE_NAME: &str = "vcbench.toml";

/// Default log file, written next to the invocation.
pub const DEFAULT_LOG_FILE: &str = "vcbench.log";

/// Default settling delay between layout creation and file acquisition.
pub const DEFAULT_SETTLE_SECS: u64 = 2;

/// On-disk configuration.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    /// Settling delay override in seconds; 0 disables the wait.
    pub settle_secs: Option<u64>,
    pub source: SourceSection,
    pub log: LogSection,
}

/// `[source]` table: where the drop files are staged and what they are named.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SourceSection {
    /// Base path of the share. Required at runtime unless `--source-root`
    /// is passed; there is no sensible compiled-in default for a site share.
    pub root: Option<PathBuf>,
    pub launch_package: String,
    pub source_code: String,
    pub config_file: String,
}

impl Default for SourceSection {
    fn default() -> Self {
        Self {
            root: None,
            launch_package: LAUNCH_PACKAGE_FILE.to_string(),
            source_code: SOURCE_CODE_FILE.to_string(),
            config_file: CONFIG_FILE.to_string(),
        }
    }
}

impl SourceSection {
    /// The transfer manifest configured by this section.
    pub fn manifest(&self) -> SourceManifest {
        SourceManifest {
            launch_package: self.launch_package.clone(),
            source_code: self.source_code.clone(),
            config_file: self.config_file.clone(),
        }
    }
}

/// `[log]` table.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct LogSection {
    pub file: PathBuf,
    pub level: String,
    pub format: LogFormat,
}

impl Default for LogSection {
    fn default() -> Self {
        Self {
            file: PathBuf::from(DEFAULT_LOG_FILE),
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl FileConfig {
    /// Load configuration.
    ///
    /// An explicitly passed path must exist. Without one, `vcbench.toml` in
    /// the working directory is used when present, defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self, AppError> {
        let resolved = match path {
            Some(explicit) => {
                if !explicit.exists() {
                    return Err(AppError::Config(format!(
                        "Config file not found: {}",
                        explicit.display()
                    )));
                }
                Some(explicit.to_path_buf())
            }
            None => {
                let default = PathBuf::from(CONFIG_FILE_NAME);
                default.exists().then_some(default)
            }
        };

        let Some(file) = resolved else {
            return Ok(Self::default());
        };

        let content = fs::read_to_string(&file).map_err(|err| {
            AppError::Config(format!("Failed to read {}: {}", file.display(), err))
        })?;
        toml::from_str(&content)
            .map_err(|err| AppError::Config(format!("Malformed {}: {}", file.display(), err)))
    }
}
