pub mod error;
pub mod inputs;
pub mod layout;
pub mod manifest;

pub use error::AppError;
pub use inputs::{destination_path, ProjectName};
pub use layout::{ProjectLayout, CONFIG_DIR, LAUNCH_DIR, SOURCE_DIR, TEST_DIR};
pub use manifest::{
    SourceManifest, TransferStep, CONFIG_FILE, LAUNCH_PACKAGE_FILE, SOURCE_CODE_FILE,
};
