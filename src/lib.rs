//! vcbench: scaffold VectorCAST test bench projects from a shared source drop.
//!
//! Creates the fixed four-directory project tree, then copies the three
//! staged drop files from the source root, extracting the two archives.

pub mod app;
pub mod domain;
pub mod logging;
pub mod ports;
pub mod services;

use std::path::Path;

use app::commands::setup as setup_command;
use app::AppContext;
use services::{FileshareSourceStore, FilesystemLayoutStore};

pub use app::commands::setup::{SetupOptions, SetupReport};
pub use domain::AppError;

/// Run the complete setup flow against the real filesystem, fetching from
/// the given source root.
pub fn setup(source_root: &Path, options: SetupOptions) -> Result<SetupReport, AppError> {
    let ctx = AppContext::new(
        FilesystemLayoutStore,
        FileshareSourceStore::new(source_root.to_path_buf()),
    );
    setup_command::execute(&ctx, options)
}
