//! Run orchestration: layout creation, settling delay, file acquisition.

use std::thread;
use std::time::Duration;

use tracing::info;

use crate::app::AppContext;
use crate::domain::{AppError, ProjectLayout, SourceManifest};
use crate::ports::{LayoutStore, SourceStore};

/// Inputs for one setup run, resolved from flags, prompts, and config.
#[derive(Debug, Clone)]
pub struct SetupOptions {
    pub layout: ProjectLayout,
    pub manifest: SourceManifest,
    /// Pause between layout creation and file acquisition, giving the source
    /// share time to settle after the automounter touches it.
    pub settle: Duration,
}

/// Result of a completed setup run.
#[derive(Debug, Clone)]
pub struct SetupReport {
    pub layout: ProjectLayout,
}

/// Execute the full setup flow against the stores in `ctx`.
///
/// Sequence: create the directory tree, wait out the settling delay, then
/// copy the three staged files, extracting the two archives in place. Any
/// failure aborts the run; directories already created remain on disk.
pub fn execute<L, S>(
    ctx: &AppContext<L, S>,
    options: SetupOptions,
) -> Result<SetupReport, AppError>
where
    L: LayoutStore,
    S: SourceStore,
{
    info!("starting test bench setup");

    info!(project = %options.layout.root().display(), "creating project directory structure");
    ctx.layout_store().create_structure(&options.layout)?;

    if !options.settle.is_zero() {
        info!(secs = options.settle.as_secs(), "waiting for the source share to settle");
        thread::sleep(options.settle);
    }

    info!("starting file copy and extraction");
    for step in options.manifest.steps(&options.layout) {
        info!(file = %step.filename, "copying {}", step.description);
        let copied = ctx.source_store().copy_into(&step.filename, &step.destination)?;
        if step.extract {
            info!(file = %step.filename, "extracting {}", step.description);
            ctx.source_store().extract_archive(&copied, &step.destination)?;
        }
    }

    info!(project = %options.layout.root().display(), "test bench setup completed");
    Ok(SetupReport { layout: options.layout })
}
