use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use tracing::{error, info};

use vcbench::app::config::{FileConfig, CONFIG_FILE_NAME, DEFAULT_SETTLE_SECS};
use vcbench::app::prompts;
use vcbench::domain::{destination_path, ProjectLayout, ProjectName};
use vcbench::logging::{self, LogConfig, LogDestination};
use vcbench::ports::ConsoleStyler;
use vcbench::services::detect_styler;
use vcbench::{AppError, SetupOptions};

#[derive(Parser)]
#[command(name = "vcbench")]
#[command(version)]
#[command(
    about = "Scaffold a VectorCAST test bench project from the shared source drop",
    long_about = None
)]
struct Cli {
    /// Destination folder the project is created under (prompted if omitted)
    #[arg(short, long)]
    destination: Option<String>,
    /// Project name (prompted if omitted)
    #[arg(short, long)]
    name: Option<String>,
    /// Source root the drop files are copied from (overrides config)
    #[arg(short, long)]
    source_root: Option<PathBuf>,
    /// Config file path (defaults to ./vcbench.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Seconds to wait between layout creation and file acquisition
    #[arg(long)]
    settle_secs: Option<u64>,
    /// Log file path (overrides config)
    #[arg(long)]
    log_file: Option<PathBuf>,
    /// Suppress console log output; the log file is still written
    #[arg(short, long)]
    quiet: bool,
}

enum Outcome {
    Completed,
    Cancelled,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let styler = detect_styler();

    let config = match FileConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{}", styler.error(&format!("Error: {}", err)));
            return ExitCode::FAILURE;
        }
    };

    let log_file = cli.log_file.clone().unwrap_or_else(|| config.log.file.clone());
    let log_config = LogConfig {
        destination: if cli.quiet {
            LogDestination::File(log_file)
        } else {
            LogDestination::Both(log_file)
        },
        level: config.log.level.clone(),
        format: config.log.format,
    };
    // Guard kept alive for the whole run so file output flushes on exit.
    let _guard = match logging::init(&log_config) {
        Ok(guard) => guard,
        Err(err) => {
            eprintln!("{}", styler.error(&format!("Error: {}", err)));
            return ExitCode::FAILURE;
        }
    };

    match run(cli, &config, styler.as_ref()) {
        Ok(Outcome::Completed) => ExitCode::SUCCESS,
        Ok(Outcome::Cancelled) => {
            info!("setup cancelled by user");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(error = %err, "setup failed");
            eprintln!("{}", styler.error(&format!("Error: {}", err)));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli, config: &FileConfig, styler: &dyn ConsoleStyler) -> Result<Outcome, AppError> {
    println!("{}", styler.banner("VectorCAST test bench setup"));

    let destination = match cli.destination {
        Some(value) => value,
        None => match prompts::prompt_destination()? {
            Some(value) => value,
            None => return Ok(Outcome::Cancelled),
        },
    };
    let destination = destination_path(&destination)?;

    let name = match cli.name {
        Some(value) => value,
        None => match prompts::prompt_project_name()? {
            Some(value) => value,
            None => return Ok(Outcome::Cancelled),
        },
    };
    let name = ProjectName::parse(&name)?;

    let source_root = cli.source_root.or_else(|| config.source.root.clone()).ok_or_else(|| {
        AppError::Config(format!(
            "Source root not configured: pass --source-root or set source.root in {}",
            CONFIG_FILE_NAME
        ))
    })?;

    let settle_secs = cli.settle_secs.or(config.settle_secs).unwrap_or(DEFAULT_SETTLE_SECS);

    let options = SetupOptions {
        layout: ProjectLayout::new(&destination, &name),
        manifest: config.source.manifest(),
        settle: Duration::from_secs(settle_secs),
    };

    let report = vcbench::setup(&source_root, options)?;
    println!(
        "{}",
        styler.success(&format!(
            "✅ Test bench setup complete: {}",
            report.layout.root().display()
        ))
    );
    Ok(Outcome::Completed)
}
