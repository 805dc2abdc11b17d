//! driftcheck - verify program-ID consistency across a project checkout.
//!
//! Exit codes:
//! - 0: every duplicated program ID agrees with Anchor.toml
//! - 1: at least one ID drifted or could not be located
//! - 2: the canonical config itself is missing or malformed (no report)

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use driftcheck_core::{run_check, VerdictReport};

#[derive(Parser)]
#[command(name = "driftcheck")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Check program-ID consistency across Anchor.toml, SDK, services, and program sources", long_about = None)]
struct Cli {
    /// Project root containing Anchor.toml
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Emit JSON-formatted log lines
    #[arg(long)]
    json: bool,
}

/// Configure the global subscriber. `RUST_LOG` wins over `--verbose`.
fn init_tracing(json: bool, level: Level) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()));

    if json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_target(false).json())
            .try_init()
            .ok();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_target(false))
            .try_init()
            .ok();
    }
}

fn run(cli: &Cli) -> Result<VerdictReport> {
    let stdout = io::stdout().lock();
    run_check(&cli.root, stdout).with_context(|| {
        format!(
            "consistency check aborted (root: {})",
            cli.root.display()
        )
    })
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };
    init_tracing(cli.json, level);

    match run(&cli) {
        Ok(report) => ExitCode::from(report.exit_code),
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(2)
        }
    }
}
