//! pwd-check CLI entry point.

use std::io::{self, BufRead};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use pwd_check::{ValidatorPipeline, WeakPasswordSet};
use secrecy::SecretString;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Validate passwords from stdin against a fixed rule pipeline.
#[derive(Debug, Parser)]
#[command(name = "pwd-check")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to a newline-delimited weak-password list
    weak_list: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN, keeping stderr free for diagnostics
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("pwd_check=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pwd_check=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(io::stderr))
        .with(filter)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    let weak_set = WeakPasswordSet::load_or_empty(cli.weak_list.as_deref());
    let pipeline = ValidatorPipeline::new(weak_set);

    let stdin = io::stdin();
    let stderr = io::stderr();
    let mut sink = stderr.lock();

    // One password per line; each line is fully validated before the next
    // is read. End of stream ends the process normally.
    for line in stdin.lock().lines() {
        let line = line.context("failed to read password from stdin")?;
        let password = SecretString::new(line.into());
        pipeline
            .check(&password, &mut sink)
            .context("failed to write diagnostic")?;
    }

    Ok(())
}
