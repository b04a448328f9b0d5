//! `stitch` CLI — assemble a page from its root document and component fragments.
//!
//! ## Usage
//!
//! ```sh
//! # Resolve page/page1.data.json next to the executable, print compact JSON
//! stitch
//!
//! # Resolve a different root under an explicit base directory
//! stitch --base-dir ./site page/landing.data.json
//!
//! # Pretty-print into a file, refusing reference chains deeper than 16
//! stitch --pretty --max-depth 16 -o merged.json
//!
//! # Replace a nested value after stitching
//! stitch --set '/plugins/0/link/content="Some content"'
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use stitch_core::{apply_overrides, FsLoader, Override, Resolver, ResolverConfig, DEFAULT_ROOT};
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "stitch",
    version,
    about = "Stitch a root JSON page and its referenced component fragments into one document"
)]
struct Cli {
    /// Root document, relative to the base directory
    #[arg(default_value = DEFAULT_ROOT)]
    root: String,

    /// Directory all references resolve against (defaults to the executable's directory)
    #[arg(long)]
    base_dir: Option<PathBuf>,

    /// Fail when references nest deeper than this (unbounded if omitted)
    #[arg(long)]
    max_depth: Option<usize>,

    /// Replace a value in the result: POINTER=VALUE (repeatable)
    #[arg(long = "set", value_name = "POINTER=VALUE")]
    overrides: Vec<String>,

    /// Pretty-print the output JSON
    #[arg(long)]
    pretty: bool,

    /// Output file (writes to stdout if omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Log filter, e.g. "debug" or "stitch_core=trace"
    #[arg(long, default_value = "warn")]
    log_level: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_new(&cli.log_level).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    // Parse overrides up front so a typo fails before any file is read.
    let overrides = cli
        .overrides
        .iter()
        .map(|raw| raw.parse::<Override>())
        .collect::<stitch_core::Result<Vec<_>>>()
        .context("Invalid --set argument")?;

    let base_dir = match cli.base_dir {
        Some(dir) => dir,
        None => default_base_dir()?,
    };
    info!(base_dir = %base_dir.display(), root = %cli.root, "stitching page");

    let config = ResolverConfig {
        max_depth: cli.max_depth,
    };
    let resolver = Resolver::with_config(FsLoader::new(base_dir), config);
    let mut page = resolver
        .resolve_root(&cli.root)
        .await
        .with_context(|| format!("Failed to stitch {}", cli.root))?;

    apply_overrides(&mut page, &overrides).context("Failed to apply --set")?;

    let json = if cli.pretty {
        serde_json::to_string_pretty(&page)?
    } else {
        serde_json::to_string(&page)?
    };
    write_output(cli.output.as_deref(), &json)
}

/// Directory containing the running executable.
fn default_base_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("Failed to locate the stitch executable")?;
    exe.parent()
        .map(PathBuf::from)
        .context("Executable path has no parent directory")
}

fn write_output(path: Option<&std::path::Path>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, format!("{content}\n"))
                .with_context(|| format!("Failed to write file: {}", path.display()))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
