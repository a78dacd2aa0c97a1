//! noteblocks: command-line access to block rendering, parsing and merging.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use noteblocks_core::{OutputFormat, RenderConfig};
use noteblocks_kinds::commands;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "noteblocks")]
#[command(author, version, about = "Render, parse and merge content blocks")]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a block tree as markdown or JSON
    Render {
        /// JSON file holding an array of blocks
        #[arg(short, long)]
        input: PathBuf,

        /// Id of the block to start from
        #[arg(short, long)]
        root: Uuid,

        /// Output format (default: NOTEBLOCKS_OUTPUT, then markdown)
        #[arg(short, long)]
        format: Option<OutputFormat>,

        /// Indent JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Convert one line of markdown into a block
    Parse {
        /// Markdown line
        markdown: String,
    },

    /// List block references found in a text file
    References {
        /// Text file to scan
        file: PathBuf,
    },

    /// Apply a partial-update patch to a block
    Merge {
        /// JSON file holding the block
        #[arg(short, long)]
        block: PathBuf,

        /// JSON file holding the patch
        #[arg(short, long)]
        patch: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let _file_guard = init_tracing();

    let cli = Cli::parse();
    let output = run(cli)?;
    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}

fn run(cli: Cli) -> anyhow::Result<String> {
    let output = match cli.command {
        Commands::Render {
            input,
            root,
            format,
            pretty,
        } => {
            let mut config = RenderConfig::from_env();
            if let Some(format) = format {
                config.output = format;
            }
            config.pretty |= pretty;
            commands::render(&input, root, &config)?
        }
        Commands::Parse { markdown } => commands::parse(&markdown)?,
        Commands::References { file } => commands::references(&file)?,
        Commands::Merge { block, patch } => commands::merge(&block, &patch)?,
    };
    Ok(output)
}

/// Initialize tracing with configurable output.
///
/// Environment variables:
///   LOG_FORMAT  - "json" or "text" (default: "text")
///   LOG_FILE    - path to log file (optional, enables file logging)
///   LOG_ANSI    - "true"/"false" override ANSI colors
///   RUST_LOG    - standard env filter (default: "warn")
///
/// Console output goes to stderr so rendered output on stdout stays clean.
fn init_tracing() -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let log_file = std::env::var("LOG_FILE").ok();
    let log_ansi = std::env::var("LOG_ANSI")
        .ok()
        .map(|v| v == "true" || v == "1");

    let env_filter =
        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into());
    let registry = tracing_subscriber::registry().with(env_filter);

    let guard = if let Some(ref path) = log_file {
        let path = Path::new(path);
        let file_dir = path.parent().unwrap_or(Path::new("."));
        let file_name = path
            .file_name()
            .and_then(|f| f.to_str())
            .unwrap_or("noteblocks.log");
        let file_appender = tracing_appender::rolling::daily(file_dir, file_name);
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        if log_format == "json" {
            registry
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_writer(non_blocking),
                )
                .init();
        } else {
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(log_ansi.unwrap_or(false)); // no ANSI in files by default
            registry.with(layer).init();
        }
        Some(guard)
    } else {
        if log_format == "json" {
            registry
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_writer(std::io::stderr),
                )
                .init();
        } else {
            let mut layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);
            if let Some(ansi) = log_ansi {
                layer = layer.with_ansi(ansi);
            }
            registry.with(layer).init();
        }
        None
    };

    info!(
        log_format = %log_format,
        log_file = log_file.as_deref().unwrap_or("(stderr)"),
        "Logging initialized"
    );
    guard
}
