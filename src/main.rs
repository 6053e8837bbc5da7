//! CLI entry point for the Civitai share-URL resolver.

use std::io::{self, IsTerminal, Read};

use anyhow::Result;
use civitai_resolver::CivitaiResolver;
use clap::Parser;
use tracing::{debug, info};

mod cli;

use cli::Args;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments first (before tracing, so --help works without logs)
    let args = Args::parse();

    // Determine log level based on verbose/quiet flags
    // Priority: RUST_LOG env var > quiet flag > verbose flag > default (info)
    let default_level = if args.quiet {
        "error"
    } else {
        match args.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    // Logs go to stderr; stdout carries only the resolved URLs.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    debug!(?args, "CLI arguments parsed");

    // Read input: from positional args or stdin
    let input_text = if args.urls.is_empty() {
        if io::stdin().is_terminal() {
            info!("No input provided. Pipe URLs via stdin or pass as arguments.");
            info!("Example: echo 'https://civitai.com/models/999' | civitai-resolve");
            return Ok(());
        }
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        args.urls.join("\n")
    };

    let resolver = match &args.config {
        Some(path) => CivitaiResolver::with_config_path(path)?,
        None => CivitaiResolver::new()?,
    };

    for line in input_text.lines() {
        let url = line.trim();
        if url.is_empty() {
            continue;
        }
        let direct = resolver.resolve(url).await;
        debug!(input = %url, direct = %direct, "resolved");
        println!("{direct}");
    }

    Ok(())
}
