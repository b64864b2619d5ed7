//! Example of discovering test files and emitting a runner script
//!
//! Usage: `cargo run --example discover -- [DIR] [FORMAT] [FILTER]` where
//! FORMAT is `list`, `sh` or `bat`.

use anyhow::{bail, Context, Result};
use std::path::PathBuf;
use testrun_rs::discovery::{
    discover, filter_paths, render_script, ScriptFormat, DEFAULT_TEST_PATTERN,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let dir = PathBuf::from(args.next().unwrap_or_else(|| "tests".to_string()));
    let format = match args.next().as_deref() {
        None | Some("list") => ScriptFormat::List,
        Some("sh") => ScriptFormat::Shell,
        Some("bat") => ScriptFormat::Batch,
        Some(other) => bail!("unknown format: {}", other),
    };

    let mut paths = discover(&dir, DEFAULT_TEST_PATTERN)
        .with_context(|| format!("failed to discover tests in {}", dir.display()))?;
    if let Some(filter) = args.next() {
        paths = filter_paths(paths, &filter);
    }

    print!("{}", render_script(&paths, format, "cargo test --test"));
    Ok(())
}
