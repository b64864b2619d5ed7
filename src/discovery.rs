//! Test file discovery and runner script generation

use crate::error::Result;
use regex::Regex;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// File name pattern used when none is given
pub const DEFAULT_TEST_PATTERN: &str = "*_test.rs";

/// Output format for [`render_script`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptFormat {
    /// One path per line
    List,
    /// POSIX shell script that stops at the first failing file
    Shell,
    /// Windows batch file that stops at the first failing file
    Batch,
}

/// Compile a file name glob into an anchored regex
///
/// `*` matches any run of characters and `?` a single character; everything
/// else is literal.
pub fn glob_to_regex(pattern: &str) -> Result<Regex> {
    let mut source = String::from("^");
    for c in pattern.chars() {
        match c {
            '*' => source.push_str(".*"),
            '?' => source.push('.'),
            other => source.push_str(&regex::escape(other.encode_utf8(&mut [0; 4]))),
        }
    }
    source.push('$');
    Ok(Regex::new(&source)?)
}

/// Find files under `root` whose file name matches `pattern`
///
/// Paths are returned sorted so generated scripts are stable.
pub fn discover(root: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    let regex = glob_to_regex(pattern)?;
    let mut found = Vec::new();

    for entry in WalkDir::new(root).min_depth(1) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        if let Some(file_name) = entry.file_name().to_str() {
            if regex.is_match(file_name) {
                found.push(entry.path().to_path_buf());
            }
        }
    }

    found.sort();
    debug!(target: "testrun::discovery", root = %root.display(), pattern, found = found.len(), "discovered test files");
    Ok(found)
}

/// Keep paths whose display form contains `substring`
pub fn filter_paths(paths: Vec<PathBuf>, substring: &str) -> Vec<PathBuf> {
    paths
        .into_iter()
        .filter(|p| p.to_string_lossy().contains(substring))
        .collect()
}

/// Render the paths as a list or as a script invoking `runner` on each
pub fn render_script(paths: &[PathBuf], format: ScriptFormat, runner: &str) -> String {
    let mut script = String::new();
    match format {
        ScriptFormat::List => {
            for path in paths {
                script.push_str(&path.to_string_lossy());
                script.push('\n');
            }
        }
        ScriptFormat::Shell => {
            script.push_str("#!/bin/sh\nset -e\n");
            for path in paths {
                script.push_str(&format!("{} {}\n", runner, shell_quote(&path.to_string_lossy())));
            }
        }
        ScriptFormat::Batch => {
            script.push_str("@echo off\r\n");
            for path in paths {
                script.push_str(&format!(
                    "{} \"{}\" || exit /b 1\r\n",
                    runner,
                    path.to_string_lossy()
                ));
            }
        }
    }
    script
}

fn shell_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', "'\\''"))
}
