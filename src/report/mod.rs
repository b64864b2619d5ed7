//! Rendering of run results
//!
//! Every reporter receives the same data: one [`Reporter::on_result`] call
//! per reported test in registration order, then one
//! [`Reporter::on_summary`]. Variants differ only in how they draw it.

mod compact;
mod dot;
mod pretty;

pub use compact::CompactReporter;
pub use dot::DotReporter;
pub use pretty::PrettyReporter;

use crate::error::{Error, Result};
use crate::outcome::Outcome;
use crate::summary::{Summary, TestReport};
use std::io;
use std::str::FromStr;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Consumer of the outcome stream
pub trait Reporter {
    /// Called once per reported test, in order
    fn on_result(&mut self, qualified_name: &str, outcome: &Outcome) -> io::Result<()>;

    /// Called once after the last result
    fn on_summary(&mut self, summary: &Summary) -> io::Result<()>;
}

/// The built-in reporters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReporterKind {
    /// A block per test with failure details
    #[default]
    Pretty,
    /// A character per test
    Dot,
    /// A line per test
    Compact,
}

impl ReporterKind {
    /// Build a reporter of this kind writing to `out`
    pub fn build<'w, W>(self, out: W) -> Box<dyn Reporter + 'w>
    where
        W: WriteColor + 'w,
    {
        match self {
            ReporterKind::Pretty => Box::new(PrettyReporter::new(out)),
            ReporterKind::Dot => Box::new(DotReporter::new(out)),
            ReporterKind::Compact => Box::new(CompactReporter::new(out)),
        }
    }
}

impl FromStr for ReporterKind {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self> {
        match name.to_lowercase().as_str() {
            "pretty" => Ok(ReporterKind::Pretty),
            "dot" => Ok(ReporterKind::Dot),
            "compact" => Ok(ReporterKind::Compact),
            _ => Err(Error::UnknownReporter {
                name: name.to_string(),
            }),
        }
    }
}

/// Whether reporter output is colored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Color when writing to a terminal (requires the `colors` feature)
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn choice(self) -> ColorChoice {
        match self {
            ColorMode::Auto => auto_choice(),
            ColorMode::Always => ColorChoice::Always,
            ColorMode::Never => ColorChoice::Never,
        }
    }
}

#[cfg(feature = "colors")]
fn auto_choice() -> ColorChoice {
    if atty::is(atty::Stream::Stdout) {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    }
}

#[cfg(not(feature = "colors"))]
fn auto_choice() -> ColorChoice {
    ColorChoice::Never
}

/// Feed a finished report through `reporter`
pub fn render(report: &TestReport, reporter: &mut dyn Reporter) -> io::Result<()> {
    for result in &report.results {
        reporter.on_result(&result.qualified_name, &result.outcome)?;
    }
    reporter.on_summary(&report.summary)
}

/// Print a report to standard output with the pretty reporter
pub fn print_results(report: &TestReport) -> Result<()> {
    print_results_with(report, ReporterKind::Pretty, ColorMode::Auto)
}

/// Print a report to standard output with the given reporter
pub fn print_results_with(report: &TestReport, kind: ReporterKind, color: ColorMode) -> Result<()> {
    let stdout = StandardStream::stdout(color.choice());
    let mut out = stdout.lock();
    let mut reporter = kind.build(&mut out);
    render(report, reporter.as_mut())?;
    Ok(())
}

/// Write `text` in bold with the given color
pub(crate) fn write_tag<W: WriteColor>(out: &mut W, text: &str, color: Color) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true))?;
    write!(out, "{}", text)?;
    out.reset()
}

/// The summary block shared by every reporter
pub(crate) fn write_summary<W: WriteColor>(out: &mut W, summary: &Summary) -> io::Result<()> {
    writeln!(out, "{}", "─".repeat(50))?;
    write!(out, "Test result: ")?;
    if summary.success() {
        write_tag(out, "PASSED", Color::Green)?;
    } else {
        write_tag(out, "FAILED", Color::Red)?;
    }
    writeln!(
        out,
        " | {} total, {} passed, {} failed, {} skipped",
        summary.total(),
        summary.passed,
        summary.failed,
        summary.skipped
    )?;
    out.flush()
}
