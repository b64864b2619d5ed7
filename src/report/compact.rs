use super::{write_summary, write_tag, Reporter};
use crate::outcome::Outcome;
use crate::summary::Summary;
use std::io;
use termcolor::{Color, WriteColor};

/// Renders one line per test
pub struct CompactReporter<W> {
    out: W,
}

impl<W: WriteColor> CompactReporter<W> {
    pub fn new(out: W) -> Self {
        CompactReporter { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: WriteColor> Reporter for CompactReporter<W> {
    fn on_result(&mut self, qualified_name: &str, outcome: &Outcome) -> io::Result<()> {
        match outcome {
            Outcome::Pass => {
                write_tag(&mut self.out, "ok  ", Color::Green)?;
                writeln!(self.out, " {}", qualified_name)
            }
            Outcome::Fail(failure) => {
                write_tag(&mut self.out, "fail", Color::Red)?;
                let first_line = failure.message.lines().next().unwrap_or_default();
                writeln!(self.out, " {}: {}", qualified_name, first_line)
            }
            Outcome::Skip(reason) => {
                write_tag(&mut self.out, "skip", Color::Yellow)?;
                writeln!(self.out, " {} ({})", qualified_name, reason)
            }
        }
    }

    fn on_summary(&mut self, summary: &Summary) -> io::Result<()> {
        write_summary(&mut self.out, summary)
    }
}
