use super::{write_summary, write_tag, Reporter};
use crate::outcome::Outcome;
use crate::summary::Summary;
use std::io;
use termcolor::{Color, ColorSpec, WriteColor};

/// Renders a block per test, with the message and expected/actual values
/// of every failure
pub struct PrettyReporter<W> {
    out: W,
}

impl<W: WriteColor> PrettyReporter<W> {
    pub fn new(out: W) -> Self {
        PrettyReporter { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_detail(&mut self, label: &str, value: &str) -> io::Result<()> {
        self.out.set_color(ColorSpec::new().set_dimmed(true))?;
        write!(self.out, "    {:<10}", label)?;
        self.out.reset()?;
        writeln!(self.out, "{}", value)
    }
}

impl<W: WriteColor> Reporter for PrettyReporter<W> {
    fn on_result(&mut self, qualified_name: &str, outcome: &Outcome) -> io::Result<()> {
        match outcome {
            Outcome::Pass => {
                write_tag(&mut self.out, "PASS", Color::Green)?;
                writeln!(self.out, " {}", qualified_name)?;
            }
            Outcome::Fail(failure) => {
                write_tag(&mut self.out, "FAIL", Color::Red)?;
                writeln!(self.out, " {}", qualified_name)?;
                for line in failure.message.lines() {
                    writeln!(self.out, "    {}", line)?;
                }
                if let Some(expected) = &failure.expected {
                    self.write_detail("expected:", expected)?;
                }
                if let Some(actual) = &failure.actual {
                    self.write_detail("actual:", actual)?;
                }
            }
            Outcome::Skip(reason) => {
                write_tag(&mut self.out, "SKIP", Color::Yellow)?;
                writeln!(self.out, " {} ({})", qualified_name, reason)?;
            }
        }
        Ok(())
    }

    fn on_summary(&mut self, summary: &Summary) -> io::Result<()> {
        writeln!(self.out)?;
        write_summary(&mut self.out, summary)
    }
}

#[cfg(test)]
mod tests {
    use crate::report::tests::{rendered, sample_report};
    use crate::report::ReporterKind;

    #[test]
    fn failure_block_shows_expected_and_actual() {
        let output = rendered(ReporterKind::Pretty, &sample_report());
        let expected = "\
PASS math > adds
FAIL math > divides
    values are not equal
    expected: 2
    actual:   3
SKIP slow (skip modifier)
PASS strings
";
        assert!(output.starts_with(expected), "output:\n{}", output);
    }

    #[test]
    fn writer_is_returned_after_reporting() {
        use crate::outcome::{Outcome, SkipReason};
        use crate::report::{PrettyReporter, Reporter};
        use termcolor::Buffer;

        let mut reporter = PrettyReporter::new(Buffer::no_color());
        reporter
            .on_result("later", &Outcome::Skip(SkipReason::Explicit))
            .unwrap();
        let buffer = reporter.into_inner();
        assert_eq!(buffer.as_slice(), b"SKIP later (skip modifier)\n");
    }
}
