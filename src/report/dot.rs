use super::{write_summary, write_tag, Reporter};
use crate::outcome::Outcome;
use crate::summary::Summary;
use std::io;
use termcolor::{Color, WriteColor};

/// Renders one character per test: `.` pass, `F` fail, `S` skip
pub struct DotReporter<W> {
    out: W,
    written: usize,
}

impl<W: WriteColor> DotReporter<W> {
    pub fn new(out: W) -> Self {
        DotReporter { out, written: 0 }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: WriteColor> Reporter for DotReporter<W> {
    fn on_result(&mut self, _qualified_name: &str, outcome: &Outcome) -> io::Result<()> {
        match outcome {
            Outcome::Pass => write_tag(&mut self.out, ".", Color::Green)?,
            Outcome::Fail(_) => write_tag(&mut self.out, "F", Color::Red)?,
            Outcome::Skip(_) => write_tag(&mut self.out, "S", Color::Yellow)?,
        }
        self.written += 1;
        self.out.flush()
    }

    fn on_summary(&mut self, summary: &Summary) -> io::Result<()> {
        if self.written > 0 {
            writeln!(self.out)?;
        }
        writeln!(self.out)?;
        write_summary(&mut self.out, summary)
    }
}

#[cfg(test)]
mod tests {
    use crate::report::tests::{rendered, sample_report};
    use crate::report::ReporterKind;
    use crate::summary::TestReport;

    #[test]
    fn one_character_per_outcome() {
        let output = rendered(ReporterKind::Dot, &sample_report());
        assert!(output.starts_with(".FS.\n\n"), "output:\n{}", output);
        assert!(!output.contains("divides"));
    }

    #[test]
    fn writer_is_returned_after_reporting() {
        use crate::outcome::Outcome;
        use crate::report::{DotReporter, Reporter};
        use termcolor::Buffer;

        let mut reporter = DotReporter::new(Buffer::no_color());
        reporter.on_result("a", &Outcome::Pass).unwrap();
        let buffer = reporter.into_inner();
        assert_eq!(buffer.as_slice(), b".");
    }

    #[test]
    fn empty_report_has_no_dot_line() {
        let output = rendered(ReporterKind::Dot, &TestReport::default());
        assert!(output.starts_with("\n─"), "output:\n{}", output);
    }
}
