//! Tests for the built-in reporters

use termcolor::Buffer;
use testrun_rs::{expect_contains, render, Context, ReporterKind, RunOptions, TestReport};

fn sample_report() -> TestReport {
    let mut ctx = Context::new();
    ctx.describe("greeting", |ctx| {
        ctx.it("says hello", || expect_contains("hello world", "hello"))?;
        ctx.it("says goodbye", || expect_contains("hello world", "bye"))
    })
    .unwrap();
    ctx.skip("later", || ()).unwrap();
    ctx.run(&RunOptions::new()).unwrap()
}

fn render_to_string(kind: ReporterKind, report: &TestReport) -> String {
    let mut buffer = Buffer::no_color();
    {
        let mut reporter = kind.build(&mut buffer);
        render(report, reporter.as_mut()).unwrap();
    }
    String::from_utf8(buffer.into_inner()).unwrap()
}

#[test]
fn test_pretty_shows_failure_details() {
    let output = render_to_string(ReporterKind::Pretty, &sample_report());
    println!("{}", output);

    assert!(output.contains("PASS greeting > says hello\n"));
    assert!(output.contains("FAIL greeting > says goodbye\n"));
    assert!(output.contains("string does not contain \"bye\""));
    assert!(output.contains("expected: contains \"bye\""));
    assert!(output.contains("actual:   \"hello world\""));
    assert!(output.contains("SKIP later (skip modifier)"));
}

#[test]
fn test_dot_has_no_per_test_detail() {
    let output = render_to_string(ReporterKind::Dot, &sample_report());
    assert!(output.starts_with(".FS\n"));
    assert!(!output.contains("greeting"));
}

#[test]
fn test_compact_is_one_line_per_test() {
    let output = render_to_string(ReporterKind::Compact, &sample_report());
    let lines: Vec<_> = output.lines().collect();
    assert_eq!(lines[0], "ok   greeting > says hello");
    assert!(lines[1].starts_with("fail greeting > says goodbye: "));
    assert_eq!(lines[2], "skip later (skip modifier)");
}

#[test]
fn test_summary_block_is_shared() {
    let report = sample_report();
    let summary = "Test result: FAILED | 3 total, 1 passed, 1 failed, 1 skipped";
    for kind in [ReporterKind::Pretty, ReporterKind::Dot, ReporterKind::Compact] {
        assert!(render_to_string(kind, &report).contains(summary));
    }
}
