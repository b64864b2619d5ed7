//! Test execution module

pub mod execution;
pub mod params;

// Re-export public types
pub use execution::{Execution, Executor, Phase};
pub use params::RunOptions;

use crate::context::Context;
use crate::error::Result;
use crate::outcome::Outcome;
use crate::select::select;
use crate::summary::{TestReport, TestResult};
use tracing::info;

/// Run every test registered on `ctx`
///
/// Selection skips are merged with executed outcomes in registration order.
/// The context is sealed against further registration.
pub fn run_context(ctx: &mut Context, options: &RunOptions) -> Result<TestReport> {
    ctx.begin_run()?;

    let tests = ctx.registry().tests();
    let selection = select(tests, options.filter.as_deref());
    let execution = Executor::new(ctx.registry(), options.fail_fast).run(&selection.runnable)?;

    let mut outcomes: Vec<(usize, Outcome)> = selection
        .skipped
        .into_iter()
        .map(|(index, reason)| (index, Outcome::Skip(reason)))
        .chain(execution.outcomes)
        .collect();
    outcomes.sort_by_key(|(index, _)| *index);

    let results = outcomes
        .into_iter()
        .map(|(index, outcome)| TestResult {
            name: tests[index].name.clone(),
            qualified_name: tests[index].qualified_name.clone(),
            outcome,
        })
        .collect();

    let report = TestReport::new(results, execution.not_run);
    info!(
        target: "testrun::exec",
        passed = report.summary.passed,
        failed = report.summary.failed,
        skipped = report.summary.skipped,
        not_run = report.not_run,
        "run complete"
    );
    Ok(report)
}
