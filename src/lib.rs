//! # testrun-rs
//!
//! A Rust crate for registering test cases, flat or as nested BDD suites,
//! and running them in a deterministic order with lifecycle hooks,
//! `skip`/`only` modifiers, name filtering, fail-fast and pluggable
//! reporters.
//!
//! Assertions are values: every predicate returns a [`Check`], and the
//! [`all`] and [`and_then`] combinators fold several of them into the one
//! value a test body returns.
//!
//! Registration goes either through an explicit [`Context`] or through the
//! free functions in this module, which share a default context for the
//! current thread.

pub mod assert;
pub mod bdd;
pub mod context;
pub mod discovery;
pub mod error;
pub mod outcome;
pub mod registry;
pub mod report;
pub mod run;
pub mod select;
pub mod summary;

pub use assert::{
    expect_contains, expect_eq, expect_err, expect_false, expect_gt, expect_lt, expect_ne,
    expect_ok, expect_true,
};
pub use context::Context;
pub use error::{Error, Result};
pub use outcome::{all, and_then, Check, Failure, IntoCheck, Outcome, SkipReason};
pub use registry::{HookKind, Modifier, Registry, TestCase};
pub use report::{
    print_results, print_results_with, render, ColorMode, CompactReporter, DotReporter,
    PrettyReporter, Reporter, ReporterKind,
};
pub use run::{run_context, RunOptions};
pub use summary::{Summary, TestReport, TestResult};

use std::cell::RefCell;

thread_local! {
    static DEFAULT_CONTEXT: RefCell<Context> = RefCell::new(Context::new());
}

fn with_default_context<T>(f: impl FnOnce(&mut Context) -> T) -> T {
    DEFAULT_CONTEXT.with(|cell| f(&mut cell.borrow_mut()))
}

/// Register a test in the default context
///
/// ```
/// use testrun_rs::{expect_contains, run_tests, test};
///
/// test("greeting mentions the name", || expect_contains("hello, ana", "ana")).unwrap();
/// assert!(run_tests().unwrap().success());
/// ```
pub fn test<F, R>(name: &str, body: F) -> Result<()>
where
    F: Fn() -> R + 'static,
    R: IntoCheck,
{
    with_default_context(|ctx| ctx.test(name, body))
}

/// Register a test that is reported as skipped
pub fn skip<F, R>(name: &str, body: F) -> Result<()>
where
    F: Fn() -> R + 'static,
    R: IntoCheck,
{
    with_default_context(|ctx| ctx.skip(name, body))
}

/// Register a focused test; unfocused tests are then skipped
pub fn only<F, R>(name: &str, body: F) -> Result<()>
where
    F: Fn() -> R + 'static,
    R: IntoCheck,
{
    with_default_context(|ctx| ctx.only(name, body))
}

/// Register a suite in the default context
///
/// `builder` runs immediately and registers children with [`it`], [`xit`],
/// [`fit`] or nested `describe` calls. Qualified names join suite names
/// with [`bdd::NAME_SEPARATOR`].
///
/// ```
/// use testrun_rs::{describe, expect_eq, it, run_suite};
///
/// describe("stack", || {
///     it("starts empty", || expect_eq(Vec::<u8>::new().len(), 0))?;
///     describe("push", || it("grows", || expect_eq(vec![1].len(), 1)))
/// })
/// .unwrap();
///
/// let report = run_suite().unwrap();
/// assert_eq!(report.results[1].qualified_name, "stack > push > grows");
/// ```
pub fn describe<F>(name: &str, builder: F) -> Result<()>
where
    F: FnOnce() -> Result<()>,
{
    with_default_context(|ctx| ctx.open_suite(name))?;
    let built = builder();
    let closed = with_default_context(|ctx| ctx.close_suite());
    built.and(closed)
}

pub fn it<F, R>(name: &str, body: F) -> Result<()>
where
    F: Fn() -> R + 'static,
    R: IntoCheck,
{
    test(name, body)
}

pub fn xit<F, R>(name: &str, body: F) -> Result<()>
where
    F: Fn() -> R + 'static,
    R: IntoCheck,
{
    skip(name, body)
}

pub fn fit<F, R>(name: &str, body: F) -> Result<()>
where
    F: Fn() -> R + 'static,
    R: IntoCheck,
{
    only(name, body)
}

pub fn before_all<F>(hook: F) -> Result<()>
where
    F: Fn() -> Result<()> + 'static,
{
    with_default_context(|ctx| ctx.before_all(hook))
}

pub fn after_all<F>(hook: F) -> Result<()>
where
    F: Fn() -> Result<()> + 'static,
{
    with_default_context(|ctx| ctx.after_all(hook))
}

pub fn before_each<F>(hook: F) -> Result<()>
where
    F: Fn() -> Result<()> + 'static,
{
    with_default_context(|ctx| ctx.before_each(hook))
}

pub fn after_each<F>(hook: F) -> Result<()>
where
    F: Fn() -> Result<()> + 'static,
{
    with_default_context(|ctx| ctx.after_each(hook))
}

/// Run the default context with explicit options
///
/// The context is moved out for the duration of the run, so bodies and
/// hooks that try to register through the free functions get
/// [`Error::RegistrationMisuse`] instead of a borrow panic.
pub fn run_default(options: &RunOptions) -> Result<TestReport> {
    let mut ctx = DEFAULT_CONTEXT.with(|cell| cell.replace(Context::running()));
    let report = run_context(&mut ctx, options);
    DEFAULT_CONTEXT.with(|cell| cell.replace(ctx));
    report
}

/// Run every test in the default context
pub fn run_tests() -> Result<TestReport> {
    run_default(&RunOptions::new())
}

/// Run the tests whose qualified name contains `filter`
pub fn run_tests_filtered(filter: &str) -> Result<TestReport> {
    run_default(&RunOptions::new().filter(filter))
}

/// Run every test, stopping after the first failure
pub fn run_tests_fail_fast() -> Result<TestReport> {
    run_default(&RunOptions::new().fail_fast(true))
}

/// Run the default context's suites
///
/// Suites are flattened into the registry as they close, so this runs the
/// same list as [`run_tests`].
pub fn run_suite() -> Result<TestReport> {
    run_tests()
}

/// Clear the default context
pub fn reset() {
    with_default_context(Context::reset);
}

/// Run the default context configured from the environment and print the
/// results
///
/// Returns whether every test passed, for use as the process exit status.
pub fn run_and_report() -> Result<bool> {
    let options = RunOptions::from_env()?;
    let report = run_default(&options)?;
    print_results_with(&report, options.reporter, options.color)?;
    Ok(report.success())
}
