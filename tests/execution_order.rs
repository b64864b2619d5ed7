//! Tests for hook ordering and fail-fast behaviour

use std::cell::RefCell;
use std::rc::Rc;
use testrun_rs::{expect_true, Context, Error, HookKind, RunOptions};

type Trace = Rc<RefCell<Vec<String>>>;

fn record(trace: &Trace, entry: &str) {
    trace.borrow_mut().push(entry.to_string());
}

/// Build a context with one hook of every kind and the given tests
fn context_with(trace: &Trace, tests: &[(&'static str, bool)]) -> Context {
    let mut ctx = Context::new();
    for kind in [
        HookKind::BeforeAll,
        HookKind::BeforeEach,
        HookKind::AfterEach,
        HookKind::AfterAll,
    ] {
        let trace = trace.clone();
        ctx.hook(kind, move || {
            record(&trace, &kind.to_string());
            Ok(())
        })
        .unwrap();
    }
    for &(name, pass) in tests {
        let trace = trace.clone();
        ctx.test(name, move || {
            record(&trace, name);
            expect_true(pass, &format!("{} failed", name))
        })
        .unwrap();
    }
    ctx
}

#[test]
fn test_after_each_runs_after_failing_body() {
    let trace = Trace::default();
    let mut ctx = context_with(&trace, &[("broken", false), ("fine", true)]);

    let report = ctx.run(&RunOptions::new()).unwrap();

    assert_eq!(
        *trace.borrow(),
        [
            "beforeAll",
            "beforeEach",
            "broken",
            "afterEach",
            "beforeEach",
            "fine",
            "afterEach",
            "afterAll",
        ]
    );
    assert_eq!(report.summary.failed, 1);
    assert_eq!(report.summary.passed, 1);
}

#[test]
fn test_fail_fast_stops_bodies_but_not_after_all() {
    let trace = Trace::default();
    let mut ctx = context_with(&trace, &[("one", true), ("two", false), ("three", true)]);

    let report = ctx.run(&RunOptions::new().fail_fast(true)).unwrap();

    let trace = trace.borrow();
    assert!(!trace.iter().any(|e| e == "three"));
    assert_eq!(trace.iter().filter(|e| *e == "afterAll").count(), 1);
    assert_eq!(trace.last().unwrap(), "afterAll");
    assert_eq!(report.results.len(), 2);
    assert_eq!(report.not_run, 1);
    assert_eq!(report.summary.total(), 2);
}

#[test]
fn test_fail_fast_without_failures_runs_everything() {
    let trace = Trace::default();
    let mut ctx = context_with(&trace, &[("a", true), ("b", true)]);

    let report = ctx.run(&RunOptions::new().fail_fast(true)).unwrap();
    assert_eq!(report.summary.passed, 2);
    assert_eq!(report.not_run, 0);
}

#[test]
fn test_all_hooks_registered_in_order() {
    let trace = Trace::default();
    let mut ctx = Context::new();
    for label in ["first", "second"] {
        let trace = trace.clone();
        ctx.before_each(move || {
            record(&trace, label);
            Ok(())
        })
        .unwrap();
    }
    ctx.test("t", || ()).unwrap();
    ctx.run(&RunOptions::new()).unwrap();
    assert_eq!(*trace.borrow(), ["first", "second"]);
}

#[test]
fn test_nothing_runnable_means_no_hooks() {
    let trace = Trace::default();
    let mut ctx = context_with(&trace, &[("filtered", true)]);

    let report = ctx.run(&RunOptions::new().filter("zzz")).unwrap();
    assert!(trace.borrow().is_empty());
    assert_eq!(report.summary.skipped, 1);
}

#[test]
fn test_hook_failure_aborts_run() {
    let mut ctx = Context::new();
    ctx.before_all(|| Err(Error::Generic("database unavailable".to_string()))).unwrap();
    ctx.test("never runs", || ()).unwrap();

    let err = ctx.run(&RunOptions::new()).unwrap_err();
    assert_eq!(err.to_string(), "beforeAll hook failed: database unavailable");
}

#[test]
fn test_bodies_share_outer_state() {
    let counter = Rc::new(RefCell::new(0));
    let mut ctx = Context::new();
    for expected in 1..=3 {
        let counter = counter.clone();
        ctx.test(&format!("sees {}", expected), move || {
            *counter.borrow_mut() += 1;
            testrun_rs::expect_eq(*counter.borrow(), expected)
        })
        .unwrap();
    }
    assert!(ctx.run(&RunOptions::new()).unwrap().success());
}
