//! Example of registering tests in the default context and running them
//!
//! Configure with `TESTRUN_FILTER`, `TESTRUN_FAIL_FAST`, `TESTRUN_REPORTER`
//! and `RUST_LOG` (e.g. `RUST_LOG=testrun=debug`).

use anyhow::Result;
use std::cell::RefCell;
use std::rc::Rc;
use testrun_rs::{
    after_each, all, and_then, before_each, describe, expect_contains, expect_eq, expect_gt,
    it, run_and_report, test, xit,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let stack: Rc<RefCell<Vec<i32>>> = Rc::default();

    let fixture = stack.clone();
    before_each(move || {
        fixture.borrow_mut().extend([1, 2, 3]);
        Ok(())
    })?;
    let fixture = stack.clone();
    after_each(move || {
        fixture.borrow_mut().clear();
        Ok(())
    })?;

    test("string formatting", || {
        let greeting = format!("hello, {}", "world");
        all([
            expect_contains(&greeting, "world"),
            expect_eq(greeting.len(), 12),
        ])
    })?;

    let s = stack.clone();
    describe("stack", move || {
        let top = s.clone();
        it("peeks the last element", move || {
            expect_eq(top.borrow().last().copied(), Some(3))
        })?;

        let popped = s.clone();
        describe("pop", move || {
            it("shrinks the stack", move || {
                let mut stack = popped.borrow_mut();
                and_then(expect_eq(stack.pop(), Some(3)), || expect_eq(stack.len(), 2))
            })?;
            xit("handles underflow", || expect_gt(0, 1))
        })
    })?;

    if !run_and_report()? {
        std::process::exit(1);
    }
    Ok(())
}
