//! Ordered execution of selected tests and their hooks

use crate::error::{Error, Result};
use crate::outcome::Outcome;
use crate::registry::{HookKind, Registry};
use tracing::{debug, info, warn};

/// Where the executor is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Running,
    Done,
}

/// Outcomes of executed tests, keyed by registration index
#[derive(Debug, Default)]
pub struct Execution {
    pub outcomes: Vec<(usize, Outcome)>,
    /// Runnable tests never started because fail-fast stopped the run
    pub not_run: usize,
}

/// Runs hooks and test bodies against a registry, one test at a time
pub struct Executor<'a> {
    registry: &'a Registry,
    fail_fast: bool,
    phase: Phase,
}

impl<'a> Executor<'a> {
    pub fn new(registry: &'a Registry, fail_fast: bool) -> Self {
        Executor {
            registry,
            fail_fast,
            phase: Phase::Idle,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Execute the tests at `runnable` in the given order
    ///
    /// `beforeAll`/`afterAll` hooks run once around the whole list (and not
    /// at all when it is empty); `beforeEach`/`afterEach` hooks wrap every
    /// body, and `afterEach` runs whatever the body's outcome. A hook error
    /// aborts the run immediately.
    pub fn run(&mut self, runnable: &[usize]) -> Result<Execution> {
        if self.phase != Phase::Idle {
            return Err(Error::RunInProgress);
        }

        let mut execution = Execution::default();
        if runnable.is_empty() {
            self.phase = Phase::Done;
            return Ok(execution);
        }

        self.run_hooks(HookKind::BeforeAll)?;
        self.transition(Phase::Running);

        let tests = self.registry.tests();
        for (position, &index) in runnable.iter().enumerate() {
            let test = &tests[index];

            self.run_hooks(HookKind::BeforeEach)?;
            let outcome = test.run();
            self.run_hooks(HookKind::AfterEach)?;

            debug!(target: "testrun::exec", test = %test.qualified_name, ?outcome, "test finished");
            let failed = outcome.is_fail();
            execution.outcomes.push((index, outcome));

            if failed && self.fail_fast {
                execution.not_run = runnable.len() - position - 1;
                info!(
                    target: "testrun::exec",
                    test = %test.qualified_name,
                    not_run = execution.not_run,
                    "fail-fast: stopping after first failure"
                );
                break;
            }
        }

        self.run_hooks(HookKind::AfterAll)?;
        self.transition(Phase::Done);
        Ok(execution)
    }

    fn transition(&mut self, phase: Phase) {
        debug!(target: "testrun::exec", from = ?self.phase, to = ?phase, "executor phase");
        self.phase = phase;
    }

    fn run_hooks(&self, kind: HookKind) -> Result<()> {
        for hook in self.registry.hooks(kind) {
            hook().map_err(|e| {
                warn!(target: "testrun::exec", %kind, error = %e, "hook failed, aborting run");
                Error::hook_error(kind, e)
            })?;
        }
        Ok(())
    }
}
