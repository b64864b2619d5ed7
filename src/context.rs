//! Run context: the registry, the suite projector and their lifecycle

use crate::bdd::Projector;
use crate::error::{Error, Result};
use crate::outcome::IntoCheck;
use crate::registry::{HookKind, Modifier, Registry, TestFn};
use crate::run::{run_context, RunOptions};
use crate::summary::TestReport;
use std::fmt;

/// Holds everything registered for one run
///
/// All registration must happen before the first run; once a run starts the
/// context refuses new tests, hooks and suites until [`Context::reset`].
///
/// ```
/// use testrun_rs::{expect_eq, Context, RunOptions};
///
/// let mut ctx = Context::new();
/// ctx.test("adds", || expect_eq(1 + 1, 2)).unwrap();
/// ctx.describe("strings", |ctx| {
///     ctx.it("are not empty", || ())?;
///     ctx.xit("are localized", || ())
/// })
/// .unwrap();
///
/// let report = ctx.run(&RunOptions::new()).unwrap();
/// assert_eq!(report.summary.passed, 2);
/// assert_eq!(report.summary.skipped, 1);
/// ```
#[derive(Default)]
pub struct Context {
    registry: Registry,
    projector: Projector,
    running: bool,
}

fn boxed<F, R>(body: F) -> TestFn
where
    F: Fn() -> R + 'static,
    R: IntoCheck,
{
    Box::new(move || body().into_check())
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    /// Placeholder left behind while a context is being run
    pub(crate) fn running() -> Self {
        let mut ctx = Self::default();
        ctx.registry.seal();
        ctx.running = true;
        ctx
    }

    /// Register a test
    ///
    /// Inside a `describe` builder the test joins the enclosing suite.
    pub fn test<F, R>(&mut self, name: &str, body: F) -> Result<()>
    where
        F: Fn() -> R + 'static,
        R: IntoCheck,
    {
        self.add(name, Modifier::Normal, boxed(body))
    }

    /// Register a test that is always reported as skipped
    pub fn skip<F, R>(&mut self, name: &str, body: F) -> Result<()>
    where
        F: Fn() -> R + 'static,
        R: IntoCheck,
    {
        self.add(name, Modifier::Skip, boxed(body))
    }

    /// Register a test that excludes every test not also marked only
    pub fn only<F, R>(&mut self, name: &str, body: F) -> Result<()>
    where
        F: Fn() -> R + 'static,
        R: IntoCheck,
    {
        self.add(name, Modifier::Only, boxed(body))
    }

    /// Register a suite; `builder` registers its children
    pub fn describe<F>(&mut self, name: &str, builder: F) -> Result<()>
    where
        F: FnOnce(&mut Context) -> Result<()>,
    {
        self.open_suite(name)?;
        let built = builder(self);
        let closed = self.close_suite();
        built.and(closed)
    }

    pub fn it<F, R>(&mut self, name: &str, body: F) -> Result<()>
    where
        F: Fn() -> R + 'static,
        R: IntoCheck,
    {
        self.test(name, body)
    }

    pub fn xit<F, R>(&mut self, name: &str, body: F) -> Result<()>
    where
        F: Fn() -> R + 'static,
        R: IntoCheck,
    {
        self.skip(name, body)
    }

    pub fn fit<F, R>(&mut self, name: &str, body: F) -> Result<()>
    where
        F: Fn() -> R + 'static,
        R: IntoCheck,
    {
        self.only(name, body)
    }

    /// Register a lifecycle hook
    ///
    /// Hooks are global to the context regardless of where they are
    /// registered. A hook returning an error aborts the run.
    pub fn hook<F>(&mut self, kind: HookKind, hook: F) -> Result<()>
    where
        F: Fn() -> Result<()> + 'static,
    {
        self.registry.register_hook(kind, Box::new(hook))
    }

    pub fn before_all<F>(&mut self, hook: F) -> Result<()>
    where
        F: Fn() -> Result<()> + 'static,
    {
        self.hook(HookKind::BeforeAll, hook)
    }

    pub fn after_all<F>(&mut self, hook: F) -> Result<()>
    where
        F: Fn() -> Result<()> + 'static,
    {
        self.hook(HookKind::AfterAll, hook)
    }

    pub fn before_each<F>(&mut self, hook: F) -> Result<()>
    where
        F: Fn() -> Result<()> + 'static,
    {
        self.hook(HookKind::BeforeEach, hook)
    }

    pub fn after_each<F>(&mut self, hook: F) -> Result<()>
    where
        F: Fn() -> Result<()> + 'static,
    {
        self.hook(HookKind::AfterEach, hook)
    }

    /// Run with the given options; see [`run_context`]
    pub fn run(&mut self, options: &RunOptions) -> Result<TestReport> {
        run_context(self, options)
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Forget all registrations so the context can be reused
    ///
    /// A context that is running stays sealed.
    pub fn reset(&mut self) {
        self.registry.reset();
        self.projector.clear();
        if self.running {
            self.registry.seal();
        }
    }

    pub(crate) fn add(&mut self, name: &str, modifier: Modifier, body: TestFn) -> Result<()> {
        if self.registry.is_sealed() {
            return Err(Error::registration_misuse(name));
        }
        match self.projector.add_case(name, modifier, body) {
            Some(test) => self.registry.register(test),
            None => Ok(()),
        }
    }

    pub(crate) fn open_suite(&mut self, name: &str) -> Result<()> {
        if self.registry.is_sealed() {
            return Err(Error::registration_misuse(name));
        }
        self.projector.open_suite(name);
        Ok(())
    }

    /// Close the innermost suite, registering the tree once the root closes
    pub(crate) fn close_suite(&mut self) -> Result<()> {
        if let Some(tests) = self.projector.close_suite() {
            for test in tests {
                self.registry.register(test)?;
            }
        }
        Ok(())
    }

    /// Validate that a run may start and seal the registry
    pub(crate) fn begin_run(&mut self) -> Result<()> {
        if self.running {
            return Err(Error::RunInProgress);
        }
        if let Some(name) = self.projector.current_suite() {
            return Err(Error::OpenSuite {
                name: name.to_string(),
            });
        }
        self.registry.seal();
        Ok(())
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("registry", &self.registry)
            .field("open_suite", &self.projector.current_suite())
            .field("running", &self.running)
            .finish()
    }
}
