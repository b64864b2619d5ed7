//! Ordered store of registered test cases and lifecycle hooks

use crate::error::{Error, Result};
use crate::outcome::{Check, Outcome};
use std::collections::HashMap;
use std::fmt;
use tracing::trace;

/// Type alias for a test body
pub type TestFn = Box<dyn Fn() -> Check>;

/// Type alias for a lifecycle hook
pub type HookFn = Box<dyn Fn() -> Result<()>>;

/// Controls whether a test joins the runnable set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modifier {
    Normal,
    Skip,
    Only,
}

/// Points in a run where hooks are invoked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HookKind {
    BeforeAll,
    AfterAll,
    BeforeEach,
    AfterEach,
}

impl fmt::Display for HookKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HookKind::BeforeAll => "beforeAll",
            HookKind::AfterAll => "afterAll",
            HookKind::BeforeEach => "beforeEach",
            HookKind::AfterEach => "afterEach",
        };
        f.write_str(name)
    }
}

/// A named, runnable unit
pub struct TestCase {
    /// The name given at registration
    pub name: String,
    /// The name prefixed by enclosing suite names
    pub qualified_name: String,
    /// Selection modifier
    pub modifier: Modifier,
    body: TestFn,
}

impl TestCase {
    /// Create a top-level test case whose qualified name is its own name
    pub fn new(name: impl Into<String>, modifier: Modifier, body: TestFn) -> Self {
        let name = name.into();
        TestCase {
            qualified_name: name.clone(),
            name,
            modifier,
            body,
        }
    }

    /// Create a test case nested under the given qualified name
    pub(crate) fn nested(
        qualified_name: String,
        name: String,
        modifier: Modifier,
        body: TestFn,
    ) -> Self {
        TestCase {
            name,
            qualified_name,
            modifier,
            body,
        }
    }

    /// Invoke the body and score its result
    pub fn run(&self) -> Outcome {
        Outcome::from((self.body)())
    }
}

impl fmt::Debug for TestCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestCase")
            .field("name", &self.name)
            .field("qualified_name", &self.qualified_name)
            .field("modifier", &self.modifier)
            .finish_non_exhaustive()
    }
}

/// Registered tests and hooks, in registration order
#[derive(Default)]
pub struct Registry {
    tests: Vec<TestCase>,
    hooks: HashMap<HookKind, Vec<HookFn>>,
    sealed: bool,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a test case
    ///
    /// Fails once the registry has been sealed by a run.
    pub fn register(&mut self, test: TestCase) -> Result<()> {
        if self.sealed {
            return Err(Error::registration_misuse(test.qualified_name));
        }
        trace!(target: "testrun::registry", name = %test.qualified_name, modifier = ?test.modifier, "registered test");
        self.tests.push(test);
        Ok(())
    }

    /// Append a hook to the list for its kind
    pub fn register_hook(&mut self, kind: HookKind, hook: HookFn) -> Result<()> {
        if self.sealed {
            return Err(Error::registration_misuse(format!("{} hook", kind)));
        }
        trace!(target: "testrun::registry", %kind, "registered hook");
        self.hooks.entry(kind).or_default().push(hook);
        Ok(())
    }

    pub fn tests(&self) -> &[TestCase] {
        &self.tests
    }

    /// Hooks of one kind, in registration order
    pub fn hooks(&self, kind: HookKind) -> &[HookFn] {
        self.hooks.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.tests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tests.is_empty()
    }

    /// Refuse further registration
    pub fn seal(&mut self) {
        self.sealed = true;
    }

    pub fn is_sealed(&self) -> bool {
        self.sealed
    }

    /// Drop every test and hook and accept registrations again
    pub fn reset(&mut self) {
        trace!(target: "testrun::registry", tests = self.tests.len(), "registry reset");
        self.tests.clear();
        self.hooks.clear();
        self.sealed = false;
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hook_counts: HashMap<_, _> = self.hooks.iter().map(|(k, v)| (*k, v.len())).collect();
        f.debug_struct("Registry")
            .field("tests", &self.tests)
            .field("hooks", &hook_counts)
            .field("sealed", &self.sealed)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn passing(name: &str) -> TestCase {
        TestCase::new(name, Modifier::Normal, Box::new(|| Ok(())))
    }

    #[test]
    fn preserves_registration_order_and_duplicates() {
        let mut registry = Registry::new();
        for name in ["b", "a", "b"] {
            registry.register(passing(name)).unwrap();
        }
        let names: Vec<_> = registry.tests().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["b", "a", "b"]);
    }

    #[test]
    fn hooks_are_grouped_by_kind() {
        let mut registry = Registry::new();
        registry.register_hook(HookKind::BeforeEach, Box::new(|| Ok(()))).unwrap();
        registry.register_hook(HookKind::BeforeEach, Box::new(|| Ok(()))).unwrap();
        registry.register_hook(HookKind::AfterAll, Box::new(|| Ok(()))).unwrap();
        assert_eq!(registry.hooks(HookKind::BeforeEach).len(), 2);
        assert_eq!(registry.hooks(HookKind::AfterAll).len(), 1);
        assert!(registry.hooks(HookKind::BeforeAll).is_empty());
    }

    #[test]
    fn sealed_registry_refuses_registration() {
        let mut registry = Registry::new();
        registry.seal();
        let err = registry.register(passing("late")).unwrap_err();
        assert!(matches!(err, Error::RegistrationMisuse { ref name } if name == "late"));
        assert!(registry
            .register_hook(HookKind::AfterEach, Box::new(|| Ok(())))
            .is_err());
    }

    #[test]
    fn reset_clears_and_unseals() {
        let mut registry = Registry::new();
        registry.register(passing("a")).unwrap();
        registry.seal();
        registry.reset();
        assert!(registry.is_empty());
        assert!(!registry.is_sealed());
        registry.register(passing("b")).unwrap();
        assert_eq!(registry.len(), 1);
    }
}
