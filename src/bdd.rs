//! Projection of nested `describe`/`it` suites onto flat test cases
//!
//! Suites only exist while their builders run. Nodes live in an arena and
//! refer to their children by index; when the outermost suite closes, the
//! tree is flattened depth-first into [`TestCase`]s and the arena is cleared.

use crate::registry::{Modifier, TestCase, TestFn};
use tracing::debug;

/// Separator placed between suite names in a qualified name
pub const NAME_SEPARATOR: &str = " > ";

enum Node {
    Suite { name: String, children: Vec<usize> },
    Case(Box<PendingCase>),
}

struct PendingCase {
    name: String,
    modifier: Modifier,
    body: TestFn,
}

/// Stack of open suites over an arena of suite and case nodes
#[derive(Default)]
pub struct Projector {
    nodes: Vec<Option<Node>>,
    open: Vec<usize>,
}

impl Projector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a suite builder is currently running
    pub fn is_open(&self) -> bool {
        !self.open.is_empty()
    }

    /// Name of the innermost open suite
    pub fn current_suite(&self) -> Option<&str> {
        let index = *self.open.last()?;
        match &self.nodes[index] {
            Some(Node::Suite { name, .. }) => Some(name.as_str()),
            _ => None,
        }
    }

    /// Push a new suite frame under the innermost open suite
    pub fn open_suite(&mut self, name: impl Into<String>) {
        let index = self.push_node(Node::Suite {
            name: name.into(),
            children: Vec::new(),
        });
        self.open.push(index);
    }

    /// Append a case to the innermost open suite
    ///
    /// Returns the case back as a top-level [`TestCase`] when no suite is
    /// open, so the caller can register it directly.
    pub fn add_case(
        &mut self,
        name: impl Into<String>,
        modifier: Modifier,
        body: TestFn,
    ) -> Option<TestCase> {
        let name = name.into();
        if !self.is_open() {
            return Some(TestCase::new(name, modifier, body));
        }
        self.push_node(Node::Case(Box::new(PendingCase {
            name,
            modifier,
            body,
        })));
        None
    }

    /// Pop the innermost suite frame
    ///
    /// When the popped suite was top-level, the finished tree is flattened
    /// and its cases are returned in depth-first order.
    pub fn close_suite(&mut self) -> Option<Vec<TestCase>> {
        let root = self.open.pop()?;
        if self.is_open() {
            return None;
        }

        let mut cases = Vec::new();
        let mut path = Vec::new();
        self.flatten(root, &mut path, &mut cases);
        self.nodes.clear();
        debug!(target: "testrun::bdd", cases = cases.len(), "flattened suite");
        Some(cases)
    }

    /// Discard every open frame and pending node
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.open.clear();
    }

    fn push_node(&mut self, node: Node) -> usize {
        let index = self.nodes.len();
        self.nodes.push(Some(node));
        if let Some(&parent) = self.open.last() {
            if let Some(Node::Suite { children, .. }) = &mut self.nodes[parent] {
                children.push(index);
            }
        }
        index
    }

    fn flatten(&mut self, index: usize, path: &mut Vec<String>, out: &mut Vec<TestCase>) {
        match self.nodes[index].take() {
            Some(Node::Suite { name, children }) => {
                path.push(name);
                for child in children {
                    self.flatten(child, path, out);
                }
                path.pop();
            }
            Some(Node::Case(case)) => {
                let PendingCase {
                    name,
                    modifier,
                    body,
                } = *case;
                let mut qualified = path.join(NAME_SEPARATOR);
                qualified.push_str(NAME_SEPARATOR);
                qualified.push_str(&name);
                out.push(TestCase::nested(qualified, name, modifier, body));
            }
            None => {}
        }
    }
}
