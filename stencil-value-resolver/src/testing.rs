use std::collections::HashMap;
use std::rc::Rc;

use crate::scope::Scope;
use crate::value::Value;

/// Flat map-backed scope for driving the resolver in tests
pub(crate) struct TestScope(HashMap<Rc<str>, Value>);

impl TestScope {
    pub fn empty() -> Self {
        Self(HashMap::new())
    }

    pub fn set(&mut self, key: impl Into<Rc<str>>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }
}

impl Scope for TestScope {
    fn find(&self, key: &str) -> Option<Value> {
        self.0.get(key).cloned()
    }
}

/// A scope that must never be consulted.
/// Used to prove that a resolution path performs no lookup.
pub(crate) struct NoScope;

impl Scope for NoScope {
    fn find(&self, key: &str) -> Option<Value> {
        panic!("unexpected scope lookup: {key}")
    }
}
