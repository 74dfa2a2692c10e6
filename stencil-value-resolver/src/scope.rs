use std::rc::Rc;

use crate::value::Value;

/// The single capability the resolver needs from a value source.
///
/// `None` is the miss sentinel: the resolver does not distinguish
/// "not found" from "found null", and a scope that prefers to panic
/// on a miss does so inside `find`, unmasked by the resolver.
pub trait Scope {
    fn find(&self, key: &str) -> Option<Value>;
}

impl<S: Scope + ?Sized> Scope for &S {
    fn find(&self, key: &str) -> Option<Value> {
        S::find(self, key)
    }
}

/// A parent-linked chain of named values, one frame per block.
///
/// Lookups walk outward through the enclosing frames until a match
/// is found or the chain is exhausted. The innermost definition wins.
#[derive(Debug)]
pub struct ScopeChain<'parent> {
    parent: Option<&'parent ScopeChain<'parent>>,
    entries: Vec<(Rc<str>, Value)>,
}

impl<'parent> ScopeChain<'parent> {
    pub fn root() -> Self {
        Self {
            parent: None,
            entries: vec![],
        }
    }

    /// Create a nested frame on top of this one
    pub fn child(&'parent self) -> Self {
        Self {
            parent: Some(self),
            entries: vec![],
        }
    }

    pub fn define(&mut self, key: impl Into<Rc<str>>, value: impl Into<Value>) {
        self.entries.push((key.into(), value.into()));
    }
}

impl Scope for ScopeChain<'_> {
    fn find(&self, key: &str) -> Option<Value> {
        // Search the frame in reverse so a redefinition in the
        // same frame shadows the earlier one
        match self.entries.iter().rev().find(|(k, _)| &**k == key) {
            Some((_, value)) => Some(value.clone()),
            None => self.parent?.find(key),
        }
    }
}
