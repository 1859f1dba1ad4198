//! Name to traversal-function lookup table.

use std::collections::HashMap;

use anyhow::{bail, Result};

use super::error::DispatchError;
use crate::types::Value;

/// Signature every registered traversal follows: current state in, next
/// state out. Bodies report their own failures through `anyhow`.
pub type TraversalFn = Box<dyn Fn(Value, &[Value]) -> Result<Value> + Send + Sync>;

/// Lookup table mapping traversal names to functions.
///
/// Populated by the consumer at startup and only read by the dispatch
/// chain afterwards. Entry identity is the name; re-registration
/// overwrites.
#[derive(Default)]
pub struct Registry {
    traversals: HashMap<String, TraversalFn>,
}

impl Registry {
    pub fn new() -> Self {
        Self {
            traversals: HashMap::new(),
        }
    }

    /// Install a traversal under `name`, replacing any previous entry.
    ///
    /// No arity validation happens here; an argument mismatch surfaces at
    /// call time as a failure from the traversal body itself.
    pub fn register<F>(&mut self, name: impl Into<String>, traversal: F)
    where
        F: Fn(Value, &[Value]) -> Result<Value> + Send + Sync + 'static,
    {
        self.traversals.insert(name.into(), Box::new(traversal));
    }

    /// Existence check consulted before every invocation. Never fails.
    pub fn has(&self, name: &str) -> bool {
        self.traversals.contains_key(name)
    }

    /// Run the traversal registered under `name` as `fn(state, args)` and
    /// return its result unmodified.
    ///
    /// Callers check `has` first; an unknown name here still comes back as
    /// a typed error rather than a panic.
    pub fn invoke(&self, name: &str, state: Value, args: &[Value]) -> Result<Value, DispatchError> {
        match self.traversals.get(name) {
            Some(traversal) => traversal(state, args).map_err(DispatchError::Operation),
            None => Err(DispatchError::UnknownTraversal(name.to_string())),
        }
    }

    pub fn len(&self) -> usize {
        self.traversals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.traversals.is_empty()
    }
}

/// Arity guard for traversal and operation bodies with a fixed argument
/// count. An argument-count mismatch is an execution failure of the found
/// operation, distinct from an unresolved name.
pub fn check_arity(name: &str, args: &[Value], expected: usize) -> Result<()> {
    if args.len() != expected {
        bail!(
            "`{}` takes {} argument(s), got {}",
            name,
            expected,
            args.len()
        );
    }
    Ok(())
}
