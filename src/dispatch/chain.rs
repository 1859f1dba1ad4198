//! The dispatch chain: a cursor that threads state through named traversals.

use std::sync::Arc;

use log::trace;

use super::error::DispatchError;
use super::registry::Registry;
use crate::types::Value;

/// Chainable cursor over a single current state value.
///
/// Each call resolves against the registry first and falls through to the
/// state value's own operations on a miss. A successful call replaces the
/// state with the operation's result and hands the chain back so the next
/// call can follow; `result` reads the raw state out:
///
/// ```ignore
/// let mut chain = Chain::with_state(&registry, start_node);
/// chain.invoke("out", &[Value::from("follows")])?
///      .invoke("unique", &[])?;
/// let reached = chain.result();
/// ```
///
/// A chain is a single-owner cursor; it keeps no history and is not meant
/// to be shared across threads.
pub struct Chain<'r> {
    registry: &'r Registry,
    state: Value,
}

impl<'r> Chain<'r> {
    /// Start a chain holding the empty sentinel state.
    pub fn new(registry: &'r Registry) -> Self {
        Self {
            registry,
            state: Value::Empty,
        }
    }

    /// Start a chain seeded with an initial state, e.g. the result of a
    /// prior traversal done outside the chain.
    pub fn with_state(registry: &'r Registry, state: impl Into<Value>) -> Self {
        Self {
            registry,
            state: state.into(),
        }
    }

    /// The current state, verbatim. Reading neither consumes nor resets it.
    pub fn result(&self) -> &Value {
        &self.state
    }

    /// Consume the chain and take the current state out.
    pub fn into_result(self) -> Value {
        self.state
    }

    /// Resolve and run one chained call.
    ///
    /// Registry phase: a registered `name` runs the traversal on the
    /// current state and keeps its return value. Delegation phase: on a
    /// registry miss the call lands on the state value's own operation set.
    /// If neither side knows the name, both misses come back as one
    /// `Unresolved` error. A failure raised inside a traversal or operation
    /// body passes through untouched. State is only replaced on success, so
    /// after any error the chain still holds its last good value and
    /// remains usable.
    pub fn invoke(&mut self, name: &str, args: &[Value]) -> Result<&mut Self, DispatchError> {
        if self.registry.has(name) {
            trace!("dispatch `{}`: registry hit", name);
            let next = self.registry.invoke(name, self.state.clone(), args)?;
            self.state = next;
            return Ok(self);
        }
        let registry_miss = DispatchError::UnknownTraversal(name.to_string());

        if let Value::Object(object) = &self.state {
            if object.responds_to(name) {
                trace!("dispatch `{}`: delegated to state object", name);
                let object = Arc::clone(object);
                let next = object.call(name, args).map_err(DispatchError::Operation)?;
                self.state = next;
                return Ok(self);
            }
        }
        let delegation_miss = DispatchError::NoSuchOperation {
            name: name.to_string(),
            kind: self.state.kind(),
        };

        trace!("dispatch `{}`: unresolved on both paths", name);
        Err(DispatchError::Unresolved {
            name: name.to_string(),
            registry: Box::new(registry_miss),
            delegation: Box::new(delegation_miss),
        })
    }
}
