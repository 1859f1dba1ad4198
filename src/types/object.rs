//! Capability trait for state values that expose their own operations.

use std::fmt;

use anyhow::Result;

use super::value::Value;

/// The native operation set of a state object.
///
/// Delegation asks `responds_to` before calling, so phase transitions are
/// decided by predicate rather than by catching a failed call. `call` is
/// only reached for names the object claimed; any error it returns is a
/// failure of the operation's own body, never a lookup miss.
pub trait OperationSet: fmt::Debug + Send + Sync {
    /// Whether this object exposes an operation with the given name.
    /// Must not fail.
    fn responds_to(&self, name: &str) -> bool;

    /// Run the named operation with positional arguments and return the
    /// next state. Only invoked after `responds_to(name)` returned true.
    fn call(&self, name: &str, args: &[Value]) -> Result<Value>;
}
