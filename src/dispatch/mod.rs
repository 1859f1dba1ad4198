//! Two-phase dispatch for chainable traversals.
//!
//! This module routes each chained call through a name lookup in a
//! consumer-populated registry, falling through to the current state
//! value's own operations when the registry misses, and reporting a
//! single combined error when both resolution paths miss.
//!
//! # Module Structure
//!
//! - [`registry`] - Name to traversal-function lookup table
//! - [`chain`] - The chainable state cursor and the dispatch algorithm
//! - [`error`] - Typed dispatch failures
//!
//! # Example
//!
//! ```ignore
//! use trekker::{Chain, Registry, Value};
//!
//! let mut registry = Registry::new();
//! registry.register("double", |state, args| {
//!     let factor = args[0].as_int().unwrap_or(1);
//!     Ok(Value::Int(state.as_int().unwrap_or(1) * factor))
//! });
//!
//! let mut chain = Chain::new(&registry);
//! chain.invoke("double", &[Value::Int(2)])?
//!      .invoke("double", &[Value::Int(3)])?;
//! assert_eq!(chain.result(), &Value::Int(6));
//! ```

mod chain;
mod error;
mod registry;


// Re-export public API
pub use chain::Chain;
pub use error::DispatchError;
pub use registry::{check_arity, Registry, TraversalFn};
