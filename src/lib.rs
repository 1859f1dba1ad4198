pub mod dispatch;
pub mod types;

pub use dispatch::{check_arity, Chain, DispatchError, Registry, TraversalFn};
pub use types::{OperationSet, Value, ValueKind};
