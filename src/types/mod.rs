pub mod object;
pub mod value;

pub use object::OperationSet;
pub use value::{Value, ValueKind};
