//! Typed failures raised while resolving and running chained calls.

use thiserror::Error;

use crate::types::ValueKind;

/// Errors that can occur during dispatch
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The registry has no traversal under this name. Handled internally by
    /// falling through to delegation; surfaced only inside `Unresolved`.
    #[error("unknown traversal `{0}`")]
    UnknownTraversal(String),

    /// The current state exposes no operation under this name. Surfaced
    /// only inside `Unresolved`.
    #[error("no operation `{name}` on {kind} state")]
    NoSuchOperation { name: String, kind: ValueKind },

    /// Both the registry lookup and the delegation attempt missed for the
    /// same call. The message carries both underlying failures verbatim.
    #[error("cannot dispatch `{name}`: from ({registry}) via ({delegation})")]
    Unresolved {
        name: String,
        registry: Box<DispatchError>,
        delegation: Box<DispatchError>,
    },

    /// A traversal or delegated operation was found and invoked but failed
    /// in its own body. Passed through unchanged.
    #[error(transparent)]
    Operation(#[from] anyhow::Error),
}
