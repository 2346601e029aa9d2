use thiserror::Error;

/// Errors surfaced by tree operations.
///
/// The enum is generic over the key type so that a failed `insert` or
/// `remove` hands the offending key back to the caller instead of dropping
/// it.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TreeError<T> {
    #[error("tree is empty")]
    EmptyTree,

    #[error("key not found in tree")]
    KeyNotFound(T),

    #[error("key already present in tree")]
    DuplicateKey(T),

    #[error("structural invariant violated: {0}")]
    StructuralInvariant(&'static str),
}

pub type TreeResult<V, T> = Result<V, TreeError<T>>;
