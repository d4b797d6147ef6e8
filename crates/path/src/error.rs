use thiserror::Error;

/// An error returned by an operation on a [`Path`](crate::Path).
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum PathError {
    /// Reversing a path would require reversing each of its segments.
    #[error("Reversing a path is not supported")]
    ReverseUnsupported,
}
