//! Error types for the rotation engine.

use thiserror::Error;

/// Errors produced by the rotation engine.
///
/// Neither variant is meant to reach the screen: an empty collection is
/// replaced by a placeholder at mount time, and explicit selections only
/// ever come from navigation controls built over valid indices.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RotationError {
    /// A collection was built from zero items.
    #[error("collection must contain at least one item")]
    EmptyCollection,

    /// An explicit selection fell outside the collection.
    #[error("index {index} out of range for collection of {len} items")]
    IndexOutOfRange { index: usize, len: usize },
}
