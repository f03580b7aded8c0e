//! Errors reported by [`Tree`][crate::tree::Tree] mutations.

use thiserror::Error;

/// Returned by [`Tree::insert`][crate::tree::Tree::insert] when the value is already stored.
/// The tree is left unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("value already exists in the tree")]
pub struct DuplicateValueError;

/// Returned by [`Tree::delete`][crate::tree::Tree::delete] when the value isn't stored.
/// The tree is left unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("value does not exist in the tree")]
pub struct ValueNotFoundError;

/// Either failure a [`Tree`][crate::tree::Tree] mutation can report. Handy when a caller
/// inserts and deletes in the same function and wants a single error type for `?`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TreeError {
    /// See [`DuplicateValueError`].
    #[error(transparent)]
    Duplicate(#[from] DuplicateValueError),
    /// See [`ValueNotFoundError`].
    #[error(transparent)]
    NotFound(#[from] ValueNotFoundError),
}
