//! Error types for form mutation
//!
//! These signal integration bugs (a caller addressing something the form
//! does not hold), never user input problems. User input problems are
//! reported by [`crate::validation::ValidationError`].

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    /// A cattle entry index outside the current sequence
    #[error("cattle entry index {index} out of range (entries: {len})")]
    IndexOutOfRange { index: usize, len: usize },

    /// A dotted path that names no field
    #[error("unknown field path: {0}")]
    UnknownField(String),

    /// A value of the wrong kind for the target field
    #[error("field {field} expects a {expected} value")]
    ValueMismatch {
        field: String,
        expected: &'static str,
    },

    /// An application read back with no cattle entries
    #[error("application must hold at least one cattle entry")]
    NoCattleEntries,
}

/// A choice string that names no option of its picker
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown choice: {0:?}")]
pub struct UnknownChoice(pub String);
