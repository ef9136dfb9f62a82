//! Error types for nid construction and validation.
//!
//! Normalizing text never fails. Errors only come from building a policy out
//! of caller-supplied strings, or from asking for a validated [`Slug`](crate::Slug).

use thiserror::Error;

/// Main error type for the nid library.
#[derive(Debug, Error)]
pub enum NidError {
    /// A caller-supplied pattern did not compile.
    #[error("Invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// A transliteration key was not exactly one character.
    #[error("Invalid transliteration key '{0}': expected a single character")]
    InvalidTransliterationKey(String),

    /// The candidate is not a possible nid under the policy.
    #[error("Not a possible nid: '{0}'")]
    NotPossible(String),
}

/// Result type alias for nid operations.
pub type Result<T> = std::result::Result<T, NidError>;
