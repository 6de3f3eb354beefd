//! Error types for the tokenizer pipeline.

use thiserror::Error;

/// Errors that can arise while tokenizing a sentence.
///
/// Conditions the pipeline can recover from on its own (too many right-strips,
/// no dictionary/regex/spell match) are not represented here: they are
/// absorbed into the alternatives C4 commits and only logged (see
/// [`crate::driver`], [`crate::separate`]). Only genuinely fatal or
/// programmer-error conditions get a variant.
#[derive(Debug, Error)]
pub enum TokenizeError {
    /// The input was not valid UTF-8. Only reachable from [`crate::driver::tokenize_bytes`];
    /// [`crate::driver::tokenize`] takes an already-decoded `&str` and can never produce this.
    #[error("invalid input for codeset {codeset}: {detail}")]
    Decode {
        /// Name of the codeset/encoding that failed to decode the input.
        codeset: String,
        detail: String,
    },

    /// One of the data-model invariants in the spec (§3) was violated. This
    /// indicates a bug in this crate, not malformed input.
    #[error("invariant {invariant} violated at position {position}")]
    AssertionViolation {
        invariant: &'static str,
        position: usize,
    },

    /// An `AffixTable` was constructed with data that violates its own limits
    /// (e.g. an oversized `MPRE` table).
    #[error("invalid affix table: {0}")]
    InvalidAffixTable(String),
}

/// Result alias used throughout this crate.
pub type Result<T> = std::result::Result<T, TokenizeError>;
