//! Typed failures for the answer-record boundary.

use thiserror::Error;

/// Validation failures raised before configuration synthesis begins.
///
/// These are the only typed errors in the crate. Everything past the answer
/// boundary either succeeds, fails with an I/O or parse context via
/// [`anyhow`], or degrades to a benign no-op.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("business name is required")]
    MissingBusinessName,

    #[error("description must be longer than 10 characters")]
    DescriptionTooShort,

    #[error("invalid site URL '{url}': {reason}")]
    InvalidSiteUrl { url: String, reason: String },

    #[error("city is required when local SEO is enabled")]
    MissingCity,
}
