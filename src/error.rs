//! Error types for URL parsing and parameter mutation.

use thiserror::Error;

/// Errors that can occur while constructing or mutating a [`UrlHandle`].
///
/// Both variants carry the raw, unsanitized offending string so callers can
/// see exactly what was rejected.
///
/// [`UrlHandle`]: crate::UrlHandle
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UrlHandleError {
    /// The construction input is not a well-formed absolute URL with an
    /// explicit scheme.
    #[error("'{0}' is not a valid URL")]
    InvalidInput(String),

    /// A parameter key reduced to the empty string after sanitization.
    #[error("'{0}' is an invalid key")]
    InvalidKey(String),
}
