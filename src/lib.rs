//! urlhandle - parse a URL, edit its query parameters, serialize it back.
//!
//! This crate provides [`UrlHandle`], a small value object that decomposes a
//! URL string into its structural components (scheme, host, path, query,
//! fragment), lets you inspect and mutate the query parameters independently,
//! and reassembles the result into a canonical URL string. It works much like
//! the `URL` class from JavaScript.
//!
//! # Features
//!
//! - **One parse, direct access**: the URL is decomposed once at construction
//!   into named fields; no re-parsing on access
//! - **Sanitized parameters**: keys are canonicalized to `[a-z0-9_]`, values
//!   are form-urlencoded, so serialization is always query-string safe
//! - **Deterministic output**: parameters serialize in insertion order; keys
//!   are unique with last write winning
//! - **Lenient in, strict out**: malformed query terms in parsed input are
//!   dropped, while invalid keys passed to [`UrlHandle::set_param`] fail loudly
//!
//! # Quick Start
//!
//! ```
//! use urlhandle::UrlHandle;
//!
//! let mut url = UrlHandle::parse("https://example.com/search?q=rust")?;
//!
//! // Inspect components and parameters
//! assert_eq!(url.scheme(), "https");
//! assert_eq!(url.param("q"), Some("rust"));
//!
//! // Mutate parameters; dirty keys and values are sanitized on write
//! url.set_param("page", "2")?;
//! url.set_param(" Sort-By ", "most recent")?;
//! assert_eq!(url.param("sort_by"), Some("most+recent"));
//!
//! // Serialize back
//! assert_eq!(
//!     url.to_string(),
//!     "https://example.com/search?q=rust&page=2&sort_by=most+recent"
//! );
//! # Ok::<(), urlhandle::UrlHandleError>(())
//! ```
//!
//! # Error Handling
//!
//! Fallible operations return `Result<T, UrlHandleError>`:
//!
//! - [`UrlHandleError::InvalidInput`] - the construction input is not a
//!   well-formed absolute URL (validation follows [`url::Url::parse`], which
//!   requires an explicit scheme)
//! - [`UrlHandleError::InvalidKey`] - a key given to
//!   [`UrlHandle::set_param`] sanitizes to the empty string

pub use error::UrlHandleError;
pub use handle::{UrlHandle, DEFAULT_PATH};
pub use sanitize::{sanitize_key, sanitize_value};

pub mod error;
pub mod handle;
pub mod sanitize;
