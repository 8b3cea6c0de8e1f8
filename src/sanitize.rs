//! Sanitization of query parameter keys and values.
//!
//! Keys are forced into a canonical `snake_case` alphabet before storage;
//! values are form-urlencoded so they are always safe to splice into a query
//! string verbatim.

use url::form_urlencoded;

use crate::error::UrlHandleError;

/// Sanitize a query parameter key into the canonical `[a-z0-9_]` alphabet.
///
/// The key is trimmed, lowercased, each run of whitespace or hyphens is
/// collapsed to a single underscore, and every remaining character outside
/// `[a-z0-9_]` is stripped.
///
/// # Errors
///
/// Returns [`UrlHandleError::InvalidKey`] (carrying the raw input) if the key
/// reduces to the empty string at any point.
///
/// # Examples
///
/// ```
/// use urlhandle::sanitize_key;
///
/// assert_eq!(sanitize_key(" #Mega Foo-bar~ ").unwrap(), "mega_foo_bar");
/// assert!(sanitize_key(" ~#! ").is_err());
/// ```
pub fn sanitize_key(key: &str) -> Result<String, UrlHandleError> {
    let lowered = key.trim().to_lowercase();

    let mut collapsed = String::with_capacity(lowered.len());
    let mut in_separator = false;
    for ch in lowered.chars() {
        if ch.is_whitespace() || ch == '-' {
            if !in_separator {
                collapsed.push('_');
            }
            in_separator = true;
        } else {
            collapsed.push(ch);
            in_separator = false;
        }
    }

    if collapsed.is_empty() {
        return Err(UrlHandleError::InvalidKey(key.to_string()));
    }

    let sanitized: String = collapsed
        .chars()
        .filter(|ch| ch.is_ascii_alphanumeric() || *ch == '_')
        .collect();

    if sanitized.is_empty() {
        return Err(UrlHandleError::InvalidKey(key.to_string()));
    }

    Ok(sanitized)
}

/// Form-urlencode a query parameter value for storage.
///
/// Spaces become `+` and reserved characters are percent-escaped, so the
/// result can be written into a query string as-is.
///
/// # Examples
///
/// ```
/// use urlhandle::sanitize_value;
///
/// assert_eq!(sanitize_value("Foo Bar"), "Foo+Bar");
/// assert_eq!(sanitize_value("a&b=c"), "a%26b%3Dc");
/// ```
pub fn sanitize_value(value: &str) -> String {
    let encoded: String = form_urlencoded::byte_serialize(value.as_bytes()).collect();
    encoded.trim().to_string()
}
