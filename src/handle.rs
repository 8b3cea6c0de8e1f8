//! The [`UrlHandle`] value object: parse a URL once, edit its query
//! parameters independently, and serialize it back.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use url::Url;

use crate::error::UrlHandleError;
use crate::sanitize::{sanitize_key, sanitize_value};

/// Path substituted when the parsed URL has an empty path.
pub const DEFAULT_PATH: &str = "/";

/// A parsed URL with independently editable query parameters.
///
/// A `UrlHandle` is created once from a valid absolute URL string, mutated in
/// place through the parameter operations, and read back either per parameter
/// or as a whole via its [`Display`] implementation.
///
/// Parameter keys are stored in sanitized form (see [`sanitize_key`]) and
/// values in form-urlencoded form (see [`sanitize_value`]); lookups are exact
/// matches against the stored key. Keys are unique, last write wins, and
/// serialization emits them in insertion order.
///
/// # Examples
///
/// ```
/// use urlhandle::UrlHandle;
///
/// let mut url = UrlHandle::parse("https://example.com/search?q=rust&page=2")?;
/// assert_eq!(url.param("q"), Some("rust"));
///
/// url.set_param("page", "3")?;
/// url.remove_param("q");
/// assert_eq!(url.to_string(), "https://example.com/search?page=3");
/// # Ok::<(), urlhandle::UrlHandleError>(())
/// ```
///
/// [`Display`]: std::fmt::Display
/// [`sanitize_key`]: crate::sanitize_key
/// [`sanitize_value`]: crate::sanitize_value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlHandle {
    original_url: String,
    scheme: String,
    host: Option<String>,
    path: String,
    fragment: Option<String>,
    params: Vec<(String, String)>,
}

impl UrlHandle {
    /// Parse an absolute URL string into a handle.
    ///
    /// Validation is delegated to [`Url::parse`], which requires an explicit
    /// scheme; relative references are rejected. The query string is split on
    /// `&` then on the first `=` per term. Empty terms (a stray `&&`) are
    /// skipped, and so are terms whose key sanitizes to nothing — inbound
    /// data is handled leniently, unlike [`set_param`].
    ///
    /// # Errors
    ///
    /// Returns [`UrlHandleError::InvalidInput`] carrying the offending input
    /// if it is not a well-formed absolute URL.
    ///
    /// # Examples
    ///
    /// ```
    /// use urlhandle::UrlHandle;
    ///
    /// let url = UrlHandle::parse("https://foo.bar/?foo=bar").unwrap();
    /// assert_eq!(url.param("foo"), Some("bar"));
    ///
    /// assert!(UrlHandle::parse("invalid").is_err());
    /// ```
    ///
    /// [`set_param`]: UrlHandle::set_param
    pub fn parse(input: &str) -> Result<Self, UrlHandleError> {
        let parsed =
            Url::parse(input).map_err(|_| UrlHandleError::InvalidInput(input.to_string()))?;

        let path = match parsed.path() {
            "" => DEFAULT_PATH.to_string(),
            path => path.to_string(),
        };

        Ok(Self {
            original_url: input.to_string(),
            scheme: parsed.scheme().to_string(),
            host: parsed.host_str().map(str::to_string),
            path,
            // Stored without the leading '#'; Display re-adds it.
            fragment: parsed.fragment().map(str::to_string),
            params: parse_query(parsed.query().unwrap_or("")),
        })
    }

    /// Get the stored value for an exact key, or `None` if absent.
    ///
    /// The lookup key is not sanitized, and the returned value is the stored
    /// (encoded) form, not the literal.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(stored, _)| stored == key)
            .map(|(_, value)| value.as_str())
    }

    /// Set a parameter, overwriting any existing value for the sanitized key.
    ///
    /// The key passes [`sanitize_key`] and the value [`sanitize_value`] before
    /// storage. Returns the stored value. An existing key keeps its position
    /// in the serialization order; a new key is appended.
    ///
    /// # Errors
    ///
    /// Returns [`UrlHandleError::InvalidKey`] if the key sanitizes to the
    /// empty string. The handle is left unchanged in that case.
    ///
    /// [`sanitize_key`]: crate::sanitize_key
    /// [`sanitize_value`]: crate::sanitize_value
    pub fn set_param(&mut self, key: &str, value: &str) -> Result<String, UrlHandleError> {
        let key = sanitize_key(key)?;
        let value = sanitize_value(value);
        upsert(&mut self.params, key, value.clone());
        Ok(value)
    }

    /// Remove the parameter stored under the exact key, if present.
    pub fn remove_param(&mut self, key: &str) {
        self.params.retain(|(stored, _)| stored != key);
    }

    /// Get a detached snapshot of all parameters.
    ///
    /// Mutating the returned map does not affect the handle.
    pub fn params(&self) -> HashMap<String, String> {
        self.params.iter().cloned().collect()
    }

    /// The input string the handle was constructed from, unmodified.
    pub fn original_url(&self) -> &str {
        &self.original_url
    }

    /// The URL scheme, e.g. `https`. Never empty.
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// The host exactly as the parser produced it, if any.
    pub fn host(&self) -> Option<&str> {
        self.host.as_deref()
    }

    /// The path, `/` if the input had none.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The fragment without its leading `#`, if any.
    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }
}

impl fmt::Display for UrlHandle {
    /// Reassemble the URL as `{scheme}://{host}{path}[?query][#fragment]`.
    ///
    /// The query is rebuilt from the live parameter map in insertion order,
    /// prefixed with `?` only when non-empty. An absent host leaves nothing
    /// between the `//` and the path. Repeated calls yield identical output
    /// as long as the parameters are unchanged.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://", self.scheme)?;
        if let Some(host) = &self.host {
            f.write_str(host)?;
        }
        f.write_str(&self.path)?;

        for (i, (key, value)) in self.params.iter().enumerate() {
            let separator = if i == 0 { '?' } else { '&' };
            write!(f, "{separator}{key}={value}")?;
        }

        if let Some(fragment) = &self.fragment {
            write!(f, "#{fragment}")?;
        }

        Ok(())
    }
}

impl FromStr for UrlHandle {
    type Err = UrlHandleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Parse a raw query string into sanitized key/value pairs.
///
/// Terms whose key fails sanitization are dropped rather than failing the
/// whole parse. Duplicate keys collapse to the last value seen.
fn parse_query(query: &str) -> Vec<(String, String)> {
    let mut params = Vec::new();

    for term in query.split('&') {
        if term.is_empty() {
            continue;
        }

        let (key, value) = match term.split_once('=') {
            Some((key, value)) => (key, value),
            None => (term, ""),
        };

        let Ok(key) = sanitize_key(key) else {
            continue;
        };

        upsert(&mut params, key, sanitize_value(value));
    }

    params
}

/// Replace the value for `key` in place, or append a new pair.
fn upsert(params: &mut Vec<(String, String)>, key: String, value: String) {
    match params.iter_mut().find(|(stored, _)| *stored == key) {
        Some((_, slot)) => *slot = value,
        None => params.push((key, value)),
    }
}
