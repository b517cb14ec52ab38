//! Shopify Admin API version.

use core::fmt;

/// Version used when the caller does not ask for one.
pub const DEFAULT_API_VERSION: &str = "2025-04";

/// Errors that can occur when parsing an [`ApiVersion`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiVersionError {
    /// The input is neither `YYYY-MM` nor `unstable`.
    #[error("api version must look like YYYY-MM or be 'unstable' (got {0:?})")]
    Malformed(String),
}

/// A Shopify Admin API version such as `2025-04`.
///
/// The version is interpolated into the URL path, so only the `YYYY-MM`
/// release format and the literal `unstable` are accepted.
///
/// ## Examples
///
/// ```
/// use shopify_proxy_core::{ApiVersion, DEFAULT_API_VERSION};
///
/// assert_eq!(ApiVersion::parse("2024-10").unwrap().as_str(), "2024-10");
/// assert_eq!(ApiVersion::or_default(None).unwrap().as_str(), DEFAULT_API_VERSION);
/// assert_eq!(ApiVersion::or_default(Some("")).unwrap().as_str(), DEFAULT_API_VERSION);
/// assert!(ApiVersion::parse("../../oauth").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ApiVersion(String);

impl ApiVersion {
    /// Parse an explicit version string.
    ///
    /// # Errors
    ///
    /// Returns [`ApiVersionError::Malformed`] unless the input is `unstable`
    /// or four digits, a `-`, and two digits.
    pub fn parse(s: &str) -> Result<Self, ApiVersionError> {
        let trimmed = s.trim();
        if trimmed == "unstable" || is_release_version(trimmed) {
            Ok(Self(trimmed.to_owned()))
        } else {
            Err(ApiVersionError::Malformed(trimmed.to_owned()))
        }
    }

    /// Parse an optional version, falling back to [`DEFAULT_API_VERSION`]
    /// when it is absent or empty.
    ///
    /// # Errors
    ///
    /// Returns [`ApiVersionError::Malformed`] if a non-empty value is invalid.
    pub fn or_default(s: Option<&str>) -> Result<Self, ApiVersionError> {
        match s.map(str::trim) {
            None | Some("") => Ok(Self::default()),
            Some(v) => Self::parse(v),
        }
    }

    /// Returns the version as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ApiVersion {
    fn default() -> Self {
        Self(DEFAULT_API_VERSION.to_owned())
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for ApiVersion {
    type Err = ApiVersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn is_release_version(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 7
        && bytes.get(4) == Some(&b'-')
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 4 || b.is_ascii_digit())
}
