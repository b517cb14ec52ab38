//! Shopify access credential.
//!
//! The proxy never issues or stores tokens. Callers send a pre-obtained Admin
//! API access token with every request and it is forwarded unchanged.

use secrecy::{ExposeSecret, SecretString};

/// Admin API access token supplied by the caller.
///
/// Wraps a [`SecretString`] so the token cannot end up in logs through
/// `Debug` formatting. The only way to read it is [`AccessToken::expose`],
/// which is used when building the outbound header.
#[derive(Clone)]
pub struct AccessToken(SecretString);

impl AccessToken {
    /// Create a token from a raw header value.
    ///
    /// Returns `None` if the value is empty or only whitespace, which is
    /// treated the same as a missing header.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self(SecretString::from(trimmed.to_owned())))
    }

    /// Expose the raw token for use as an outbound header value.
    #[must_use]
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

impl std::fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("AccessToken([REDACTED])")
    }
}
