//! Access token extractor.
//!
//! Callers pass a pre-obtained Admin API token per request. The proxy never
//! stores or logs it; it is forwarded upstream unchanged.

use axum::{extract::FromRequestParts, http::request::Parts};
use shopify_proxy_core::AccessToken;

use crate::error::AppError;
use crate::shopify::ACCESS_TOKEN_HEADER;

/// Extractor that requires the `X-Shopify-Access-Token` header.
///
/// Rejects with [`AppError::MissingCredential`] (400) when the header is
/// absent, blank, or not valid UTF-8, before the handler runs.
///
/// # Example
///
/// ```rust,ignore
/// async fn handler(ShopifyAccessToken(token): ShopifyAccessToken) -> impl IntoResponse {
///     // token.expose() goes into the upstream request header only
/// }
/// ```
pub struct ShopifyAccessToken(pub AccessToken);

impl<S> FromRequestParts<S> for ShopifyAccessToken
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .headers
            .get(ACCESS_TOKEN_HEADER)
            .and_then(|value| value.to_str().ok())
            .and_then(AccessToken::parse)
            .map(Self)
            .ok_or(AppError::MissingCredential)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::http::Request;

    use super::*;

    async fn extract(request: Request<()>) -> Result<ShopifyAccessToken, AppError> {
        let (mut parts, ()) = request.into_parts();
        ShopifyAccessToken::from_request_parts(&mut parts, &()).await
    }

    #[tokio::test]
    async fn test_extracts_token() {
        let request = Request::builder()
            .header(ACCESS_TOKEN_HEADER, "shpat_abc")
            .body(())
            .unwrap();

        let ShopifyAccessToken(token) = extract(request).await.unwrap();
        assert_eq!(token.expose(), "shpat_abc");
    }

    #[tokio::test]
    async fn test_missing_or_blank_header_is_rejected() {
        let missing = Request::builder().body(()).unwrap();
        assert!(matches!(
            extract(missing).await,
            Err(AppError::MissingCredential)
        ));

        let blank = Request::builder()
            .header(ACCESS_TOKEN_HEADER, "  ")
            .body(())
            .unwrap();
        assert!(matches!(extract(blank).await, Err(AppError::MissingCredential)));
    }
}
