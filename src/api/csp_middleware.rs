/*!
 * Security headers for the gallery page.
 *
 * NFT images are hot-linked from arbitrary gateways, so `img-src` has to stay
 * open to any https origin; everything else is locked to `'self'`.
 */
use axum::{
    body::Body,
    http::{
        header::{HeaderValue, CONTENT_SECURITY_POLICY, X_CONTENT_TYPE_OPTIONS, X_FRAME_OPTIONS},
        HeaderName, Request,
    },
    middleware::Next,
    response::Response,
};

/// CSP policy settings
#[derive(Debug, Clone)]
pub struct CspConfig {
    /// Also allow plain-http images (some IPFS gateways still serve them)
    pub allow_http_images: bool,
}

impl Default for CspConfig {
    fn default() -> Self {
        Self { allow_http_images: cfg!(debug_assertions) }
    }
}

impl CspConfig {
    pub fn generate_policy(&self) -> String {
        format!(
            "default-src 'self'; \
             script-src 'none'; \
             style-src 'self' 'unsafe-inline'; \
             img-src 'self' data: https:{}; \
             frame-ancestors 'none'; \
             base-uri 'self'; \
             form-action 'self';",
            if self.allow_http_images { " http:" } else { "" }
        )
    }
}

/// Adds CSP and related headers to every response.
pub async fn csp_middleware(req: Request<Body>, next: Next) -> Response {
    let mut response = next.run(req).await;
    let headers = response.headers_mut();

    let policy = CspConfig::default().generate_policy();
    if let Ok(value) = HeaderValue::from_str(&policy) {
        headers.insert(CONTENT_SECURITY_POLICY, value);
    }

    headers.insert(X_FRAME_OPTIONS, HeaderValue::from_static("DENY"));
    headers.insert(X_CONTENT_TYPE_OPTIONS, HeaderValue::from_static("nosniff"));
    headers.insert(
        HeaderName::from_static("referrer-policy"),
        HeaderValue::from_static("no-referrer"),
    );

    response
}
