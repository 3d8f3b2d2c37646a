//! Origin allow-list enforcement and credentialed CORS headers

use crate::error::AppError;
use axum::{
    extract::{Request, State},
    http::{header, HeaderValue, Method},
    middleware::Next,
    response::Response,
};
use std::collections::BTreeSet;
use std::sync::Arc;
use tower_http::cors::{AllowHeaders, AllowOrigin, CorsLayer};
use tracing::warn;

/// Read-only set of web origins allowed to call the API with credentials
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllowedOrigins {
    origins: BTreeSet<String>,
}

impl AllowedOrigins {
    /// Build from configured entries; trims, drops a trailing `/`, skips empties and duplicates
    pub fn new<I, S>(origins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let origins = origins
            .into_iter()
            .map(|o| o.as_ref().trim().trim_end_matches('/').to_string())
            .filter(|o| !o.is_empty())
            .collect();
        Self { origins }
    }

    pub fn contains(&self, origin: &str) -> bool {
        self.origins.contains(origin)
    }

    /// An absent origin (same-origin or non-browser caller) is always permitted
    pub fn permits(&self, origin: Option<&str>) -> bool {
        origin.map_or(true, |o| self.contains(o))
    }

    pub fn len(&self) -> usize {
        self.origins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.origins.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.origins.iter().map(String::as_str)
    }
}

/// Reject requests whose `Origin` is not on the allow-list before any handler runs
pub async fn origin_guard(
    State(allowed): State<Arc<AllowedOrigins>>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    // A non-UTF-8 header becomes "", which is never on the list
    let origin = request
        .headers()
        .get(header::ORIGIN)
        .map(|v| v.to_str().unwrap_or_default());

    if !allowed.permits(origin) {
        let origin = origin.unwrap_or_default().to_string();
        warn!(
            origin = %origin,
            method = %request.method(),
            path = %request.uri().path(),
            "Rejected request from disallowed origin"
        );
        return Err(AppError::CorsDenied { origin });
    }

    Ok(next.run(request).await)
}

/// CORS headers for permitted origins, with credentials allowed
pub fn cors_layer(allowed: Arc<AllowedOrigins>) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::predicate(move |origin: &HeaderValue, _| {
            origin.to_str().map_or(false, |o| allowed.contains(o))
        }))
        .allow_methods([Method::GET, Method::HEAD, Method::POST, Method::OPTIONS])
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}
