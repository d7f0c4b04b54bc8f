//! Fixed CORS headers attached to every response, plus the empty preflight
//! reply used for `OPTIONS` on each route.

use axum::{
    http::{header, HeaderValue, StatusCode},
    Router,
};
use tower_http::set_header::SetResponseHeaderLayer;

pub const ALLOW_ORIGIN: &str = "*";
pub const ALLOW_HEADERS: &str = "Content-Type,Authorization";
pub const ALLOW_METHODS: &str = "GET,PUT,POST,DELETE,OPTIONS";

/// OPTIONS on any route. The headers come from `with_cors_headers`.
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

pub fn with_cors_headers(router: Router) -> Router {
    router
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static(ALLOW_ORIGIN),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(ALLOW_HEADERS),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(ALLOW_METHODS),
        ))
}
