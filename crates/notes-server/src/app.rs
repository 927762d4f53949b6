//! Full application: router plus the middleware stack.

use axum::{Router, middleware};
use http::HeaderValue;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::ConfigError;
use crate::middleware::request_id::{RequestIdSpan, propagate_request_id, request_id_layer};
use crate::routes;
use crate::state::AppState;

/// Build the router with request ids, CORS and request tracing.
///
/// Outermost first: request id, CORS, trace span, response id echo.
pub fn build_app(state: AppState, cors: CorsLayer) -> Router {
    routes::build_router(state).layer(
        ServiceBuilder::new()
            .layer(request_id_layer())
            .layer(cors)
            .map_response(|res: http::Response<_>| res.map(axum::body::Body::new))
            .layer(TraceLayer::new_for_http().make_span_with(RequestIdSpan))
            .layer(middleware::from_fn(propagate_request_id)),
    )
}

/// Build CORS layer from configuration.
pub fn cors_layer(allowed_origins: &str) -> Result<CorsLayer, ConfigError> {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if allowed_origins.trim() == "*" {
        return Ok(layer.allow_origin(Any));
    }

    // Parse comma-separated origins
    let origins = allowed_origins
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<HeaderValue>().map_err(|_| ConfigError::InvalidValue {
                name: "CORS_ALLOWED_ORIGINS".to_string(),
                reason: format!("invalid origin {:?}", s),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(layer.allow_origin(origins))
}
