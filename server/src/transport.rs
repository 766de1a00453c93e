// GROUP: 42
// MEMBERS: Ray Okamoto, Phoenix Pereira, Kayla Rowley, Qi Wu, Ho Yin Li

//! HTTP transport: route table and cross-origin policy.

use axum::Router;
use axum::http::{HeaderValue, Method};
use axum::routing::get;
use greeting_shared::{API_PREFIX, HELLO_PATH};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::ServerConfig;
use crate::errors::StartupError;
use crate::handlers::hello::hello;

/// Methods a cross-origin caller may use
const ALLOWED_METHODS: [Method; 7] = [
    Method::GET,
    Method::POST,
    Method::PUT,
    Method::PATCH,
    Method::DELETE,
    Method::OPTIONS,
    Method::HEAD,
];

/// Build the CORS policy for the configured origins.
///
/// A `*` entry opens the API to every origin; otherwise only exact matches
/// receive an `Access-Control-Allow-Origin` header.
pub fn cors_layer(origins: &[String]) -> Result<CorsLayer, StartupError> {
    let allow_origin = if origins.iter().any(|o| o == "*") {
        AllowOrigin::any()
    } else {
        let values = origins
            .iter()
            .map(|origin| {
                HeaderValue::from_str(origin).map_err(|source| StartupError::InvalidOrigin {
                    origin: origin.clone(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        AllowOrigin::list(values)
    };

    Ok(CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(ALLOWED_METHODS.to_vec())
        .allow_headers(Any))
}

pub fn app_router(config: &ServerConfig) -> Result<Router, StartupError> {
    let cors = cors_layer(&config.allowed_origins)?;
    info!(origins = ?config.allowed_origins, "CORS allow-list configured");

    let api = Router::new().route(HELLO_PATH, get(hello));

    Ok(Router::new()
        .nest(API_PREFIX, api)
        .layer(cors)
        .layer(TraceLayer::new_for_http()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_origin_with_control_characters() {
        let err = cors_layer(&["http://bad\norigin".to_string()]).unwrap_err();
        assert!(matches!(err, StartupError::InvalidOrigin { ref origin, .. } if origin.contains("bad")));
    }

    #[test]
    fn test_accepts_default_and_wildcard_origins() {
        let config = ServerConfig::default();
        assert!(cors_layer(&config.allowed_origins).is_ok());
        assert!(cors_layer(&["*".to_string()]).is_ok());
    }
}
