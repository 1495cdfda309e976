//! CORS layer construction.

use axum::http::{HeaderValue, Method};
use tower_http::cors::{Any, CorsLayer};

use biblio_core::config::app::ServerConfig;

/// Builds the CORS layer from the configured allowed origins.
///
/// A `*` entry (or an unparsable origin list) falls back to allowing any
/// origin, which matches the development default.
pub fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let allow_any = config.allowed_origins.iter().any(|o| o == "*");

    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|o| o.parse().ok())
        .collect();

    let layer = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any);

    if allow_any || origins.is_empty() {
        layer.allow_origin(Any)
    } else {
        layer.allow_origin(origins)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builds_with_wildcard_and_explicit_origins() {
        let wildcard = ServerConfig {
            host: "0.0.0.0".to_string(),
            port: 3000,
            allowed_origins: vec!["*".to_string()],
        };
        build_cors_layer(&wildcard);

        let explicit = ServerConfig {
            host: "0.0.0.0".to_string(),
            port: 3000,
            allowed_origins: vec!["http://localhost:5173".to_string()],
        };
        build_cors_layer(&explicit);
    }
}
