//! CORS policy per environment.

use super::super::{Environment, ServerConfig};
use axum::http::HeaderValue;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tracing::warn;

/// `dev` mirrors any origin, `prod` only accepts the configured origins.
/// Credentials are allowed in both.
pub fn make_cors_layer(config: &ServerConfig) -> CorsLayer {
    match config.environment {
        Environment::Dev => CorsLayer::very_permissive(),
        Environment::Prod => {
            let origins: Vec<HeaderValue> = config
                .cors_origins
                .iter()
                .filter_map(|origin| match HeaderValue::from_str(origin) {
                    Ok(value) => Some(value),
                    Err(_) => {
                        warn!("Ignoring invalid CORS origin {:?}", origin);
                        None
                    }
                })
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_credentials(true)
                .allow_methods(AllowMethods::mirror_request())
                .allow_headers(AllowHeaders::mirror_request())
        }
    }
}
