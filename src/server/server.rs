use anyhow::Result;
use std::time::Duration;

use tracing::{error, info};

use crate::lyrics::{BatchSummary, GenerationResult, LyricsError, LyricsService};

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    middleware,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::{log_requests, make_cors_layer, state::*, ServerConfig};

#[derive(Serialize)]
struct HelloMessage {
    pub message: &'static str,
}

#[derive(Serialize)]
struct ServerStats {
    pub uptime: String,
    pub hash: String,
    pub environment: String,
}

#[derive(Deserialize, Debug)]
struct GenerateBody {
    #[serde(default)]
    pub prompt: String,
}

fn format_uptime(duration: Duration) -> String {
    let total_seconds = duration.as_secs();

    let days = total_seconds / 86_400;
    let hours = (total_seconds % 86_400) / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    format!("{}d {:02}:{:02}:{:02}", days, hours, minutes, seconds)
}

/// Error returned by the API handlers, rendered as `{"error": message}`.
#[derive(Debug)]
enum ApiError {
    BadRequest(String),
    Pipeline(LyricsError),
    TaskFailed(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::Pipeline(err) => {
                error!("Lyrics pipeline failed: {}", err);
                (StatusCode::BAD_GATEWAY, err.to_string())
            }
            ApiError::TaskFailed(reason) => {
                error!("Pipeline task failed: {}", reason);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_string(),
                )
            }
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// Run a blocking pipeline call off the async workers.
async fn run_pipeline<T, F>(lyrics: GuardedLyricsService, call: F) -> Result<T, ApiError>
where
    T: Send + 'static,
    F: FnOnce(&LyricsService) -> Result<T, LyricsError> + Send + 'static,
{
    match tokio::task::spawn_blocking(move || call(lyrics.as_ref())).await {
        Ok(result) => result.map_err(ApiError::Pipeline),
        Err(join_error) => Err(ApiError::TaskFailed(join_error.to_string())),
    }
}

async fn home() -> impl IntoResponse {
    Json(HelloMessage {
        message: "Hello world!",
    })
}

async fn get_stats(State(state): State<ServerState>) -> impl IntoResponse {
    Json(ServerStats {
        uptime: format_uptime(state.start_time.elapsed()),
        hash: state.hash.clone(),
        environment: state.config.environment.to_string(),
    })
}

async fn process_lyrics(
    State(lyrics): State<GuardedLyricsService>,
) -> Result<Json<BatchSummary>, ApiError> {
    let summary = run_pipeline(lyrics, |service| service.process_all()).await?;
    Ok(Json(summary))
}

async fn generate_lyrics(
    State(lyrics): State<GuardedLyricsService>,
    body: Result<Json<GenerateBody>, JsonRejection>,
) -> Result<Json<GenerationResult>, ApiError> {
    let Json(body) = body.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

    let prompt = body.prompt.trim().to_string();
    if prompt.is_empty() {
        return Err(ApiError::BadRequest("prompt must not be empty".to_string()));
    }

    let result = run_pipeline(lyrics, move |service| service.generate(&prompt)).await?;
    Ok(Json(result))
}

pub fn make_app(config: ServerConfig, lyrics: GuardedLyricsService) -> Router {
    let state = ServerState::new(config.clone(), lyrics);

    let api_routes: Router = Router::new()
        .route("/", get(home))
        .route("/stats", get(get_stats))
        .route("/process", post(process_lyrics))
        .route("/generate", post(generate_lyrics))
        .with_state(state.clone());

    let app: Router = if config.api_prefix.is_empty() {
        api_routes
    } else {
        Router::new().nest(&config.api_prefix, api_routes)
    };

    app.layer(middleware::from_fn_with_state(state, log_requests))
        .layer(make_cors_layer(&config))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Received Ctrl+C, shutting down");
}

pub async fn run_server(config: ServerConfig, lyrics: GuardedLyricsService) -> Result<()> {
    let port = config.port;
    let app = make_app(config, lyrics);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;
    info!("Ready to serve at port {}!", port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::{CompletionOptions, CompletionResponse, LlmError, LlmProvider, Message};
    use crate::lyrics::PipelineSettings;
    use crate::lyrics_store::{LyricsStore, RawRecord, StoreError};
    use crate::server::Environment;
    use axum::{body::Body, http::Request};
    use std::sync::Arc;
    use tower::ServiceExt; // for `oneshot`

    struct EmptyStore;

    impl LyricsStore for EmptyStore {
        fn query_all(&self) -> Result<Vec<RawRecord>, StoreError> {
            Ok(Vec::new())
        }

        fn update_tags(
            &self,
            _record_id: &str,
            _moods: &[String],
            _themes: &[String],
        ) -> Result<(), StoreError> {
            Ok(())
        }
    }

    struct PanickingLlm;

    impl LlmProvider for PanickingLlm {
        fn model(&self) -> &str {
            "none"
        }

        fn complete(
            &self,
            _messages: &[Message],
            _options: &CompletionOptions,
        ) -> Result<CompletionResponse, LlmError> {
            panic!("model exploded")
        }
    }

    fn app_with(config: ServerConfig) -> Router {
        let service = LyricsService::new(
            Arc::new(EmptyStore),
            Arc::new(PanickingLlm),
            PipelineSettings::default(),
        );
        make_app(config, Arc::new(service))
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn formats_uptime() {
        assert_eq!(format_uptime(Duration::from_secs(0)), "0d 00:00:00");
        assert_eq!(format_uptime(Duration::from_secs(90_061)), "1d 01:01:01");
    }

    #[tokio::test]
    async fn responds_hello_under_prefix() {
        let app = app_with(ServerConfig::default());

        let request = Request::builder().uri("/api").body(Body::empty()).unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"message": "Hello world!"})
        );

        let request = Request::builder().uri("/").body(Body::empty()).unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn mounts_at_root_with_empty_prefix() {
        let app = app_with(ServerConfig {
            api_prefix: String::new(),
            ..Default::default()
        });

        let request = Request::builder().uri("/").body(Body::empty()).unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn rejects_blank_prompt() {
        let app = app_with(ServerConfig::default());

        for body in [r#"{"prompt": "   "}"#, r#"{}"#] {
            let request = Request::builder()
                .method("POST")
                .uri("/api/generate")
                .header("content-type", "application/json")
                .body(Body::from(body))
                .unwrap();
            let response = app.clone().oneshot(request).await.unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
            assert_eq!(
                body_json(response).await["error"],
                "prompt must not be empty"
            );
        }
    }

    #[tokio::test]
    async fn malformed_generate_body_is_json_bad_request() {
        let app = app_with(ServerConfig::default());

        let without_content_type = Request::builder()
            .method("POST")
            .uri("/api/generate")
            .body(Body::from(r#"{"prompt": "rain"}"#))
            .unwrap();
        let not_json = Request::builder()
            .method("POST")
            .uri("/api/generate")
            .header("content-type", "application/json")
            .body(Body::from("not json"))
            .unwrap();

        for request in [without_content_type, not_json] {
            let response = app.clone().oneshot(request).await.unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
            let body = body_json(response).await;
            assert!(!body["error"].as_str().unwrap().is_empty());
        }
    }

    #[tokio::test]
    async fn panicking_pipeline_is_internal_error() {
        let app = app_with(ServerConfig::default());

        let request = Request::builder()
            .method("POST")
            .uri("/api/generate")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"prompt": "rain"}"#))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body_json(response).await.get("error").is_some());
    }

    #[tokio::test]
    async fn reports_stats() {
        let app = app_with(ServerConfig {
            environment: Environment::Prod,
            ..Default::default()
        });

        let request = Request::builder()
            .uri("/api/stats")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let stats = body_json(response).await;
        assert_eq!(stats["environment"], "prod");
        assert_eq!(stats["hash"], env!("GIT_HASH"));
    }

    #[tokio::test]
    async fn dev_cors_mirrors_any_origin() {
        let app = app_with(ServerConfig::default());

        let request = Request::builder()
            .uri("/api")
            .header("origin", "http://localhost:5173")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(
            response.headers()["access-control-allow-origin"],
            "http://localhost:5173"
        );
        assert_eq!(
            response.headers()["access-control-allow-credentials"],
            "true"
        );
    }

    #[tokio::test]
    async fn prod_cors_only_allows_configured_origins() {
        let app = app_with(ServerConfig {
            environment: Environment::Prod,
            cors_origins: vec!["https://lyrics.example".to_string()],
            ..Default::default()
        });

        let request = Request::builder()
            .uri("/api")
            .header("origin", "https://lyrics.example")
            .body(Body::empty())
            .unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(
            response.headers()["access-control-allow-origin"],
            "https://lyrics.example"
        );

        let request = Request::builder()
            .uri("/api")
            .header("origin", "https://evil.example")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert!(response
            .headers()
            .get("access-control-allow-origin")
            .is_none());
    }
}
