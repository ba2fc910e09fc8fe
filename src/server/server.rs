use anyhow::Result;

use tower_http::services::ServeDir;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

#[cfg(feature = "slowdown")]
use super::slowdown_request;
use super::{log_requests, routes, state::*, voice_ws, ServerConfig};

pub fn make_app(config: ServerConfig, generation: GuardedGenerationClient) -> Result<Router> {
    let state = ServerState::new(config.clone(), generation);

    let api_routes: Router = Router::new()
        .route("/emotion-analyzer", post(routes::analyze_emotions))
        .route("/song-structure", post(routes::analyze_structure))
        .route("/poetry-companion", post(routes::poetry_companion))
        .route("/rhyme-scheme", post(routes::rhyme_scheme))
        .route("/voice", get(voice_ws::voice_handler))
        .with_state(state.clone());

    let home_router: Router = match config.frontend_dir_path {
        Some(frontend_path) => {
            let static_files_service =
                ServeDir::new(frontend_path).append_index_html_on_directories(true);
            Router::new().fallback_service(static_files_service)
        }
        None => Router::new()
            .route("/", get(routes::home))
            .with_state(state.clone()),
    };

    let mut app: Router = home_router.merge(api_routes);

    #[cfg(feature = "slowdown")]
    {
        app = app.layer(middleware::from_fn(slowdown_request));
    }
    app = app.layer(middleware::from_fn_with_state(state.clone(), log_requests));

    Ok(app)
}

pub async fn run_server(config: ServerConfig, generation: GuardedGenerationClient) -> Result<()> {
    let port = config.port;
    let app = make_app(config, generation)?;

    let listener = tokio::net::TcpListener::bind(format!("127.0.0.1:{}", port)).await?;

    Ok(axum::serve(listener, app).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::{GenerationClient, GenerationError, GenerationOptions};
    use crate::server::RequestsLoggingLevel;
    use async_trait::async_trait;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use std::sync::Arc;
    use tower::ServiceExt; // for `oneshot`

    struct CannedGeneration(Result<String, ()>);

    #[async_trait]
    impl GenerationClient for CannedGeneration {
        fn name(&self) -> &str {
            "canned"
        }

        fn model(&self) -> &str {
            "canned-1"
        }

        async fn generate(
            &self,
            _instruction: &str,
            _options: &GenerationOptions,
        ) -> Result<String, GenerationError> {
            match &self.0 {
                Ok(text) => Ok(text.clone()),
                Err(()) => Err(GenerationError::Connection("down".to_string())),
            }
        }
    }

    fn test_app(generation: CannedGeneration) -> Router {
        let config = ServerConfig {
            requests_logging_level: RequestsLoggingLevel::None,
            ..Default::default()
        };
        make_app(config, Arc::new(generation)).unwrap()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), 64 * 1024)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn home_reports_uptime_and_hash() {
        let app = test_app(CannedGeneration(Ok(String::new())));
        let response = app
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert!(json["uptime"].is_string());
        assert!(json["hash"].is_string());
    }

    #[tokio::test]
    async fn rhyme_scheme_rejects_empty_lyrics() {
        let app = test_app(CannedGeneration(Ok(String::new())));
        let response = app
            .oneshot(
                Request::post("/rhyme-scheme")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"lyrics":"   "}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["error"], "Missing lyrics");
    }

    #[tokio::test]
    async fn rhyme_scheme_classifies_lines() {
        let app = test_app(CannedGeneration(Ok(String::new())));
        let response = app
            .oneshot(
                Request::post("/rhyme-scheme")
                    .header("content-type", "application/json")
                    .body(Body::from(
                        r#"{"lyrics":"hold me tight\nthrough the night"}"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["scheme"], "AA");
        assert_eq!(json["groups"], serde_json::json!([0, 0]));
        assert_eq!(
            json["lines"],
            serde_json::json!(["hold me tight", "through the night"])
        );
    }

    #[tokio::test]
    async fn companion_requires_fields_in_song_mode() {
        let app = test_app(CannedGeneration(Ok("la la".to_string())));
        let response = app
            .oneshot(
                Request::post("/poetry-companion")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"userInput":"a line"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["error"], "Missing required fields");
    }

    #[tokio::test]
    async fn upstream_failure_is_opaque() {
        let app = test_app(CannedGeneration(Err(())));
        let response = app
            .oneshot(
                Request::post("/poetry-companion")
                    .header("content-type", "application/json")
                    .body(Body::from(
                        r#"{"userInput":"a line","assistanceType":"rhyme","language":"english"}"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = body_json(response).await;
        assert_eq!(json["error"], "Failed to generate response from Gemini.");
    }
}
