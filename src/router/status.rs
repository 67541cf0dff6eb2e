//! Public server status.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};

use crate::AppState;
use crate::config::Configuration;

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub message: String,
}

/// Liveness message.
pub async fn root() -> Json<Message> {
    Json(Message {
        message: "API is running.".into(),
    })
}

/// Public configuration: instance name and version.
pub async fn status(
    State(config): State<Arc<Configuration>>,
) -> Json<Configuration> {
    Json(config.as_ref().clone())
}

/// Prometheus text exposition, empty when no recorder is installed.
pub async fn metrics(State(state): State<AppState>) -> String {
    state
        .metrics
        .as_ref()
        .map(|handle| handle.render())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use http_body_util::BodyExt;

    use super::*;
    use crate::*;

    #[tokio::test]
    async fn test_root_handler() {
        let (state, _dir) = router::state().await;
        let app = app(state);

        let response = make_request(app, Method::GET, "/", String::default()).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let body: Message = serde_json::from_slice(&body).unwrap();
        assert_eq!(body.message, "API is running.");
    }

    #[tokio::test]
    async fn test_status_handler() {
        let (state, _dir) = router::state().await;
        let app = app(state);

        let response =
            make_request(app, Method::GET, "/status.json", String::default()).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["name"], "roster");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
        assert!(body.get("database").is_none());
    }

    #[tokio::test]
    async fn test_metrics_without_recorder() {
        let (state, _dir) = router::state().await;
        let app = app(state);

        let response =
            make_request(app, Method::GET, "/metrics", String::default()).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert!(body.is_empty());
    }
}
