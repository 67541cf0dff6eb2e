pub mod status;
pub mod users;

use axum::Json;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;

use crate::error::ServerError;

/// JSON body whose rejections answer with [`ServerError`].
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ServerError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(JsonBody(value))
    }
}

/// `{user_id}` path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserId(pub i64);

impl<S> FromRequestParts<S> for UserId
where
    S: Send + Sync,
{
    type Rejection = ServerError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i64>::from_request_parts(parts, state).await?;
        Ok(UserId(id))
    }
}

/// State backed by a throwaway database file.
///
/// Keep the returned directory alive for the duration of the test.
#[cfg(test)]
pub(crate) async fn state() -> (crate::AppState, tempfile::TempDir) {
    use std::sync::Arc;

    let dir = tempfile::tempdir().unwrap();
    let mut config = crate::config::Configuration::default();
    config.database.path = dir.path().join("users.db");

    let state = crate::initialize_state(Arc::new(config), None)
        .await
        .unwrap();
    (state, dir)
}
