use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};

use super::Body;
use crate::error::Result;
use crate::router::JsonBody;
use crate::user::UserRepository;

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct Response {
    pub message: String,
    pub id: i64,
}

/// Handler to create user.
pub async fn handler(
    State(repo): State<UserRepository>,
    JsonBody(body): JsonBody<Body>,
) -> Result<Json<Response>> {
    let id = repo.insert(&body.name, &body.email).await?;

    tracing::debug!(user_id = id, "user created");

    Ok(Json(Response {
        message: "User created".to_owned(),
        id,
    }))
}
