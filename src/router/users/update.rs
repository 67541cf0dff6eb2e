//! Overwrite name and email of a user.

use axum::Json;
use axum::extract::State;

use super::{Body, Message};
use crate::error::Result;
use crate::router::{JsonBody, UserId};
use crate::user::UserRepository;

pub async fn handler(
    State(repo): State<UserRepository>,
    UserId(user_id): UserId,
    JsonBody(body): JsonBody<Body>,
) -> Result<Json<Message>> {
    repo.update(user_id, &body.name, &body.email).await?;

    tracing::debug!(user_id, "user updated");

    Ok(Json(Message::new("User updated")))
}
