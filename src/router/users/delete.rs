//! Delete user from database.

use axum::Json;
use axum::extract::State;

use super::Message;
use crate::error::Result;
use crate::router::UserId;
use crate::user::UserRepository;

pub async fn handler(
    State(repo): State<UserRepository>,
    UserId(user_id): UserId,
) -> Result<Json<Message>> {
    repo.delete(user_id).await?;

    tracing::debug!(user_id, "user deleted");

    Ok(Json(Message::new("User deleted")))
}
