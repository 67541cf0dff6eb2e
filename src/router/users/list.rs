use axum::Json;
use axum::extract::State;

use crate::error::Result;
use crate::user::{User, UserRepository};

/// Every user, ordered by ascending id.
pub async fn handler(State(repo): State<UserRepository>) -> Result<Json<Vec<User>>> {
    Ok(Json(repo.list().await?))
}
