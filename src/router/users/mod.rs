//! Users-related HTTP API.
mod create;
mod delete;
mod get;
mod list;
mod update;

use axum::Router;
use axum::extract::FromRef;
use axum::routing::get;
use serde::{Deserialize, Serialize};

use crate::AppState;
use crate::user::UserRepository;

/// Request body of `POST /users/` and `PUT /users/{user_id}`.
///
/// Both fields must be present; their content is not checked.
#[derive(Debug, Serialize, Deserialize)]
pub struct Body {
    pub name: String,
    pub email: String,
}

/// Outcome of a write without payload.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub message: String,
}

impl Message {
    fn new(message: &str) -> Self {
        Self {
            message: message.to_owned(),
        }
    }
}

impl FromRef<AppState> for UserRepository {
    fn from_ref(state: &AppState) -> UserRepository {
        UserRepository::new(state.db.clone())
    }
}

pub fn router() -> Router<AppState> {
    Router::new()
        // `GET /users/` goes to `list`, `POST /users/` goes to `create`.
        .route("/users", get(list::handler).post(create::handler))
        .route("/users/", get(list::handler).post(create::handler))
        // `GET|PUT|DELETE /users/{user_id}`.
        .route(
            "/users/{user_id}",
            get(get::handler)
                .put(update::handler)
                .delete(delete::handler),
        )
}
