use axum::Json;
use axum::extract::State;

use crate::error::Result;
use crate::router::UserId;
use crate::user::{User, UserRepository};

pub async fn handler(
    State(repo): State<UserRepository>,
    UserId(user_id): UserId,
) -> Result<Json<User>> {
    Ok(Json(repo.find_by_id(user_id).await?))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use http_body_util::BodyExt;

    use crate::*;
    use crate::user::User;

    #[tokio::test]
    async fn test_get_user_handler() {
        let (state, _dir) = router::state().await;
        let id = user::UserRepository::new(state.db.clone())
            .insert("Kabir", "kabir@example.com")
            .await
            .unwrap();
        let app = app(state);

        let path = format!("/users/{id}");
        let response = make_request(app, Method::GET, &path, String::default()).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let body: User = serde_json::from_slice(&body).unwrap();
        assert_eq!(
            body,
            User {
                id,
                name: "Kabir".into(),
                email: "kabir@example.com".into(),
            }
        );
    }

    #[tokio::test]
    async fn test_get_unknown_user() {
        let (state, _dir) = router::state().await;
        let app = app(state);

        let response =
            make_request(app, Method::GET, "/users/404", String::default()).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["detail"], "User not found");
    }

    #[tokio::test]
    async fn test_get_with_invalid_id() {
        let (state, _dir) = router::state().await;
        let app = app(state);

        let response =
            make_request(app, Method::GET, "/users/abc", String::default()).await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["status"], 422);
    }
}
