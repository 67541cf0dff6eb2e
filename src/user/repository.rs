//! Handle database requests.

use sqlx::Connection;

use crate::database::{Database, settle};
use crate::error::{Result, ServerError};
use crate::user::User;

#[derive(Clone)]
pub struct UserRepository {
    db: Database,
}

impl UserRepository {
    /// Create a new [`UserRepository`].
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Insert a user and return the id assigned by the store.
    ///
    /// A duplicate email fails with [`ServerError::Conflict`].
    pub async fn insert(&self, name: &str, email: &str) -> Result<i64> {
        let mut conn = self.db.connect().await?;

        let result = sqlx::query(r#"INSERT INTO users (name, email) VALUES (?1, ?2)"#)
            .bind(name)
            .bind(email)
            .execute(&mut conn)
            .await;
        let result = settle(result, conn.close().await);

        Ok(result?.last_insert_rowid())
    }

    /// List every user, ordered by ascending `id` (insertion order).
    pub async fn list(&self) -> Result<Vec<User>> {
        let mut conn = self.db.connect().await?;

        let users = sqlx::query_as::<_, User>(
            r#"SELECT id, name, email FROM users ORDER BY id"#,
        )
        .fetch_all(&mut conn)
        .await;
        let users = settle(users, conn.close().await);

        Ok(users?)
    }

    /// Find a user using `id` field.
    pub async fn find_by_id(&self, user_id: i64) -> Result<User> {
        let mut conn = self.db.connect().await?;

        let user = sqlx::query_as::<_, User>(
            r#"SELECT id, name, email FROM users WHERE id = ?1"#,
        )
        .bind(user_id)
        .fetch_optional(&mut conn)
        .await;
        let user = settle(user, conn.close().await);

        user?.ok_or(ServerError::NotFound)
    }

    /// Overwrite `name` and `email` of an existing user.
    pub async fn update(&self, user_id: i64, name: &str, email: &str) -> Result<()> {
        let mut conn = self.db.connect().await?;

        let result = sqlx::query(r#"UPDATE users SET name = ?1, email = ?2 WHERE id = ?3"#)
            .bind(name)
            .bind(email)
            .bind(user_id)
            .execute(&mut conn)
            .await;
        let result = settle(result, conn.close().await);

        if result?.rows_affected() == 0 {
            return Err(ServerError::NotFound);
        }

        Ok(())
    }

    /// Delete a user.
    pub async fn delete(&self, user_id: i64) -> Result<()> {
        let mut conn = self.db.connect().await?;

        let result = sqlx::query(r#"DELETE FROM users WHERE id = ?1"#)
            .bind(user_id)
            .execute(&mut conn)
            .await;
        let result = settle(result, conn.close().await);

        if result?.rows_affected() == 0 {
            return Err(ServerError::NotFound);
        }

        Ok(())
    }
}
