use crate::{result::ApiError, Result};

use serde::Serialize;
use sqlx::{self, SqliteConnection};

#[derive(sqlx::FromRow, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub username: String,
}

impl User {
    pub async fn find_all(conn: &mut SqliteConnection) -> Result<Vec<Self>> {
        let users: Vec<Self> = sqlx::query_as("SELECT id, username FROM users ORDER BY id")
            .fetch_all(&mut *conn)
            .await?;

        return Ok(users);
    }

    pub async fn find_by_id(conn: &mut SqliteConnection, id: i64) -> Result<Option<Self>> {
        let found: Option<Self> =
            sqlx::query_as("SELECT id, username FROM users WHERE id = ? LIMIT 1")
                .bind(id)
                .fetch_optional(&mut *conn)
                .await?;

        return Ok(found);
    }

    /// Inserts a user and reads the stored row back by its generated id.
    pub async fn create(conn: &mut SqliteConnection, username: &str) -> Result<Self> {
        let id = sqlx::query("INSERT INTO users (username) VALUES (?)")
            .bind(username)
            .execute(&mut *conn)
            .await
            .map_err(ApiError::from_insert)?
            .last_insert_rowid();

        let created = Self::find_by_id(conn, id)
            .await?
            .ok_or_else(|| anyhow::anyhow!("user {id} missing right after insert"))?;

        return Ok(created);
    }
}
