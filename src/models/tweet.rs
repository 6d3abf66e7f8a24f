use crate::{result::ApiError, Result};

use serde::Serialize;
use sqlx::{self, SqliteConnection};

// Inner join: a tweet whose author row is gone is not returned.
const SELECT_TWEETS: &str = "SELECT t.id, t.tweet_body, t.user_id, u.username \
     FROM tweets t INNER JOIN users u ON t.user_id = u.id";

/// A tweet together with its author's username.
#[derive(sqlx::FromRow, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Tweet {
    pub id: i64,
    pub tweet_body: String,
    pub user_id: i64,
    pub username: String,
}

impl Tweet {
    pub async fn find_all(conn: &mut SqliteConnection) -> Result<Vec<Self>> {
        let tweets: Vec<Self> =
            sqlx::query_as(&format!("{SELECT_TWEETS} ORDER BY t.id"))
                .fetch_all(&mut *conn)
                .await?;

        return Ok(tweets);
    }

    pub async fn find_by_id(conn: &mut SqliteConnection, id: i64) -> Result<Option<Self>> {
        let found: Option<Self> =
            sqlx::query_as(&format!("{SELECT_TWEETS} WHERE t.id = ? LIMIT 1"))
                .bind(id)
                .fetch_optional(&mut *conn)
                .await?;

        return Ok(found);
    }

    /// Fails with `ConstraintViolation` when `user_id` names no existing user.
    pub async fn create(
        conn: &mut SqliteConnection,
        tweet_body: &str,
        user_id: i64,
    ) -> Result<Self> {
        let id = sqlx::query("INSERT INTO tweets (tweet_body, user_id) VALUES (?, ?)")
            .bind(tweet_body)
            .bind(user_id)
            .execute(&mut *conn)
            .await
            .map_err(ApiError::from_insert)?
            .last_insert_rowid();

        let created = Self::find_by_id(conn, id)
            .await?
            .ok_or_else(|| anyhow::anyhow!("tweet {id} missing right after insert"))?;

        return Ok(created);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{init::db::init_test_pool, models::User};

    #[tokio::test]
    async fn created_tweet_matches_listed_tweet() {
        let pool = init_test_pool().await;
        let mut conn = pool.acquire().await.unwrap();

        let alice = User::create(&mut conn, "alice").await.unwrap();
        let created = Tweet::create(&mut conn, "hello world", alice.id)
            .await
            .unwrap();

        assert_eq!(
            created,
            Tweet {
                id: 1,
                tweet_body: "hello world".to_string(),
                user_id: alice.id,
                username: "alice".to_string(),
            }
        );
        assert_eq!(Tweet::find_all(&mut conn).await.unwrap(), vec![created]);
    }

    #[tokio::test]
    async fn unknown_author_is_a_constraint_violation() {
        let pool = init_test_pool().await;
        let mut conn = pool.acquire().await.unwrap();

        let err = Tweet::create(&mut conn, "orphan", 99).await.unwrap_err();
        assert!(matches!(
            err.0.downcast_ref::<ApiError>(),
            Some(ApiError::ConstraintViolation(_))
        ));

        assert!(Tweet::find_all(&mut conn).await.unwrap().is_empty());
    }
}
