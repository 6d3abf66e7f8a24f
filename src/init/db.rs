use crate::prelude::*;

use std::str::FromStr;

use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    SqlitePool,
};

pub async fn init_sqlite_pool(cfg: &Config) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(&cfg.db_connection_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(cfg.db_max_connections)
        .connect_with(options)
        .await?;

    sqlx::migrate!().run(&pool).await?;

    tracing::info!(url = %cfg.db_connection_url, "database ready");

    return Ok(pool);
}

#[cfg(test)]
pub async fn init_test_pool() -> SqlitePool {
    // Every in-memory connection is its own database, so pin the pool to one.
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .unwrap()
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
        .unwrap();

    sqlx::migrate!().run(&pool).await.unwrap();

    return pool;
}
