use crate::Result;

use std::env;

use anyhow::Context;

const DEFAULT_SERVER_HOST: &str = "127.0.0.1";
const DEFAULT_SERVER_PORT: u16 = 5000;
const DEFAULT_DATABASE_URL: &str = "sqlite://twitter_api.db";
const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,

    pub db_connection_url: String,
    pub db_max_connections: u32,
}

impl Config {
    pub fn server_addr(&self) -> String {
        return format!("{}:{}", self.server_host, self.server_port);
    }
}

pub fn build() -> Result<Config> {
    dotenv::dotenv().ok();

    let server_port = match env::var("SERVER_PORT") {
        Ok(port) => port
            .parse()
            .with_context(|| format!("SERVER_PORT must be a valid port, got {port:?}"))?,
        Err(_) => DEFAULT_SERVER_PORT,
    };

    let db_max_connections = match env::var("DATABASE_MAX_CONNECTIONS") {
        Ok(max) => max.parse().with_context(|| {
            format!("DATABASE_MAX_CONNECTIONS must be a positive number, got {max:?}")
        })?,
        Err(_) => DEFAULT_DATABASE_MAX_CONNECTIONS,
    };

    return Ok(Config {
        server_host: env::var("SERVER_HOST").unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
        server_port,

        db_connection_url: env::var("DATABASE_URL")
            .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
        db_max_connections,
    });
}
