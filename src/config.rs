use std::env;

use anyhow::Context;

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

impl DatabaseConfig {
    /// Assemble a Postgres connection string from its individual parts.
    pub fn from_parts(host: &str, port: u16, user: &str, password: &str, name: &str) -> String {
        if password.is_empty() {
            format!("postgres://{user}@{host}:{port}/{name}")
        } else {
            format!("postgres://{user}:{password}@{host}:{port}/{name}")
        }
    }

    pub fn from_env() -> anyhow::Result<Self> {
        let url = match env::var("DATABASE_URL") {
            Ok(url) => url,
            Err(_) => {
                let name = env::var("DB_NAME").context("DATABASE_URL or DB_NAME must be set")?;
                let host = env::var("DB_HOST").unwrap_or_else(|_| "localhost".to_string());
                let port = env::var("DB_PORT")
                    .ok()
                    .and_then(|p| p.parse::<u16>().ok())
                    .unwrap_or(5432);
                let user = env::var("DB_USER").unwrap_or_else(|_| "postgres".to_string());
                let password = env::var("DB_PASSWORD").unwrap_or_default();
                Self::from_parts(&host, port, &user, &password, &name)
            }
        };
        let max_connections = env::var("DB_MAX_CONNECTIONS")
            .ok()
            .and_then(|n| n.parse::<u32>().ok())
            .unwrap_or(10);
        Ok(Self {
            url,
            max_connections,
        })
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database: DatabaseConfig,
    pub host: String,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database = DatabaseConfig::from_env()?;
        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(3000);
        Ok(Self {
            database,
            host,
            port,
        })
    }
}
