use serde::Deserialize;
use tracing::warn;

/// Used when neither `JWT_SECRET` nor `SECRET_KEY` is set. Never deploy with it.
pub const DEV_JWT_SECRET: &str = "wellness-dev-secret-change-in-production";

#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub name: Option<String>,
    pub max_connections: u32,
    pub acquire_timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
    /// Allowed cross-origin hosts; empty means any origin.
    pub cors_origins: Vec<String>,
    pub host: String,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database = DatabaseConfig {
            url: std::env::var("DATABASE_URL")?,
            name: std::env::var("DB_NAME").ok().filter(|v| !v.is_empty()),
            max_connections: env_parse("DB_MAX_CONNECTIONS").unwrap_or(10),
            acquire_timeout_secs: env_parse("DB_ACQUIRE_TIMEOUT_SECS").unwrap_or(5),
        };

        let secret = pick_secret(
            std::env::var("JWT_SECRET").ok(),
            std::env::var("SECRET_KEY").ok(),
        )
        .unwrap_or_else(|| {
            warn!("JWT_SECRET is not set, falling back to the development secret");
            DEV_JWT_SECRET.to_string()
        });
        let jwt = JwtConfig { secret };

        Ok(Self {
            database,
            jwt,
            cors_origins: parse_origins(&std::env::var("CORS_ORIGINS").unwrap_or_default()),
            host: std::env::var("APP_HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port: env_parse("APP_PORT").unwrap_or(8080),
        })
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.parse::<T>().ok())
}

/// First non-blank candidate, in priority order.
fn pick_secret(jwt_secret: Option<String>, secret_key: Option<String>) -> Option<String> {
    [jwt_secret, secret_key]
        .into_iter()
        .flatten()
        .find(|s| !s.trim().is_empty())
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty() && *o != "*")
        .map(String::from)
        .collect()
}
