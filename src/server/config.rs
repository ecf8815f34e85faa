use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_SERVER_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_CORS_ALLOWED_ORIGINS: &str =
    "http://localhost:3000,http://localhost:3001,http://127.0.0.1:3000,http://127.0.0.1:3001";

pub struct Config {
    pub database_url: String,

    /// Socket address the HTTP server binds to.
    pub server_addr: String,

    /// Origins allowed to make cross-origin requests with credentials.
    pub cors_allowed_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let cors_allowed_origins = parse_origins(
            &std::env::var("CORS_ALLOWED_ORIGINS")
                .unwrap_or_else(|_| DEFAULT_CORS_ALLOWED_ORIGINS.to_string()),
        );
        if cors_allowed_origins.is_empty() {
            return Err(ConfigError::InvalidValue {
                name: "CORS_ALLOWED_ORIGINS".to_string(),
                reason: "at least one origin is required".to_string(),
            }
            .into());
        }

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            server_addr: std::env::var("SERVER_ADDR")
                .unwrap_or_else(|_| DEFAULT_SERVER_ADDR.to_string()),
            cors_allowed_origins,
        })
    }
}

/// Splits a comma separated origin list, dropping blank entries.
fn parse_origins(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}
