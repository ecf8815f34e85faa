use axum::http::{header, HeaderValue, Method};
use std::time::Duration;
use tower_http::cors::CorsLayer;

use crate::server::{
    config::Config,
    error::{config::ConfigError, AppError},
};

/// How long browsers may cache a CORS preflight response.
const CORS_MAX_AGE: Duration = Duration::from_secs(12 * 60 * 60);

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the CORS layer for the configured origins.
///
/// Credentials are allowed, so origins, methods and headers are listed explicitly
/// rather than using wildcards.
///
/// # Returns
/// - `Ok(CorsLayer)` - Layer allowing the configured origins
/// - `Err(AppError::ConfigErr)` - An origin is not a valid header value
pub fn cors_layer(config: &Config) -> Result<CorsLayer, AppError> {
    let origins = config
        .cors_allowed_origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin).map_err(|e| ConfigError::InvalidValue {
                name: "CORS_ALLOWED_ORIGINS".to_string(),
                reason: format!("'{}' is not a valid origin: {}", origin, e),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
            header::ORIGIN,
            header::HeaderName::from_static("x-requested-with"),
        ])
        .expose_headers([header::CONTENT_LENGTH])
        .allow_credentials(true)
        .max_age(CORS_MAX_AGE))
}
