use chrono::Duration;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_PORT: u16 = 3001;
const DEFAULT_TOKEN_TTL_HOURS: i64 = 24;

pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,

    pub port: u16,
    pub token_ttl: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            jwt_secret: std::env::var("JWT_SECRET")
                .map_err(|_| ConfigError::MissingEnvVar("JWT_SECRET".to_string()))?,
            port: parse_or("PORT", DEFAULT_PORT)?,
            token_ttl: token_ttl(parse_or("TOKEN_TTL_HOURS", DEFAULT_TOKEN_TTL_HOURS)?)?,
        })
    }
}

/// Parses an optional environment variable, falling back to `default` when unset.
fn parse_or<T: std::str::FromStr>(name: &str, default: T) -> Result<T, ConfigError> {
    match std::env::var(name) {
        Ok(value) => value.parse().map_err(|_| ConfigError::InvalidValue {
            name: name.to_string(),
            value,
        }),
        Err(_) => Ok(default),
    }
}

/// Token lifetime must be positive and fit in a `Duration`.
fn token_ttl(hours: i64) -> Result<Duration, ConfigError> {
    Duration::try_hours(hours)
        .filter(|ttl| *ttl > Duration::zero())
        .ok_or_else(|| ConfigError::InvalidValue {
            name: "TOKEN_TTL_HOURS".to_string(),
            value: hours.to_string(),
        })
}
