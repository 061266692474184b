/**
 * Server Configuration
 *
 * This module loads and validates the server configuration from environment
 * variables (after `.env` has been loaded by the binary).
 *
 * # Variables
 *
 * | Variable                   | Default                         |
 * |----------------------------|---------------------------------|
 * | `DATABASE_URL`             | `sqlite://db.sqlite3?mode=rwc`  |
 * | `JWT_SECRET_KEY`           | `your_secret_key` (warns)       |
 * | `JWT_ACCESS_TOKEN_EXPIRES` | `900` seconds, at most one year |
 * | `BCRYPT_COST`              | `bcrypt::DEFAULT_COST`          |
 * | `HOST`                     | `0.0.0.0`                       |
 * | `PORT`                     | `5000`                          |
 *
 * # Error Handling
 *
 * A variable that is set but unparsable is a `ConfigError`; the server does
 * not fall back to the default for it.
 */

use std::net::{IpAddr, SocketAddr};

use thiserror::Error;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://db.sqlite3?mode=rwc";
pub const DEFAULT_JWT_SECRET: &str = "your_secret_key";
pub const DEFAULT_TOKEN_TTL_SECS: i64 = 900;
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;

/// Longest accepted token lifetime (one year)
pub const MAX_TOKEN_TTL_SECS: i64 = 365 * 24 * 60 * 60;

const TTL_EXPECTED: &str = "seconds in 1..=31536000";
const MIN_BCRYPT_COST: u32 = 4;
const MAX_BCRYPT_COST: u32 = 31;

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {name}='{value}'; expected {expected}")]
    InvalidValue {
        name: &'static str,
        value: String,
        expected: &'static str,
    },
    #[error("missing value: {0}")]
    MissingValue(&'static str),
}

/// Server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// sqlx SQLite connection URL
    pub database_url: String,
    /// HS256 signing secret
    pub jwt_secret: String,
    /// Lifetime of issued tokens
    pub token_ttl: chrono::Duration,
    /// bcrypt work factor
    pub bcrypt_cost: u32,
    pub host: IpAddr,
    pub port: u16,
}

impl ServerConfig {
    /// Create a new ServerConfigBuilder
    pub fn builder() -> ServerConfigBuilder {
        ServerConfigBuilder::default()
    }

    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration from `lookup`, which maps a variable name to its value
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = Self::builder();

        if let Some(url) = lookup("DATABASE_URL") {
            builder = builder.database_url(url);
        }
        match lookup("JWT_SECRET_KEY") {
            Some(secret) => builder = builder.jwt_secret(secret),
            None => tracing::warn!("JWT_SECRET_KEY not set, using the development default"),
        }
        if let Some(value) = lookup("JWT_ACCESS_TOKEN_EXPIRES") {
            builder = builder.token_ttl_secs(parse("JWT_ACCESS_TOKEN_EXPIRES", &value, TTL_EXPECTED)?);
        }
        if let Some(value) = lookup("BCRYPT_COST") {
            builder = builder.bcrypt_cost(parse("BCRYPT_COST", &value, "an integer in 4..=31")?);
        }
        if let Some(value) = lookup("HOST") {
            builder = builder.host(parse("HOST", &value, "an IP address")?);
        }
        if let Some(value) = lookup("PORT") {
            builder = builder.port(parse("PORT", &value, "a port number")?);
        }

        builder.build()
    }

    /// Address the server listens on
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse<T: std::str::FromStr>(
    name: &'static str,
    value: &str,
    expected: &'static str,
) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        name,
        value: value.to_string(),
        expected,
    })
}

/// Builder for ServerConfig
#[derive(Debug, Default)]
pub struct ServerConfigBuilder {
    database_url: Option<String>,
    jwt_secret: Option<String>,
    token_ttl_secs: Option<i64>,
    bcrypt_cost: Option<u32>,
    host: Option<IpAddr>,
    port: Option<u16>,
}

impl ServerConfigBuilder {
    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = Some(url.into());
        self
    }

    pub fn jwt_secret(mut self, secret: impl Into<String>) -> Self {
        self.jwt_secret = Some(secret.into());
        self
    }

    pub fn token_ttl_secs(mut self, secs: i64) -> Self {
        self.token_ttl_secs = Some(secs);
        self
    }

    pub fn bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = Some(cost);
        self
    }

    pub fn host(mut self, host: IpAddr) -> Self {
        self.host = Some(host);
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Build the configuration, filling defaults and validating ranges
    pub fn build(self) -> Result<ServerConfig, ConfigError> {
        let jwt_secret = self
            .jwt_secret
            .unwrap_or_else(|| DEFAULT_JWT_SECRET.to_string());
        if jwt_secret.is_empty() {
            return Err(ConfigError::MissingValue("JWT_SECRET_KEY"));
        }

        let ttl_secs = self.token_ttl_secs.unwrap_or(DEFAULT_TOKEN_TTL_SECS);
        let token_ttl = Some(ttl_secs)
            .filter(|secs| (1..=MAX_TOKEN_TTL_SECS).contains(secs))
            .and_then(chrono::Duration::try_seconds)
            .ok_or_else(|| ConfigError::InvalidValue {
                name: "JWT_ACCESS_TOKEN_EXPIRES",
                value: ttl_secs.to_string(),
                expected: TTL_EXPECTED,
            })?;

        let bcrypt_cost = self.bcrypt_cost.unwrap_or(bcrypt::DEFAULT_COST);
        if !(MIN_BCRYPT_COST..=MAX_BCRYPT_COST).contains(&bcrypt_cost) {
            return Err(ConfigError::InvalidValue {
                name: "BCRYPT_COST",
                value: bcrypt_cost.to_string(),
                expected: "an integer in 4..=31",
            });
        }

        Ok(ServerConfig {
            database_url: self
                .database_url
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            jwt_secret,
            token_ttl,
            bcrypt_cost,
            host: self
                .host
                .unwrap_or(IpAddr::from([0, 0, 0, 0])),
            port: self.port.unwrap_or(DEFAULT_PORT),
        })
    }
}
