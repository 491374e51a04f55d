// src/config.rs
use std::{env, time::Duration};
use thiserror::Error;

const DEVELOPMENT: &str = "development";
const MIN_SECRET_LEN: usize = 32;

#[derive(Clone, Debug)]
pub struct AppConfig {
    listen_addr: String,
    environment: String,
    jwt_secret: String,
    token_ttl: Duration,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

fn default_environment() -> String {
    "production".into()
}

fn default_token_ttl() -> u64 {
    3600
}

impl AppConfig {
    /// Build configuration from environment variables. `JWT_SECRET` is
    /// required; everything else has a default.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let listen_addr = env::var("LISTEN_ADDR").unwrap_or_else(|_| default_listen_addr());
        let environment = env::var("APP_ENV")
            .or_else(|_| env::var("NODE_ENV"))
            .unwrap_or_else(|_| default_environment());
        let jwt_secret = env::var("JWT_SECRET").map_err(|_| ConfigError::Missing("JWT_SECRET"))?;
        let token_ttl_secs = match env::var("TOKEN_TTL_SECONDS") {
            Ok(raw) => raw.parse::<u64>().map_err(|_| {
                ConfigError::Invalid(format!("TOKEN_TTL_SECONDS must be an integer, got {raw:?}"))
            })?,
            Err(_) => default_token_ttl(),
        };

        Self::new(listen_addr, environment, jwt_secret, Duration::from_secs(token_ttl_secs))
    }

    pub fn new(
        listen_addr: impl Into<String>,
        environment: impl Into<String>,
        jwt_secret: impl Into<String>,
        token_ttl: Duration,
    ) -> Result<Self, ConfigError> {
        let environment: String = environment.into();
        let jwt_secret: String = jwt_secret.into();
        if jwt_secret.len() < MIN_SECRET_LEN {
            return Err(ConfigError::Invalid(format!(
                "JWT_SECRET must be at least {MIN_SECRET_LEN} bytes"
            )));
        }
        if token_ttl.is_zero() {
            return Err(ConfigError::Invalid("TOKEN_TTL_SECONDS must be positive".into()));
        }

        Ok(Self {
            listen_addr: listen_addr.into(),
            environment: environment.trim().to_string(),
            jwt_secret,
            token_ttl,
        })
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    pub fn environment(&self) -> &str {
        &self.environment
    }

    /// Stack traces are only ever sent to clients when this is true.
    pub fn development_mode(&self) -> bool {
        self.environment == DEVELOPMENT
    }

    pub fn jwt_secret(&self) -> &str {
        &self.jwt_secret
    }

    pub fn token_ttl(&self) -> Duration {
        self.token_ttl
    }
}
