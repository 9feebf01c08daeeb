use crate::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_UPLOAD_DIR: &str = "uploads";
const DEFAULT_JWT_EXPIRY_HOURS: i64 = 12;

pub struct Config {
    pub database_url: String,
    pub bind_addr: String,

    pub jwt_secret: String,
    pub jwt_expiry_hours: i64,

    pub upload_dir: String,

    /// Credentials for the initial Bishop account, created at startup when the
    /// user table is empty. Both variables must be set for the bootstrap to run.
    pub bootstrap_bishop_username: Option<String>,
    pub bootstrap_bishop_password: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let jwt_expiry_hours = match std::env::var("JWT_EXPIRY_HOURS") {
            Ok(value) => value.parse::<i64>().map_err(|_| {
                ConfigError::InvalidEnvVar("JWT_EXPIRY_HOURS".to_string(), "an integer".to_string())
            })?,
            Err(_) => DEFAULT_JWT_EXPIRY_HOURS,
        };

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_addr: std::env::var("BIND_ADDR")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
            jwt_secret: std::env::var("JWT_SECRET")
                .map_err(|_| ConfigError::MissingEnvVar("JWT_SECRET".to_string()))?,
            jwt_expiry_hours,
            upload_dir: std::env::var("UPLOAD_DIR")
                .unwrap_or_else(|_| DEFAULT_UPLOAD_DIR.to_string()),
            bootstrap_bishop_username: std::env::var("BOOTSTRAP_BISHOP_USERNAME").ok(),
            bootstrap_bishop_password: std::env::var("BOOTSTRAP_BISHOP_PASSWORD").ok(),
        })
    }
}
