use std::{str::FromStr, time::Duration};

use url::Url;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_DB_PORT: u16 = 3306;
const DEFAULT_DB_CHARSET: &str = "utf8mb4";
const DEFAULT_DB_MAX_OPEN: u32 = 100;
const DEFAULT_DB_MAX_IDLE: u32 = 10;
const DEFAULT_DB_MAX_LIFETIME_SECS: u64 = 3600;
const DEFAULT_APP_HOST: &str = "127.0.0.1";
const DEFAULT_APP_PORT: u16 = 8080;
const DEFAULT_ALLOWED_ORIGINS: &str = "http://127.0.0.1:5173,http://localhost:5173";
const DEFAULT_SWEEP_TIMEOUT_SECS: u64 = 5;

pub struct Config {
    pub database_url: String,

    pub db_max_open: u32,
    pub db_max_idle: u32,
    pub db_max_lifetime: Duration,

    pub app_host: String,
    pub app_port: u16,

    pub jwt_secret: String,

    pub allowed_origins: Vec<Url>,

    pub sweep_timeout: Duration,
}

impl Config {
    /// Reads configuration from the process environment.
    ///
    /// Call `dotenvy::dotenv()` first to pick up a `.env` file.
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self::from_lookup(|name| std::env::var(name).ok())?)
    }

    /// Builds the configuration from any variable source.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and parsable
    /// - `Err(ConfigError::MissingEnvVar)` - A required variable is unset
    /// - `Err(ConfigError::InvalidEnvVar)` - A variable is set but cannot be parsed
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = match lookup("DATABASE_URL") {
            Some(url) => url,
            None => mysql_url(&lookup)?,
        };

        Ok(Self {
            database_url,
            db_max_open: parse_or(&lookup, "DB_MAX_OPEN", DEFAULT_DB_MAX_OPEN)?,
            db_max_idle: parse_or(&lookup, "DB_MAX_IDLE", DEFAULT_DB_MAX_IDLE)?,
            db_max_lifetime: Duration::from_secs(parse_or(
                &lookup,
                "DB_MAX_LIFETIME_SECS",
                DEFAULT_DB_MAX_LIFETIME_SECS,
            )?),
            app_host: lookup("APP_HOST").unwrap_or_else(|| DEFAULT_APP_HOST.to_string()),
            app_port: parse_or(&lookup, "APP_PORT", DEFAULT_APP_PORT)?,
            jwt_secret: require(&lookup, "JWT_SECRET")?,
            allowed_origins: parse_origins(
                &lookup("ALLOWED_ORIGINS").unwrap_or_else(|| DEFAULT_ALLOWED_ORIGINS.to_string()),
            )?,
            sweep_timeout: Duration::from_secs(parse_or(
                &lookup,
                "SWEEP_TIMEOUT_SECS",
                DEFAULT_SWEEP_TIMEOUT_SECS,
            )?),
        })
    }

    /// Address the HTTP listener binds to.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.app_host, self.app_port)
    }
}

/// Assembles a MySQL connection string from the individual `DB_*` variables.
fn mysql_url<F>(lookup: &F) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let host = require(lookup, "DB_HOST")?;
    let port: u16 = parse_or(lookup, "DB_PORT", DEFAULT_DB_PORT)?;
    let user = require(lookup, "DB_USER")?;
    let password = lookup("DB_PASSWORD").unwrap_or_default();
    let name = require(lookup, "DB_NAME")?;
    let charset = lookup("DB_CHARSET").unwrap_or_else(|| DEFAULT_DB_CHARSET.to_string());

    let mut url = Url::parse(&format!("mysql://{host}:{port}/")).map_err(|_| {
        ConfigError::InvalidEnvVar {
            name: "DB_HOST".to_string(),
            value: host.clone(),
        }
    })?;

    // Credentials go through the setters so reserved characters are percent-encoded.
    let invalid = |name: &str, value: &str| ConfigError::InvalidEnvVar {
        name: name.to_string(),
        value: value.to_string(),
    };
    url.set_username(&user)
        .map_err(|_| invalid("DB_USER", &user))?;
    if !password.is_empty() {
        url.set_password(Some(&password))
            .map_err(|_| invalid("DB_PASSWORD", "<redacted>"))?;
    }
    url.set_path(&format!("/{name}"));
    url.query_pairs_mut().append_pair("charset", &charset);

    Ok(url.to_string())
}

fn require<F>(lookup: &F, name: &str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .filter(|value| !value.is_empty())
        .ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
}

fn parse_or<F, T>(lookup: &F, name: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(name) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidEnvVar {
                name: name.to_string(),
                value: raw,
            }),
    }
}

/// Parses a comma separated origin list, skipping empty entries.
fn parse_origins(raw: &str) -> Result<Vec<Url>, ConfigError> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(|origin| {
            Url::parse(origin).map_err(|_| ConfigError::InvalidEnvVar {
                name: "ALLOWED_ORIGINS".to_string(),
                value: origin.to_string(),
            })
        })
        .collect()
}
