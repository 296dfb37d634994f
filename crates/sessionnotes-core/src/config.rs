//! Configuration module
//!
//! Server, logging, and upload settings, read from the environment (a `.env`
//! file is loaded first when present).

use std::env;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::path::PathBuf;
use std::str::FromStr;

use crate::constants::{
    BYTES_PER_MB, DEFAULT_MAX_UPLOAD_SIZE_MB, DEFAULT_UPLOAD_DIR, MULTIPART_OVERHEAD_BYTES,
};

const SERVER_HOST: &str = "0.0.0.0";
const SERVER_PORT: u16 = 3001;
const REQUEST_TIMEOUT_SECS: u64 = 60;
const HTTP_CONCURRENCY_LIMIT: usize = 10_000;

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" | "pretty" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            _ => Err(anyhow::anyhow!(
                "Invalid LOG_FORMAT '{}': expected 'text' or 'json'",
                s
            )),
        }
    }
}

impl Display for LogFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            LogFormat::Text => write!(f, "text"),
            LogFormat::Json => write!(f, "json"),
        }
    }
}

/// Server and runtime settings
#[derive(Clone, Debug)]
pub struct BaseConfig {
    pub server_host: String,
    pub server_port: u16,
    pub cors_origins: Vec<String>,
    pub environment: String,
    pub log_format: LogFormat,
    pub request_timeout_secs: u64,
    pub http_concurrency_limit: usize,
}

/// Upload ingestion settings
#[derive(Clone, Debug)]
pub struct UploadConfig {
    pub upload_dir: PathBuf,
    pub max_upload_size_bytes: usize,
}

/// Application configuration.
#[derive(Clone, Debug)]
pub struct Config {
    pub base: BaseConfig,
    pub uploads: UploadConfig,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            base: BaseConfig {
                server_host: SERVER_HOST.to_string(),
                server_port: SERVER_PORT,
                cors_origins: vec!["*".to_string()],
                environment: "development".to_string(),
                log_format: LogFormat::Text,
                request_timeout_secs: REQUEST_TIMEOUT_SECS,
                http_concurrency_limit: HTTP_CONCURRENCY_LIMIT,
            },
            uploads: UploadConfig {
                upload_dir: PathBuf::from(DEFAULT_UPLOAD_DIR),
                max_upload_size_bytes: DEFAULT_MAX_UPLOAD_SIZE_MB * BYTES_PER_MB,
            },
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, anyhow::Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        let environment = lookup("ENVIRONMENT")
            .or_else(|| lookup("APP_ENV"))
            .unwrap_or(defaults.base.environment);

        let cors_origins_str = lookup("CORS_ORIGINS").unwrap_or_else(|| "*".to_string());
        let is_production =
            environment.to_lowercase() == "production" || environment.to_lowercase() == "prod";
        if is_production && cors_origins_str.trim() == "*" {
            return Err(anyhow::anyhow!(
                "CORS_ORIGINS cannot be '*' in production. Please specify explicit origins."
            ));
        }
        let cors_origins: Vec<String> = cors_origins_str
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let server_port =
            parse_var::<u16, _>(&lookup, "PORT")?.unwrap_or(defaults.base.server_port);

        let max_upload_size_mb = parse_var::<usize, _>(&lookup, "MAX_UPLOAD_SIZE_MB")?
            .unwrap_or(DEFAULT_MAX_UPLOAD_SIZE_MB);
        let max_upload_size_bytes = max_upload_size_mb
            .checked_mul(BYTES_PER_MB)
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "MAX_UPLOAD_SIZE_MB {} is too large to express in bytes",
                    max_upload_size_mb
                )
            })?;

        let log_format = match lookup("LOG_FORMAT") {
            Some(format) => format.parse()?,
            None => defaults.base.log_format,
        };

        let request_timeout_secs = parse_var::<u64, _>(&lookup, "REQUEST_TIMEOUT_SECS")?
            .unwrap_or(REQUEST_TIMEOUT_SECS);

        let http_concurrency_limit = parse_var::<usize, _>(&lookup, "HTTP_CONCURRENCY_LIMIT")?
            .unwrap_or(HTTP_CONCURRENCY_LIMIT);

        Ok(Config {
            base: BaseConfig {
                server_host: lookup("HOST").unwrap_or(defaults.base.server_host),
                server_port,
                cors_origins,
                environment,
                log_format,
                request_timeout_secs,
                http_concurrency_limit,
            },
            uploads: UploadConfig {
                upload_dir: lookup("UPLOAD_DIR")
                    .map(PathBuf::from)
                    .unwrap_or(defaults.uploads.upload_dir),
                max_upload_size_bytes,
            },
        })
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.uploads.max_upload_size_bytes == 0 {
            return Err(anyhow::anyhow!("MAX_UPLOAD_SIZE_MB must be greater than 0"));
        }

        if self.uploads.upload_dir.as_os_str().is_empty() {
            return Err(anyhow::anyhow!("UPLOAD_DIR must not be empty"));
        }

        if self.base.cors_origins.is_empty() {
            return Err(anyhow::anyhow!("CORS_ORIGINS must list at least one origin"));
        }

        if self.base.request_timeout_secs == 0 {
            return Err(anyhow::anyhow!("REQUEST_TIMEOUT_SECS must be greater than 0"));
        }

        if self.base.http_concurrency_limit == 0 {
            return Err(anyhow::anyhow!("HTTP_CONCURRENCY_LIMIT must be greater than 0"));
        }

        self.upload_body_limit_bytes()?;

        Ok(())
    }

    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        let env = self.base.environment.to_lowercase();
        env == "production" || env == "prod"
    }

    // Convenience getters for common fields
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.base.server_host, self.base.server_port)
    }

    pub fn environment(&self) -> &str {
        &self.base.environment
    }

    pub fn cors_origins(&self) -> &[String] {
        &self.base.cors_origins
    }

    pub fn log_format(&self) -> LogFormat {
        self.base.log_format
    }

    pub fn request_timeout_secs(&self) -> u64 {
        self.base.request_timeout_secs
    }

    pub fn http_concurrency_limit(&self) -> usize {
        self.base.http_concurrency_limit
    }

    pub fn upload_dir(&self) -> &PathBuf {
        &self.uploads.upload_dir
    }

    pub fn max_upload_size_bytes(&self) -> usize {
        self.uploads.max_upload_size_bytes
    }

    /// Request body ceiling for the upload routes: one maximal file plus multipart framing.
    pub fn upload_body_limit_bytes(&self) -> Result<usize, anyhow::Error> {
        self.uploads
            .max_upload_size_bytes
            .checked_add(MULTIPART_OVERHEAD_BYTES)
            .ok_or_else(|| anyhow::anyhow!("MAX_UPLOAD_SIZE_MB leaves no room for the request body"))
    }
}

/// Parse an optional variable, rejecting values that are present but malformed.
fn parse_var<T, F>(lookup: &F, key: &str) -> Result<Option<T>, anyhow::Error>
where
    T: FromStr,
    T::Err: Display,
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|raw| {
            raw.trim()
                .parse::<T>()
                .map_err(|e| anyhow::anyhow!("Invalid {} '{}': {}", key, raw, e))
        })
        .transpose()
}
