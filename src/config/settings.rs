//! Application settings and configuration management

use crate::error::{AppError, Result};
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default location of the optional settings file
pub const DEFAULT_CONFIG_PATH: &str = "config/server.yaml";

/// Environment variable that points at an alternative settings file
pub const CONFIG_PATH_ENV: &str = "PORTFOLIO_CONFIG";

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub server: ServerConfig,
    pub cors: CorsConfig,
    pub assets: AssetsConfig,
    pub logging: LoggingConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Largest accepted request body
    #[serde(default = "default_body_limit")]
    pub body_limit_bytes: usize,
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_body_limit() -> usize {
    100 * 1024
}

fn default_request_timeout() -> u64 {
    30
}

/// Cross-origin configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CorsConfig {
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: Vec<String>,
}

fn default_allowed_origins() -> Vec<String> {
    vec![
        "http://localhost:5173".to_string(),
        "https://maloji-portfolio-frontend.vercel.app".to_string(),
        "https://maloji-portfolio-backend.onrender.com".to_string(),
    ]
}

/// Static image assets
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AssetsConfig {
    /// Directory served as-is
    #[serde(default = "default_images_dir")]
    pub images_dir: String,
    /// URL prefix the directory is mounted under
    #[serde(default = "default_mount_path")]
    pub mount_path: String,
    /// Public base URL used when linking images from the profile
    #[serde(default = "default_public_url")]
    pub public_url: String,
}

fn default_images_dir() -> String {
    "public/images".to_string()
}

fn default_mount_path() -> String {
    "/images".to_string()
}

fn default_public_url() -> String {
    "https://maloji-portfolio-backend.onrender.com/images".to_string()
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

impl Settings {
    /// Load settings from the configured file, the environment and `PORT`
    pub fn load() -> Result<Self> {
        let path =
            std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        Self::load_from_path(path)?.with_port_override(std::env::var("PORT").ok())
    }

    /// Load settings from a specific file (YAML or TOML) plus `PORTFOLIO__*` overrides
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let format = if path.extension().map_or(false, |ext| ext == "yaml" || ext == "yml") {
            FileFormat::Yaml
        } else {
            FileFormat::Toml
        };

        let mut config_builder = Config::builder()
            .set_default("server.host", default_host())?
            .set_default("server.port", i64::from(default_port()))?
            .set_default("server.body_limit_bytes", default_body_limit() as i64)?
            .set_default("server.request_timeout_secs", default_request_timeout() as i64)?
            .set_default("cors.allowed_origins", default_allowed_origins())?
            .set_default("assets.images_dir", default_images_dir())?
            .set_default("assets.mount_path", default_mount_path())?
            .set_default("assets.public_url", default_public_url())?
            .set_default("logging.level", default_log_level())?
            .set_default("logging.format", default_log_format())?;

        if path.exists() {
            config_builder = config_builder.add_source(File::from(path).format(format));
        }

        config_builder = config_builder.add_source(
            Environment::with_prefix("PORTFOLIO")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("cors.allowed_origins")
                .try_parsing(true),
        );

        let config = config_builder.build()?;
        let settings: Settings = config.try_deserialize()?;
        Ok(settings)
    }

    /// Apply a raw `PORT` value on top of the loaded settings
    pub fn with_port_override(mut self, port: Option<String>) -> Result<Self> {
        if let Some(raw) = port {
            let raw = raw.trim();
            if !raw.is_empty() {
                self.server.port = raw.parse().map_err(|_| {
                    AppError::Config(config::ConfigError::Message(format!(
                        "PORT must be a valid port number, got '{}'",
                        raw
                    )))
                })?;
            }
        }
        Ok(self)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(config_error("Server port cannot be 0"));
        }

        if self.server.body_limit_bytes == 0 {
            return Err(config_error("Body limit cannot be 0"));
        }

        for origin in &self.cors.allowed_origins {
            let origin = origin.trim();
            if origin.is_empty() {
                return Err(config_error("Allowed origin cannot be empty"));
            }
            if !(origin.starts_with("http://") || origin.starts_with("https://")) {
                return Err(config_error(&format!(
                    "Allowed origin '{}' must start with http:// or https://",
                    origin
                )));
            }
        }

        if self.assets.images_dir.trim().is_empty() {
            return Err(config_error("Images directory cannot be empty"));
        }

        let mount_path = &self.assets.mount_path;
        if !mount_path.starts_with('/') || mount_path.ends_with('/') {
            return Err(config_error(&format!(
                "Asset mount path '{}' must start and must not end with '/'",
                self.assets.mount_path
            )));
        }

        match self.logging.format.as_str() {
            "json" | "pretty" => {}
            other => {
                return Err(config_error(&format!("Unknown log format '{}'", other)));
            }
        }

        Ok(())
    }

    /// Socket address string the server binds to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

fn config_error(message: &str) -> AppError {
    AppError::Config(config::ConfigError::Message(message.to_string()))
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: default_host(),
                port: default_port(),
                body_limit_bytes: default_body_limit(),
                request_timeout_secs: default_request_timeout(),
            },
            cors: CorsConfig {
                allowed_origins: default_allowed_origins(),
            },
            assets: AssetsConfig {
                images_dir: default_images_dir(),
                mount_path: default_mount_path(),
                public_url: default_public_url(),
            },
            logging: LoggingConfig {
                level: default_log_level(),
                format: default_log_format(),
            },
        }
    }
}
