//! Configuration module

mod settings;

pub use settings::{
    AssetsConfig, CorsConfig, LoggingConfig, ServerConfig, Settings, CONFIG_PATH_ENV,
    DEFAULT_CONFIG_PATH,
};
