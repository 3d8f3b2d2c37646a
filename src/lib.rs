//! Portfolio Backend
//!
//! Serves a static portfolio profile over HTTP, accepts contact-form
//! submissions and serves the profile's images, behind an origin allow-list.

pub mod api;
pub mod config;
pub mod contact;
pub mod error;
pub mod middleware;
pub mod portfolio;
pub mod response;

pub use error::{AppError, Result};

use std::sync::Arc;

use contact::{ContactSink, TracingSink};
use middleware::AllowedOrigins;
use portfolio::Profile;
use response::AssetUrls;

/// Application state shared across all handlers; read-only after startup
pub struct AppState {
    pub settings: Arc<config::Settings>,
    pub profile: Arc<Profile>,
    pub allowed_origins: Arc<AllowedOrigins>,
    pub contact_sink: Arc<dyn ContactSink>,
}

impl AppState {
    /// Build state from settings, logging contact submissions via `tracing`
    pub fn new(settings: config::Settings) -> Self {
        Self::with_sink(settings, Arc::new(TracingSink))
    }

    pub fn with_sink(settings: config::Settings, contact_sink: Arc<dyn ContactSink>) -> Self {
        let assets = AssetUrls::new(settings.assets.public_url.as_str());
        let profile = Arc::new(Profile::maloji(&assets));
        let allowed_origins = Arc::new(AllowedOrigins::new(&settings.cors.allowed_origins));

        Self {
            settings: Arc::new(settings),
            profile,
            allowed_origins,
            contact_sink,
        }
    }
}
