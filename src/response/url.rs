//! Public URLs for files served from the image directory

use std::path::Path;

/// Builds links to static assets under a public base URL
#[derive(Debug, Clone)]
pub struct AssetUrls {
    base_url: String,
}

impl AssetUrls {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }

    /// Public URL of an asset, keyed by its file name
    pub fn url_for(&self, file: &str) -> String {
        let filename = Path::new(file)
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(file);

        format!("{}/{}", self.base_url, filename)
    }
}
