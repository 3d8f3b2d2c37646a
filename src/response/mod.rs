//! Response helpers

pub mod url;

pub use url::AssetUrls;
