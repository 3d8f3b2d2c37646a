//! HTTP middleware

pub mod cors;

pub use cors::{cors_layer, origin_guard, AllowedOrigins};
