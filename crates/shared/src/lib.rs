//! Shared library for the anime portal.
//!
//! This crate provides common functionality used by the portal crates:
//! - Configuration management
//! - Normalized catalog models
//! - Site output path utilities
//! - Logging infrastructure

pub mod config;
pub mod logging;
pub mod models;
pub mod paths;

// Re-export commonly used types
pub use config::Config;
pub use logging::LogConfig;
pub use models::*;
pub use paths::{Page, SitePaths};

/// Common result type using anyhow::Error
pub type Result<T> = anyhow::Result<T>;
