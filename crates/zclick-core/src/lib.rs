//! Domain types and configuration for zclick.

use thiserror::Error;

pub mod app_config;
pub mod config;
pub mod keyword;

pub use app_config::AppConfig;
pub use config::load_app_config;
pub use keyword::{FilterThresholds, KeywordRecord, ScoredKeyword};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
