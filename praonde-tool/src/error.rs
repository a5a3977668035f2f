use praonde_core::{EventId, ParseFilterError, SeedError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid seed file: {0}")]
    SeedJson(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid seed: {0}")]
    Seed(#[from] SeedError),

    #[error("Invalid filter: {0}")]
    Filter(#[from] ParseFilterError),

    #[error("Event not found: {0}")]
    EventNotFound(EventId),

    #[error("Could not open link: {0}")]
    Opener(String),

    #[error("Logging setup failed: {0}")]
    Logging(String),
}
