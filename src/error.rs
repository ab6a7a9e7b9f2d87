use thiserror::Error;

// Main Application Error Type

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration Error: {0}")]
    Config(#[from] ConfigError),
    #[error("Pipeline Error: {0}")]
    Pipeline(#[from] PipelineError),
    #[error("I/O Error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON Error: {0}")]
    Json(#[from] serde_json::Error),
}

// Configuration Error Type
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

// Pipeline Error Type
#[derive(Error, Debug, PartialEq)]
pub enum PipelineError {
    #[error("Missing required input: {0}")]
    MissingInput(&'static str),
    #[error("Invalid pipeline configuration: {0}")]
    InvalidConfiguration(String),
    #[error("Failed to encode exports: {0}")]
    Export(String),
}
