//! Error types for deploy-init.
//!
//! Manifest parsing has its own error type because the image extractor reports
//! failures to its caller while the classifier never does.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error for every fallible operation in the crate.
#[derive(Debug, Error)]
pub enum DeployInitError {
    #[error("Manifest error: {0}")]
    Manifest(#[from] ManifestError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize pipeline configuration: {0}")]
    Serialization(String),

    #[error("{} already exists, use --force to overwrite it", path.display())]
    OutputExists { path: PathBuf },

    #[error("No Kubernetes manifests found in {}", .0.display())]
    NoManifests(PathBuf),
}

/// Errors raised while reading or decoding a manifest file.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// The file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A document is not valid YAML or JSON.
    #[error("syntax error in document starting at line {line}: {message}")]
    Syntax { line: u32, message: String },

    /// A document parsed but does not describe a Kubernetes object.
    #[error("invalid Kubernetes object at line {line}: {message}")]
    InvalidObject { line: u32, message: String },
}

/// Errors raised while loading the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read configuration: {0}")]
    ReadFailed(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    ParsingFailed(String),

    #[error("Invalid ignore pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },
}

impl From<serde_yaml::Error> for DeployInitError {
    fn from(err: serde_yaml::Error) -> Self {
        DeployInitError::Serialization(err.to_string())
    }
}

impl From<serde_json::Error> for DeployInitError {
    fn from(err: serde_json::Error) -> Self {
        DeployInitError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, DeployInitError>;
