use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub discovery: DiscoveryConfig,
    pub pipeline: PipelineSettings,
    pub output: OutputConfig,
}

/// Manifest discovery configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscoveryConfig {
    /// Glob patterns, relative to the project root, that are never scanned
    pub ignore_patterns: Vec<String>,
    /// Maximum directory depth to descend into
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_depth: Option<usize>,
    pub follow_links: bool,
}

/// Generated pipeline configuration settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineSettings {
    /// `apiVersion` written into the generated configuration
    pub api_version: String,
}

/// Output configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Yaml,
    Json,
}

pub const DEFAULT_PIPELINE_API_VERSION: &str = "deploy-init/v1";

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            ignore_patterns: vec![
                "**/node_modules".to_string(),
                "**/target".to_string(),
                "**/vendor".to_string(),
            ],
            max_depth: None,
            follow_links: false,
        }
    }
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self {
            api_version: DEFAULT_PIPELINE_API_VERSION.to_string(),
        }
    }
}
