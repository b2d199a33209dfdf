//! Pipeline configuration written by `deploy-init init`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Top-level generated pipeline configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineConfig {
    pub api_version: String,
    pub kind: String,
    pub build: BuildConfig,
    pub deploy: DeployConfig,
}

/// Images the pipeline builds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BuildConfig {
    #[serde(default)]
    pub artifacts: Vec<Artifact>,
}

/// A single image to build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artifact {
    pub image: String,
}

/// How the pipeline deploys.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeployConfig {
    #[serde(flatten)]
    pub deploy_type: DeployType,
}

/// Deployer selection. At most one field is expected to be set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeployType {
    #[serde(rename = "kubectl", skip_serializing_if = "Option::is_none")]
    pub kubectl_deploy: Option<KubectlDeploy>,
}

/// Deploys by applying raw manifests with kubectl.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KubectlDeploy {
    #[serde(default)]
    pub manifests: Vec<PathBuf>,
}

pub const PIPELINE_KIND: &str = "Config";
