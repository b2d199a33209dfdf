//! kubectl deployer: applies the project's raw manifests as they are.

use super::DeployInitializer;
use crate::analyzer::manifest::parse_images_from_kubernetes_yaml;
use crate::error::Result;
use crate::schema::{DeployConfig, DeployType, KubectlDeploy};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub struct Kubectl {
    configs: Vec<PathBuf>,
    images: Vec<String>,
}

impl Kubectl {
    /// Build a kubectl deployer from manifest paths.
    ///
    /// Paths are kept verbatim and in order. Images are collected from every
    /// path; the first file that cannot be decoded fails the whole call.
    pub fn new(configs: Vec<PathBuf>) -> Result<Self> {
        let mut images = Vec::new();
        for path in &configs {
            let found = parse_images_from_kubernetes_yaml(path)?;
            log::debug!("{}: {:?}", path.display(), found);
            images.extend(found);
        }
        Ok(Self { configs, images })
    }

    pub fn manifests(&self) -> &[PathBuf] {
        &self.configs
    }
}

impl DeployInitializer for Kubectl {
    fn generate_deploy_config(&self) -> DeployConfig {
        DeployConfig {
            deploy_type: DeployType {
                kubectl_deploy: Some(KubectlDeploy {
                    manifests: self.configs.clone(),
                }),
            },
        }
    }

    fn images(&self) -> &[String] {
        &self.images
    }
}
