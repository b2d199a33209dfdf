use super::DeployInitializer;
use crate::config::types::PipelineSettings;
use crate::schema::{Artifact, BuildConfig, PIPELINE_KIND, PipelineConfig};
use std::collections::HashSet;

/// Assemble the full pipeline configuration for a deployer.
///
/// The deployer reports every image reference it found; the build section
/// lists each distinct image once, in first-seen order.
pub fn generate_pipeline_config(
    initializer: &dyn DeployInitializer,
    settings: &PipelineSettings,
) -> PipelineConfig {
    let mut seen = HashSet::new();
    let artifacts = initializer
        .images()
        .iter()
        .filter(|image| seen.insert(image.as_str()))
        .map(|image| Artifact {
            image: image.clone(),
        })
        .collect();

    PipelineConfig {
        api_version: settings.api_version.clone(),
        kind: PIPELINE_KIND.to_string(),
        build: BuildConfig { artifacts },
        deploy: initializer.generate_deploy_config(),
    }
}
