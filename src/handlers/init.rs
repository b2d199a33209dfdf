use crate::{
    analyzer::discover_manifests,
    config::types::{Config, OutputFormat},
    error::DeployInitError,
    initializer::{Kubectl, generate_pipeline_config},
    schema::PipelineConfig,
};
use std::path::PathBuf;

pub fn handle_init(
    path: PathBuf,
    manifests: Vec<PathBuf>,
    output: Option<PathBuf>,
    force: bool,
    json: bool,
    config: &Config,
) -> crate::Result<()> {
    if let Some(output) = &output {
        if output.exists() && !force {
            return Err(DeployInitError::OutputExists {
                path: output.clone(),
            });
        }
    }

    let manifests = if manifests.is_empty() {
        log::info!("Scanning {} for Kubernetes manifests", path.display());
        let found = discover_manifests(&path, &config.discovery)?;
        if found.is_empty() {
            return Err(DeployInitError::NoManifests(path));
        }
        found
            .into_iter()
            .map(|m| super::utils::clean_path(&m))
            .collect()
    } else {
        manifests
    };

    let kubectl = Kubectl::new(manifests)?;
    let pipeline = generate_pipeline_config(&kubectl, &config.pipeline);

    let format = if json {
        OutputFormat::Json
    } else {
        config.output.format
    };
    let rendered = render(&pipeline, format)?;

    match output {
        Some(output) => {
            std::fs::write(&output, rendered)?;
            println!(
                "✅ Wrote pipeline configuration with {} manifest(s) and {} artifact(s) to {}",
                kubectl.manifests().len(),
                pipeline.build.artifacts.len(),
                output.display()
            );
        }
        None => print!("{}", rendered),
    }

    Ok(())
}

fn render(pipeline: &PipelineConfig, format: OutputFormat) -> crate::Result<String> {
    match format {
        OutputFormat::Yaml => Ok(serde_yaml::to_string(pipeline)?),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(pipeline)? + "\n"),
    }
}
