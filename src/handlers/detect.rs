use crate::{analyzer::discover_manifests, config::types::Config};
use super::utils::clean_path;
use colored::Colorize;
use std::path::PathBuf;

pub fn handle_detect(path: PathBuf, json: bool, config: &Config) -> crate::Result<()> {
    let manifests: Vec<PathBuf> = discover_manifests(&path, &config.discovery)?
        .iter()
        .map(|m| clean_path(m))
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&manifests)?);
        return Ok(());
    }

    if manifests.is_empty() {
        println!("⚠️  No Kubernetes manifests found in {}", path.display());
        return Ok(());
    }

    println!(
        "🔍 Found {} Kubernetes manifest(s) in {}",
        manifests.len(),
        path.display()
    );
    for manifest in &manifests {
        println!("  {} {}", "✓".green(), manifest.display());
    }

    Ok(())
}
