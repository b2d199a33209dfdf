//! Discovery of Kubernetes manifests inside a project tree.

use super::detect::{has_kubernetes_file_extension, is_kubernetes_manifest};
use crate::config::types::DiscoveryConfig;
use crate::error::{ConfigError, DeployInitError, Result};
use glob::Pattern;
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Find every Kubernetes manifest below `root`, sorted by path.
///
/// Hidden directories and paths matching `config.ignore_patterns` (relative
/// to `root`) are skipped. Candidates are classified in parallel.
pub fn discover_manifests(root: &Path, config: &DiscoveryConfig) -> Result<Vec<PathBuf>> {
    if !root.exists() {
        return Err(DeployInitError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("{} does not exist", root.display()),
        )));
    }

    let ignore = compile_patterns(&config.ignore_patterns)?;

    let mut walker = WalkDir::new(root).follow_links(config.follow_links);
    if let Some(depth) = config.max_depth {
        walker = walker.max_depth(depth);
    }

    let candidates: Vec<PathBuf> = walker
        .into_iter()
        .filter_entry(|e| !is_hidden_dir(e, root) && !is_ignored(e.path(), root, &ignore))
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                log::warn!("Skipping unreadable entry: {e}");
                None
            }
        })
        .filter(|e| e.file_type().is_file() && has_kubernetes_file_extension(e.path()))
        .map(DirEntry::into_path)
        .collect();

    log::debug!(
        "Classifying {} candidate file(s) under {}",
        candidates.len(),
        root.display()
    );

    let mut manifests: Vec<PathBuf> = candidates
        .into_par_iter()
        .filter(|path| is_kubernetes_manifest(path))
        .collect();
    manifests.sort();

    Ok(manifests)
}

fn compile_patterns(patterns: &[String]) -> Result<Vec<Pattern>> {
    patterns
        .iter()
        .map(|p| {
            Pattern::new(p).map_err(|e| {
                DeployInitError::from(ConfigError::InvalidPattern {
                    pattern: p.clone(),
                    message: e.to_string(),
                })
            })
        })
        .collect()
}

fn is_hidden_dir(entry: &DirEntry, root: &Path) -> bool {
    entry.file_type().is_dir()
        && entry.path() != root
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.starts_with('.'))
}

fn is_ignored(path: &Path, root: &Path, patterns: &[Pattern]) -> bool {
    let Ok(relative) = path.strip_prefix(root) else {
        return false;
    };
    if relative.as_os_str().is_empty() {
        return false;
    }
    patterns.iter().any(|p| p.matches_path(relative))
}
