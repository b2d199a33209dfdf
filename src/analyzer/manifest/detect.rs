//! Best-effort detection of Kubernetes manifests.
//!
//! Detection is used as a filter over whole project trees, so it never fails:
//! unreadable files, malformed syntax and unexpected shapes are all reported
//! as "not a manifest".

use super::document::ManifestFormat;
use super::parser::{documents, read_manifest};
use std::path::Path;

/// Whether the path carries one of the manifest extensions (`.yaml`, `.yml`,
/// `.json`, case-sensitive).
pub fn has_kubernetes_file_extension(path: &Path) -> bool {
    ManifestFormat::from_path(path).is_some()
}

/// Whether `path` is a Kubernetes manifest: a YAML or JSON file in which
/// every non-empty document parses and is a mapping with a non-empty
/// `apiVersion` and `kind`. A file with no documents is not a manifest.
pub fn is_kubernetes_manifest(path: &Path) -> bool {
    let Some(format) = ManifestFormat::from_path(path) else {
        return false;
    };

    let content = match read_manifest(path) {
        Ok(content) => content,
        Err(e) => {
            log::trace!("Not a manifest: {e}");
            return false;
        }
    };

    let mut found = false;
    for doc in documents(&content, format) {
        match doc {
            Ok(doc) if doc.is_kubernetes_object() => found = true,
            Ok(doc) => {
                log::trace!(
                    "Not a manifest, {} has a non-object document at line {}",
                    path.display(),
                    doc.line
                );
                return false;
            }
            Err(e) => {
                log::trace!("Not a manifest, {} does not parse: {e}", path.display());
                return false;
            }
        }
    }
    found
}
