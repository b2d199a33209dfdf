//! Container image extraction from Kubernetes manifests.
//!
//! Unlike detection, extraction reports every failure. By the time a file
//! reaches this point it is expected to be a manifest, so a document that
//! does not decode is surfaced to the user.

use super::document::{ManifestDocument, ManifestFormat};
use super::parser::{documents, read_manifest};
use crate::error::ManifestError;
use std::path::Path;

/// Collect every image referenced in the Kubernetes objects of a file.
///
/// `.json` files hold exactly one document; anything else is read as a YAML
/// stream. Images are returned in document order, then in depth-first order
/// within each document. No deduplication is performed.
pub fn parse_images_from_kubernetes_yaml(path: &Path) -> Result<Vec<String>, ManifestError> {
    let content = read_manifest(path)?;
    let format = ManifestFormat::from_path(path).unwrap_or(ManifestFormat::Yaml);
    let images = parse_images_from_str(&content, format)?;
    log::debug!("Found {} image(s) in {}", images.len(), path.display());
    Ok(images)
}

/// Same as [`parse_images_from_kubernetes_yaml`] over in-memory content.
pub fn parse_images_from_str(
    content: &str,
    format: ManifestFormat,
) -> Result<Vec<String>, ManifestError> {
    let mut images = Vec::new();
    for doc in documents(content, format) {
        let doc = doc?;
        validate_object(&doc)?;
        log::trace!(
            "Walking {} {} at line {}",
            doc.api_version().unwrap_or_default(),
            doc.kind().unwrap_or_default(),
            doc.line
        );
        images.extend(doc.images());
    }
    Ok(images)
}

/// Reject documents a Kubernetes decoder would not accept as an object.
fn validate_object(doc: &ManifestDocument) -> Result<(), ManifestError> {
    let invalid = |message: &str| ManifestError::InvalidObject {
        line: doc.line,
        message: message.to_string(),
    };

    if !doc.value.is_mapping() {
        return Err(invalid("document is not a mapping"));
    }
    if doc.api_version().is_none() {
        return Err(invalid("'apiVersion' is missing"));
    }
    if doc.kind().is_none() {
        return Err(invalid("'kind' is missing"));
    }
    Ok(())
}
