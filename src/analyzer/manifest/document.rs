//! Generic, schema-free representation of a parsed manifest document.

use serde_yaml::Value;
use std::path::Path;

/// Key under which container images are referenced.
pub const IMAGE_KEY: &str = "image";

/// File formats a manifest can be written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestFormat {
    Yaml,
    Json,
}

impl ManifestFormat {
    /// Detect the format from the file extension. Matching is case-sensitive,
    /// so `deployment.YAML` is not recognized.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => Some(ManifestFormat::Yaml),
            Some("json") => Some(ManifestFormat::Json),
            _ => None,
        }
    }
}

/// One YAML or JSON document, kept as an untyped tree.
#[derive(Debug, Clone, PartialEq)]
pub struct ManifestDocument {
    /// Parsed document tree.
    pub value: Value,
    /// 1-based line at which the document starts in its source.
    pub line: u32,
}

impl ManifestDocument {
    pub fn new(value: Value, line: u32) -> Self {
        Self { value, line }
    }

    pub fn api_version(&self) -> Option<&str> {
        non_empty_str(&self.value, "apiVersion")
    }

    pub fn kind(&self) -> Option<&str> {
        non_empty_str(&self.value, "kind")
    }

    /// True when the top level is a mapping carrying a non-empty `apiVersion`
    /// and `kind`.
    pub fn is_kubernetes_object(&self) -> bool {
        self.value.is_mapping() && self.api_version().is_some() && self.kind().is_some()
    }

    /// Every string bound to an `image` key, depth-first in document order.
    pub fn images(&self) -> Vec<String> {
        let mut images = Vec::new();
        collect_images(&self.value, &mut images);
        images
    }
}

fn non_empty_str<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    value
        .get(key)?
        .as_str()
        .filter(|s| !s.is_empty())
}

/// Walk the tree and push every `image: <string>` value into `images`.
///
/// Nothing here knows about resource kinds: a container list under
/// `spec.template.spec` is found the same way as one inside a CRD.
pub fn collect_images(value: &Value, images: &mut Vec<String>) {
    match value {
        Value::Mapping(mapping) => {
            for (key, child) in mapping {
                if key.as_str() == Some(IMAGE_KEY) {
                    if let Some(image) = child.as_str() {
                        images.push(image.to_string());
                    }
                }
                collect_images(child, images);
            }
        }
        Value::Sequence(items) => {
            for item in items {
                collect_images(item, images);
            }
        }
        Value::Tagged(tagged) => collect_images(&tagged.value, images),
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => {}
    }
}
