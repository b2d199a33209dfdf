//! Static analysis of project files.

pub mod manifest;

pub use manifest::{
    discover_manifests, is_kubernetes_manifest, parse_images_from_kubernetes_yaml,
    ManifestDocument, ManifestFormat,
};
