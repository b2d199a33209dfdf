//! Kubernetes manifest detection and image extraction.
//!
//! Manifests are handled as untyped document trees rather than typed
//! resources, so custom resources are understood as well as built-in kinds.
//!
//! # Example
//!
//! ```rust,no_run
//! use deploy_init::analyzer::manifest::{is_kubernetes_manifest, parse_images_from_kubernetes_yaml};
//! use std::path::Path;
//!
//! let path = Path::new("k8s/deployment.yaml");
//! if is_kubernetes_manifest(path) {
//!     for image in parse_images_from_kubernetes_yaml(path).unwrap_or_default() {
//!         println!("{image}");
//!     }
//! }
//! ```

pub mod detect;
pub mod discover;
pub mod document;
pub mod images;
pub mod parser;

pub use detect::{has_kubernetes_file_extension, is_kubernetes_manifest};
pub use discover::discover_manifests;
pub use document::{IMAGE_KEY, ManifestDocument, ManifestFormat};
pub use images::{parse_images_from_kubernetes_yaml, parse_images_from_str};
pub use parser::{parse_manifest_file, parse_manifest_str};
