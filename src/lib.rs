//! # deploy-init
//!
//! A Rust-based command-line application that inspects the Kubernetes manifests
//! already present in a project and generates a deployment pipeline
//! configuration from them.
//!
//! ## Features
//!
//! - **Manifest Detection**: Recognizes YAML and JSON files that describe Kubernetes objects
//! - **Image Extraction**: Collects every container image referenced by a manifest,
//!   including inside custom resources
//! - **Pipeline Generation**: Builds a configuration that builds those images and
//!   deploys the manifests with kubectl
//!
//! ## Example
//!
//! ```rust,no_run
//! use deploy_init::{discover_manifests, generate_pipeline_config, Kubectl};
//! use deploy_init::config::types::Config;
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::default();
//! let manifests = discover_manifests(Path::new("./my-project"), &config.discovery)?;
//! let kubectl = Kubectl::new(manifests)?;
//! let pipeline = generate_pipeline_config(&kubectl, &config.pipeline);
//! println!("{}", serde_yaml::to_string(&pipeline)?);
//! # Ok(())
//! # }
//! ```

pub mod analyzer;
pub mod cli;
pub mod config;
pub mod error;
pub mod handlers;
pub mod initializer;
pub mod schema;

// Re-export commonly used types and functions
pub use analyzer::{discover_manifests, is_kubernetes_manifest, parse_images_from_kubernetes_yaml};
pub use error::{DeployInitError, ManifestError, Result};
pub use initializer::{DeployInitializer, Kubectl, generate_pipeline_config};
use cli::Commands;
use config::types::Config;

/// The current version of the CLI tool
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn run_command(command: Commands, json: bool, config: &Config) -> Result<()> {
    match command {
        Commands::Detect { path } => handlers::handle_detect(path, json, config),
        Commands::Images { files } => handlers::handle_images(files, json),
        Commands::Init {
            path,
            manifests,
            output,
            force,
        } => handlers::handle_init(path, manifests, output, force, json, config),
    }
}
