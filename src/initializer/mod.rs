//! Generation of pipeline configuration from an existing project.

pub mod kubectl;
pub mod pipeline;

use crate::schema::DeployConfig;

pub use kubectl::Kubectl;
pub use pipeline::generate_pipeline_config;

/// A deployer that can describe itself as pipeline configuration.
pub trait DeployInitializer {
    /// Deploy section for the generated configuration.
    fn generate_deploy_config(&self) -> DeployConfig;

    /// Images the deployed resources reference, in discovery order.
    fn images(&self) -> &[String];
}
