use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "deploy-init")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Generate a deployment pipeline from your Kubernetes manifests")]
#[command(long_about = "Finds the Kubernetes manifests in a project, collects the container images they reference and generates a pipeline configuration that builds those images and deploys the manifests with kubectl.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output in JSON format where applicable
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the Kubernetes manifests found in a project
    Detect {
        /// Path to the project directory to scan
        #[arg(value_name = "PROJECT_PATH", default_value = ".")]
        path: PathBuf,
    },

    /// Print the container images referenced by manifest files
    Images {
        /// Manifest files to read
        #[arg(value_name = "FILE", required = true)]
        files: Vec<PathBuf>,
    },

    /// Generate a pipeline configuration for a project
    Init {
        /// Path to the project directory to scan
        #[arg(value_name = "PROJECT_PATH", default_value = ".")]
        path: PathBuf,

        /// Use these manifests instead of scanning the project
        #[arg(short, long = "manifest", value_name = "FILE")]
        manifests: Vec<PathBuf>,

        /// Write the configuration to a file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Overwrite the output file if it exists
        #[arg(long)]
        force: bool,
    },
}

impl Cli {
    /// Initialize logging based on verbosity level
    pub fn init_logging(&self) {
        if self.quiet {
            return;
        }

        let level = match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        };

        env_logger::Builder::from_default_env()
            .filter_level(level)
            .init();
    }
}
