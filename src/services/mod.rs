//! Concrete adapters behind the collaborator ports.

pub mod config_store_filesystem;
mod deploy_commands;
mod env_commands;
mod prompter_dialoguer;
mod selector_dialoguer;
mod workload_init;
pub mod workspace_filesystem;

pub use config_store_filesystem::{DeploymentRecord, FilesystemConfigStore, STORE_DIR_ENV};
pub use deploy_commands::WorkloadDeployCommand;
pub use env_commands::{EnvDeployCommand, EnvInitCommand};
pub use prompter_dialoguer::DialoguerPrompter;
pub use selector_dialoguer::DialoguerSelector;
pub use workload_init::WorkloadInitializer;
pub use workspace_filesystem::{FilesystemWorkspace, WorkspaceSummary};
