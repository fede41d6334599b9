use std::io;

use thiserror::Error;

/// Library-wide error type for caravel operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// No caravel/ workspace found in the current directory.
    #[error("No caravel/ workspace found in current directory")]
    WorkspaceNotFound,

    /// Interactive workload selection failed.
    #[error("select service or job: {0}")]
    SelectWorkload(String),

    /// Interactive environment selection failed.
    #[error("get environment name: {0}")]
    SelectEnvironment(String),

    /// Listing locally declared environments during resolution failed.
    #[error("get workspace environments: {0}")]
    ListWorkspaceEnvironmentsForSelection(String),

    /// Listing registered environments during resolution failed.
    #[error("get initialized environments: {0}")]
    ListStoreEnvironments(String),

    /// Environment lookup in the store failed with something other than not-found.
    #[error("get environment from config store: {0}")]
    GetEnvironment(String),

    /// Listing workspace environments during the existence check failed.
    #[error("list environments in workspace: {0}")]
    ListWorkspaceEnvironments(String),

    /// The environment is declared nowhere; refusing to invent it.
    #[error("environment {0:?} does not exist in the workspace")]
    EnvironmentUnresolvable(String),

    /// Environment init was declined or forced off.
    #[error("env {env} does not exist in app {app}")]
    EnvironmentNotInApp { env: String, app: String },

    /// Environment was initialized but the user forced deployment off.
    #[error("environment {0} was initialized but has not been deployed")]
    EnvironmentNotDeployed(String),

    /// Confirmation prompt for environment init failed.
    #[error("confirm env init: {0}")]
    ConfirmEnvInit(String),

    /// Listing registered workloads failed.
    #[error("retrieve workloads: {0}")]
    ListWorkloads(String),

    /// Workload manifest could not be read from the workspace.
    #[error("read manifest for workload {name}: {details}")]
    ReadManifest { name: String, details: String },

    /// Workload manifest is missing or has an unreadable type header.
    #[error("get workload type from manifest for workload {name}: {details}")]
    ManifestWorkloadType { name: String, details: String },

    /// Declared type is outside the closed set of known workload types.
    #[error("unrecognized workload type {value:?} in manifest for workload {name}")]
    UnrecognizedWorkloadType { value: String, name: String },

    /// Confirmation prompt for workload init failed.
    #[error("confirm initialize workload: {0}")]
    ConfirmWorkloadInit(String),

    /// Workload is uninitialized and the user forced initialization off.
    #[error("workload {0} is uninitialized but --init-wkld=false was specified")]
    WorkloadNotInitialized(String),

    /// Registering the workload under the application failed.
    #[error("add workload to app: {0}")]
    AddWorkload(String),

    /// Workload record lookup failed while building the deploy command.
    #[error("retrieve {name} from application {app}: {details}")]
    GetWorkload { name: String, app: String, details: String },

    /// Environment sub-command construction failed.
    #[error("load env {action} command: {details}")]
    LoadEnvCommand { action: &'static str, details: String },

    /// A stage of a workload deploy command failed.
    #[error("{stage} {family} deploy: {details}")]
    WorkloadStage { stage: &'static str, family: &'static str, details: String },
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }
}
