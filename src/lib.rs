//! caravel: deploy services and jobs into application environments from
//! workspace manifests.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

use app::commands::{DeployCommand, EnvCommandFactory, WorkloadCommandFactory};
use services::{
    DialoguerPrompter, DialoguerSelector, EnvDeployCommand, EnvInitCommand, FilesystemConfigStore,
    FilesystemWorkspace, WorkloadDeployCommand, WorkloadInitializer,
};

pub use app::commands::DeployRequest;
pub use domain::{AppError, TriState};

/// Options for one deploy invocation, as wired from CLI flags.
///
/// `None` flags mean "decide interactively or infer"; `Some` flags were
/// forced by the user and suppress the corresponding prompt.
#[derive(Debug, Clone, Default)]
pub struct DeployOptions {
    pub app_name: Option<String>,
    pub env_name: Option<String>,
    pub workload_names: Vec<String>,
    pub init_wkld: Option<bool>,
    pub init_env: Option<bool>,
    pub deploy_env: Option<bool>,
}

/// Deploy one or more workloads, initializing the environment and the
/// workloads first when needed.
pub fn deploy(options: DeployOptions) -> Result<(), AppError> {
    let workspace = FilesystemWorkspace::current()?;
    if !workspace.exists() {
        return Err(AppError::WorkspaceNotFound);
    }
    let store = FilesystemConfigStore::from_env()?;

    let app_name = match options.app_name {
        Some(name) if !name.is_empty() => name,
        _ => workspace.summary()?.application,
    };

    let selector = DialoguerSelector::new(&workspace, &store);
    let prompter = DialoguerPrompter::new();
    let workload_adder = WorkloadInitializer::new(&store);

    let request = DeployRequest {
        app_name,
        env_name: options.env_name.unwrap_or_default(),
        workload_names: options.workload_names,
        init_wkld: options.init_wkld.into(),
        init_env: options.init_env.into(),
        deploy_env: options.deploy_env.into(),
    };

    let store_ref = &store;
    let workspace_ref = &workspace;
    let new_env_init_cmd: EnvCommandFactory<'_> = Box::new(move |req: &DeployRequest| {
        Ok(Box::new(EnvInitCommand::new(store_ref, &req.app_name, &req.env_name)))
    });
    let new_env_deploy_cmd: EnvCommandFactory<'_> = Box::new(move |req: &DeployRequest| {
        Ok(Box::new(EnvDeployCommand::new(store_ref, workspace_ref, &req.app_name, &req.env_name)))
    });
    let new_workload_deploy_cmd: WorkloadCommandFactory<'_> =
        Box::new(move |req: &DeployRequest, name: &str, workload_type: &str| {
            Ok(Box::new(WorkloadDeployCommand::new(
                store_ref,
                workspace_ref,
                &req.app_name,
                &req.env_name,
                name,
                workload_type,
            )))
        });

    let mut cmd = DeployCommand::new(
        request,
        &store,
        &workspace,
        &selector,
        &prompter,
        &workload_adder,
        new_env_init_cmd,
        new_env_deploy_cmd,
        new_workload_deploy_cmd,
    );
    cmd.run()
}
