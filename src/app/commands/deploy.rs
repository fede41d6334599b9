//! Deploy command: orchestrates environment and workload initialization and
//! drives the per-workload deploy sub-commands.

use std::collections::HashSet;

use crate::domain::{AppError, TriState, WorkloadFamily, is_known_workload_type};
use crate::ports::{
    ActionCommand, ConfigStorePort, EnvOption, LifecycleCommand, PrompterPort, SelectorPort,
    WorkloadAdderPort, WorkspacePort,
};

/// User intent for one deploy run.
///
/// An empty `env_name` or `workload_names` means "resolve interactively".
/// The tri-state flags distinguish "ask the user" from "obey the user".
#[derive(Debug, Clone, Default)]
pub struct DeployRequest {
    pub app_name: String,
    pub env_name: String,
    pub workload_names: Vec<String>,
    pub init_wkld: TriState,
    pub init_env: TriState,
    pub deploy_env: TriState,
}

/// Builds the environment init or deploy sub-command for the current request.
pub type EnvCommandFactory<'a> =
    Box<dyn Fn(&DeployRequest) -> Result<Box<dyn LifecycleCommand + 'a>, AppError> + 'a>;

/// Builds the deploy sub-command for one workload, given its name and
/// registered type.
pub type WorkloadCommandFactory<'a> =
    Box<dyn Fn(&DeployRequest, &str, &str) -> Result<Box<dyn ActionCommand + 'a>, AppError> + 'a>;

/// One deploy run. Owns the request for its duration; not reusable across runs.
pub struct DeployCommand<'a> {
    request: DeployRequest,

    store: &'a dyn ConfigStorePort,
    workspace: &'a dyn WorkspacePort,
    selector: &'a dyn SelectorPort,
    prompter: &'a dyn PrompterPort,
    workload_adder: &'a dyn WorkloadAdderPort,

    new_env_init_cmd: EnvCommandFactory<'a>,
    new_env_deploy_cmd: EnvCommandFactory<'a>,
    new_workload_deploy_cmd: WorkloadCommandFactory<'a>,

    // Existence facts, populated once by check_env_exists.
    env_exists_in_app: bool,
    env_exists_in_ws: bool,

    // Workspace environment list, populated at most once per run.
    ws_environments: Option<Vec<String>>,
}

impl<'a> DeployCommand<'a> {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        request: DeployRequest,
        store: &'a dyn ConfigStorePort,
        workspace: &'a dyn WorkspacePort,
        selector: &'a dyn SelectorPort,
        prompter: &'a dyn PrompterPort,
        workload_adder: &'a dyn WorkloadAdderPort,
        new_env_init_cmd: EnvCommandFactory<'a>,
        new_env_deploy_cmd: EnvCommandFactory<'a>,
        new_workload_deploy_cmd: WorkloadCommandFactory<'a>,
    ) -> Self {
        Self {
            request,
            store,
            workspace,
            selector,
            prompter,
            workload_adder,
            new_env_init_cmd,
            new_env_deploy_cmd,
            new_workload_deploy_cmd,
            env_exists_in_app: false,
            env_exists_in_ws: false,
            ws_environments: None,
        }
    }

    /// Run the whole deploy flow, fail-fast: resolution, existence check,
    /// environment init/deploy decisions, then each workload in order.
    pub fn run(&mut self) -> Result<(), AppError> {
        self.resolve_workload_names()?;
        self.resolve_env_name()?;
        self.check_env_exists()?;
        self.maybe_init_env()?;
        self.maybe_deploy_env()?;

        let names = self.request.workload_names.clone();
        for name in &names {
            self.maybe_init_workload(name)?;
            let (cmd, family) = self.load_workload_cmd(name)?;
            let family = family.label();
            cmd.validate().map_err(|err| wrap_stage("validate", family, err))?;
            cmd.ask().map_err(|err| wrap_stage("ask", family, err))?;
            cmd.execute().map_err(|err| wrap_stage("execute", family, err))?;
            cmd.recommend_actions()
                .map_err(|err| wrap_stage("recommend actions", family, err))?;
        }
        Ok(())
    }

    /// Ensure at least one workload name is present, selecting interactively
    /// when none was given.
    fn resolve_workload_names(&mut self) -> Result<(), AppError> {
        if !self.request.workload_names.is_empty() {
            return Ok(());
        }
        let name = self
            .selector
            .workload("Select a service or job in your workspace", "")
            .map_err(|err| AppError::SelectWorkload(err.to_string()))?;
        self.request.workload_names = vec![name];
        Ok(())
    }

    /// Ensure the environment name is present. Locally declared environments
    /// that are not registered yet are offered with an "uninitialized" hint.
    fn resolve_env_name(&mut self) -> Result<(), AppError> {
        if !self.request.env_name.is_empty() {
            return Ok(());
        }
        let local = self
            .workspace_environments()
            .map_err(|err| AppError::ListWorkspaceEnvironmentsForSelection(err.to_string()))?;
        let registered = self
            .store
            .list_environments(&self.request.app_name)
            .map_err(|err| AppError::ListStoreEnvironments(err.to_string()))?;

        let registered_names: HashSet<&str> =
            registered.iter().map(|env| env.name.as_str()).collect();
        let extra: Vec<EnvOption> = local
            .iter()
            .filter(|name| !registered_names.contains(name.as_str()))
            .map(EnvOption::uninitialized)
            .collect();

        self.request.env_name = self
            .selector
            .environment("Select an environment to deploy to", "", &self.request.app_name, &extra)
            .map_err(|err| AppError::SelectEnvironment(err.to_string()))?;
        Ok(())
    }

    fn workspace_environments(&mut self) -> Result<Vec<String>, AppError> {
        if let Some(envs) = &self.ws_environments {
            return Ok(envs.clone());
        }
        let envs = self.workspace.list_environments()?;
        self.ws_environments = Some(envs.clone());
        Ok(envs)
    }

    /// Populate both existence facts for the resolved environment.
    ///
    /// A not-found from the store is expected; any other store failure is
    /// fatal. An environment declared nowhere is a refusal, not something to
    /// create silently.
    fn check_env_exists(&mut self) -> Result<(), AppError> {
        let app = self.request.app_name.clone();
        let env = self.request.env_name.clone();

        self.env_exists_in_app = self
            .store
            .get_environment(&app, &env)
            .map_err(|err| AppError::GetEnvironment(err.to_string()))?
            .is_some();

        let envs = self
            .workspace_environments()
            .map_err(|err| AppError::ListWorkspaceEnvironments(err.to_string()))?;
        self.env_exists_in_ws = envs.iter().any(|name| name == &env);

        if !self.env_exists_in_app && !self.env_exists_in_ws {
            eprintln!(
                "Environment {env:?} does not exist in the current application or workspace."
            );
            return Err(AppError::EnvironmentUnresolvable(env));
        }
        if self.env_exists_in_app && !self.env_exists_in_ws {
            println!(
                "Manifest for environment {env:?} does not exist in the current workspace."
            );
        }
        Ok(())
    }

    /// Initialize the environment when it is not registered yet, prompting
    /// unless the user forced a decision.
    fn maybe_init_env(&mut self) -> Result<(), AppError> {
        if self.env_exists_in_app {
            return Ok(());
        }

        if self.request.init_env.is_unset() {
            let confirmed = self
                .prompter
                .confirm(
                    &format!(
                        "Environment {:?} does not exist in app {:?}. Initialize it?",
                        self.request.env_name, self.request.app_name
                    ),
                    "",
                )
                .map_err(|err| AppError::ConfirmEnvInit(err.to_string()))?;
            self.request.init_env = confirmed.into();
        }

        if self.request.init_env.is_yes() {
            let cmd = (self.new_env_init_cmd)(&self.request)
                .map_err(|err| AppError::LoadEnvCommand { action: "init", details: err.to_string() })?;
            cmd.validate()?;
            cmd.ask()?;
            cmd.execute()?;

            if self.request.deploy_env.is_unset() {
                println!(
                    "Environment {:?} was just initialized. We'll deploy it now.",
                    self.request.env_name
                );
                self.request.deploy_env = TriState::Yes;
            } else if self.request.deploy_env.is_no() {
                eprintln!(
                    "Environment is not deployed but --deploy-env=false was specified. \
                     Deploy the environment in order to deploy a workload to it."
                );
                return Err(AppError::EnvironmentNotDeployed(self.request.env_name.clone()));
            }
            return Ok(());
        }

        eprintln!(
            "Environment {:?} does not exist in application {:?} and was not initialized after prompting.",
            self.request.env_name, self.request.app_name
        );
        Err(AppError::EnvironmentNotInApp {
            env: self.request.env_name.clone(),
            app: self.request.app_name.clone(),
        })
    }

    /// Deploy the environment when a local manifest exists and deployment was
    /// requested or inferred. A store-only environment cannot be deployed here.
    fn maybe_deploy_env(&mut self) -> Result<(), AppError> {
        if !self.env_exists_in_ws {
            return Ok(());
        }
        if self.request.deploy_env.is_yes() {
            let cmd = (self.new_env_deploy_cmd)(&self.request).map_err(|err| {
                AppError::LoadEnvCommand { action: "deploy", details: err.to_string() }
            })?;
            cmd.validate()?;
            cmd.ask()?;
            return cmd.execute();
        }
        Ok(())
    }

    /// Initialize one workload unless it is already registered. The first
    /// confirmation answer is persisted for the rest of the batch.
    fn maybe_init_workload(&mut self, name: &str) -> Result<(), AppError> {
        let registered = self
            .store
            .list_workloads(&self.request.app_name)
            .map_err(|err| AppError::ListWorkloads(err.to_string()))?;
        if registered.iter().any(|workload| workload.name == name) {
            return Ok(());
        }

        let manifest = self.workspace.read_workload_manifest(name).map_err(|err| {
            AppError::ReadManifest { name: name.to_string(), details: err.to_string() }
        })?;
        let workload_type = manifest.workload_type().map_err(|err| {
            AppError::ManifestWorkloadType { name: name.to_string(), details: err.to_string() }
        })?;
        if !is_known_workload_type(&workload_type) {
            return Err(AppError::UnrecognizedWorkloadType {
                value: workload_type,
                name: name.to_string(),
            });
        }

        if self.request.init_wkld.is_unset() {
            let confirmed = self
                .prompter
                .confirm(
                    &format!(
                        "Found manifest for uninitialized {workload_type} {name:?}. Initialize it?"
                    ),
                    "This workload will be initialized, then deployed.",
                )
                .map_err(|err| AppError::ConfirmWorkloadInit(err.to_string()))?;
            self.request.init_wkld = confirmed.into();
        }

        if self.request.init_wkld.is_no() {
            return Err(AppError::WorkloadNotInitialized(name.to_string()));
        }

        self.workload_adder
            .add_workload_to_app(&self.request.app_name, name, &workload_type)
            .map_err(|err| AppError::AddWorkload(err.to_string()))
    }

    /// Fetch the registered workload, classify it, and build its deploy
    /// sub-command. The family is used for stage error tagging.
    fn load_workload_cmd(
        &self,
        name: &str,
    ) -> Result<(Box<dyn ActionCommand + 'a>, WorkloadFamily), AppError> {
        let workload =
            self.store.get_workload(&self.request.app_name, name).map_err(|err| {
                AppError::GetWorkload {
                    name: name.to_string(),
                    app: self.request.app_name.clone(),
                    details: err.to_string(),
                }
            })?;
        let family = WorkloadFamily::classify(&workload.workload_type);
        let cmd = (self.new_workload_deploy_cmd)(&self.request, name, &workload.workload_type)?;
        Ok((cmd, family))
    }

    #[cfg(test)]
    fn existence(&self) -> (bool, bool) {
        (self.env_exists_in_app, self.env_exists_in_ws)
    }

    #[cfg(test)]
    fn set_existence(&mut self, in_app: bool, in_ws: bool) {
        self.env_exists_in_app = in_app;
        self.env_exists_in_ws = in_ws;
    }

    #[cfg(test)]
    fn request(&self) -> &DeployRequest {
        &self.request
    }
}

fn wrap_stage(stage: &'static str, family: &'static str, err: AppError) -> AppError {
    AppError::WorkloadStage { stage, family, details: err.to_string() }
}
