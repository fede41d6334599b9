use chrono::Utc;

use crate::domain::{AppError, Environment};
use crate::ports::{LifecycleCommand, WorkspacePort};
use crate::services::{FilesystemConfigStore, FilesystemWorkspace};

/// Registers an environment under the application.
pub struct EnvInitCommand<'a> {
    store: &'a FilesystemConfigStore,
    app: String,
    env: String,
}

impl<'a> EnvInitCommand<'a> {
    pub fn new(store: &'a FilesystemConfigStore, app: &str, env: &str) -> Self {
        Self { store, app: app.to_string(), env: env.to_string() }
    }
}

impl LifecycleCommand for EnvInitCommand<'_> {
    fn validate(&self) -> Result<(), AppError> {
        if self.app.is_empty() {
            return Err(AppError::config_error("application name is empty"));
        }
        if self.env.is_empty() {
            return Err(AppError::config_error("environment name is empty"));
        }
        Ok(())
    }

    fn ask(&self) -> Result<(), AppError> {
        // All decisions were made by the orchestrator's flags and prompts.
        Ok(())
    }

    fn execute(&self) -> Result<(), AppError> {
        self.store.put_environment(&Environment::new(&self.app, &self.env))?;
        println!("✅ Initialized environment {:?} in application {:?}", self.env, self.app);
        Ok(())
    }
}

/// Deploys a locally declared environment, stamping its store record.
pub struct EnvDeployCommand<'a> {
    store: &'a FilesystemConfigStore,
    workspace: &'a FilesystemWorkspace,
    app: String,
    env: String,
}

impl<'a> EnvDeployCommand<'a> {
    pub fn new(
        store: &'a FilesystemConfigStore,
        workspace: &'a FilesystemWorkspace,
        app: &str,
        env: &str,
    ) -> Self {
        Self { store, workspace, app: app.to_string(), env: env.to_string() }
    }
}

impl LifecycleCommand for EnvDeployCommand<'_> {
    fn validate(&self) -> Result<(), AppError> {
        let declared = self.workspace.list_environments()?;
        if !declared.iter().any(|name| name == &self.env) {
            return Err(AppError::config_error(format!(
                "environment {} has no manifest in the workspace",
                self.env
            )));
        }
        Ok(())
    }

    fn ask(&self) -> Result<(), AppError> {
        Ok(())
    }

    fn execute(&self) -> Result<(), AppError> {
        self.store.mark_env_deployed(&self.app, &self.env, &Utc::now().to_rfc3339())?;
        println!("✅ Deployed environment {:?} in application {:?}", self.env, self.app);
        Ok(())
    }
}
