use std::io;

use chrono::Utc;

use crate::domain::{AppError, WorkloadFamily, is_known_workload_type};
use crate::ports::{ActionCommand, ConfigStorePort, LifecycleCommand, WorkspacePort};
use crate::services::config_store_filesystem::DeploymentRecord;
use crate::services::{FilesystemConfigStore, FilesystemWorkspace};

/// Deploys one registered workload into the target environment.
///
/// The job/service split only affects user-facing wording here; both families
/// share the deployment mechanics.
pub struct WorkloadDeployCommand<'a> {
    store: &'a FilesystemConfigStore,
    workspace: &'a FilesystemWorkspace,
    app: String,
    env: String,
    name: String,
    workload_type: String,
    family: WorkloadFamily,
}

impl<'a> WorkloadDeployCommand<'a> {
    pub fn new(
        store: &'a FilesystemConfigStore,
        workspace: &'a FilesystemWorkspace,
        app: &str,
        env: &str,
        name: &str,
        workload_type: &str,
    ) -> Self {
        Self {
            store,
            workspace,
            app: app.to_string(),
            env: env.to_string(),
            name: name.to_string(),
            workload_type: workload_type.to_string(),
            family: WorkloadFamily::classify(workload_type),
        }
    }
}

impl LifecycleCommand for WorkloadDeployCommand<'_> {
    fn validate(&self) -> Result<(), AppError> {
        if !is_known_workload_type(&self.workload_type) {
            return Err(AppError::config_error(format!(
                "unknown workload type {:?}",
                self.workload_type
            )));
        }
        if self.store.get_environment(&self.app, &self.env)?.is_none() {
            return Err(AppError::config_error(format!(
                "environment {} is not registered in application {}",
                self.env, self.app
            )));
        }
        // A local manifest is optional at this point, but when present its
        // declared type must agree with the registered record.
        match self.workspace.read_workload_manifest(&self.name) {
            Ok(manifest) => {
                let declared = manifest.workload_type()?;
                if declared != self.workload_type {
                    return Err(AppError::config_error(format!(
                        "manifest for {} declares type {:?} but it is registered as {:?}",
                        self.name, declared, self.workload_type
                    )));
                }
            }
            Err(AppError::Io(err)) if err.kind() == io::ErrorKind::NotFound => {}
            Err(err) => return Err(err),
        }
        Ok(())
    }

    fn ask(&self) -> Result<(), AppError> {
        // Name, environment, and initialization were settled by the orchestrator.
        Ok(())
    }

    fn execute(&self) -> Result<(), AppError> {
        self.store.record_deployment(&DeploymentRecord {
            app: self.app.clone(),
            env: self.env.clone(),
            name: self.name.clone(),
            workload_type: self.workload_type.clone(),
            deployed_at: Utc::now().to_rfc3339(),
        })?;
        let noun = match self.family {
            WorkloadFamily::Service => "service",
            WorkloadFamily::Job => "job",
        };
        println!("✅ Deployed {} {:?} to environment {:?}", noun, self.name, self.env);
        Ok(())
    }
}

impl ActionCommand for WorkloadDeployCommand<'_> {
    fn recommend_actions(&self) -> Result<(), AppError> {
        println!("Recommended follow-up actions:");
        match self.family {
            WorkloadFamily::Service => {
                println!(
                    "  - Update caravel/{}/manifest.yml and run `caravel deploy` to roll out changes.",
                    self.name
                );
            }
            WorkloadFamily::Job => {
                println!(
                    "  - Adjust the schedule in caravel/{}/manifest.yml and redeploy to change when the job runs.",
                    self.name
                );
            }
        }
        Ok(())
    }
}
