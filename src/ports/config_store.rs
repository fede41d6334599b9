use crate::domain::{AppError, Environment, Workload};

/// Read access to the application store: the registry of environments and
/// workloads already provisioned under an application.
pub trait ConfigStorePort {
    /// Look up an environment. `Ok(None)` is the distinguished not-found
    /// outcome; `Err` means the query itself failed.
    fn get_environment(&self, app: &str, env: &str) -> Result<Option<Environment>, AppError>;

    /// List all environments registered under the application.
    fn list_environments(&self, app: &str) -> Result<Vec<Environment>, AppError>;

    /// List all workloads registered under the application.
    fn list_workloads(&self, app: &str) -> Result<Vec<Workload>, AppError>;

    /// Look up a single registered workload.
    fn get_workload(&self, app: &str, name: &str) -> Result<Workload, AppError>;
}
