use std::cell::RefCell;

use crate::domain::{AppError, Environment, Workload};
use crate::ports::ConfigStorePort;

/// Mock application store for testing.
///
/// Failure fields replace the corresponding query's result with a
/// `Configuration` error carrying the given message.
#[derive(Default)]
pub struct MockStore {
    pub environments: RefCell<Vec<Environment>>,
    pub workloads: RefCell<Vec<Workload>>,

    /// When set, `list_workloads` reports nothing registered even though
    /// records remain resolvable through `get_workload`.
    pub list_workloads_empty: bool,

    pub get_environment_error: Option<String>,
    pub list_environments_error: Option<String>,
    pub list_workloads_error: Option<String>,
    pub get_workload_error: Option<String>,

    pub list_workloads_calls: RefCell<usize>,
}

impl MockStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_environment(self, env: Environment) -> Self {
        self.environments.borrow_mut().push(env);
        self
    }

    pub fn with_workload(self, workload: Workload) -> Self {
        self.workloads.borrow_mut().push(workload);
        self
    }
}

impl ConfigStorePort for MockStore {
    fn get_environment(&self, app: &str, env: &str) -> Result<Option<Environment>, AppError> {
        if let Some(message) = &self.get_environment_error {
            return Err(AppError::Configuration(message.clone()));
        }
        Ok(self
            .environments
            .borrow()
            .iter()
            .find(|record| record.app == app && record.name == env)
            .cloned())
    }

    fn list_environments(&self, app: &str) -> Result<Vec<Environment>, AppError> {
        if let Some(message) = &self.list_environments_error {
            return Err(AppError::Configuration(message.clone()));
        }
        Ok(self
            .environments
            .borrow()
            .iter()
            .filter(|record| record.app == app)
            .cloned()
            .collect())
    }

    fn list_workloads(&self, app: &str) -> Result<Vec<Workload>, AppError> {
        *self.list_workloads_calls.borrow_mut() += 1;
        if let Some(message) = &self.list_workloads_error {
            return Err(AppError::Configuration(message.clone()));
        }
        if self.list_workloads_empty {
            return Ok(Vec::new());
        }
        Ok(self
            .workloads
            .borrow()
            .iter()
            .filter(|record| record.app == app)
            .cloned()
            .collect())
    }

    fn get_workload(&self, app: &str, name: &str) -> Result<Workload, AppError> {
        if let Some(message) = &self.get_workload_error {
            return Err(AppError::Configuration(message.clone()));
        }
        self.workloads
            .borrow()
            .iter()
            .find(|record| record.app == app && record.name == name)
            .cloned()
            .ok_or_else(|| AppError::config_error(format!("workload {name} is not registered")))
    }
}
