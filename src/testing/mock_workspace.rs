use std::cell::RefCell;
use std::collections::HashMap;

use crate::domain::{AppError, WorkloadManifest};
use crate::ports::WorkspacePort;

/// Mock local workspace for testing.
#[derive(Default)]
pub struct MockWorkspace {
    pub environments: Vec<String>,
    pub manifests: HashMap<String, String>,

    pub list_environments_error: Option<String>,
    pub read_manifest_error: Option<String>,

    pub list_environments_calls: RefCell<usize>,
    pub manifest_reads: RefCell<Vec<String>>,
}

impl MockWorkspace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_environment(mut self, name: &str) -> Self {
        self.environments.push(name.to_string());
        self
    }

    pub fn with_manifest(mut self, name: &str, content: &str) -> Self {
        self.manifests.insert(name.to_string(), content.to_string());
        self
    }
}

impl WorkspacePort for MockWorkspace {
    fn list_environments(&self) -> Result<Vec<String>, AppError> {
        *self.list_environments_calls.borrow_mut() += 1;
        if let Some(message) = &self.list_environments_error {
            return Err(AppError::Configuration(message.clone()));
        }
        Ok(self.environments.clone())
    }

    fn list_workloads(&self) -> Result<Vec<String>, AppError> {
        let mut names: Vec<String> = self.manifests.keys().cloned().collect();
        names.sort();
        Ok(names)
    }

    fn read_workload_manifest(&self, name: &str) -> Result<WorkloadManifest, AppError> {
        self.manifest_reads.borrow_mut().push(name.to_string());
        if let Some(message) = &self.read_manifest_error {
            return Err(AppError::Configuration(message.clone()));
        }
        self.manifests
            .get(name)
            .map(|content| WorkloadManifest::new(content.clone()))
            .ok_or_else(|| AppError::config_error(format!("no manifest for workload {name}")))
    }
}
