use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::{AppError, WorkloadManifest};
use crate::ports::WorkspacePort;

pub const WORKSPACE_DIR: &str = "caravel";
pub const SUMMARY_FILE: &str = ".workspace";
pub const MANIFEST_FILE: &str = "manifest.yml";
const ENVIRONMENTS_DIR: &str = "environments";

/// Contents of the `caravel/.workspace` summary file.
#[derive(Debug, Clone, Deserialize)]
pub struct WorkspaceSummary {
    pub application: String,
}

/// Filesystem-based workspace implementation.
///
/// Layout under `<root>/caravel/`: a `.workspace` summary, one
/// `<workload>/manifest.yml` per declared workload, and
/// `environments/<env>/manifest.yml` per declared environment.
#[derive(Debug, Clone)]
pub struct FilesystemWorkspace {
    root: PathBuf,
}

impl FilesystemWorkspace {
    /// Create a workspace for the given root directory.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Create a workspace for the current directory.
    pub fn current() -> Result<Self, AppError> {
        let cwd = std::env::current_dir()?;
        Ok(Self::new(cwd))
    }

    pub fn exists(&self) -> bool {
        self.workspace_path().exists()
    }

    pub fn workspace_path(&self) -> PathBuf {
        self.root.join(WORKSPACE_DIR)
    }

    /// Read the workspace summary.
    pub fn summary(&self) -> Result<WorkspaceSummary, AppError> {
        let path = self.workspace_path().join(SUMMARY_FILE);
        if !path.exists() {
            return Err(AppError::config_error(
                "application name required: pass --app or add it to caravel/.workspace",
            ));
        }
        let content = fs::read_to_string(&path)?;
        toml::from_str(&content)
            .map_err(|err| AppError::config_error(format!("malformed {SUMMARY_FILE}: {err}")))
    }

    fn workload_manifest_path(&self, name: &str) -> PathBuf {
        self.workspace_path().join(name).join(MANIFEST_FILE)
    }

    fn environments_path(&self) -> PathBuf {
        self.workspace_path().join(ENVIRONMENTS_DIR)
    }

    /// Directories under `base` that contain a manifest file.
    fn manifest_dirs(&self, base: &Path) -> Result<Vec<String>, AppError> {
        let mut names = Vec::new();
        if !base.exists() {
            return Ok(names);
        }
        for entry in fs::read_dir(base)? {
            let entry = entry?;
            if !entry.path().is_dir() {
                continue;
            }
            if !entry.path().join(MANIFEST_FILE).exists() {
                continue;
            }
            names.push(entry.file_name().to_string_lossy().to_string());
        }
        names.sort();
        Ok(names)
    }
}

impl WorkspacePort for FilesystemWorkspace {
    fn list_environments(&self) -> Result<Vec<String>, AppError> {
        self.manifest_dirs(&self.environments_path())
    }

    fn list_workloads(&self) -> Result<Vec<String>, AppError> {
        let names = self.manifest_dirs(&self.workspace_path())?;
        Ok(names.into_iter().filter(|name| name != ENVIRONMENTS_DIR).collect())
    }

    fn read_workload_manifest(&self, name: &str) -> Result<WorkloadManifest, AppError> {
        let content = fs::read_to_string(self.workload_manifest_path(name))?;
        Ok(WorkloadManifest::new(content))
    }
}
