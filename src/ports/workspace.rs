use crate::domain::{AppError, WorkloadManifest};

/// Read access to the local workspace: user-editable manifests and locally
/// declared environment names.
pub trait WorkspacePort {
    /// Names of environments declared in the workspace.
    fn list_environments(&self) -> Result<Vec<String>, AppError>;

    /// Names of workloads with a manifest in the workspace.
    fn list_workloads(&self) -> Result<Vec<String>, AppError>;

    /// Read the manifest for a workload.
    fn read_workload_manifest(&self, name: &str) -> Result<WorkloadManifest, AppError>;
}
