use crate::domain::AppError;

/// Registers a workload under an application without touching its manifest.
pub trait WorkloadAdderPort {
    fn add_workload_to_app(&self, app: &str, name: &str, workload_type: &str)
    -> Result<(), AppError>;
}
