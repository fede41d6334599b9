use crate::domain::{AppError, Workload};
use crate::ports::WorkloadAdderPort;
use crate::services::FilesystemConfigStore;

/// Registers workloads in the application store without touching their
/// manifests.
pub struct WorkloadInitializer<'a> {
    store: &'a FilesystemConfigStore,
}

impl<'a> WorkloadInitializer<'a> {
    pub fn new(store: &'a FilesystemConfigStore) -> Self {
        Self { store }
    }
}

impl WorkloadAdderPort for WorkloadInitializer<'_> {
    fn add_workload_to_app(
        &self,
        app: &str,
        name: &str,
        workload_type: &str,
    ) -> Result<(), AppError> {
        self.store.put_workload(&Workload {
            app: app.to_string(),
            name: name.to_string(),
            workload_type: workload_type.to_string(),
        })?;
        println!("✅ Registered {workload_type} {name:?} under application {app:?}");
        Ok(())
    }
}
