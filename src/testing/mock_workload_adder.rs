use std::cell::RefCell;

use crate::domain::AppError;
use crate::ports::WorkloadAdderPort;

/// Mock workload initializer recording `(app, name, type)` registrations.
#[derive(Default)]
pub struct MockWorkloadAdder {
    pub added: RefCell<Vec<(String, String, String)>>,
    pub error: Option<String>,
}

impl MockWorkloadAdder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl WorkloadAdderPort for MockWorkloadAdder {
    fn add_workload_to_app(
        &self,
        app: &str,
        name: &str,
        workload_type: &str,
    ) -> Result<(), AppError> {
        if let Some(message) = &self.error {
            return Err(AppError::Configuration(message.clone()));
        }
        self.added.borrow_mut().push((
            app.to_string(),
            name.to_string(),
            workload_type.to_string(),
        ));
        Ok(())
    }
}
