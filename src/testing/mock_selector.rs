use std::cell::RefCell;

use crate::domain::AppError;
use crate::ports::{EnvOption, SelectorPort};

/// Mock interactive selector for testing.
///
/// An unconfigured selection fails, so tests asserting "never prompted"
/// simply leave the response unset.
#[derive(Default)]
pub struct MockSelector {
    pub workload_response: Option<String>,
    pub workload_error: Option<String>,
    pub environment_response: Option<String>,
    pub environment_error: Option<String>,

    pub seen_env_options: RefCell<Vec<EnvOption>>,
}

impl MockSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_workload_response(mut self, name: &str) -> Self {
        self.workload_response = Some(name.to_string());
        self
    }

    pub fn with_workload_error(mut self, message: &str) -> Self {
        self.workload_error = Some(message.to_string());
        self
    }

    pub fn with_environment_response(mut self, name: &str) -> Self {
        self.environment_response = Some(name.to_string());
        self
    }

    pub fn with_environment_error(mut self, message: &str) -> Self {
        self.environment_error = Some(message.to_string());
        self
    }
}

impl SelectorPort for MockSelector {
    fn workload(&self, _message: &str, _default: &str) -> Result<String, AppError> {
        if let Some(message) = &self.workload_error {
            return Err(AppError::Configuration(message.clone()));
        }
        self.workload_response
            .clone()
            .ok_or_else(|| AppError::config_error("unexpected workload selection"))
    }

    fn environment(
        &self,
        _message: &str,
        _default: &str,
        _app: &str,
        extra: &[EnvOption],
    ) -> Result<String, AppError> {
        self.seen_env_options.borrow_mut().extend(extra.iter().cloned());
        if let Some(message) = &self.environment_error {
            return Err(AppError::Configuration(message.clone()));
        }
        self.environment_response
            .clone()
            .ok_or_else(|| AppError::config_error("unexpected environment selection"))
    }
}
