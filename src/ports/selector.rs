use crate::domain::AppError;

/// A selectable option carrying an annotation shown next to the value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvOption {
    pub value: String,
    pub hint: String,
}

impl EnvOption {
    pub fn uninitialized(value: impl Into<String>) -> Self {
        Self { value: value.into(), hint: "uninitialized".to_string() }
    }
}

/// Interactive chooser for workload and environment names.
pub trait SelectorPort {
    /// Pick a workload declared in the workspace.
    fn workload(&self, message: &str, default: &str) -> Result<String, AppError>;

    /// Pick an environment registered under the application, merged with
    /// `extra` options that are declared locally but not yet registered.
    fn environment(
        &self,
        message: &str,
        default: &str,
        app: &str,
        extra: &[EnvOption],
    ) -> Result<String, AppError>;
}
