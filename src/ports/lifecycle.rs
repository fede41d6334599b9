use crate::domain::AppError;

/// A unit of work with a fixed stage order: validate, ask, execute.
///
/// Stages must be invoked strictly in that order; callers own the sequencing.
/// A failure at any stage aborts the command.
pub trait LifecycleCommand {
    fn validate(&self) -> Result<(), AppError>;
    fn ask(&self) -> Result<(), AppError>;
    fn execute(&self) -> Result<(), AppError>;
}

/// A lifecycle command with a trailing recommendations stage, used by the
/// per-workload deploy sub-commands.
pub trait ActionCommand: LifecycleCommand {
    fn recommend_actions(&self) -> Result<(), AppError>;
}
