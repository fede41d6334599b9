use crate::domain::AppError;

/// Yes/no confirmation prompt.
pub trait PrompterPort {
    fn confirm(&self, message: &str, help: &str) -> Result<bool, AppError>;
}
