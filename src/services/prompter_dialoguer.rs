use dialoguer::Confirm;

use crate::domain::AppError;
use crate::ports::PrompterPort;

/// Terminal confirmation prompt backed by `dialoguer::Confirm`.
#[derive(Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl PrompterPort for DialoguerPrompter {
    fn confirm(&self, message: &str, help: &str) -> Result<bool, AppError> {
        if !help.is_empty() {
            println!("{help}");
        }
        Confirm::new()
            .with_prompt(message)
            .default(true)
            .interact()
            .map_err(|err| AppError::config_error(err.to_string()))
    }
}
