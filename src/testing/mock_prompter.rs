use std::cell::RefCell;

use crate::domain::AppError;
use crate::ports::PrompterPort;

/// Mock confirmation prompter for testing.
///
/// Records every prompt message. An unconfigured prompt fails, so tests
/// asserting "never prompted" simply leave the response unset.
#[derive(Default)]
pub struct MockPrompter {
    pub response: Option<bool>,
    pub error: Option<String>,

    pub prompts: RefCell<Vec<String>>,
}

impl MockPrompter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_response(mut self, response: bool) -> Self {
        self.response = Some(response);
        self
    }

    pub fn with_error(mut self, message: &str) -> Self {
        self.error = Some(message.to_string());
        self
    }
}

impl PrompterPort for MockPrompter {
    fn confirm(&self, message: &str, _help: &str) -> Result<bool, AppError> {
        self.prompts.borrow_mut().push(message.to_string());
        if let Some(message) = &self.error {
            return Err(AppError::Configuration(message.clone()));
        }
        self.response.ok_or_else(|| AppError::config_error("unexpected confirmation prompt"))
    }
}
