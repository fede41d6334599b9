use std::cell::RefCell;
use std::rc::Rc;

use crate::domain::AppError;
use crate::ports::{ActionCommand, LifecycleCommand};

/// Shared log of lifecycle stage invocations, in order.
pub type StageLog = Rc<RefCell<Vec<String>>>;

pub fn new_stage_log() -> StageLog {
    Rc::new(RefCell::new(Vec::new()))
}

/// Mock lifecycle command recording its stages into a shared log, optionally
/// failing at one named stage.
pub struct MockCommand {
    label: String,
    log: StageLog,
    fail_stage: Option<&'static str>,
    fail_message: String,
}

impl MockCommand {
    pub fn new(log: StageLog, label: impl Into<String>) -> Self {
        Self { label: label.into(), log, fail_stage: None, fail_message: String::new() }
    }

    pub fn failing(
        log: StageLog,
        label: impl Into<String>,
        stage: &'static str,
        message: &str,
    ) -> Self {
        Self {
            label: label.into(),
            log,
            fail_stage: Some(stage),
            fail_message: message.to_string(),
        }
    }

    fn stage(&self, stage: &'static str) -> Result<(), AppError> {
        self.log.borrow_mut().push(format!("{} {}", self.label, stage));
        if self.fail_stage == Some(stage) {
            return Err(AppError::Configuration(self.fail_message.clone()));
        }
        Ok(())
    }
}

impl LifecycleCommand for MockCommand {
    fn validate(&self) -> Result<(), AppError> {
        self.stage("validate")
    }

    fn ask(&self) -> Result<(), AppError> {
        self.stage("ask")
    }

    fn execute(&self) -> Result<(), AppError> {
        self.stage("execute")
    }
}

impl ActionCommand for MockCommand {
    fn recommend_actions(&self) -> Result<(), AppError> {
        self.stage("recommend actions")
    }
}
