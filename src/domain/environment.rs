use serde::{Deserialize, Serialize};

/// An environment registered in the application store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Environment {
    pub app: String,
    pub name: String,
    /// RFC 3339 timestamp of the last environment deployment, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_deployed: Option<String>,
}

impl Environment {
    pub fn new(app: impl Into<String>, name: impl Into<String>) -> Self {
        Self { app: app.into(), name: name.into(), last_deployed: None }
    }
}
