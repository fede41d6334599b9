use serde::Deserialize;

use crate::domain::AppError;

/// Raw bytes of a workload manifest read from the workspace.
///
/// Only the header fields are modeled; the rest of the document belongs to
/// the deploy sub-commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkloadManifest(String);

#[derive(Deserialize)]
struct ManifestHeader {
    #[serde(default)]
    name: Option<String>,
    #[serde(rename = "type", default)]
    workload_type: Option<String>,
}

impl WorkloadManifest {
    pub fn new(content: impl Into<String>) -> Self {
        Self(content.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Extract the declared `type:` header.
    pub fn workload_type(&self) -> Result<String, AppError> {
        let header: ManifestHeader = serde_yaml::from_str(&self.0)
            .map_err(|err| AppError::config_error(err.to_string()))?;
        header
            .workload_type
            .ok_or_else(|| AppError::config_error("manifest does not declare a 'type' field"))
    }

    /// Extract the declared `name:` header, if present.
    pub fn name(&self) -> Result<Option<String>, AppError> {
        let header: ManifestHeader = serde_yaml::from_str(&self.0)
            .map_err(|err| AppError::config_error(err.to_string()))?;
        Ok(header.name)
    }
}
