use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::{AppError, Environment, Workload};
use crate::ports::ConfigStorePort;

/// Environment variable overriding the store root, mainly for tests.
pub const STORE_DIR_ENV: &str = "CARAVEL_STORE_DIR";

/// A completed workload deployment into an environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentRecord {
    pub app: String,
    pub env: String,
    pub name: String,
    #[serde(rename = "type")]
    pub workload_type: String,
    pub deployed_at: String,
}

/// File-backed application store.
///
/// Layout under the store root: `<app>/environments/<env>.json`,
/// `<app>/workloads/<name>.json`, `<app>/deployments/<env>/<name>.json`.
#[derive(Debug, Clone)]
pub struct FilesystemConfigStore {
    root: PathBuf,
}

impl FilesystemConfigStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Resolve the store root from `CARAVEL_STORE_DIR` or the user data dir.
    pub fn from_env() -> Result<Self, AppError> {
        if let Ok(dir) = std::env::var(STORE_DIR_ENV) {
            return Ok(Self::new(PathBuf::from(dir)));
        }
        let base = dirs::data_dir()
            .ok_or_else(|| AppError::config_error("could not determine a user data directory"))?;
        Ok(Self::new(base.join("caravel").join("store")))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn environment_path(&self, app: &str, env: &str) -> PathBuf {
        self.root.join(app).join("environments").join(format!("{env}.json"))
    }

    fn workload_path(&self, app: &str, name: &str) -> PathBuf {
        self.root.join(app).join("workloads").join(format!("{name}.json"))
    }

    fn deployment_path(&self, app: &str, env: &str, name: &str) -> PathBuf {
        self.root.join(app).join("deployments").join(env).join(format!("{name}.json"))
    }

    fn read_record<T: serde::de::DeserializeOwned>(path: &Path) -> Result<Option<T>, AppError> {
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path)?;
        let record = serde_json::from_str(&content).map_err(|err| {
            AppError::config_error(format!("malformed store record {}: {err}", path.display()))
        })?;
        Ok(Some(record))
    }

    fn write_record<T: Serialize>(path: &Path, record: &T) -> Result<(), AppError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(record)
            .map_err(|err| AppError::config_error(format!("serialize store record: {err}")))?;
        fs::write(path, content)?;
        Ok(())
    }

    fn list_records<T: serde::de::DeserializeOwned>(dir: &Path) -> Result<Vec<T>, AppError> {
        let mut records = Vec::new();
        if !dir.exists() {
            return Ok(records);
        }
        let mut paths: Vec<PathBuf> = fs::read_dir(dir)?
            .collect::<Result<Vec<_>, _>>()?
            .into_iter()
            .map(|entry| entry.path())
            .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
            .collect();
        paths.sort();
        for path in paths {
            if let Some(record) = Self::read_record(&path)? {
                records.push(record);
            }
        }
        Ok(records)
    }

    /// Register an environment under its application.
    pub fn put_environment(&self, env: &Environment) -> Result<(), AppError> {
        Self::write_record(&self.environment_path(&env.app, &env.name), env)
    }

    /// Stamp the environment record with a deployment time, creating the
    /// record when it does not exist yet.
    pub fn mark_env_deployed(
        &self,
        app: &str,
        env: &str,
        deployed_at: &str,
    ) -> Result<(), AppError> {
        let path = self.environment_path(app, env);
        let mut record =
            Self::read_record::<Environment>(&path)?.unwrap_or_else(|| Environment::new(app, env));
        record.last_deployed = Some(deployed_at.to_string());
        Self::write_record(&path, &record)
    }

    /// Register a workload under its application.
    pub fn put_workload(&self, workload: &Workload) -> Result<(), AppError> {
        Self::write_record(&self.workload_path(&workload.app, &workload.name), workload)
    }

    /// Persist a completed workload deployment.
    pub fn record_deployment(&self, record: &DeploymentRecord) -> Result<(), AppError> {
        Self::write_record(&self.deployment_path(&record.app, &record.env, &record.name), record)
    }

    /// Fetch a deployment record, if one exists.
    pub fn get_deployment(
        &self,
        app: &str,
        env: &str,
        name: &str,
    ) -> Result<Option<DeploymentRecord>, AppError> {
        Self::read_record(&self.deployment_path(app, env, name))
    }
}

impl ConfigStorePort for FilesystemConfigStore {
    fn get_environment(&self, app: &str, env: &str) -> Result<Option<Environment>, AppError> {
        Self::read_record(&self.environment_path(app, env))
    }

    fn list_environments(&self, app: &str) -> Result<Vec<Environment>, AppError> {
        Self::list_records(&self.root.join(app).join("environments"))
    }

    fn list_workloads(&self, app: &str) -> Result<Vec<Workload>, AppError> {
        Self::list_records(&self.root.join(app).join("workloads"))
    }

    fn get_workload(&self, app: &str, name: &str) -> Result<Workload, AppError> {
        Self::read_record(&self.workload_path(app, name))?.ok_or_else(|| {
            AppError::config_error(format!("workload {name} is not registered in application {app}"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_environment_is_none_not_an_error() {
        let dir = TempDir::new().unwrap();
        let store = FilesystemConfigStore::new(dir.path().to_path_buf());

        assert!(store.get_environment("app", "test").unwrap().is_none());
        assert!(store.list_environments("app").unwrap().is_empty());
    }

    #[test]
    fn round_trips_environment_records() {
        let dir = TempDir::new().unwrap();
        let store = FilesystemConfigStore::new(dir.path().to_path_buf());

        store.put_environment(&Environment::new("app", "test")).unwrap();
        let record = store.get_environment("app", "test").unwrap().unwrap();
        assert_eq!(record.name, "test");
        assert!(record.last_deployed.is_none());

        store.mark_env_deployed("app", "test", "2026-08-29T00:00:00Z").unwrap();
        let record = store.get_environment("app", "test").unwrap().unwrap();
        assert_eq!(record.last_deployed.as_deref(), Some("2026-08-29T00:00:00Z"));
    }

    #[test]
    fn registers_and_lists_workloads() {
        let dir = TempDir::new().unwrap();
        let store = FilesystemConfigStore::new(dir.path().to_path_buf());
        let workload = Workload {
            app: "app".to_string(),
            name: "fe".to_string(),
            workload_type: "Backend Service".to_string(),
        };

        store.put_workload(&workload).unwrap();
        assert_eq!(store.list_workloads("app").unwrap(), vec![workload.clone()]);
        assert_eq!(store.get_workload("app", "fe").unwrap(), workload);
        assert!(store.get_workload("app", "be").is_err());
        // Other applications see nothing.
        assert!(store.list_workloads("other").unwrap().is_empty());
    }

    #[test]
    fn persists_deployment_records() {
        let dir = TempDir::new().unwrap();
        let store = FilesystemConfigStore::new(dir.path().to_path_buf());
        let record = DeploymentRecord {
            app: "app".to_string(),
            env: "test".to_string(),
            name: "fe".to_string(),
            workload_type: "Backend Service".to_string(),
            deployed_at: "2026-08-29T00:00:00Z".to_string(),
        };

        store.record_deployment(&record).unwrap();
        assert_eq!(store.get_deployment("app", "test", "fe").unwrap(), Some(record));
        assert!(store.get_deployment("app", "prod", "fe").unwrap().is_none());
    }
}
