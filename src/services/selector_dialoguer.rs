use dialoguer::Select;

use crate::domain::AppError;
use crate::ports::{ConfigStorePort, EnvOption, SelectorPort, WorkspacePort};
use crate::services::{FilesystemConfigStore, FilesystemWorkspace};

/// Terminal selector backed by `dialoguer::Select`.
pub struct DialoguerSelector<'a> {
    workspace: &'a FilesystemWorkspace,
    store: &'a FilesystemConfigStore,
}

impl<'a> DialoguerSelector<'a> {
    pub fn new(workspace: &'a FilesystemWorkspace, store: &'a FilesystemConfigStore) -> Self {
        Self { workspace, store }
    }

    fn pick(
        message: &str,
        default: &str,
        items: &[String],
        values: &[String],
    ) -> Result<String, AppError> {
        let default_index = values.iter().position(|value| value == default).unwrap_or(0);
        let index = Select::new()
            .with_prompt(message)
            .items(items)
            .default(default_index)
            .interact()
            .map_err(|err| AppError::config_error(err.to_string()))?;
        Ok(values[index].clone())
    }
}

impl SelectorPort for DialoguerSelector<'_> {
    fn workload(&self, message: &str, default: &str) -> Result<String, AppError> {
        let names = self.workspace.list_workloads()?;
        if names.is_empty() {
            return Err(AppError::config_error("no workloads are declared in the workspace"));
        }
        Self::pick(message, default, &names, &names)
    }

    fn environment(
        &self,
        message: &str,
        default: &str,
        app: &str,
        extra: &[EnvOption],
    ) -> Result<String, AppError> {
        let registered = self.store.list_environments(app)?;

        let mut items: Vec<String> = registered.iter().map(|env| env.name.clone()).collect();
        let mut values = items.clone();
        for option in extra {
            items.push(format!("{} ({})", option.value, option.hint));
            values.push(option.value.clone());
        }
        if values.is_empty() {
            return Err(AppError::config_error(format!(
                "no environments found for application {app}"
            )));
        }
        Self::pick(message, default, &items, &values)
    }
}
