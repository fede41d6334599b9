//! Collaborator interfaces consumed by the orchestration core.

mod config_store;
mod lifecycle;
mod prompter;
mod selector;
mod workload_adder;
mod workspace;

pub use config_store::ConfigStorePort;
pub use lifecycle::{ActionCommand, LifecycleCommand};
pub use prompter::PrompterPort;
pub use selector::{EnvOption, SelectorPort};
pub use workload_adder::WorkloadAdderPort;
pub use workspace::WorkspacePort;
