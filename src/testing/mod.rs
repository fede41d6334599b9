//! Hand-rolled mock ports shared by unit tests.

mod mock_lifecycle;
mod mock_prompter;
mod mock_selector;
mod mock_store;
mod mock_workload_adder;
mod mock_workspace;

pub use mock_lifecycle::{MockCommand, StageLog, new_stage_log};
pub use mock_prompter::MockPrompter;
pub use mock_selector::MockSelector;
pub use mock_store::MockStore;
pub use mock_workload_adder::MockWorkloadAdder;
pub use mock_workspace::MockWorkspace;
