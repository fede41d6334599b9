//! Domain types: errors, tri-state flags, store records, and manifests.

mod environment;
mod error;
mod manifest;
mod tristate;
mod workload;

pub use environment::Environment;
pub use error::AppError;
pub use manifest::WorkloadManifest;
pub use tristate::TriState;
pub use workload::{
    BACKEND_SERVICE, JOB_TYPES, LOAD_BALANCED_WEB_SERVICE, REQUEST_DRIVEN_WEB_SERVICE,
    SCHEDULED_JOB, SERVICE_TYPES, STATIC_SITE, WORKER_SERVICE, Workload, WorkloadFamily,
    is_known_workload_type,
};
