use serde::{Deserialize, Serialize};

/// A workload registered in the application store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workload {
    pub app: String,
    pub name: String,
    #[serde(rename = "type")]
    pub workload_type: String,
}

pub const LOAD_BALANCED_WEB_SERVICE: &str = "Load Balanced Web Service";
pub const BACKEND_SERVICE: &str = "Backend Service";
pub const REQUEST_DRIVEN_WEB_SERVICE: &str = "Request-Driven Web Service";
pub const WORKER_SERVICE: &str = "Worker Service";
pub const STATIC_SITE: &str = "Static Site";
pub const SCHEDULED_JOB: &str = "Scheduled Job";

/// Service-family workload types.
pub const SERVICE_TYPES: [&str; 5] = [
    LOAD_BALANCED_WEB_SERVICE,
    BACKEND_SERVICE,
    REQUEST_DRIVEN_WEB_SERVICE,
    WORKER_SERVICE,
    STATIC_SITE,
];

/// Job-family workload types.
pub const JOB_TYPES: [&str; 1] = [SCHEDULED_JOB];

/// Whether the given type string belongs to the closed set of known workload types.
pub fn is_known_workload_type(value: &str) -> bool {
    SERVICE_TYPES.contains(&value) || JOB_TYPES.contains(&value)
}

/// The job/service split used for command construction and error tagging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkloadFamily {
    Service,
    Job,
}

impl WorkloadFamily {
    /// Classify a workload type string. Anything that is not a job is a service.
    pub fn classify(workload_type: &str) -> WorkloadFamily {
        if JOB_TYPES.contains(&workload_type) {
            WorkloadFamily::Job
        } else {
            WorkloadFamily::Service
        }
    }

    /// Short label used in stage error tags.
    pub fn label(self) -> &'static str {
        match self {
            WorkloadFamily::Service => "svc",
            WorkloadFamily::Job => "job",
        }
    }
}
