pub mod deploy;

pub use deploy::{DeployCommand, DeployRequest, EnvCommandFactory, WorkloadCommandFactory};
