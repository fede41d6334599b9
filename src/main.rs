use caravel::{AppError, DeployOptions};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "caravel")]
#[command(version)]
#[command(
    about = "Deploy services and jobs into application environments",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Deploy one or more workloads, initializing them as needed
    #[clap(visible_alias = "d")]
    Deploy {
        /// Application name (defaults to the workspace summary)
        #[arg(short = 'a', long)]
        app: Option<String>,
        /// Workload to deploy; repeat the flag to deploy several in order
        #[arg(short = 'n', long = "name")]
        names: Vec<String>,
        /// Environment to deploy to
        #[arg(short = 'e', long)]
        env: Option<String>,
        /// Initialize uninitialized workloads without asking (=false to refuse)
        #[arg(long = "init-wkld", num_args = 0..=1, default_missing_value = "true")]
        init_wkld: Option<bool>,
        /// Initialize the environment without asking (=false to refuse)
        #[arg(long = "init-env", num_args = 0..=1, default_missing_value = "true")]
        init_env: Option<bool>,
        /// Deploy the environment before the workloads (=false to skip)
        #[arg(long = "deploy-env", num_args = 0..=1, default_missing_value = "true")]
        deploy_env: Option<bool>,
    },
}

fn main() {
    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Commands::Deploy { app, names, env, init_wkld, init_env, deploy_env } => {
            caravel::deploy(DeployOptions {
                app_name: app,
                env_name: env,
                workload_names: names,
                init_wkld,
                init_env,
                deploy_env,
            })
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
