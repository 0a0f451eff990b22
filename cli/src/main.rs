/*!

This is the command line interface for generating synthetic AppStudio resources
against a cluster and for closing released Jira issues from a changelog.

!*/

mod applications;
mod close_issues;
mod components;
mod gate;
mod mock_components;
mod prompt;
mod releases;
mod scenarios;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Builder;
use kube::config::{KubeConfigOptions, Kubeconfig};
use log::LevelFilter;
use std::path::PathBuf;

/// The command line interface for loading a cluster with synthetic AppStudio
/// resources.
#[derive(Debug, Parser)]
#[clap(author, version, about)]
struct Args {
    /// Set logging verbosity [trace|debug|info|warn|error]. If the environment variable `RUST_LOG`
    /// is present, it overrides the default logging behavior. See https://docs.rs/env_logger/latest
    #[clap(long = "log-level", default_value = "info")]
    log_level: LevelFilter,
    /// Path to the kubeconfig file. Also can be passed with the KUBECONFIG environment variable.
    #[clap(long = "kubeconfig")]
    kubeconfig: Option<PathBuf>,
    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Parser)]
enum Command {
    /// Create synthetic Application resources.
    Applications(applications::Applications),
    /// Create synthetic Component resources.
    Components(components::Components),
    /// Create synthetic IntegrationTestScenario resources.
    Scenarios(scenarios::Scenarios),
    /// Create synthetic Release resources.
    Releases(releases::Releases),
    /// Create mock Component resources cycling through the UI edge-case shapes.
    MockComponents(mock_components::MockComponents),
    /// Close released Jira issues referenced by a changelog.
    CloseIssues(close_issues::CloseIssues),
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    init_logger(args.log_level);
    if let Err(e) = run(args).await {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<()> {
    match args.command {
        Command::Applications(applications) => {
            applications.run(k8s_client(&args.kubeconfig).await?).await
        }
        Command::Components(components) => {
            components.run(k8s_client(&args.kubeconfig).await?).await
        }
        Command::Scenarios(scenarios) => scenarios.run(k8s_client(&args.kubeconfig).await?).await,
        Command::Releases(releases) => releases.run(k8s_client(&args.kubeconfig).await?).await,
        Command::MockComponents(mock_components) => {
            mock_components
                .run(k8s_client(&args.kubeconfig).await?)
                .await
        }
        Command::CloseIssues(close_issues) => close_issues.run().await,
    }
}

async fn k8s_client(kubeconfig: &Option<PathBuf>) -> Result<kube::Client> {
    let config = match kubeconfig {
        Some(path) => {
            let kubeconfig = Kubeconfig::read_from(path)
                .context(format!("Unable to read kubeconfig '{:?}'", path))?;
            kube::Config::from_custom_kubeconfig(kubeconfig, &KubeConfigOptions::default())
                .await
                .context("Unable to load kubeconfig")?
        }
        None => kube::Config::infer()
            .await
            .context("Unable to infer the kube config")?,
    };
    kube::Client::try_from(config).context("Unable to create the Kubernetes client")
}

/// Initialize the logger with the value passed by `--log-level` (or its default) when the
/// `RUST_LOG` environment variable is not present. If present, the `RUST_LOG` environment variable
/// overrides `--log-level`/`level`.
fn init_logger(level: LevelFilter) {
    match std::env::var(env_logger::DEFAULT_FILTER_ENV).ok() {
        Some(_) => {
            // RUST_LOG exists; env_logger will use it.
            Builder::from_default_env().init();
        }
        None => {
            // RUST_LOG does not exist; set the default level for the whole workspace.
            Builder::new()
                .filter(Some(env!("CARGO_CRATE_NAME")), level)
                .filter(Some("loadsys_model"), level)
                .filter(Some("loadsys_jira"), level)
                .init();
        }
    }
}
