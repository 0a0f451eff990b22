use crate::{gate, prompt};
use anyhow::{anyhow, Result};
use clap::Parser;
use loadsys_model::clients::{ApplicationClient, CrdClient};
use loadsys_model::constants::DEFAULT_APPLY_DELAY_MS;
use loadsys_model::{apply_batch, current_namespace, Materializer, Pacing};
use std::io::{stdin, stdout};
use std::time::Duration;

/// Create synthetic Application resources. All parameters are collected
/// interactively.
#[derive(Debug, Parser)]
pub(crate) struct Applications {}

impl Applications {
    pub(crate) async fn run(self, k8s_client: kube::Client) -> Result<()> {
        let count = prompt::count("applications")?;
        let detected = current_namespace().await;
        let namespace = prompt::namespace(&detected)?;

        let pacing = Pacing::new(Duration::from_millis(DEFAULT_APPLY_DELAY_MS));
        if !gate::confirm_bulk(count, pacing.base(), &mut stdin().lock(), &mut stdout())? {
            println!("Cancelled.");
            return Ok(());
        }

        let configs = Materializer::new(namespace.as_str()).applications(count);
        let client = ApplicationClient::new_from_k8s_client(k8s_client, &namespace);
        let outcome = apply_batch(&client, "application", configs, pacing).await;
        println!(
            "Created {} of {} applications in namespace '{}'.",
            outcome.created.len(),
            count,
            namespace
        );
        match outcome.failure {
            Some(failure) => Err(anyhow!(
                "failed to create application '{}': {}",
                failure.name,
                failure.error
            )),
            None => Ok(()),
        }
    }
}
