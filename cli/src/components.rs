use crate::{gate, prompt};
use anyhow::{anyhow, Result};
use clap::Parser;
use loadsys_model::clients::{ComponentClient, CrdClient};
use loadsys_model::constants::DEFAULT_APPLY_DELAY_MS;
use loadsys_model::{apply_batch, current_namespace, Materializer, Pacing};
use std::io::{stdin, stdout};
use std::time::Duration;

/// Create synthetic Component resources attached to an existing application.
#[derive(Debug, Parser)]
pub(crate) struct Components {}

impl Components {
    pub(crate) async fn run(self, k8s_client: kube::Client) -> Result<()> {
        let count = prompt::count("components")?;
        let application = prompt::required_string("Application the components belong to")?;
        let detected = current_namespace().await;
        let namespace = prompt::namespace(&detected)?;

        let pacing = Pacing::new(Duration::from_millis(DEFAULT_APPLY_DELAY_MS));
        if !gate::confirm_bulk(count, pacing.base(), &mut stdin().lock(), &mut stdout())? {
            println!("Cancelled.");
            return Ok(());
        }

        let configs = Materializer::new(namespace.as_str()).components(count, &application);
        let client = ComponentClient::new_from_k8s_client(k8s_client, &namespace);
        let outcome = apply_batch(&client, "component", configs, pacing).await;
        println!(
            "Created {} of {} components for application '{}'.",
            outcome.created.len(),
            count,
            application
        );
        match outcome.failure {
            Some(failure) => Err(anyhow!(
                "failed to create component '{}': {}",
                failure.name,
                failure.error
            )),
            None => Ok(()),
        }
    }
}
