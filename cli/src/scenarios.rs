use crate::{gate, prompt};
use anyhow::{anyhow, Result};
use clap::Parser;
use loadsys_model::clients::{CrdClient, ScenarioClient};
use loadsys_model::constants::DEFAULT_APPLY_DELAY_MS;
use loadsys_model::{apply_batch, current_namespace, Materializer, Pacing};
use std::io::{stdin, stdout};
use std::time::Duration;

/// Create synthetic IntegrationTestScenario resources for an existing application.
#[derive(Debug, Parser)]
pub(crate) struct Scenarios {}

impl Scenarios {
    pub(crate) async fn run(self, k8s_client: kube::Client) -> Result<()> {
        let count = prompt::count("integration test scenarios")?;
        let application = prompt::required_string("Application the scenarios run against")?;
        let detected = current_namespace().await;
        let namespace = prompt::namespace(&detected)?;

        let pacing = Pacing::new(Duration::from_millis(DEFAULT_APPLY_DELAY_MS));
        if !gate::confirm_bulk(count, pacing.base(), &mut stdin().lock(), &mut stdout())? {
            println!("Cancelled.");
            return Ok(());
        }

        let configs = Materializer::new(namespace.as_str()).scenarios(count, &application);
        let client = ScenarioClient::new_from_k8s_client(k8s_client, &namespace);
        let outcome = apply_batch(&client, "integration test scenario", configs, pacing).await;
        println!(
            "Created {} of {} scenarios for application '{}'.",
            outcome.created.len(),
            count,
            application
        );
        match outcome.failure {
            Some(failure) => Err(anyhow!(
                "failed to create integration test scenario '{}': {}",
                failure.name,
                failure.error
            )),
            None => Ok(()),
        }
    }
}
