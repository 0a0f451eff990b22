use crate::{gate, prompt};
use anyhow::{anyhow, Result};
use clap::Parser;
use loadsys_model::clients::{ComponentClient, CrdClient};
use loadsys_model::constants::DEFAULT_APPLY_DELAY_MS;
use loadsys_model::{
    apply_batch, current_namespace, mock_status, patch_status_batch, ComponentStatus, Materializer,
    Pacing,
};
use std::collections::HashSet;
use std::io::{stdin, stdout};
use std::time::Duration;

/// Create mock Component resources that cycle through the six UI edge-case spec
/// shapes, optionally populating their status subresources.
#[derive(Debug, Parser)]
pub(crate) struct MockComponents {}

impl MockComponents {
    pub(crate) async fn run(self, k8s_client: kube::Client) -> Result<()> {
        let count = prompt::count("mock components")?;
        let application = prompt::required_string("Application the mock components belong to")?;
        let detected = current_namespace().await;
        let namespace = prompt::namespace(&detected)?;
        let with_status = prompt::confirm("Populate the status subresources?", false)?;

        let pacing = Pacing::new(Duration::from_millis(DEFAULT_APPLY_DELAY_MS));
        if !gate::confirm_bulk(count, pacing.base(), &mut stdin().lock(), &mut stdout())? {
            println!("Cancelled.");
            return Ok(());
        }

        let configs = Materializer::new(namespace.as_str()).mock_components(count, &application);
        // Statuses are derived from the specs before the configs are handed off.
        let statuses: Vec<(String, ComponentStatus)> = configs
            .iter()
            .enumerate()
            .map(|(index, component)| {
                (
                    component.metadata.name.clone().unwrap_or_default(),
                    mock_status(index, &component.spec),
                )
            })
            .collect();

        let client = ComponentClient::new_from_k8s_client(k8s_client, &namespace);
        let outcome = apply_batch(&client, "mock component", configs, pacing).await;
        println!(
            "Created {} of {} mock components for application '{}'.",
            outcome.created.len(),
            count,
            application
        );

        if with_status {
            // Status patching is best-effort and only targets what was created.
            let created: HashSet<&String> = outcome.created.iter().collect();
            let statuses: Vec<(String, ComponentStatus)> = statuses
                .into_iter()
                .filter(|(name, _)| created.contains(name))
                .collect();
            let patched = patch_status_batch(&client, "mock component", statuses).await;
            println!("Patched status on {} mock components.", patched);
        }

        match outcome.failure {
            Some(failure) => Err(anyhow!(
                "failed to create mock component '{}': {}",
                failure.name,
                failure.error
            )),
            None => Ok(()),
        }
    }
}
