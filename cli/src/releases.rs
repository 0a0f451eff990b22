use crate::{gate, prompt};
use anyhow::{anyhow, Result};
use clap::Parser;
use loadsys_model::clients::{CrdClient, ReleaseClient};
use loadsys_model::constants::DEFAULT_APPLY_DELAY_MS;
use loadsys_model::{apply_batch, current_namespace, Materializer, Pacing};
use std::io::{stdin, stdout};
use std::time::Duration;

/// Create synthetic Release resources referencing an existing release plan and
/// snapshot.
#[derive(Debug, Parser)]
pub(crate) struct Releases {}

impl Releases {
    pub(crate) async fn run(self, k8s_client: kube::Client) -> Result<()> {
        let count = prompt::count("releases")?;
        let release_plan = prompt::required_string("Release plan to release with")?;
        let snapshot = prompt::required_string("Snapshot to release")?;
        let detected = current_namespace().await;
        let namespace = prompt::namespace(&detected)?;

        let pacing = Pacing::new(Duration::from_millis(DEFAULT_APPLY_DELAY_MS));
        if !gate::confirm_bulk(count, pacing.base(), &mut stdin().lock(), &mut stdout())? {
            println!("Cancelled.");
            return Ok(());
        }

        let configs =
            Materializer::new(namespace.as_str()).releases(count, &release_plan, &snapshot);
        let client = ReleaseClient::new_from_k8s_client(k8s_client, &namespace);
        let outcome = apply_batch(&client, "release", configs, pacing).await;
        println!(
            "Created {} of {} releases for plan '{}'.",
            outcome.created.len(),
            count,
            release_plan
        );
        match outcome.failure {
            Some(failure) => Err(anyhow!(
                "failed to create release '{}': {}",
                failure.name,
                failure.error
            )),
            None => Ok(()),
        }
    }
}
