use crate::clients::{CrdClient, Error};
use kube::Resource;
use log::{error, info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;

/// The randomized pause between successive create calls. Spacing the calls out keeps
/// a bulk run from hammering the API server and lets a human watch the UI fill in.
///
/// The pause is drawn uniformly from `[base, 2 * base]`, so the base delay printed
/// to the user is the floor of the real pause, never an overstatement.
#[derive(Debug, Clone, Copy)]
pub struct Pacing {
    base: Duration,
}

impl Pacing {
    pub fn new(base: Duration) -> Self {
        Self { base }
    }

    pub fn base(&self) -> Duration {
        self.base
    }

    pub fn delay<R: Rng>(&self, rng: &mut R) -> Duration {
        let base_ms = self.base.as_millis() as u64;
        Duration::from_millis(rng.gen_range(base_ms..=base_ms * 2))
    }
}

/// What one resource's failure looked like.
#[derive(Debug)]
pub struct BatchFailure {
    pub name: String,
    pub error: Error,
}

/// The observable result of a batch apply. A failed batch still carries the names of
/// everything created before the failure; nothing is rolled back.
#[derive(Debug)]
pub struct BatchOutcome {
    pub created: Vec<String>,
    pub failure: Option<BatchFailure>,
}

impl BatchOutcome {
    pub fn is_complete(&self) -> bool {
        self.failure.is_none()
    }
}

/// Creates each config in order, pacing successive calls. Stops at the first failure
/// and returns the partial result instead of exiting, so callers decide how to map
/// it to an exit status.
pub async fn apply_batch<C>(
    client: &C,
    label: &str,
    crds: Vec<C::Crd>,
    pacing: Pacing,
) -> BatchOutcome
where
    C: CrdClient + Sync,
{
    let mut rng = StdRng::from_entropy();
    let mut created = Vec::new();
    let total = crds.len();
    for (index, crd) in crds.into_iter().enumerate() {
        let name = crd.meta().name.clone().unwrap_or_default();
        match client.create(crd).await {
            Ok(_) => {
                info!("created {} '{}' ({}/{})", label, name, index + 1, total);
                created.push(name);
                tokio::time::sleep(pacing.delay(&mut rng)).await;
            }
            Err(error) => {
                error!("failed to create {} '{}': {}", label, name, error);
                return BatchOutcome {
                    created,
                    failure: Some(BatchFailure { name, error }),
                };
            }
        }
    }
    BatchOutcome { created, failure: None }
}

/// Best-effort status population. A failed patch is logged and the loop continues;
/// unlike `apply_batch` this never aborts the run, a mock component without status is
/// still usable in the UI.
pub async fn patch_status_batch<C>(
    client: &C,
    label: &str,
    statuses: Vec<(String, C::CrdStatus)>,
) -> usize
where
    C: CrdClient + Sync,
{
    let mut patched = 0;
    for (name, status) in statuses {
        match client.patch_status(&name, status).await {
            Ok(_) => {
                info!("patched status of {} '{}'", label, name);
                patched += 1;
            }
            Err(error) => {
                warn!("unable to patch status of {} '{}': {}", label, name, error);
            }
        }
    }
    patched
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn delay_stays_within_bounds() {
        let pacing = Pacing::new(Duration::from_millis(100));
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let delay = pacing.delay(&mut rng);
            assert!(delay >= Duration::from_millis(100));
            assert!(delay <= Duration::from_millis(200));
        }
    }

    #[test]
    fn zero_base_means_no_pause() {
        let pacing = Pacing::new(Duration::ZERO);
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(pacing.delay(&mut rng), Duration::ZERO);
    }

    #[test]
    fn outcome_completeness() {
        let complete = BatchOutcome {
            created: vec!["a".to_string()],
            failure: None,
        };
        assert!(complete.is_complete());
    }
}
