use crate::constants::DEFAULT_NAMESPACE;
use log::debug;

/// The namespace configured in the active kube context. Any failure to load the
/// config falls back to the literal `"default"`. The value is only a prompt default;
/// the user confirms or replaces it before anything is created, and an unreachable
/// namespace simply makes each subsequent create call fail on its own.
pub async fn current_namespace() -> String {
    match kube::Config::infer().await {
        Ok(config) => config.default_namespace,
        Err(e) => {
            debug!(
                "unable to infer kube config, falling back to '{}': {}",
                DEFAULT_NAMESPACE, e
            );
            DEFAULT_NAMESPACE.to_string()
        }
    }
}
