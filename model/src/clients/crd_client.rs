use super::error::{self, Result};
use core::fmt::Debug;
use kube::api::{Patch, PatchParams, PostParams};
use kube::Api;
use log::trace;
use serde::de::DeserializeOwned;
use serde::Serialize;
use snafu::ResultExt;

/// A trait with implementations of code that is shared between more than one CRD
/// object. Unlike a controller client, every instance is scoped to the namespace the
/// current run targets.
#[async_trait::async_trait]
pub trait CrdClient: Sized {
    type Crd: kube::Resource<DynamicType = (), Scope = k8s_openapi::NamespaceResourceScope>
        + Serialize
        + DeserializeOwned
        + Debug
        + Clone
        + Send
        + Sync;
    type CrdStatus: Serialize + Send + Sync;

    // The following need to be implemented which allows the rest of the functions to
    // have default implementations.

    fn new_from_api(api: Api<Self::Crd>) -> Self;
    fn kind(&self) -> &'static str;
    fn api(&self) -> &Api<Self::Crd>;

    async fn new_in_namespace(namespace: &str) -> Result<Self> {
        let k8s_client = kube::Client::try_default()
            .await
            .context(error::InitializationSnafu)?;
        Ok(Self::new_from_k8s_client(k8s_client, namespace))
    }

    fn new_from_k8s_client(k8s_client: kube::Client, namespace: &str) -> Self {
        Self::new_from_api(Api::<Self::Crd>::namespaced(k8s_client, namespace))
    }

    async fn create(&self, crd: Self::Crd) -> Result<Self::Crd> {
        Ok(self
            .api()
            .create(&PostParams::default(), &crd)
            .await
            .context(error::KubeApiCallSnafu {
                method: "create",
                what: self.kind(),
            })?)
    }

    /// Merge-patch the `status` subresource with a complete status payload.
    async fn patch_status<S>(&self, name: S, status: Self::CrdStatus) -> Result<Self::Crd>
    where
        S: AsRef<str> + Send,
    {
        let name = name.as_ref();
        trace!("patching status for {} '{}'", self.kind(), name);
        let patch = serde_json::json!({ "status": status });
        Ok(self
            .api()
            .patch_status(name, &PatchParams::default(), &Patch::Merge(&patch))
            .await
            .context(error::KubeApiCallForSnafu {
                operation: "patch status",
                name,
            })?)
    }
}
