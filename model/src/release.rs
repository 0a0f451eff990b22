use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// An AppStudio Release. The `CustomResource` derive also produces a struct named
/// `Release` which represents a release CRD object in the k8s API.
#[derive(Clone, CustomResource, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[kube(
    derive = "Default",
    derive = "PartialEq",
    group = "appstudio.redhat.com",
    kind = "Release",
    namespaced,
    plural = "releases",
    singular = "release",
    version = "v1alpha1"
)]
#[serde(rename_all = "camelCase")]
pub struct ReleaseSpec {
    /// The name of the release plan governing this release.
    pub release_plan: String,
    /// The name of the snapshot being released.
    pub snapshot: String,
}
