use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// An AppStudio Application. The `CustomResource` derive also produces a struct named
/// `Application` which represents an application CRD object in the k8s API.
#[derive(Clone, CustomResource, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[kube(
    derive = "Default",
    derive = "PartialEq",
    group = "appstudio.redhat.com",
    kind = "Application",
    namespaced,
    plural = "applications",
    singular = "application",
    version = "v1alpha1"
)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationSpec {
    /// The name shown for this application in the UI.
    pub display_name: String,
}
