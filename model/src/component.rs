use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// An AppStudio Component. The `CustomResource` derive also produces a struct named
/// `Component` which represents a component CRD object in the k8s API.
#[derive(Clone, CustomResource, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[kube(
    derive = "Default",
    derive = "PartialEq",
    group = "appstudio.redhat.com",
    kind = "Component",
    namespaced,
    plural = "components",
    singular = "component",
    status = "ComponentStatus",
    version = "v1alpha1"
)]
#[serde(rename_all = "camelCase")]
pub struct ComponentSpec {
    /// The name of the component. Matches the object name for generated components.
    pub component_name: String,
    /// The name of the owning application.
    pub application: String,
    /// Where the component is built from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<ComponentSource>,
    /// Source versions known for this component. Only populated by the mock
    /// component generator so the UI can render version lists of varying size.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub source_versions: Vec<SourceVersion>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pipeline: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Default, Eq, PartialEq, Clone, JsonSchema)]
pub struct ComponentSource {
    pub git: GitSource,
}

#[derive(Serialize, Deserialize, Debug, Default, Eq, PartialEq, Clone, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GitSource {
    /// The URL of the git repository the component is built from.
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revision: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Default, Eq, PartialEq, Clone, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SourceVersion {
    pub version: String,
    pub url: String,
}

/// The status field of the Component CRD. The mock generator writes this directly so
/// the UI has per-version onboarding information to render without a build ever
/// having run.
#[derive(Serialize, Deserialize, Debug, Default, Eq, PartialEq, Clone, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ComponentStatus {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub source_versions: Vec<SourceVersionStatus>,
}

#[derive(Serialize, Deserialize, Debug, Default, Eq, PartialEq, Clone, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SourceVersionStatus {
    pub version: String,
    pub message: String,
    pub onboarding_status: String,
}
