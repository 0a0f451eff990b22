use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// An AppStudio IntegrationTestScenario. The `CustomResource` derive also produces a
/// struct named `IntegrationTestScenario` which represents the CRD object in the
/// k8s API.
#[derive(Clone, CustomResource, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[kube(
    derive = "Default",
    derive = "PartialEq",
    group = "appstudio.redhat.com",
    kind = "IntegrationTestScenario",
    namespaced,
    plural = "integrationtestscenarios",
    singular = "integrationtestscenario",
    version = "v1alpha1"
)]
#[serde(rename_all = "camelCase")]
pub struct IntegrationTestScenarioSpec {
    /// The name of the application the scenario runs against.
    pub application: String,
    /// Where the integration pipeline definition is resolved from.
    pub resolver_ref: ResolverRef,
}

#[derive(Serialize, Deserialize, Debug, Default, Eq, PartialEq, Clone, JsonSchema)]
pub struct ResolverRef {
    pub resolver: String,
    pub params: Vec<ResolverParam>,
}

#[derive(Serialize, Deserialize, Debug, Default, Eq, PartialEq, Clone, JsonSchema)]
pub struct ResolverParam {
    pub name: String,
    pub value: String,
}
