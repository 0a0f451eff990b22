use crate::clients::CrdClient;
use crate::IntegrationTestScenario;
use kube::Api;

/// An API client for IntegrationTestScenario CRD objects.
#[derive(Clone)]
pub struct ScenarioClient {
    api: Api<IntegrationTestScenario>,
}

impl CrdClient for ScenarioClient {
    type Crd = IntegrationTestScenario;
    type CrdStatus = ();

    fn new_from_api(api: Api<Self::Crd>) -> Self {
        Self { api }
    }

    fn kind(&self) -> &'static str {
        "integration test scenario"
    }

    fn api(&self) -> &Api<Self::Crd> {
        &self.api
    }
}
