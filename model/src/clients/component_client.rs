use crate::clients::CrdClient;
use crate::{Component, ComponentStatus};
use kube::Api;

/// An API client for Component CRD objects. This is the only client whose status
/// subresource is written by the generators (see the mock component generator).
#[derive(Clone)]
pub struct ComponentClient {
    api: Api<Component>,
}

impl CrdClient for ComponentClient {
    type Crd = Component;
    type CrdStatus = ComponentStatus;

    fn new_from_api(api: Api<Self::Crd>) -> Self {
        Self { api }
    }

    fn kind(&self) -> &'static str {
        "component"
    }

    fn api(&self) -> &Api<Self::Crd> {
        &self.api
    }
}
