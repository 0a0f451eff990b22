use crate::clients::CrdClient;
use crate::Release;
use kube::Api;

/// An API client for Release CRD objects.
#[derive(Clone)]
pub struct ReleaseClient {
    api: Api<Release>,
}

impl CrdClient for ReleaseClient {
    type Crd = Release;
    type CrdStatus = ();

    fn new_from_api(api: Api<Self::Crd>) -> Self {
        Self { api }
    }

    fn kind(&self) -> &'static str {
        "release"
    }

    fn api(&self) -> &Api<Self::Crd> {
        &self.api
    }
}
