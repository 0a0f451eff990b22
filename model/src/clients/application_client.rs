use crate::clients::CrdClient;
use crate::Application;
use kube::Api;

/// An API client for Application CRD objects.
///
/// # Example
///
/// ```
///# use loadsys_model::clients::{ApplicationClient, CrdClient};
///# async fn no_run() {
/// let client = ApplicationClient::new_in_namespace("my-tenant").await.unwrap();
///# }
/// ```
#[derive(Clone)]
pub struct ApplicationClient {
    api: Api<Application>,
}

impl CrdClient for ApplicationClient {
    type Crd = Application;
    type CrdStatus = ();

    fn new_from_api(api: Api<Self::Crd>) -> Self {
        Self { api }
    }

    fn kind(&self) -> &'static str {
        "application"
    }

    fn api(&self) -> &Api<Self::Crd> {
        &self.api
    }
}
