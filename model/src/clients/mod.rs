mod application_client;
mod component_client;
mod crd_client;
mod error;
mod release_client;
mod scenario_client;

pub use application_client::ApplicationClient;
pub use component_client::ComponentClient;
pub use crd_client::CrdClient;
pub use error::{Error, Result};
pub use release_client::ReleaseClient;
pub use scenario_client::ScenarioClient;
