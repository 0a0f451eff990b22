/*!

This library provides the custom resource definitions used by the loadsys generators,
their API clients, the config materializer that stamps out uniquely named copies of
each resource template, and the paced batch applier.

!*/

#![deny(
    clippy::expect_used,
    clippy::get_unwrap,
    clippy::panic,
    clippy::panic_in_result_fn,
    clippy::panicking_unwrap,
    clippy::unwrap_in_result,
    clippy::unwrap_used
)]

pub use application::{Application, ApplicationSpec};
pub use apply::{apply_batch, patch_status_batch, BatchFailure, BatchOutcome, Pacing};
pub use component::{
    Component, ComponentSource, ComponentSpec, ComponentStatus, GitSource, SourceVersion,
    SourceVersionStatus,
};
pub use materialize::{random_suffix, Materializer};
pub use mock::{mock_status, MockShape, MOCK_SHAPE_COUNT};
pub use namespace::current_namespace;
pub use release::{Release, ReleaseSpec};
pub use scenario::{
    IntegrationTestScenario, IntegrationTestScenarioSpec, ResolverParam, ResolverRef,
};

mod application;
mod apply;
pub mod clients;
mod component;
pub mod constants;
mod materialize;
mod mock;
mod namespace;
mod release;
mod scenario;
