use crate::component::{ComponentSource, GitSource};
use crate::constants::{
    ANNOTATION_GENERATED_BY, APPLICATION_PREFIX, COMPONENT_PREFIX, GENERATOR_NAME,
    MOCK_COMPONENT_PREFIX, NAME_SUFFIX_MAX, NAME_SUFFIX_MIN, RELEASE_PREFIX, SCENARIO_PREFIX,
};
use crate::mock::MockShape;
use crate::{
    Application, ApplicationSpec, Component, ComponentSpec, IntegrationTestScenario,
    IntegrationTestScenarioSpec, Release, ReleaseSpec, ResolverParam, ResolverRef,
};
use maplit::btreemap;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SUFFIX_CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// A lowercase alphanumeric string whose length is drawn uniformly from
/// `[min, max]`. Not cryptographically secure; a suffix collision only costs one
/// failed create call.
pub fn random_suffix<R: Rng>(rng: &mut R, min: usize, max: usize) -> String {
    let len = rng.gen_range(min..=max);
    (0..len)
        .map(|_| SUFFIX_CHARSET[rng.gen_range(0..SUFFIX_CHARSET.len())] as char)
        .collect()
}

/// Builds uniquely named resource configs from the static per-kind templates.
///
/// Every output is an independent owned value, so mutating one config can never be
/// observed through another config or through the template. Names are
/// `<prefix>-<index>-<suffix>`: the index is monotonic within one batch and the
/// random suffix is what keeps names from colliding across back-to-back runs.
pub struct Materializer<R = StdRng> {
    namespace: String,
    suffix_min: usize,
    suffix_max: usize,
    rng: R,
}

impl Materializer<StdRng> {
    pub fn new<S: Into<String>>(namespace: S) -> Self {
        Self::with_rng(namespace, StdRng::from_entropy())
    }
}

impl<R: Rng> Materializer<R> {
    pub fn with_rng<S: Into<String>>(namespace: S, rng: R) -> Self {
        Self {
            namespace: namespace.into(),
            suffix_min: NAME_SUFFIX_MIN,
            suffix_max: NAME_SUFFIX_MAX,
            rng,
        }
    }

    pub fn suffix_bounds(mut self, min: usize, max: usize) -> Self {
        self.suffix_min = min;
        self.suffix_max = max;
        self
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    fn unique_name(&mut self, prefix: &str, index: usize) -> String {
        let suffix = random_suffix(&mut self.rng, self.suffix_min, self.suffix_max);
        if suffix.is_empty() {
            format!("{}-{}", prefix, index)
        } else {
            format!("{}-{}-{}", prefix, index, suffix)
        }
    }

    fn decorate<T: kube::Resource>(&self, crd: &mut T) {
        let meta = crd.meta_mut();
        meta.namespace = Some(self.namespace.clone());
        meta.annotations = Some(btreemap! {
            ANNOTATION_GENERATED_BY.to_string() => GENERATOR_NAME.to_string(),
        });
    }

    pub fn applications(&mut self, count: usize) -> Vec<Application> {
        (0..count)
            .map(|index| {
                let name = self.unique_name(APPLICATION_PREFIX, index);
                let mut app = Application::new(
                    &name,
                    ApplicationSpec {
                        display_name: name.clone(),
                    },
                );
                self.decorate(&mut app);
                app
            })
            .collect()
    }

    pub fn components(&mut self, count: usize, application: &str) -> Vec<Component> {
        (0..count)
            .map(|index| {
                let name = self.unique_name(COMPONENT_PREFIX, index);
                let mut component = Component::new(
                    &name,
                    ComponentSpec {
                        component_name: name.clone(),
                        application: application.to_string(),
                        source: Some(ComponentSource {
                            git: GitSource {
                                url: "https://github.com/devfile-samples/devfile-sample-code-with-quarkus".to_string(),
                                revision: None,
                            },
                        }),
                        source_versions: Vec::new(),
                        action: None,
                        pipeline: None,
                    },
                );
                self.decorate(&mut component);
                component
            })
            .collect()
    }

    pub fn scenarios(&mut self, count: usize, application: &str) -> Vec<IntegrationTestScenario> {
        (0..count)
            .map(|index| {
                let name = self.unique_name(SCENARIO_PREFIX, index);
                let mut scenario = IntegrationTestScenario::new(
                    &name,
                    IntegrationTestScenarioSpec {
                        application: application.to_string(),
                        resolver_ref: ResolverRef {
                            resolver: "git".to_string(),
                            params: vec![
                                ResolverParam {
                                    name: "url".to_string(),
                                    value: "https://github.com/konflux-ci/integration-examples"
                                        .to_string(),
                                },
                                ResolverParam {
                                    name: "revision".to_string(),
                                    value: "main".to_string(),
                                },
                                ResolverParam {
                                    name: "pathInRepo".to_string(),
                                    value: "pipelines/integration_pipeline_pass.yaml".to_string(),
                                },
                            ],
                        },
                    },
                );
                self.decorate(&mut scenario);
                scenario
            })
            .collect()
    }

    pub fn releases(&mut self, count: usize, release_plan: &str, snapshot: &str) -> Vec<Release> {
        (0..count)
            .map(|index| {
                let name = self.unique_name(RELEASE_PREFIX, index);
                let mut release = Release::new(
                    &name,
                    ReleaseSpec {
                        release_plan: release_plan.to_string(),
                        snapshot: snapshot.to_string(),
                    },
                );
                self.decorate(&mut release);
                release
            })
            .collect()
    }

    /// Mock components cycle through the six spec shapes by index.
    pub fn mock_components(&mut self, count: usize, application: &str) -> Vec<Component> {
        (0..count)
            .map(|index| {
                let name = self.unique_name(MOCK_COMPONENT_PREFIX, index);
                let mut component =
                    Component::new(&name, MockShape::for_index(index).spec(&name, application));
                self.decorate(&mut component);
                component
            })
            .collect()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::constants::{SUFFIX_DEFAULT_MAX, SUFFIX_DEFAULT_MIN};
    use std::collections::HashSet;

    fn test_rng() -> StdRng {
        StdRng::seed_from_u64(118)
    }

    #[test]
    fn suffix_length_and_charset() {
        let mut rng = test_rng();
        for _ in 0..500 {
            let suffix = random_suffix(&mut rng, SUFFIX_DEFAULT_MIN, SUFFIX_DEFAULT_MAX);
            assert!(suffix.len() <= SUFFIX_DEFAULT_MAX);
            assert!(suffix
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
        }
    }

    #[test]
    fn suffix_respects_caller_bounds() {
        let mut rng = test_rng();
        for _ in 0..500 {
            let suffix = random_suffix(&mut rng, 3, 5);
            assert!((3..=5).contains(&suffix.len()));
        }
    }

    #[test]
    fn names_are_pairwise_distinct() {
        let mut materializer = Materializer::with_rng("load-test", test_rng());
        let apps = materializer.applications(50);
        let names: HashSet<_> = apps
            .iter()
            .map(|a| a.metadata.name.clone().unwrap())
            .collect();
        assert_eq!(names.len(), 50);
    }

    #[test]
    fn configs_do_not_alias() {
        let mut materializer = Materializer::with_rng("load-test", test_rng());
        let mut apps = materializer.applications(3);
        let before = apps[1].clone();
        apps[0].spec.display_name = "mutated".to_string();
        apps[0].metadata.namespace = Some("elsewhere".to_string());
        assert_eq!(apps[1], before);
    }

    #[test]
    fn namespace_is_applied_uniformly() {
        let mut materializer = Materializer::with_rng("user-tenant", test_rng());
        for release in materializer.releases(5, "my-plan", "my-snapshot") {
            assert_eq!(release.metadata.namespace.as_deref(), Some("user-tenant"));
            assert_eq!(release.spec.release_plan, "my-plan");
            assert_eq!(release.spec.snapshot, "my-snapshot");
        }
    }

    #[test]
    fn names_follow_prefix_index_suffix_rule() {
        let mut materializer = Materializer::with_rng("load-test", test_rng());
        let components = materializer.components(4, "my-app");
        for (index, component) in components.iter().enumerate() {
            let name = component.metadata.name.clone().unwrap();
            let expected_prefix = format!("{}-{}-", COMPONENT_PREFIX, index);
            assert!(
                name.starts_with(&expected_prefix),
                "{} does not start with {}",
                name,
                expected_prefix
            );
            assert_eq!(component.spec.component_name, name);
        }
    }

    #[test]
    fn mock_components_cycle_shapes() {
        let mut materializer = Materializer::with_rng("load-test", test_rng());
        let mocks = materializer.mock_components(12, "my-app");
        assert_eq!(mocks[0].spec.source_versions.len(), 0);
        assert_eq!(mocks[1].spec.source_versions.len(), 1);
        assert_eq!(mocks[2].spec.source_versions.len(), 3);
        assert!(mocks[3].spec.action.is_some());
        assert!(mocks[4].spec.pipeline.is_some());
        assert_eq!(mocks[5].spec.source_versions.len(), 10);
        // period 6
        assert_eq!(
            mocks[6].spec.source_versions.len(),
            mocks[0].spec.source_versions.len()
        );
        assert_eq!(
            mocks[11].spec.source_versions.len(),
            mocks[5].spec.source_versions.len()
        );
    }
}
