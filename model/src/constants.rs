/// Helper macro to avoid retyping the base domain-like name of the platform API group
/// when creating further string constants from it. When given no parameters, this
/// returns the base group name. When given a string literal parameter it adds
/// `/parameter` to the end.
macro_rules! appstudio {
    () => {
        "appstudio.redhat.com"
    };
    ($s:literal) => {
        concat!(appstudio!(), "/", $s)
    };
}

// System identifiers
pub const API_GROUP: &str = appstudio!();
pub const API_VERSION: &str = appstudio!("v1alpha1");

/// Fallback when no namespace can be read from the active kube context.
pub const DEFAULT_NAMESPACE: &str = "default";

// Name prefixes, one per generator.
pub const APPLICATION_PREFIX: &str = "test-app";
pub const COMPONENT_PREFIX: &str = "test-comp";
pub const SCENARIO_PREFIX: &str = "test-its";
pub const RELEASE_PREFIX: &str = "test-release";
pub const MOCK_COMPONENT_PREFIX: &str = "mock-comp";

// Annotation marking resources produced by the generators so they can be found and
// cleaned up by hand afterwards.
pub const ANNOTATION_GENERATED_BY: &str = appstudio!("generated-by");
pub const GENERATOR_NAME: &str = "loadsys";

// Default bounds for the random name suffix generator.
pub const SUFFIX_DEFAULT_MIN: usize = 0;
pub const SUFFIX_DEFAULT_MAX: usize = 40;

// Bounds the materializer actually uses for resource names. Short enough to stay
// within the 253 character object name limit with any prefix, long enough that
// collisions across runs are unlikely.
pub const NAME_SUFFIX_MIN: usize = 5;
pub const NAME_SUFFIX_MAX: usize = 8;

/// Creating more than this many resources in one run requires explicit confirmation.
pub const BULK_SAFETY_THRESHOLD: usize = 10;

/// Base pause between successive create calls. The actual pause is drawn uniformly
/// from `[base, 2 * base]`.
pub const DEFAULT_APPLY_DELAY_MS: u64 = 10_000;
