use crate::component::{ComponentSpec, ComponentStatus, SourceVersion, SourceVersionStatus};

/// The number of distinct mock component spec shapes. Shapes repeat with this period
/// as the batch index grows.
pub const MOCK_SHAPE_COUNT: usize = 6;

/// The spec shapes exercised by the mock component generator. The shape used for a
/// given component is a pure function of its batch index, so a run of N mock
/// components walks every UI edge case in a fixed rotation and tests can predict the
/// exact shape at each index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockShape {
    /// A component with no source versions at all.
    NoVersions,
    /// Exactly one source version.
    SingleVersion,
    /// A few source versions.
    ManyVersions,
    /// Two source versions plus an `action` field.
    WithAction,
    /// Two source versions plus a `pipeline` field.
    WithPipeline,
    /// Ten source versions, for list rendering stress.
    VersionStress,
}

impl MockShape {
    pub fn for_index(index: usize) -> Self {
        match index % MOCK_SHAPE_COUNT {
            0 => MockShape::NoVersions,
            1 => MockShape::SingleVersion,
            2 => MockShape::ManyVersions,
            3 => MockShape::WithAction,
            4 => MockShape::WithPipeline,
            _ => MockShape::VersionStress,
        }
    }

    pub fn version_count(&self) -> usize {
        match self {
            MockShape::NoVersions => 0,
            MockShape::SingleVersion => 1,
            MockShape::ManyVersions => 3,
            MockShape::WithAction | MockShape::WithPipeline => 2,
            MockShape::VersionStress => 10,
        }
    }

    /// Builds the component spec for this shape.
    pub fn spec(&self, component_name: &str, application: &str) -> ComponentSpec {
        let source_versions = (0..self.version_count())
            .map(|v| SourceVersion {
                version: format!("1.{}.0", v),
                url: format!("https://github.com/example/{}", component_name),
            })
            .collect();
        ComponentSpec {
            component_name: component_name.to_string(),
            application: application.to_string(),
            source: None,
            source_versions,
            action: match self {
                MockShape::WithAction => Some("import".to_string()),
                _ => None,
            },
            pipeline: match self {
                MockShape::WithPipeline => Some("docker-build".to_string()),
                _ => None,
            },
        }
    }
}

// Canned status text rotated by batch index. The moduli are coprime with the shape
// period so neighboring components rarely look identical in the UI.
const STATUS_MESSAGES: [&str; 7] = [
    "Component is up to date",
    "Update available",
    "Source repository unreachable",
    "Build pipeline not yet configured",
    "Awaiting first build",
    "Nudged by dependency update",
    "Deprecated base image detected",
];

const VERSION_MESSAGES: [&str; 5] = [
    "version built and tested",
    "version pending build",
    "version failed validation",
    "version superseded",
    "version imported from source",
];

/// The status payload written for the mock component at `index`. Every field is a
/// pure function of the index (`index % 7`, `index % 5`, `index % 2`).
pub fn mock_status(index: usize, spec: &ComponentSpec) -> ComponentStatus {
    let onboarding_status = if index % 2 == 0 {
        "Onboarded"
    } else {
        "AwaitingOnboarding"
    };
    ComponentStatus {
        message: Some(STATUS_MESSAGES[index % STATUS_MESSAGES.len()].to_string()),
        source_versions: spec
            .source_versions
            .iter()
            .map(|sv| SourceVersionStatus {
                version: sv.version.clone(),
                message: VERSION_MESSAGES[index % VERSION_MESSAGES.len()].to_string(),
                onboarding_status: onboarding_status.to_string(),
            })
            .collect(),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn shape_selection_is_periodic() {
        for i in 0..36 {
            assert_eq!(MockShape::for_index(i), MockShape::for_index(i + 6));
        }
    }

    #[test]
    fn shape_rotation_order() {
        assert_eq!(MockShape::for_index(0), MockShape::NoVersions);
        assert_eq!(MockShape::for_index(1), MockShape::SingleVersion);
        assert_eq!(MockShape::for_index(2), MockShape::ManyVersions);
        assert_eq!(MockShape::for_index(3), MockShape::WithAction);
        assert_eq!(MockShape::for_index(4), MockShape::WithPipeline);
        assert_eq!(MockShape::for_index(5), MockShape::VersionStress);
    }

    #[test]
    fn version_counts_match_shapes() {
        assert_eq!(MockShape::NoVersions.spec("c", "a").source_versions.len(), 0);
        assert_eq!(MockShape::SingleVersion.spec("c", "a").source_versions.len(), 1);
        assert_eq!(MockShape::ManyVersions.spec("c", "a").source_versions.len(), 3);
        assert_eq!(MockShape::VersionStress.spec("c", "a").source_versions.len(), 10);
    }

    #[test]
    fn action_and_pipeline_fields() {
        let with_action = MockShape::WithAction.spec("c", "a");
        assert!(with_action.action.is_some());
        assert!(with_action.pipeline.is_none());

        let with_pipeline = MockShape::WithPipeline.spec("c", "a");
        assert!(with_pipeline.action.is_none());
        assert!(with_pipeline.pipeline.is_some());
    }

    #[test]
    fn status_is_deterministic_in_index() {
        let spec = MockShape::ManyVersions.spec("c", "a");
        let a = mock_status(9, &spec);
        let b = mock_status(9, &spec);
        assert_eq!(a, b);

        // index 9: message 9 % 7 = 2, version message 9 % 5 = 4, onboarding 9 % 2 = 1
        assert_eq!(a.message.as_deref(), Some("Source repository unreachable"));
        assert_eq!(a.source_versions.len(), 3);
        for sv in &a.source_versions {
            assert_eq!(sv.message, "version imported from source");
            assert_eq!(sv.onboarding_status, "AwaitingOnboarding");
        }
    }

    #[test]
    fn status_covers_every_version() {
        let spec = MockShape::VersionStress.spec("c", "a");
        let status = mock_status(0, &spec);
        assert_eq!(status.source_versions.len(), 10);
        assert_eq!(status.source_versions[0].onboarding_status, "Onboarded");
    }
}
