pub mod presets;
pub mod request;
pub mod response;

pub use presets::{RemixPreset, REMIX_PRESETS};
pub use request::RemixRequest;
pub use response::RemixResponse;

use crate::usecases::common::UseCaseMetadata;

pub struct RemixArtifact;

impl UseCaseMetadata for RemixArtifact {
    fn usecase_index() -> &'static str {
        "u501"
    }

    fn usecase_name() -> &'static str {
        "remix_artifact"
    }

    fn display_name() -> &'static str {
        "Modify Artifact"
    }
}
