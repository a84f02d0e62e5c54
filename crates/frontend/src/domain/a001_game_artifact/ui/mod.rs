pub mod display_surface;
pub mod loading_overlay;
pub mod metadata_modal;
pub mod mission_briefing;

pub use display_surface::DisplaySurface;
pub use metadata_modal::MetadataModal;
pub use mission_briefing::MissionBriefing;
