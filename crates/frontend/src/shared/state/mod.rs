pub mod arcade_state;
pub mod pause_relay;

pub use arcade_state::{ArcadeState, LoadTicket, RemixOutcome, RemixTicket};
pub use pause_relay::PauseRelay;
