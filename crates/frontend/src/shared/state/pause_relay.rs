use contracts::shared::pause_message::FrameMessage;

/// Превращает флаг "открыто модальное окно" в сообщения паузы для iframe.
///
/// Messages go out only on transitions, so each open/close pair yields
/// exactly one pause and one resume.
#[derive(Debug, Default, Clone)]
pub struct PauseRelay {
    last_sent: Option<bool>,
}

impl PauseRelay {
    /// Overlay visibility changed (or was first observed)
    pub fn observe(&mut self, paused: bool) -> Option<FrameMessage> {
        if self.last_sent == Some(paused) {
            return None;
        }
        self.last_sent = Some(paused);
        Some(FrameMessage::pause(paused))
    }

    /// A fresh document finished loading in the frame. It starts unpaused, so
    /// a pause goes out right away if an overlay is up.
    pub fn frame_loaded(&mut self, paused: bool) -> Option<FrameMessage> {
        self.last_sent = Some(paused);
        paused.then(|| FrameMessage::pause(true))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::state::ArcadeState;

    #[test]
    fn test_dismissing_briefing_sends_single_resume() {
        let mut state = ArcadeState::default();
        let mut relay = PauseRelay::default();
        let mut sent = Vec::new();

        sent.extend(relay.frame_loaded(state.overlay_visible()));
        sent.extend(relay.observe(state.overlay_visible()));

        state.dismiss_briefing();
        sent.extend(relay.observe(state.overlay_visible()));
        sent.extend(relay.observe(state.overlay_visible()));

        let flags: Vec<bool> = sent.iter().map(FrameMessage::is_paused).collect();
        assert_eq!(flags, vec![true, false]);
    }

    #[test]
    fn test_frame_loaded_without_overlay_sends_nothing() {
        let mut relay = PauseRelay::default();
        assert_eq!(relay.frame_loaded(false), None);
        assert_eq!(relay.observe(false), None);
        assert_eq!(relay.observe(true), Some(FrameMessage::pause(true)));
    }

    #[test]
    fn test_reloaded_frame_is_paused_again() {
        let mut relay = PauseRelay::default();
        assert_eq!(relay.observe(true), Some(FrameMessage::pause(true)));
        // The frame was recreated while the overlay stayed open
        assert_eq!(relay.frame_loaded(true), Some(FrameMessage::pause(true)));
        assert_eq!(relay.observe(true), None);
    }
}
