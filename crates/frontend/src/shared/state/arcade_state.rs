use contracts::domain::a001_game_artifact::{inject_base_tag, ModelVariant, ERROR_PLACEHOLDER};
use contracts::usecases::u501_remix_artifact::RemixRequest;
use std::collections::HashMap;

pub const LOADING_INITIAL: &str = "ACCESSIONING ARTIFACT...";
pub const LOADING_SWITCH: &str = "RETRIEVING ARCHIVE...";
pub const LOADING_REMIX: &str = "CALCULATING NEW TRAJECTORY...";

/// Метка запущенной загрузки артефакта
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    pub generation: u64,
    pub variant: ModelVariant,
}

/// Метка запущенного remix вместе с телом запроса
#[derive(Debug, Clone, PartialEq)]
pub struct RemixTicket {
    pub generation: u64,
    pub request: RemixRequest,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemixOutcome {
    Applied,
    Failed(String),
    /// A newer load or remix started meanwhile; nothing was committed
    Stale,
}

/// Состояние приложения: активный вариант, артефакт, загрузка, модальные окна.
///
/// Every async operation bumps `generation`; a completion commits only if its
/// ticket still carries the latest generation.
#[derive(Debug, Clone)]
pub struct ArcadeState {
    pub variant: ModelVariant,
    pub artifact: Option<String>,
    pub is_loading: bool,
    pub loading_text: &'static str,
    pub show_briefing: bool,
    pub show_metadata: bool,
    pub show_remix: bool,
    generation: u64,
    /// Переписанные артефакты по URL, на время сессии
    cache: HashMap<&'static str, String>,
}

impl Default for ArcadeState {
    fn default() -> Self {
        Self::new(ModelVariant::default())
    }
}

impl ArcadeState {
    pub fn new(variant: ModelVariant) -> Self {
        Self {
            variant,
            artifact: None,
            is_loading: true,
            loading_text: LOADING_INITIAL,
            show_briefing: true,
            show_metadata: false,
            show_remix: false,
            generation: 0,
            cache: HashMap::new(),
        }
    }

    /// Игра должна стоять на паузе, пока открыто любое модальное окно
    pub fn overlay_visible(&self) -> bool {
        self.show_briefing || self.show_metadata || self.show_remix
    }

    /// Ключ iframe: вариант + длина разметки. Смена ключа пересоздаёт iframe.
    pub fn frame_key(&self) -> Option<String> {
        self.artifact
            .as_ref()
            .map(|html| format!("{}{}", self.variant.code(), html.len()))
    }

    fn next_generation(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    fn is_current(&self, generation: u64) -> bool {
        generation == self.generation
    }

    /// Первая загрузка при монтировании приложения
    pub fn begin_initial_load(&mut self) -> Option<LoadTicket> {
        self.begin_load(LOADING_INITIAL)
    }

    /// Переключить вариант. `None`, если вариант уже активен или артефакт взят из кэша.
    pub fn switch_variant(&mut self, variant: ModelVariant) -> Option<LoadTicket> {
        if self.variant == variant {
            return None;
        }
        self.variant = variant;
        self.begin_load(LOADING_SWITCH)
    }

    fn begin_load(&mut self, loading_text: &'static str) -> Option<LoadTicket> {
        // Старый артефакт сбрасывается до появления нового
        self.artifact = None;
        // Новое поколение и при попадании в кэш: выполняющийся fetch становится устаревшим
        let generation = self.next_generation();

        if let Some(cached) = self.cache.get(self.variant.artifact_path()) {
            self.artifact = Some(cached.clone());
            self.is_loading = false;
            return None;
        }

        self.is_loading = true;
        self.loading_text = loading_text;
        Some(LoadTicket {
            generation,
            variant: self.variant,
        })
    }

    /// Результат загрузки: сырой HTML или текст ошибки. `false` — результат устарел.
    pub fn complete_load(&mut self, ticket: LoadTicket, result: Result<String, String>) -> bool {
        if !self.is_current(ticket.generation) {
            return false;
        }

        let html = match result {
            Ok(raw) => {
                let html = inject_base_tag(&raw);
                self.cache
                    .insert(ticket.variant.artifact_path(), html.clone());
                html
            }
            Err(_) => ERROR_PLACEHOLDER.to_string(),
        };

        self.artifact = Some(html);
        self.is_loading = false;
        true
    }

    /// Начать remix. Без загруженного артефакта — no-op.
    pub fn begin_remix(&mut self, instruction: impl Into<String>) -> Option<RemixTicket> {
        let html = self.artifact.clone()?;
        let generation = self.next_generation();

        self.is_loading = true;
        self.loading_text = LOADING_REMIX;
        self.show_remix = false;

        Some(RemixTicket {
            generation,
            request: RemixRequest {
                variant: self.variant,
                html,
                instruction: instruction.into(),
            },
        })
    }

    /// Результат remix. При ошибке артефакт остаётся прежним.
    pub fn complete_remix(
        &mut self,
        ticket: &RemixTicket,
        result: Result<String, String>,
    ) -> RemixOutcome {
        if !self.is_current(ticket.generation) {
            return RemixOutcome::Stale;
        }

        self.is_loading = false;
        match result {
            Ok(html) => {
                self.artifact = Some(html);
                RemixOutcome::Applied
            }
            Err(e) => RemixOutcome::Failed(e),
        }
    }

    pub fn dismiss_briefing(&mut self) {
        self.show_briefing = false;
    }

    pub fn set_metadata_open(&mut self, open: bool) {
        self.show_metadata = open;
    }

    pub fn set_remix_open(&mut self, open: bool) {
        self.show_remix = open;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_game_artifact::BASE_TAG;

    const GAME: &str = "<html><head><title>run</title></head><body></body></html>";

    fn loaded(variant: ModelVariant) -> ArcadeState {
        let mut state = ArcadeState::new(variant);
        let ticket = state.begin_initial_load().unwrap();
        assert!(state.complete_load(ticket, Ok(GAME.to_string())));
        state
    }

    #[test]
    fn test_initial_state() {
        let state = ArcadeState::default();
        assert_eq!(state.variant, ModelVariant::Gemini3);
        assert!(state.is_loading);
        assert_eq!(state.loading_text, LOADING_INITIAL);
        assert!(state.show_briefing);
        assert!(state.overlay_visible());
        assert_eq!(state.frame_key(), None);
    }

    #[test]
    fn test_load_injects_base_tag_once() {
        let state = loaded(ModelVariant::Gemini3);
        let html = state.artifact.as_deref().unwrap();
        assert_eq!(html.matches(BASE_TAG).count(), 1);
        assert!(!state.is_loading);

        let mut headless = ArcadeState::default();
        let ticket = headless.begin_initial_load().unwrap();
        headless.complete_load(ticket, Ok("<canvas></canvas>".to_string()));
        let html = headless.artifact.as_deref().unwrap();
        assert!(html.starts_with(BASE_TAG));
        assert_eq!(html.matches(BASE_TAG).count(), 1);
    }

    #[test]
    fn test_failed_load_shows_placeholder() {
        let mut state = ArcadeState::default();
        let ticket = state.begin_initial_load().unwrap();
        assert!(state.complete_load(ticket, Err("HTTP 404".to_string())));
        assert_eq!(state.artifact.as_deref(), Some(ERROR_PLACEHOLDER));
        assert!(!state.is_loading);
    }

    #[test]
    fn test_switch_discards_artifact_before_new_one() {
        let mut state = loaded(ModelVariant::Gemini3);
        let ticket = state.switch_variant(ModelVariant::Gemini2p5).unwrap();

        assert_eq!(state.artifact, None);
        assert!(state.is_loading);
        assert_eq!(state.loading_text, LOADING_SWITCH);
        assert_eq!(ticket.variant, ModelVariant::Gemini2p5);

        state.complete_load(ticket, Ok("<head></head>lite".to_string()));
        assert!(state.artifact.as_deref().unwrap().ends_with("lite"));
    }

    #[test]
    fn test_switch_to_active_variant_is_noop() {
        let mut state = loaded(ModelVariant::Gemini3);
        let before = state.artifact.clone();
        assert!(state.switch_variant(ModelVariant::Gemini3).is_none());
        assert_eq!(state.artifact, before);
        assert!(!state.is_loading);
    }

    #[test]
    fn test_stale_load_is_discarded() {
        let mut state = loaded(ModelVariant::Gemini3);
        let to_lite = state.switch_variant(ModelVariant::Gemini2p5).unwrap();
        // Back to gemini3 before the gemini2p5 fetch resolves: served from cache
        assert!(state.switch_variant(ModelVariant::Gemini3).is_none());
        let current = state.artifact.clone();

        assert!(!state.complete_load(to_lite, Ok("<p>lite</p>".to_string())));
        assert_eq!(state.artifact, current);
        assert_eq!(state.variant, ModelVariant::Gemini3);
    }

    #[test]
    fn test_cache_consulted_and_failures_not_cached() {
        let mut state = ArcadeState::default();
        let ticket = state.begin_initial_load().unwrap();
        state.complete_load(ticket, Err("offline".to_string()));

        let ticket = state.switch_variant(ModelVariant::Gemini2p5).unwrap();
        state.complete_load(ticket, Ok(GAME.to_string()));

        // gemini3 failed earlier, so it is fetched again
        assert!(state.switch_variant(ModelVariant::Gemini3).is_some());
        // gemini2p5 succeeded, so it comes from cache without a fetch
        let ticket = state.switch_variant(ModelVariant::Gemini2p5);
        assert!(ticket.is_none());
        assert!(!state.is_loading);
        assert_eq!(state.artifact.as_deref().unwrap().matches(BASE_TAG).count(), 1);
    }

    #[test]
    fn test_remix_without_artifact_is_noop() {
        let mut state = ArcadeState::default();
        state.set_remix_open(true);
        assert!(state.begin_remix("Visual: Red Alert").is_none());
        assert!(state.show_remix);
        assert_eq!(state.loading_text, LOADING_INITIAL);
    }

    #[test]
    fn test_remix_success_replaces_artifact() {
        let mut state = loaded(ModelVariant::Gemini3);
        state.set_remix_open(true);

        let ticket = state.begin_remix("Mechanic: 2x Speed").unwrap();
        assert!(state.is_loading);
        assert_eq!(state.loading_text, LOADING_REMIX);
        assert!(!state.show_remix);
        assert_eq!(ticket.request.variant, ModelVariant::Gemini3);
        assert_eq!(ticket.request.instruction, "Mechanic: 2x Speed");
        assert_eq!(Some(&ticket.request.html), state.artifact.as_ref());

        let outcome = state.complete_remix(&ticket, Ok("<html>fast</html>".to_string()));
        assert_eq!(outcome, RemixOutcome::Applied);
        assert_eq!(state.artifact.as_deref(), Some("<html>fast</html>"));
        assert!(!state.is_loading);
    }

    #[test]
    fn test_remix_failure_keeps_artifact_bytes() {
        let mut state = loaded(ModelVariant::Gemini3);
        let before = state.artifact.clone().unwrap();

        let ticket = state.begin_remix("Visual: Red Alert").unwrap();
        let outcome = state.complete_remix(&ticket, Err("HTTP 502".to_string()));

        assert_eq!(outcome, RemixOutcome::Failed("HTTP 502".to_string()));
        assert_eq!(state.artifact.as_deref(), Some(before.as_str()));
        assert!(!state.is_loading);
    }

    #[test]
    fn test_remix_superseded_by_switch_is_stale() {
        let mut state = loaded(ModelVariant::Gemini3);
        let remix = state.begin_remix("Visual: Red Alert").unwrap();
        let load = state.switch_variant(ModelVariant::Gemini2p5).unwrap();

        assert_eq!(
            state.complete_remix(&remix, Ok("<html>red</html>".to_string())),
            RemixOutcome::Stale
        );
        assert_eq!(state.artifact, None);
        assert!(state.is_loading);

        assert!(state.complete_load(load, Ok(GAME.to_string())));
        assert!(!state.is_loading);
    }

    #[test]
    fn test_frame_key_tracks_variant_and_length() {
        let mut state = loaded(ModelVariant::Gemini3);
        let len = state.artifact.as_ref().unwrap().len();
        assert_eq!(state.frame_key(), Some(format!("gemini3{}", len)));

        let ticket = state.begin_remix("x").unwrap();
        state.complete_remix(&ticket, Ok("<p>".to_string()));
        assert_eq!(state.frame_key().as_deref(), Some("gemini33"));
    }

    #[test]
    fn test_overlays_are_independent() {
        let mut state = ArcadeState::default();
        state.dismiss_briefing();
        assert!(!state.overlay_visible());

        state.set_metadata_open(true);
        state.set_remix_open(true);
        assert!(state.show_metadata && state.show_remix);

        state.set_metadata_open(false);
        assert!(state.overlay_visible());
        state.set_remix_open(false);
        assert!(!state.overlay_visible());
    }
}
