use crate::domain::a001_game_artifact::api::fetch_artifact;
use crate::shared::state::{ArcadeState, LoadTicket, RemixOutcome, RemixTicket};
use crate::usecases::u501_remix_artifact::api::remix_artifact;
use contracts::domain::a001_game_artifact::ModelVariant;
use leptos::prelude::*;
use leptos::task::spawn_local;

pub const REMIX_FAILED_ALERT: &str = "Remix failed. Please try again.";

/// Глобальное состояние приложения, доступное через context.
///
/// All mutations go through the named actions below; components only read.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    state: RwSignal<ArcadeState>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(ArcadeState::default()),
        }
    }

    pub fn variant(&self) -> ModelVariant {
        self.state.with(|s| s.variant)
    }

    pub fn artifact_untracked(&self) -> Option<String> {
        self.state.with_untracked(|s| s.artifact.clone())
    }

    pub fn frame_key(&self) -> Option<String> {
        self.state.with(|s| s.frame_key())
    }

    pub fn is_loading(&self) -> bool {
        self.state.with(|s| s.is_loading)
    }

    pub fn loading_text(&self) -> &'static str {
        self.state.with(|s| s.loading_text)
    }

    pub fn show_briefing(&self) -> bool {
        self.state.with(|s| s.show_briefing)
    }

    pub fn show_metadata(&self) -> bool {
        self.state.with(|s| s.show_metadata)
    }

    pub fn show_remix(&self) -> bool {
        self.state.with(|s| s.show_remix)
    }

    pub fn overlay_visible(&self) -> bool {
        self.state.with(|s| s.overlay_visible())
    }

    /// Первая загрузка артефакта активного варианта
    pub fn start(&self) {
        if let Some(ticket) = self.state.try_update(|s| s.begin_initial_load()).flatten() {
            self.spawn_load(ticket);
        }
    }

    pub fn switch_variant(&self, variant: ModelVariant) {
        match self.state.try_update(|s| s.switch_variant(variant)).flatten() {
            Some(ticket) => self.spawn_load(ticket),
            None => log::debug!("switch to {}: no fetch needed", variant),
        }
    }

    fn spawn_load(&self, ticket: LoadTicket) {
        let state = self.state;
        spawn_local(async move {
            let path = ticket.variant.artifact_path();
            let result = fetch_artifact(path).await;
            if let Err(e) = &result {
                log::error!("{}", e);
            }

            let committed = state
                .try_update(|s| s.complete_load(ticket, result))
                .unwrap_or(false);
            if committed {
                log::info!("Artifact {} loaded", path);
            } else {
                log::debug!("Discarded stale load of {} (gen {})", path, ticket.generation);
            }
        });
    }

    /// Remix активного артефакта; без артефакта ничего не делает
    pub fn remix(&self, instruction: String) {
        let Some(ticket) = self.state.try_update(|s| s.begin_remix(instruction)).flatten() else {
            log::warn!("Remix requested with no artifact loaded");
            return;
        };
        self.spawn_remix(ticket);
    }

    fn spawn_remix(&self, ticket: RemixTicket) {
        let state = self.state;
        spawn_local(async move {
            let result = remix_artifact(&ticket.request).await.map(|r| {
                log::info!("Remix produced by {} ({} bytes)", r.model, r.html.len());
                r.html
            });

            let outcome = state
                .try_update(|s| s.complete_remix(&ticket, result))
                .unwrap_or(RemixOutcome::Stale);

            match outcome {
                RemixOutcome::Applied => {}
                RemixOutcome::Stale => {
                    log::debug!("Discarded stale remix (gen {})", ticket.generation)
                }
                RemixOutcome::Failed(e) => {
                    log::error!("Remix failed: {}", e);
                    alert(REMIX_FAILED_ALERT);
                }
            }
        });
    }

    pub fn dismiss_briefing(&self) {
        self.state.update(|s| s.dismiss_briefing());
    }

    pub fn open_metadata(&self) {
        self.state.update(|s| s.set_metadata_open(true));
    }

    pub fn close_metadata(&self) {
        self.state.update(|s| s.set_metadata_open(false));
    }

    pub fn open_remix(&self) {
        self.state.update(|s| s.set_remix_open(true));
    }

    pub fn close_remix(&self) {
        self.state.update(|s| s.set_remix_open(false));
    }
}

fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.alert_with_message(message) {
            log::error!("alert failed: {:?}", e);
        }
    }
}

pub fn use_app_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext context not found")
}
