use crate::domain::a001_game_artifact::ui::{DisplaySurface, MetadataModal, MissionBriefing};
use crate::layout::global_context::AppGlobalContext;
use crate::layout::header::Header;
use crate::usecases::u501_remix_artifact::RemixModal;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the AppGlobalContext store to the whole app via context.
    let ctx = AppGlobalContext::new();
    provide_context(ctx);

    // Load the default variant once on mount
    ctx.start();

    let theme = RwSignal::new(Theme::dark());

    view! {
        <ConfigProvider theme>
            <div class="app">
                <Header />
                <DisplaySurface />
                <MissionBriefing />
                <MetadataModal />
                <RemixModal />
            </div>
        </ConfigProvider>
    }
}
