use crate::layout::global_context::use_app_context;
use crate::shared::modal::Modal;
use contracts::domain::a001_game_artifact::prompts::generation_prompt;
use leptos::prelude::*;
use thaw::*;

/// Промпт, которым был сгенерирован артефакт активного варианта
#[component]
pub fn MetadataModal() -> impl IntoView {
    let ctx = use_app_context();
    let close = Callback::new(move |_| ctx.close_metadata());

    view! {
        <Show when=move || ctx.show_metadata()>
            <Modal label="Archival Data" title="Source Metadata" on_close=close>
                <p class="modal-card__body">
                    "The following generative instructions were issued to the model to synthesize this artifact."
                </p>
                <pre class="modal-card__prompt">{move || generation_prompt(ctx.variant())}</pre>
                <Button on_click=move |_| close.run(())>
                    "Close Record"
                </Button>
            </Modal>
        </Show>
    }
}
