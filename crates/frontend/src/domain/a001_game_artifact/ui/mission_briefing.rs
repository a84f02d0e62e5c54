use crate::layout::global_context::use_app_context;
use crate::shared::modal::Modal;
use leptos::prelude::*;
use thaw::*;

/// Стартовый брифинг. Пока он открыт, игра стоит на паузе.
#[component]
pub fn MissionBriefing() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <Show when=move || ctx.show_briefing()>
            <Modal label="Accession Record #003" title="The Curator's Run">
                <div class="modal-card__body">
                    <p>
                        <strong>"OBJECTIVE: "</strong>
                        "Navigate the Abyss through three eras of an artist's life (10s, 20s, 30s). "
                        "Collect Data Artifacts to build your portfolio."
                    </p>
                    <p>
                        <strong>"CHRONOS GATES: "</strong>
                        "At the end of each era, you must choose a path. Will you choose "
                        <span class="underline">"SCANDAL"</span>
                        " or "
                        <span class="underline">"ELITE COURSE"</span>
                        "? Your choices define your Persona."
                    </p>
                    <p class="modal-card__quote">
                        "\"Chart your constellation in the void before the connection is lost.\""
                    </p>
                </div>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| ctx.dismiss_briefing()
                >
                    "Begin Voyage"
                </Button>
            </Modal>
        </Show>
    }
}
