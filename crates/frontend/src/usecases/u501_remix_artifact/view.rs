use crate::layout::global_context::use_app_context;
use crate::shared::modal::Modal;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u501_remix_artifact::{RemixArtifact, REMIX_PRESETS};
use leptos::prelude::*;
use thaw::*;

/// Выбор инструкции для remix: готовые пресеты или свой текст
#[component]
pub fn RemixModal() -> impl IntoView {
    let ctx = use_app_context();
    let close = Callback::new(move |_| ctx.close_remix());
    let custom_instruction = RwSignal::new(String::new());

    let apply_custom = move |_| {
        let instruction = custom_instruction.get_untracked().trim().to_string();
        if instruction.is_empty() {
            return;
        }
        custom_instruction.set(String::new());
        ctx.remix(instruction);
    };

    view! {
        <Show when=move || ctx.show_remix()>
            <Modal label="Code Mutation" title=RemixArtifact::display_name() on_close=close>
                <p class="modal-card__body">
                    "Inject new parameters into the artifact's runtime code."
                </p>
                <div class="remix-presets">
                    {REMIX_PRESETS
                        .iter()
                        .map(|preset| {
                            let instruction = preset.instruction;
                            view! {
                                <button
                                    class="remix-preset"
                                    on:click=move |_| ctx.remix(instruction.to_string())
                                >
                                    <span class="remix-preset__title">{preset.instruction}</span>
                                    <span class="remix-preset__description">{preset.description}</span>
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="remix-custom">
                    <Input value=custom_instruction placeholder="Custom instruction" />
                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=Signal::derive(move || custom_instruction.with(|s| s.trim().is_empty()))
                        on_click=apply_custom
                    >
                        "Apply"
                    </Button>
                </div>
                <Button appearance=ButtonAppearance::Subtle on_click=move |_| close.run(())>
                    "Cancel Operation"
                </Button>
            </Modal>
        </Show>
    }
}
