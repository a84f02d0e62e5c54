use crate::layout::global_context::use_app_context;
use contracts::domain::a001_game_artifact::ModelVariant;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <span class="header__title">"Curator's Odysseia"</span>
                <span class="header__subtitle">"Archive Collection: The_Run_v3.5"</span>
            </div>
            <div class="header__actions">
                <div class="header__variants">
                    {ModelVariant::all()
                        .into_iter()
                        .map(|variant| {
                            let appearance = Signal::derive(move || {
                                if ctx.variant() == variant {
                                    ButtonAppearance::Primary
                                } else {
                                    ButtonAppearance::Subtle
                                }
                            });
                            view! {
                                <Button appearance=appearance on_click=move |_| ctx.switch_variant(variant)>
                                    {variant.display_name()}
                                </Button>
                            }
                        })
                        .collect_view()}
                </div>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| ctx.open_metadata()>
                    "Metadata"
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| ctx.open_remix()>
                    "Iteration"
                </Button>
            </div>
        </header>
    }
}
