use leptos::prelude::*;
use thaw::*;

#[component]
pub fn LoadingOverlay(text: &'static str) -> impl IntoView {
    view! {
        <div class="stage__loading">
            <Spinner />
            <div class="stage__loading-text">{text}</div>
        </div>
    }
}
