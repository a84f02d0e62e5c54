use leptos::ev;
use leptos::prelude::*;

/// Карточка поверх игры: метка, заголовок, содержимое.
///
/// With `on_close` the card closes on overlay click and Escape; without it
/// the only way out is whatever button the children provide.
#[component]
pub fn Modal(
    /// Small caps label above the title
    label: &'static str,
    title: &'static str,
    #[prop(optional)] on_close: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    if let Some(on_close) = on_close {
        let handle = window_event_listener(ev::keydown, move |event| {
            if event.key() == "Escape" {
                on_close.run(());
            }
        });
        on_cleanup(move || handle.remove());
    }

    let handle_overlay_click = move |_| {
        if let Some(on_close) = on_close {
            on_close.run(());
        }
    };

    // Prevent click propagation from modal content
    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    view! {
        <div class="modal-overlay" on:click=handle_overlay_click>
            <div class="modal-card" on:click=stop_propagation>
                <div class="modal-card__bar"></div>
                <div class="modal-card__content">
                    <span class="modal-card__label">{label}</span>
                    <h2 class="modal-card__title">{title}</h2>
                    {children()}
                </div>
            </div>
        </div>
    }
}
