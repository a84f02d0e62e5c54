use super::loading_overlay::LoadingOverlay;
use crate::layout::global_context::use_app_context;
use crate::shared::state::PauseRelay;
use contracts::shared::pause_message::FrameMessage;
use leptos::prelude::*;
use serde::Serialize;
use serde_wasm_bindgen::Serializer;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlIFrameElement;

/// Разрешения sandbox: скрипты, pointer lock, same-origin и формы, больше ничего
pub const FRAME_SANDBOX: &str = "allow-scripts allow-pointer-lock allow-same-origin allow-forms";

/// Показ активного артефакта в изолированном iframe.
///
/// The frame is recreated whenever the frame key (variant + markup length)
/// changes; the host talks to it only through `postMessage`.
#[component]
pub fn DisplaySurface() -> impl IntoView {
    let ctx = use_app_context();

    // HtmlIFrameElement is not Send+Sync, store locally
    let iframe_element = StoredValue::new_local(None::<HtmlIFrameElement>);
    let relay = StoredValue::new(PauseRelay::default());

    let overlay_visible = Memo::new(move |_| ctx.overlay_visible());
    let frame_key = Memo::new(move |_| ctx.frame_key());
    let is_loading = Memo::new(move |_| ctx.is_loading());

    // Pause/resume the game whenever an overlay opens or closes
    Effect::new(move |_| {
        let paused = overlay_visible.get();
        let Some(message) = relay.try_update_value(|r| r.observe(paused)).flatten() else {
            return;
        };
        if let Some(iframe) = iframe_element.get_value() {
            post_frame_message(&iframe, &message);
        }
    });

    let handle_load = move |ev: leptos::ev::Event| {
        let iframe = ev
            .target()
            .and_then(|t| t.dyn_into::<HtmlIFrameElement>().ok());

        // Overlay may already be up before the game's first frame
        if let Some(iframe) = &iframe {
            let paused = overlay_visible.get_untracked();
            if let Some(message) = relay.try_update_value(|r| r.frame_loaded(paused)).flatten() {
                post_frame_message(iframe, &message);
            }
        }
        iframe_element.set_value(iframe);
    };

    view! {
        <main class="stage">
            {move || {
                let key = frame_key.get();
                match key {
                    Some(key) if !is_loading.get() => {
                        let html = ctx.artifact_untracked().unwrap_or_default();
                        view! {
                            <div class="stage__frame">
                                <iframe
                                    class="stage__iframe"
                                    title="Artifact Display"
                                    data-frame-key=key
                                    srcdoc=html
                                    sandbox=FRAME_SANDBOX
                                    on:load=handle_load
                                ></iframe>
                            </div>
                        }
                        .into_any()
                    }
                    _ => {
                        iframe_element.set_value(None);
                        view! { <LoadingOverlay text=ctx.loading_text() /> }.into_any()
                    }
                }
            }}
        </main>
    }
}

fn post_frame_message(iframe: &HtmlIFrameElement, message: &FrameMessage) {
    let Some(window) = iframe.content_window() else {
        log::debug!("Frame window not available, dropping {:?}", message);
        return;
    };

    let result = message
        .serialize(&Serializer::json_compatible())
        .map_err(|e| JsValue::from_str(&e.to_string()))
        .and_then(|value| window.post_message(&value, "*"));

    match result {
        Ok(()) => log::debug!("Frame paused={} posted", message.is_paused()),
        Err(e) => log::error!("Failed to post {:?} to frame: {:?}", message, e),
    }
}
