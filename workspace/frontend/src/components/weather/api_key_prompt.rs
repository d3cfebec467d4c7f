use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::common::toast::ToastContext;
use crate::settings;

/// Shown when no API key was compiled in or saved; stores the key in local
/// storage and reloads so every panel refetches with it.
#[function_component(ApiKeyPrompt)]
pub fn api_key_prompt() -> Html {
    let input_ref = use_node_ref();
    let toast_ctx = use_context::<ToastContext>();

    let on_submit = {
        let input_ref = input_ref.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(input) = input_ref.cast::<HtmlInputElement>() else {
                return;
            };
            let key = input.value().trim().to_string();
            if key.is_empty() {
                return;
            }

            settings::update_settings(|s| s.api_key = key);
            if let Err(e) = settings::get_settings().save_to_storage() {
                log::error!("Failed to save API key: {:?}", e);
                if let Some(toast_ctx) = &toast_ctx {
                    toast_ctx.show_error("Could not save the API key".to_string());
                }
                return;
            }

            log::info!("API key saved, reloading");
            if let Some(window) = web_sys::window() {
                if let Err(e) = window.location().reload() {
                    log::error!("Reload failed: {:?}", e);
                }
            }
        })
    };

    html! {
        <div class="alert alert-warning mb-6">
            <i class="fas fa-key"></i>
            <form onsubmit={on_submit} class="flex flex-1 gap-2 items-center">
                <span>{"No OpenWeatherMap API key configured."}</span>
                <input ref={input_ref} type="password" class="input input-sm input-bordered flex-1" placeholder="API key" />
                <button type="submit" class="btn btn-sm">{"Save"}</button>
            </form>
        </div>
    }
}
