use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::config::Config;
use crate::services::api::enqueue_snapshot;

/// Fire-and-forget form that enqueues a backend snapshot job for one
/// country. The acknowledgement id (or the raw error text) lands in a single
/// status slot; task completion is never polled.
#[function_component(SnapshotTrigger)]
pub fn snapshot_trigger() -> Html {
    let country = use_state(|| "BEN".to_string());
    let status: UseStateHandle<Option<String>> = use_state(|| None);
    let submitting = use_state(|| false);

    let on_country = {
        let country = country.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut value = input.value().to_uppercase();
            value.truncate(Config::ISO3_MAX_LEN);
            country.set(value);
        })
    };

    let on_submit = {
        let country = country.clone();
        let status = status.clone();
        let submitting = submitting.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let code = (*country).clone();
            let status = status.clone();
            let submitting = submitting.clone();

            submitting.set(true);
            status.set(None);

            spawn_local(async move {
                let scope = (!code.is_empty()).then_some(code.as_str());
                match enqueue_snapshot(scope).await {
                    Ok(ack) => status.set(Some(ack.status_message())),
                    Err(e) => status.set(Some(e.to_string())),
                }
                submitting.set(false);
            });
        })
    };

    html! {
        <form class="snapshot-form" onsubmit={on_submit}>
            <label>
                {"ISO3 ciblé"}
                <input value={(*country).clone()} oninput={on_country} maxlength="3" />
            </label>
            <button type="submit" disabled={*submitting}>
                {if *submitting { "Envoi..." } else { "Générer un snapshot" }}
            </button>
            if let Some(message) = status.as_ref() {
                <p class="status">{message}</p>
            }
        </form>
    }
}
