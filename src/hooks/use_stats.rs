use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::hooks::fetch::FetchState;
use crate::models::stats::StatsSummary;
use crate::services::api::fetch_stats;

/// One-shot fetch of the stats summary on mount.
#[hook]
pub fn use_stats() -> UseStateHandle<FetchState<StatsSummary>> {
    let state = use_state(FetchState::default);

    {
        let state = state.clone();

        use_effect_with((), move |_| {
            spawn_local(async move {
                match fetch_stats().await {
                    Ok(stats) => state.set(FetchState::Loaded(Rc::new(stats))),
                    Err(e) => state.set(FetchState::Error(e.to_string())),
                }
            });

            || ()
        });
    }

    state
}
