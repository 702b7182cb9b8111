use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::hooks::fetch::FetchState;
use crate::models::hydro::HydroSummary;
use crate::services::api::fetch_hydro_summary;

/// One-shot fetch of the PHES aggregates on mount.
#[hook]
pub fn use_hydro_summary() -> UseStateHandle<FetchState<HydroSummary>> {
    let state = use_state(FetchState::default);

    {
        let state = state.clone();

        use_effect_with((), move |_| {
            spawn_local(async move {
                match fetch_hydro_summary().await {
                    Ok(summary) => state.set(FetchState::Loaded(Rc::new(summary))),
                    Err(e) => state.set(FetchState::Error(e.to_string())),
                }
            });

            || ()
        });
    }

    state
}
