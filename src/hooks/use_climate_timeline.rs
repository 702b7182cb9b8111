use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::hooks::fetch::FetchState;
use crate::models::climate::TimelineResponse;
use crate::services::api::{ClimateQuery, fetch_climate_timeline};

/// Fetches climate series matching the timeline filters, refetching on any
/// filter change.
#[hook]
pub fn use_climate_timeline(query: ClimateQuery) -> UseStateHandle<FetchState<TimelineResponse>> {
    let state = use_state(FetchState::default);

    {
        let state = state.clone();

        use_effect_with(query, move |query| {
            let query = query.clone();
            state.set(FetchState::Loading);

            spawn_local(async move {
                match fetch_climate_timeline(&query).await {
                    Ok(response) => state.set(FetchState::Loaded(Rc::new(response))),
                    Err(e) => state.set(FetchState::Error(e.to_string())),
                }
            });

            || ()
        });
    }

    state
}
