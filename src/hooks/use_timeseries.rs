use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::hooks::cancel::CancelFlag;
use crate::hooks::fetch::FetchState;
use crate::models::metrics::TimeseriesResponse;
use crate::services::api::{ResourceType, fetch_resource_timeseries};

/// Fetches the aggregated resource timeseries, refetching whenever the
/// selected country or resource type changes. Stale completions are dropped
/// via a [`CancelFlag`] tripped on cleanup.
#[hook]
pub fn use_resource_timeseries(
    country: String,
    resource_type: ResourceType,
) -> UseStateHandle<FetchState<TimeseriesResponse>> {
    let state = use_state(FetchState::default);

    {
        let state = state.clone();

        use_effect_with((country, resource_type), move |(country, resource_type)| {
            let country = country.clone();
            let resource_type = *resource_type;
            state.set(FetchState::Loading);

            let cancelled = CancelFlag::new();
            let guard = cancelled.clone();

            spawn_local(async move {
                // An empty selection means "all countries" and is omitted
                // from the query string.
                let scope = (!country.is_empty()).then_some(country.as_str());
                let result = fetch_resource_timeseries(scope, resource_type).await;
                if guard.is_cancelled() {
                    return;
                }
                match result {
                    Ok(response) => state.set(FetchState::Loaded(Rc::new(response))),
                    Err(e) => state.set(FetchState::Error(e.to_string())),
                }
            });

            move || cancelled.cancel()
        });
    }

    state
}
