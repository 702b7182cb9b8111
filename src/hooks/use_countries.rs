use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::hooks::cancel::CancelFlag;
use crate::hooks::fetch::FetchState;
use crate::models::country::{Country, Page};
use crate::services::api::{CountryQuery, fetch_countries};

/// Fetches one page of the country listing, refetching whenever the query
/// (page, page size, search) changes. Rapid filter changes are frequent
/// here, so completions of superseded requests are dropped via a
/// [`CancelFlag`] tripped on cleanup.
#[hook]
pub fn use_countries(query: CountryQuery) -> UseStateHandle<FetchState<Page<Country>>> {
    let state = use_state(FetchState::default);

    {
        let state = state.clone();

        use_effect_with(query, move |query| {
            let query = query.clone();
            state.set(FetchState::Loading);

            let cancelled = CancelFlag::new();
            let guard = cancelled.clone();

            spawn_local(async move {
                let result = fetch_countries(&query).await;
                if guard.is_cancelled() {
                    return;
                }
                match result {
                    Ok(page) => state.set(FetchState::Loaded(Rc::new(page))),
                    Err(e) => state.set(FetchState::Error(e.to_string())),
                }
            });

            move || cancelled.cancel()
        });
    }

    state
}
