use yew::prelude::*;

use crate::components::loader::Loader;
use crate::hooks::use_hydro_summary::use_hydro_summary;
use crate::utils::format::format_count;

/// PHES aggregates: site totals, storage and turbine capacity, top-country
/// ranking.
#[function_component(HydroSummaryCard)]
pub fn hydro_summary_card() -> Html {
    let state = use_hydro_summary();

    if state.is_loading() {
        return html! { <Loader label="Agrégats PHES" /> };
    }
    if let Some(message) = state.error() {
        return html! { <p class="error">{message}</p> };
    }

    let Some(data) = state.data() else {
        return html! {};
    };

    html! {
        <div class="hydro-summary">
            <div>
                <p class="stat-label">{"Total sites"}</p>
                <p class="stat-value">{format_count(data.total_sites)}</p>
            </div>
            <div>
                <p class="stat-label">{"Capacité stockage (MWh)"}</p>
                <p class="stat-value">{format_count(data.total_storage_mwh.round() as u64)}</p>
            </div>
            <div>
                <p class="stat-label">{"Capacité turbine (MW)"}</p>
                <p class="stat-value">{format_count(data.total_capacity_mw.round() as u64)}</p>
            </div>
            <div>
                <p class="stat-label">{"Top pays"}</p>
                <ol>
                    {
                        data.top_countries.iter().map(|country| html! {
                            <li key={country.iso3.clone()}>
                                {format!("{} ({})", country.name, country.site_count)}
                            </li>
                        }).collect::<Html>()
                    }
                </ol>
            </div>
        </div>
    }
}
