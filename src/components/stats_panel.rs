use yew::prelude::*;

use crate::components::loader::Loader;
use crate::hooks::use_stats::use_stats;
use crate::utils::format::{format_count, format_value};

/// Overview cards: dataset count, top countries by site count, and tracked
/// resource aggregates.
#[function_component(StatsPanel)]
pub fn stats_panel() -> Html {
    let state = use_stats();

    if state.is_loading() {
        return html! { <Loader label="Chargement des statistiques" /> };
    }
    if let Some(message) = state.error() {
        return html! { <p class="error">{message}</p> };
    }

    let Some(stats) = state.data() else {
        return html! {};
    };

    html! {
        <div class="stats-panel">
            <div class="stat-card">
                <p class="stat-label">{"Jeux de données"}</p>
                <p class="stat-value">{stats.dataset_count}</p>
            </div>
            <div class="stat-card">
                <p class="stat-label">{"Top pays (sites)"}</p>
                <ul>
                    {
                        stats.countries.iter().map(|country| html! {
                            <li key={country.iso3.clone()}>
                                <strong>{&country.name}</strong>
                                {format!(" • {} site(s)", country.site_count)}
                            </li>
                        }).collect::<Html>()
                    }
                </ul>
            </div>
            <div class="stat-card">
                <p class="stat-label">{"Ressources suivies"}</p>
                <ul>
                    {
                        stats.resources.iter().map(|resource| {
                            let total = resource
                                .total
                                .map_or_else(|| "—".to_string(), format_value);
                            html! {
                                <li key={resource.resource_type.clone()}>
                                    {format!(
                                        "{} : {} ({} mesures)",
                                        resource.resource_type,
                                        total,
                                        format_count(resource.metrics),
                                    )}
                                </li>
                            }
                        }).collect::<Html>()
                    }
                </ul>
            </div>
        </div>
    }
}
