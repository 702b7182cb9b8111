use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::loader::Loader;
use crate::config::Config;
use crate::hooks::fetch::FetchState;
use crate::hooks::use_climate_timeline::use_climate_timeline;
use crate::services::api::ClimateQuery;

/// Climate series cards filtered by variable, country, site, and row limit.
/// Each card shows at most the first 30 points as inline marks.
#[function_component(ClimateTimeline)]
pub fn climate_timeline() -> Html {
    let query = use_state(ClimateQuery::default);
    let limit_text = use_state(|| ClimateQuery::default().limit.to_string());
    let state = use_climate_timeline((*query).clone());

    let on_variable = {
        let query = query.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            query.set(ClimateQuery {
                variable: input.value(),
                ..(*query).clone()
            });
        })
    };

    let on_country = {
        let query = query.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut country = input.value().to_uppercase();
            country.truncate(Config::ISO3_MAX_LEN);
            query.set(ClimateQuery {
                country,
                ..(*query).clone()
            });
        })
    };

    let on_site = {
        let query = query.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            query.set(ClimateQuery {
                site: input.value(),
                ..(*query).clone()
            });
        })
    };

    // The limit is only parsed and clamped once the field is committed, so
    // typing "100" is not rewritten to 50 after the first digit.
    let on_limit_input = {
        let limit_text = limit_text.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            limit_text.set(input.value());
        })
    };

    let on_limit_commit = {
        let query = query.clone();
        let limit_text = limit_text.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let limit = ClimateQuery::clamp_limit(&input.value());
            limit_text.set(limit.to_string());
            query.set(ClimateQuery {
                limit,
                ..(*query).clone()
            });
        })
    };

    let body = match &*state {
        FetchState::Loading => html! { <Loader label="Séries climat" /> },
        FetchState::Error(message) => html! { <p class="error">{message}</p> },
        FetchState::Loaded(response) if response.results.is_empty() => {
            html! { <p class="empty">{"Aucune série trouvée."}</p> }
        }
        FetchState::Loaded(response) => html! {
            <div class="timeline-grid">
                {
                    response.results.iter().map(|series| html! {
                        <article key={series.id} class="timeline-card">
                            <header>
                                <p>{series.country_iso3.clone().unwrap_or_default()}</p>
                                <p>{series.heading()}</p>
                            </header>
                            <div class="timeline-points">
                                {
                                    series.display_points().iter().enumerate().map(|(index, point)| html! {
                                        <span
                                            key={format!("{}-{}", series.id, index)}
                                            title={point.detail()}
                                        >
                                            {point.value}
                                        </span>
                                    }).collect::<Html>()
                                }
                            </div>
                        </article>
                    }).collect::<Html>()
                }
            </div>
        },
    };

    html! {
        <div class="climate-card">
            <div class="card-header">
                <h3>{"Timeline climat"}</h3>
                <div class="filters">
                    <input
                        value={query.variable.clone()}
                        oninput={on_variable}
                        placeholder="Variable (ex: rainfall)"
                    />
                    <input
                        value={query.country.clone()}
                        oninput={on_country}
                        placeholder="ISO3 (optionnel)"
                        maxlength="3"
                    />
                    <input
                        value={query.site.clone()}
                        oninput={on_site}
                        placeholder="ID site"
                    />
                    <input
                        type="number"
                        min={Config::TIMELINE_LIMIT_MIN.to_string()}
                        max={Config::TIMELINE_LIMIT_MAX.to_string()}
                        value={(*limit_text).clone()}
                        oninput={on_limit_input}
                        onchange={on_limit_commit}
                    />
                </div>
            </div>

            {body}
        </div>
    }
}
