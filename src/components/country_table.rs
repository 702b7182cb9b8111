use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::components::loader::Loader;
use crate::config::Config;
use crate::hooks::use_countries::use_countries;
use crate::services::api::CountryQuery;
use crate::utils::format::format_count;

/// Paginated, searchable country listing. The whole filter state lives in a
/// single `CountryQuery` so a search edit resets the page in the same update.
#[function_component(CountryTable)]
pub fn country_table() -> Html {
    let query = use_state(CountryQuery::default);
    let state = use_countries((*query).clone());

    let on_search = {
        let query = query.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            query.set(query.with_search(input.value()));
        })
    };

    let on_page_size = {
        let query = query.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let page_size = select
                .value()
                .parse()
                .unwrap_or(Config::DEFAULT_PAGE_SIZE);
            query.set(CountryQuery {
                page_size,
                ..(*query).clone()
            });
        })
    };

    if state.is_loading() {
        return html! { <Loader label="Chargement des pays" /> };
    }
    if let Some(message) = state.error() {
        return html! { <p class="error">{message}</p> };
    }

    let Some(page) = state.data() else {
        return html! {};
    };

    let total_pages = page.total_pages(query.page_size);

    let on_previous = {
        let query = query.clone();
        Callback::from(move |_| query.set(query.prev_page()))
    };

    let on_next = {
        let query = query.clone();
        Callback::from(move |_| query.set(query.next_page(total_pages)))
    };

    html! {
        <div class="country-table">
            <div class="table-controls">
                <input
                    type="search"
                    placeholder="Rechercher un pays"
                    value={query.search.clone()}
                    oninput={on_search}
                />
                <select onchange={on_page_size}>
                    {
                        Config::PAGE_SIZE_OPTIONS.iter().map(|size| html! {
                            <option
                                key={*size}
                                value={size.to_string()}
                                selected={*size == query.page_size}
                            >
                                {format!("{size} / page")}
                            </option>
                        }).collect::<Html>()
                    }
                </select>
            </div>

            <div class="table-wrapper">
                <table>
                    <thead>
                        <tr>
                            <th>{"Nom"}</th>
                            <th>{"ISO3"}</th>
                            <th>{"Population"}</th>
                            <th>{"Sites"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {
                            page.results.iter().map(|country| html! {
                                <tr key={country.id}>
                                    <td>{&country.name}</td>
                                    <td>{&country.iso3}</td>
                                    <td>
                                        {
                                            country.population.map_or_else(
                                                || "—".to_string(),
                                                format_count,
                                            )
                                        }
                                    </td>
                                    <td>{country.site_count.unwrap_or(0)}</td>
                                </tr>
                            }).collect::<Html>()
                        }
                    </tbody>
                </table>
            </div>

            if page.results.is_empty() {
                <p class="empty">{"Aucun pays trouvé."}</p>
            }

            <div class="pagination">
                <button onclick={on_previous} disabled={!query.can_go_prev()}>
                    {"Précédent"}
                </button>
                <span>{format!("Page {} / {}", query.page, total_pages)}</span>
                <button onclick={on_next} disabled={!query.can_go_next(total_pages)}>
                    {"Suivant"}
                </button>
            </div>
        </div>
    }
}
