use charming::{
    Chart as CharmingChart,
    component::{Axis, Grid, Title},
    element::{
        AxisLabel, AxisType, LineStyle, LineStyleType, SplitLine, TextStyle, Tooltip, Trigger,
    },
    renderer::WasmRenderer,
    series::Line,
};
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlElement, HtmlSelectElement};
use yew::prelude::*;

use crate::components::loader::Loader;
use crate::config::Config;
use crate::hooks::cancel::CancelFlag;
use crate::hooks::fetch::FetchState;
use crate::hooks::use_timeseries::use_resource_timeseries;
use crate::models::country::Country;
use crate::services::api::{CountryQuery, ResourceType, fetch_countries};

const CHART_ID: &str = "timeseries-chart";

/// Line chart of aggregated resource metrics, filterable by resource type
/// and country.
#[function_component(ResourceTimeseries)]
pub fn resource_timeseries() -> Html {
    let countries: UseStateHandle<Vec<Country>> = use_state(Vec::new);
    let country = use_state(String::new);
    let resource_type = use_state(ResourceType::default);
    // Once the user picks a country the seed fetch must not override it.
    let user_picked = use_mut_ref(|| false);

    // Populate the country picker once, seeding the selection with the
    // first result.
    {
        let countries = countries.clone();
        let country = country.clone();
        let user_picked = user_picked.clone();

        use_effect_with((), move |_| {
            let cancelled = CancelFlag::new();
            let guard = cancelled.clone();

            spawn_local(async move {
                let query = CountryQuery {
                    page: 1,
                    page_size: Config::COUNTRY_PICKER_PAGE_SIZE,
                    search: String::new(),
                };
                match fetch_countries(&query).await {
                    Ok(page) if !guard.is_cancelled() => {
                        if let Some(first) = page.results.first() {
                            if !*user_picked.borrow() {
                                country.set(first.iso3.clone());
                            }
                        }
                        countries.set(page.results);
                    }
                    Err(e) if !guard.is_cancelled() => {
                        gloo::console::warn!(&format!("Country picker fetch failed: {e}"));
                    }
                    _ => {}
                }
            });

            move || cancelled.cancel()
        });
    }

    let state = use_resource_timeseries((*country).clone(), *resource_type);

    let on_resource_type = {
        let resource_type = resource_type.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Ok(parsed) = select.value().parse::<ResourceType>() {
                resource_type.set(parsed);
            }
        })
    };

    let on_country = {
        let country = country.clone();
        let user_picked = user_picked.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            *user_picked.borrow_mut() = true;
            country.set(select.value());
        })
    };

    let body = match &*state {
        FetchState::Loading => html! { <Loader label="Agrégation en cours" /> },
        FetchState::Error(message) => html! { <p class="error">{message}</p> },
        FetchState::Loaded(response) if response.results.is_empty() => {
            html! { <p class="empty">{"Aucune donnée disponible."}</p> }
        }
        FetchState::Loaded(response) => {
            html! { <TimeseriesChart series={response.series_data()} /> }
        }
    };

    html! {
        <div class="timeseries-card">
            <div class="card-header">
                <h3>{"Séries temporelles"}</h3>
                <div class="filters">
                    <select onchange={on_resource_type}>
                        {
                            ResourceType::all().iter().map(|rt| html! {
                                <option
                                    key={rt.code()}
                                    value={rt.code()}
                                    selected={*rt == *resource_type}
                                >
                                    {rt.label()}
                                </option>
                            }).collect::<Html>()
                        }
                    </select>
                    <select onchange={on_country}>
                        <option value="" selected={country.is_empty()}>{"Tous pays"}</option>
                        {
                            countries.iter().map(|item| html! {
                                <option
                                    key={item.iso3.clone()}
                                    value={item.iso3.clone()}
                                    selected={item.iso3 == *country}
                                >
                                    {&item.name}
                                </option>
                            }).collect::<Html>()
                        }
                    </select>
                </div>
            </div>

            {body}
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct TimeseriesChartProps {
    /// (labels, values) columns, in response order.
    series: (Vec<String>, Vec<f64>),
}

#[function_component(TimeseriesChart)]
fn timeseries_chart(props: &TimeseriesChartProps) -> Html {
    let container_ref = use_node_ref();
    let series = use_memo(props.series.clone(), Clone::clone);

    {
        let container_ref = container_ref.clone();

        use_effect_with((series, container_ref), |(series, container_ref)| {
            let listener = container_ref.cast::<HtmlElement>().map(|container| {
                render_chart(&container, series);

                let series = Rc::clone(series);
                crate::utils::debounce::debounced_resize_listener(
                    move || render_chart(&container, &series),
                    Config::RESIZE_DEBOUNCE_MS,
                )
            });

            move || drop(listener)
        });
    }

    html! {
        <div class="chart-wrapper" ref={container_ref}>
            <div id={CHART_ID} />
        </div>
    }
}

fn render_chart(container: &HtmlElement, series: &(Vec<String>, Vec<f64>)) {
    let width = container.client_width().cast_unsigned();
    let height = container.client_height().cast_unsigned();

    if width == 0 || height == 0 {
        return;
    }

    let chart = build_chart(series);
    if let Err(e) = WasmRenderer::new(width, height).render(CHART_ID, &chart) {
        gloo::console::error!(&format!("Render error: {e:?}"));
    }
}

fn build_chart(series: &(Vec<String>, Vec<f64>)) -> CharmingChart {
    let (x_data, y_data) = series;

    CharmingChart::new()
        .title(
            Title::new()
                .text("Potentiel agrégé par année")
                .left("center")
                .text_style(TextStyle::new().font_size(14).color("#1f2937")),
        )
        .tooltip(Tooltip::new().trigger(Trigger::Axis))
        .grid(
            Grid::new()
                .left("8%")
                .right("4%")
                .bottom("12%")
                .contain_label(true),
        )
        .x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .data(x_data.clone())
                .axis_label(AxisLabel::new().color("#6b7280")),
        )
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .axis_label(AxisLabel::new().color("#6b7280"))
                .split_line(
                    SplitLine::new().line_style(
                        LineStyle::new()
                            .color("#e5e7eb")
                            .type_(LineStyleType::Dashed),
                    ),
                ),
        )
        .series(Line::new().data(y_data.clone()))
}
