use chrono::{Datelike, Utc};
use yew::prelude::*;

use crate::components::{
    ClimateTimeline, CountryTable, HydroSummaryCard, ResourceTimeseries, SnapshotTrigger,
    StatsPanel,
};
use crate::services::api::ApiConfig;

#[function_component(App)]
pub fn app() -> Html {
    let api_base = use_memo((), |_| ApiConfig::default().base_url().to_string());

    html! {
        <div class="app-shell">
            <header class="app-header">
                <div>
                    <p class="eyebrow">{"EcoPowerAtlas"}</p>
                    <h1>{"Cartographie des potentiels PHES"}</h1>
                    <p>
                        {"Visualisez les sites hydrauliques, séries climatiques et métriques \
                          énergétiques agrégées depuis l'API. L'interface repose sur les \
                          endpoints /api (résumés, séries temporelles, snapshots)."}
                    </p>
                    <div class="header-actions">
                        <a class="btn" href="/docs" target="_blank" rel="noreferrer">
                            {"Documentation API"}
                        </a>
                        <a
                            class="btn btn-secondary"
                            href={(*api_base).clone()}
                            target="_blank"
                            rel="noreferrer"
                        >
                            {"Explorer l'API"}
                        </a>
                    </div>
                </div>
            </header>

            <main>
                <section>
                    <h2>{"Vue d'ensemble"}</h2>
                    <StatsPanel />
                </section>

                <section class="grid-two">
                    <div>
                        <h2>{"Hydro sites"}</h2>
                        <HydroSummaryCard />
                    </div>
                    <div>
                        <h2>{"Snapshot asynchrone"}</h2>
                        <SnapshotTrigger />
                    </div>
                </section>

                <section>
                    <h2>{"Countries (pagination API)"}</h2>
                    <CountryTable />
                </section>

                <section class="grid-two">
                    <ResourceTimeseries />
                    <ClimateTimeline />
                </section>
            </main>

            <footer class="app-footer">
                <small>
                    {format!(
                        "Données servies par EcoPowerAtlas · Construite avec Yew · © {}",
                        Utc::now().year(),
                    )}
                </small>
            </footer>

            <style>
                {include_str!("style.css")}
            </style>
        </div>
    }
}
