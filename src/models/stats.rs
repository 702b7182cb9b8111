use serde::Deserialize;

/// Aggregated totals served by `/stats/`.
#[derive(Clone, Debug, PartialEq, Default, Deserialize)]
pub struct StatsSummary {
    #[serde(default)]
    pub dataset_count: u64,
    #[serde(default)]
    pub countries: Vec<CountrySiteCount>,
    #[serde(default)]
    pub resources: Vec<ResourceAggregate>,
}

/// Country ranked by number of hydro sites.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CountrySiteCount {
    pub name: String,
    pub iso3: String,
    #[serde(default)]
    pub site_count: u64,
}

/// Per-resource aggregate: summed value plus number of measurements.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ResourceAggregate {
    pub resource_type: String,
    #[serde(default)]
    pub total: Option<f64>,
    #[serde(default)]
    pub metrics: u64,
}
