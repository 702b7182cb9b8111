use serde::Deserialize;

/// PHES aggregates served by `/hydro-sites/summary/`.
#[derive(Clone, Debug, PartialEq, Default, Deserialize)]
pub struct HydroSummary {
    #[serde(default)]
    pub total_sites: u64,
    #[serde(default)]
    pub total_storage_mwh: f64,
    #[serde(default)]
    pub total_capacity_mw: f64,
    #[serde(default)]
    pub top_countries: Vec<TopCountry>,
}

/// Entry of the top-country ranking. The backend emits Django ORM lookup
/// keys (`country__iso3`), hence the renames.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TopCountry {
    #[serde(rename = "country__iso3")]
    pub iso3: String,
    #[serde(rename = "country__name")]
    pub name: String,
    #[serde(default)]
    pub site_count: u64,
}
