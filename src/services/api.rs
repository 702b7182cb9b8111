use crate::config::Config;
use crate::models::{
    climate::TimelineResponse,
    country::{Country, Page},
    error::AppError,
    hydro::HydroSummary,
    metrics::TimeseriesResponse,
    snapshot::SnapshotAck,
    stats::StatsSummary,
};
use reqwest::{Url, header::ACCEPT};
use serde::de::DeserializeOwned;
use serde_json::json;

// CONSTANTS
const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000/api";

/// Base URL baked in at build time, overridable via `ECOPOWER_API_BASE`.
fn default_base_url() -> &'static str {
    option_env!("ECOPOWER_API_BASE").unwrap_or(DEFAULT_BASE_URL)
}

/// Renewable resource categories tracked by the atlas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResourceType {
    #[default]
    Solar,
    Wind,
    Hydro,
    Biomass,
}

impl ResourceType {
    /// Returns the value used in API query strings.
    pub fn code(&self) -> &'static str {
        match self {
            ResourceType::Solar => "solar",
            ResourceType::Wind => "wind",
            ResourceType::Hydro => "hydro",
            ResourceType::Biomass => "biomass",
        }
    }

    /// Returns the French display label.
    pub fn label(&self) -> &'static str {
        match self {
            ResourceType::Solar => "Solaire",
            ResourceType::Wind => "Éolien",
            ResourceType::Hydro => "Hydro",
            ResourceType::Biomass => "Biomasse",
        }
    }

    /// All selectable resource types.
    pub fn all() -> &'static [ResourceType] {
        &[
            ResourceType::Solar,
            ResourceType::Wind,
            ResourceType::Hydro,
            ResourceType::Biomass,
        ]
    }
}

impl std::fmt::Display for ResourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl std::str::FromStr for ResourceType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "solar" => Ok(ResourceType::Solar),
            "wind" => Ok(ResourceType::Wind),
            "hydro" => Ok(ResourceType::Hydro),
            "biomass" => Ok(ResourceType::Biomass),
            _ => Err(AppError::Config(format!("Invalid resource type: {s}"))),
        }
    }
}

// API CONFIGURATION
/// Immutable configuration for the EcoPowerAtlas API client, built once at
/// startup.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Creates a builder for constructing an `ApiConfig`.
    pub fn builder() -> ApiConfigBuilder {
        ApiConfigBuilder::default()
    }

    /// Returns the configured base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Joins the base URL with `path` and appends only parameters carrying a
    /// non-empty value.
    pub fn endpoint_url(
        &self,
        path: &str,
        params: &[(&str, Option<String>)],
    ) -> Result<Url, AppError> {
        let joined = format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        );

        let pairs: Vec<(&str, &str)> = params
            .iter()
            .filter_map(|(key, value)| match value.as_deref() {
                Some(v) if !v.is_empty() => Some((*key, v)),
                _ => None,
            })
            .collect();

        if pairs.is_empty() {
            Url::parse(&joined)
        } else {
            Url::parse_with_params(&joined, &pairs)
        }
        .map_err(|e| AppError::Config(format!("Invalid URL {joined}: {e}")))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfigBuilder::default().build()
    }
}

// API CONFIGURATION BUILDER
/// Builder for constructing an `ApiConfig` with custom settings.
#[derive(Debug, Default)]
pub struct ApiConfigBuilder {
    base_url: Option<String>,
}

impl ApiConfigBuilder {
    /// Sets a custom base URL (primarily for testing).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Builds the `ApiConfig`.
    pub fn build(self) -> ApiConfig {
        ApiConfig {
            base_url: self
                .base_url
                .unwrap_or_else(|| default_base_url().to_string()),
        }
    }
}

// QUERY STRUCTS
/// Filter state of the paginated country listing. `PartialEq + Clone` so the
/// whole struct can key a hook effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryQuery {
    pub page: u32,
    pub page_size: u32,
    pub search: String,
}

impl Default for CountryQuery {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: 10,
            search: String::new(),
        }
    }
}

impl CountryQuery {
    fn params(&self) -> Vec<(&'static str, Option<String>)> {
        vec![
            ("page", Some(self.page.to_string())),
            ("page_size", Some(self.page_size.to_string())),
            ("search", Some(self.search.clone())),
        ]
    }

    /// Returns a copy with the new search text, jumping back to the first
    /// page in the same update.
    pub fn with_search(&self, search: String) -> Self {
        Self {
            page: 1,
            search,
            ..self.clone()
        }
    }

    /// Returns a copy moved one page back, never below page 1.
    pub fn prev_page(&self) -> Self {
        Self {
            page: self.page.saturating_sub(1).max(1),
            ..self.clone()
        }
    }

    /// Returns a copy moved one page forward, never past `total_pages`.
    pub fn next_page(&self, total_pages: u32) -> Self {
        Self {
            page: (self.page + 1).min(total_pages),
            ..self.clone()
        }
    }

    pub fn can_go_prev(&self) -> bool {
        self.page > 1
    }

    pub fn can_go_next(&self, total_pages: u32) -> bool {
        self.page < total_pages
    }
}

/// Filter state of the climate timeline view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClimateQuery {
    pub variable: String,
    pub country: String,
    pub site: String,
    pub limit: u32,
}

impl Default for ClimateQuery {
    fn default() -> Self {
        Self {
            variable: "rainfall".to_string(),
            country: String::new(),
            site: String::new(),
            limit: 200,
        }
    }
}

impl ClimateQuery {
    /// Parses a limit field edit, falling back to the default on garbage and
    /// clamping to the accepted range.
    pub fn clamp_limit(raw: &str) -> u32 {
        raw.parse::<u32>()
            .unwrap_or_else(|_| Self::default().limit)
            .clamp(Config::TIMELINE_LIMIT_MIN, Config::TIMELINE_LIMIT_MAX)
    }

    fn params(&self) -> Vec<(&'static str, Option<String>)> {
        vec![
            ("variable", Some(self.variable.clone())),
            ("country__iso3", Some(self.country.clone())),
            ("site", Some(self.site.clone())),
            ("limit", Some(self.limit.to_string())),
        ]
    }
}

// API CLIENT
/// HTTP client for the EcoPowerAtlas REST API.
pub struct ApiClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl ApiClient {
    /// Creates a new client with default configuration.
    pub fn new() -> Result<Self, AppError> {
        Self::with_config(ApiConfig::default())
    }

    /// Creates a new client with the specified configuration.
    pub fn with_config(config: ApiConfig) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| AppError::Config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { http, config })
    }

    /// Returns a reference to the client's configuration.
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Fetches the dataset/country/resource totals.
    pub async fn stats(&self) -> Result<StatsSummary, AppError> {
        self.get_json("/stats/", &[]).await
    }

    /// Fetches the PHES site aggregates.
    pub async fn hydro_summary(&self) -> Result<HydroSummary, AppError> {
        self.get_json("/hydro-sites/summary/", &[]).await
    }

    /// Fetches one page of the country listing.
    pub async fn countries(&self, query: &CountryQuery) -> Result<Page<Country>, AppError> {
        self.get_json("/countries/", &query.params()).await
    }

    /// Fetches the aggregated resource timeseries, optionally scoped to one
    /// country.
    pub async fn resource_timeseries(
        &self,
        country: Option<&str>,
        resource_type: ResourceType,
    ) -> Result<TimeseriesResponse, AppError> {
        let params = [
            ("country__iso3", country.map(str::to_string)),
            ("resource_type", Some(resource_type.code().to_string())),
        ];
        self.get_json("/resource-metrics/timeseries/", &params).await
    }

    /// Fetches climate series matching the timeline filters.
    pub async fn climate_timeline(
        &self,
        query: &ClimateQuery,
    ) -> Result<TimelineResponse, AppError> {
        self.get_json("/climate-series/timeline/", &query.params())
            .await
    }

    /// Enqueues an asynchronous snapshot job. The body defaults to an empty
    /// object when no country code is given.
    pub async fn enqueue_snapshot(&self, country: Option<&str>) -> Result<SnapshotAck, AppError> {
        let body = match country {
            Some(code) if !code.is_empty() => json!({ "country_iso3": code }),
            _ => json!({}),
        };
        self.post_json("/resource-metrics/enqueue_snapshot/", &body)
            .await
    }

    /// Executes a GET and decodes the JSON body.
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, Option<String>)],
    ) -> Result<T, AppError> {
        let url = self.config.endpoint_url(path, params)?;

        let response = self
            .http
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(classify_error)?;

        Self::decode(response).await
    }

    /// Executes a POST with a JSON body and decodes the JSON response.
    async fn post_json<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<T, AppError> {
        let url = self.config.endpoint_url(path, &[])?;

        let response = self
            .http
            .post(url)
            .header(ACCEPT, "application/json")
            .json(body)
            .send()
            .await
            .map_err(classify_error)?;

        Self::decode(response).await
    }

    /// Captures non-success bodies verbatim, then decodes successes.
    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, AppError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::from_status(status, &body));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::Parse(e.to_string()))
    }
}

/// Converts a reqwest transport error into an `AppError`.
fn classify_error(error: reqwest::Error) -> AppError {
    if error.is_timeout() {
        AppError::Network(format!("Request timeout: {error}"))
    } else if error.is_request() {
        AppError::Network(format!("Request error: {error}"))
    } else {
        AppError::Network(format!("Network error: {error}"))
    }
}

// CONVENIENCE FUNCTIONS
/// Fetches the stats summary using default configuration.
pub async fn fetch_stats() -> Result<StatsSummary, AppError> {
    ApiClient::new()?.stats().await
}

/// Fetches the hydro summary using default configuration.
pub async fn fetch_hydro_summary() -> Result<HydroSummary, AppError> {
    ApiClient::new()?.hydro_summary().await
}

/// Fetches one page of countries using default configuration.
pub async fn fetch_countries(query: &CountryQuery) -> Result<Page<Country>, AppError> {
    ApiClient::new()?.countries(query).await
}

/// Fetches the resource timeseries using default configuration.
pub async fn fetch_resource_timeseries(
    country: Option<&str>,
    resource_type: ResourceType,
) -> Result<TimeseriesResponse, AppError> {
    ApiClient::new()?
        .resource_timeseries(country, resource_type)
        .await
}

/// Fetches the climate timeline using default configuration.
pub async fn fetch_climate_timeline(query: &ClimateQuery) -> Result<TimelineResponse, AppError> {
    ApiClient::new()?.climate_timeline(query).await
}

/// Enqueues a snapshot job using default configuration.
pub async fn enqueue_snapshot(country: Option<&str>) -> Result<SnapshotAck, AppError> {
    ApiClient::new()?.enqueue_snapshot(country).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn test_resource_type_parsing() {
        assert_eq!("solar".parse::<ResourceType>().unwrap(), ResourceType::Solar);
        assert_eq!("WIND".parse::<ResourceType>().unwrap(), ResourceType::Wind);
        assert!("coal".parse::<ResourceType>().is_err());
    }

    #[test]
    fn test_resource_type_codes() {
        assert_eq!(ResourceType::Hydro.code(), "hydro");
        assert_eq!(ResourceType::all().len(), 4);
    }

    #[test]
    fn test_config_builder_custom_base() {
        let config = ApiConfig::builder().base_url("https://atlas.example/api").build();
        assert_eq!(config.base_url(), "https://atlas.example/api");
    }

    #[test]
    fn test_endpoint_url_joins_slashes() {
        let config = ApiConfig::builder().base_url("http://localhost:8000/api/").build();
        let url = config.endpoint_url("/stats/", &[]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/api/stats/");
    }

    #[test]
    fn test_endpoint_url_omits_empty_params() {
        let config = ApiConfig::builder().base_url("http://localhost:8000/api").build();
        let url = config
            .endpoint_url(
                "/climate-series/timeline/",
                &[
                    ("variable", Some("rainfall".to_string())),
                    ("site", None),
                    ("country__iso3", Some(String::new())),
                ],
            )
            .unwrap();

        assert!(url.as_str().contains("variable=rainfall"));
        assert!(!url.as_str().contains("site="));
        assert!(!url.as_str().contains("country__iso3="));
    }

    #[test]
    fn test_endpoint_url_without_params_has_no_query() {
        let config = ApiConfig::builder().base_url("http://localhost:8000/api").build();
        let url = config
            .endpoint_url("/stats/", &[("search", Some(String::new()))])
            .unwrap();
        assert!(url.query().is_none());
    }

    #[test]
    fn test_endpoint_url_encodes_values() {
        let config = ApiConfig::builder().base_url("http://localhost:8000/api").build();
        let url = config
            .endpoint_url("/countries/", &[("search", Some("côte d'ivoire".to_string()))])
            .unwrap();
        assert!(!url.as_str().contains(' '));
    }

    #[test]
    fn test_country_query_params_include_pagination() {
        let query = CountryQuery {
            page: 3,
            page_size: 20,
            search: String::new(),
        };
        let config = ApiConfig::builder().base_url("http://localhost:8000/api").build();
        let url = config.endpoint_url("/countries/", &query.params()).unwrap();

        assert!(url.as_str().contains("page=3"));
        assert!(url.as_str().contains("page_size=20"));
        assert!(!url.as_str().contains("search="));
    }

    #[test]
    fn test_climate_query_defaults() {
        let query = ClimateQuery::default();
        assert_eq!(query.variable, "rainfall");
        assert_eq!(query.limit, 200);
    }

    #[test]
    fn test_status_error_message_uses_body() {
        let err = AppError::from_status(StatusCode::NOT_FOUND, "not found");
        assert_eq!(err.to_string(), "API 404: not found");
    }

    #[test]
    fn test_status_error_message_falls_back_to_reason() {
        let err = AppError::from_status(StatusCode::BAD_GATEWAY, "");
        assert_eq!(err.to_string(), "API 502: Bad Gateway");
    }
}
