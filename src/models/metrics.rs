use serde::Deserialize;

/// One aggregated point of `/resource-metrics/timeseries/`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TimeseriesPoint {
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub total_value: f64,
}

impl TimeseriesPoint {
    /// Chart axis label derived from the year, with a literal marker for
    /// rows the backend could not date.
    pub fn label(&self) -> String {
        self.year
            .map_or_else(|| "n/a".to_string(), |year| year.to_string())
    }
}

#[derive(Clone, Debug, PartialEq, Default, Deserialize)]
pub struct TimeseriesResponse {
    #[serde(default)]
    pub results: Vec<TimeseriesPoint>,
}

impl TimeseriesResponse {
    /// Chart-ready (labels, values) columns in response order.
    pub fn series_data(&self) -> (Vec<String>, Vec<f64>) {
        let labels = self.results.iter().map(TimeseriesPoint::label).collect();
        let values = self.results.iter().map(|p| p.total_value).collect();
        (labels, values)
    }
}
