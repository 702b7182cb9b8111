use serde::Deserialize;

/// Cap on inline point marks per series card. Longer series are truncated
/// for display only; the full payload stays in memory until the next fetch.
pub const MAX_DISPLAY_POINTS: usize = 30;

/// One series returned by `/climate-series/timeline/`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ClimateSeries {
    pub id: u64,
    #[serde(default)]
    pub country_iso3: Option<String>,
    pub variable: String,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub points: Vec<ClimatePoint>,
}

impl ClimateSeries {
    /// Points rendered as inline marks, capped at [`MAX_DISPLAY_POINTS`].
    pub fn display_points(&self) -> &[ClimatePoint] {
        let end = self.points.len().min(MAX_DISPLAY_POINTS);
        &self.points[..end]
    }

    /// Card header line, e.g. `rainfall (mm)`.
    pub fn heading(&self) -> String {
        if self.unit.is_empty() {
            self.variable.clone()
        } else {
            format!("{} ({})", self.variable, self.unit)
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ClimatePoint {
    pub timestamp: String,
    pub value: f64,
}

impl ClimatePoint {
    /// Hover detail combining the full timestamp with the value.
    pub fn detail(&self) -> String {
        format!("{} → {}", self.timestamp, self.value)
    }
}

#[derive(Clone, Debug, PartialEq, Default, Deserialize)]
pub struct TimelineResponse {
    #[serde(default)]
    pub results: Vec<ClimateSeries>,
}
