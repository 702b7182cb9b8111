#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Non-2xx HTTP response, displayed as the uniform `API <status>: <detail>` string.
    #[error("API {status}: {detail}")]
    Status { status: u16, detail: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Failed to parse response: {0}")]
    Parse(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Builds the error for a non-success status, falling back to the
    /// canonical reason phrase when the body is empty.
    pub fn from_status(status: reqwest::StatusCode, body: &str) -> Self {
        let detail = if body.is_empty() {
            status
                .canonical_reason()
                .unwrap_or("unknown error")
                .to_string()
        } else {
            body.to_string()
        };
        Self::Status {
            status: status.as_u16(),
            detail,
        }
    }
}
