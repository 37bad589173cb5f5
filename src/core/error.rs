use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum YfError {
    /// An error occurred during an HTTP request.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The server returned an unsuccessful HTTP status code.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// The page no longer has the expected shape: a marker, embedded JSON blob,
    /// key path or table could not be found.
    #[error("Page layout unexpected: {0}")]
    Parse(String),

    /// A JSON endpoint returned a body that could not be decoded.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// An RSS feed could not be decoded.
    #[error("XML parse error: {0}")]
    Xml(#[from] quick_xml::DeError),

    /// The response was well-formed but the requested sub-object is absent
    /// (e.g. no dividends, no pre-market price).
    #[error("Data unavailable: {0}")]
    DataUnavailable(String),

    /// An invalid date range was provided (start must be before end).
    #[error("invalid date range: start must be before end")]
    InvalidDates,
}

impl YfError {
    /// Returns `true` when the upstream server answered with a non-success status.
    pub fn is_upstream(&self) -> bool {
        matches!(self, YfError::Status { .. })
    }

    /// Returns `true` when the requested data was simply not present in the response.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, YfError::DataUnavailable(_))
    }
}
