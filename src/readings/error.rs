use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Invalid service URL '{0}'")]
    InvalidBaseUrl(String, #[source] url::ParseError),

    #[error("Network request failed for {0}")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("Failed to read response body from {0}")]
    BodyRead(String, #[source] reqwest::Error),

    #[error("unable to decode the response")]
    JsonParse(#[from] serde_json::Error),

    // The service answered but has no readings for the location
    #[error("no stations found (service message: '{message}')")]
    NoStations { message: String },
}
