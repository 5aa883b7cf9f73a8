use crate::location::location_query::LocationQuery;
use crate::readings::error::FetchError;
use crate::types::station::{ApiResponse, Station};
use bon::bon;
use log::{debug, warn};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Url};

/// Address of the air-quality service when none is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000/api";

/// Client for the air-quality service.
///
/// Build one with [`AqiClient::builder`]; both the service address and the
/// underlying HTTP client are optional.
///
/// # Examples
///
/// ```no_run
/// # use aqi::{AqiClient, FetchError, LocationQuery};
/// # #[tokio::main]
/// # async fn main() -> Result<(), FetchError> {
/// let client = AqiClient::builder().build()?;
/// let query = LocationQuery::City { city: "Lahore".to_string() };
/// let stations = client.fetch_stations(&query).await?;
/// println!("{} station(s) reported", stations.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct AqiClient {
    base_url: Url,
    http_client: Client,
}

#[bon]
impl AqiClient {
    /// Creates a client.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::InvalidBaseUrl`] if `base_url` is not a valid URL.
    #[builder]
    pub fn new(
        #[builder(into)] base_url: Option<String>,
        http_client: Option<Client>,
    ) -> Result<Self, FetchError> {
        let base_url = base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let parsed =
            Url::parse(&base_url).map_err(|e| FetchError::InvalidBaseUrl(base_url.clone(), e))?;
        Ok(Self {
            base_url: parsed,
            http_client: http_client.unwrap_or_default(),
        })
    }

    /// The service address queries are appended to.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Fetches the station readings for a location.
    ///
    /// Sends a single GET request and decodes the whole body. The HTTP status
    /// is only logged; the body decides success.
    ///
    /// # Errors
    ///
    /// * [`FetchError::NetworkRequest`] if the request could not be sent.
    /// * [`FetchError::BodyRead`] if the response body could not be read.
    /// * [`FetchError::JsonParse`] if the body is not a valid response.
    /// * [`FetchError::NoStations`] if the response lists no stations.
    pub async fn fetch_stations(&self, query: &LocationQuery) -> Result<Vec<Station>, FetchError> {
        let url = query.url(&self.base_url);
        debug!("Requesting air quality for {} from {}", query, url);

        let response = self
            .http_client
            .get(url.clone())
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(|e| FetchError::NetworkRequest(url.to_string(), e))?;

        let status = response.status();
        if !status.is_success() {
            warn!("Service answered {} for {}", status, url);
        }

        // The response is consumed here, so the connection is released before decoding
        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::BodyRead(url.to_string(), e))?;
        debug!("Received {} bytes from {}", body.len(), url);

        let api_response = decode_response(&body)?;
        debug!(
            "Service message '{}', {} station(s)",
            api_response.message,
            api_response.stations.len()
        );
        Ok(api_response.stations)
    }
}

/// Decodes a service response body.
///
/// # Errors
///
/// Returns [`FetchError::JsonParse`] for malformed JSON and
/// [`FetchError::NoStations`] when the station list is empty, whatever the
/// message says.
pub fn decode_response(body: &[u8]) -> Result<ApiResponse, FetchError> {
    let response: ApiResponse = serde_json::from_slice(body)?;
    if response.stations.is_empty() {
        return Err(FetchError::NoStations {
            message: response.message,
        });
    }
    Ok(response)
}
