//! Defines the data structures returned by the air-quality service: the response
//! envelope, individual monitoring stations and their dominant-pollutant summary.

use serde::{Deserialize, Deserializer, Serialize};

/// Reads a value where JSON `null` means "not reported", yielding the zero value.
fn null_as_default<'de, D, T>(d: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Deserialize::deserialize(d).map(|x: Option<T>| x.unwrap_or_default())
}

// --- Data Structures ---

/// The top-level JSON object returned by the air-quality service.
///
/// A successful response always carries a `message`; the `stations` list may be
/// empty, which callers treat as "no data for this location".
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ApiResponse {
    /// Free-form status text from the service.
    #[serde(deserialize_with = "null_as_default")]
    pub message: String,
    /// Station readings, in the order the service returned them.
    #[serde(deserialize_with = "null_as_default")]
    pub stations: Vec<Station>,
}

/// Represents a single monitoring station and its latest reading.
///
/// Field names follow the service's JSON keys. Any field the service omits
/// decodes to its zero value (empty string or `0.0`).
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Station {
    /// Carbon monoxide concentration.
    #[serde(rename = "CO", deserialize_with = "null_as_default")]
    pub co: f64,
    /// Nitrogen dioxide concentration.
    #[serde(rename = "NO2", deserialize_with = "null_as_default")]
    pub no2: f64,
    /// Ozone concentration.
    #[serde(rename = "OZONE", deserialize_with = "null_as_default")]
    pub ozone: f64,
    /// Coarse particulate matter (10 µm) concentration.
    #[serde(rename = "PM10", deserialize_with = "null_as_default")]
    pub pm10: f64,
    /// Fine particulate matter (2.5 µm) concentration.
    #[serde(rename = "PM25", deserialize_with = "null_as_default")]
    pub pm25: f64,
    /// ISO country code of the station (e.g. "PK").
    #[serde(rename = "countryCode", deserialize_with = "null_as_default")]
    pub country_code: String,
    /// Administrative division below the country.
    #[serde(deserialize_with = "null_as_default")]
    pub division: String,
    /// Latitude in decimal degrees.
    #[serde(rename = "lat", deserialize_with = "null_as_default")]
    pub latitude: f64,
    /// Longitude in decimal degrees.
    #[serde(rename = "lng", deserialize_with = "null_as_default")]
    pub longitude: f64,
    /// Postal code of the station's area.
    #[serde(rename = "postalCode", deserialize_with = "null_as_default")]
    pub postal_code: String,
    /// City the station belongs to.
    #[serde(deserialize_with = "null_as_default")]
    pub city: String,
    /// Human readable name of the monitoring site.
    #[serde(rename = "placeName", deserialize_with = "null_as_default")]
    pub place: String,
    /// State or province of the station.
    #[serde(deserialize_with = "null_as_default")]
    pub state: String,
    /// Timestamp of the reading, passed through as the service formats it.
    #[serde(rename = "updatedAt", deserialize_with = "null_as_default")]
    pub updated_at: String,
    /// Overall Air Quality Index score.
    #[serde(rename = "AQI", deserialize_with = "null_as_default")]
    pub aqi: f64,
    /// Dominant pollutant summary.
    #[serde(rename = "AqiInfo", alias = "aqiInfo", deserialize_with = "null_as_default")]
    pub aqi_info: AqiInfo,
}

/// Summary of the pollutant that drives a station's AQI score.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct AqiInfo {
    /// Name of the dominant pollutant (e.g. "PM2.5").
    #[serde(deserialize_with = "null_as_default")]
    pub pollutant: String,
    /// Concentration of the dominant pollutant.
    #[serde(deserialize_with = "null_as_default")]
    pub concentration: f64,
    /// Category label, normally one of the [`crate::AqiCategory`] labels.
    #[serde(deserialize_with = "null_as_default")]
    pub category: String,
}

/// The reduced view of a [`Station`] that is logged before its dashboard opens.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct StationSummary {
    /// City the station belongs to.
    pub city: String,
    /// Name of the monitoring site.
    #[serde(rename = "placeName")]
    pub place: String,
    /// State or province of the station.
    pub state: String,
    /// Timestamp of the reading, as reported.
    #[serde(rename = "updatedAt")]
    pub updated_at: String,
    /// Overall Air Quality Index score.
    #[serde(rename = "AQI")]
    pub aqi: f64,
    /// Dominant pollutant summary.
    #[serde(rename = "AqiInfo")]
    pub aqi_info: AqiInfo,
}

impl From<&Station> for StationSummary {
    fn from(station: &Station) -> Self {
        Self {
            city: station.city.clone(),
            place: station.place.clone(),
            state: station.state.clone(),
            updated_at: station.updated_at.clone(),
            aqi: station.aqi,
            aqi_info: station.aqi_info.clone(),
        }
    }
}
