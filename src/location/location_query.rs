//! Turns the loose location flags accepted on the command line into a single,
//! validated [`LocationQuery`] and renders it as a request URL.

use crate::location::error::LocationError;
use reqwest::Url;
use std::fmt;

/// The raw location flags, as supplied by the user.
///
/// Every field is optional and an empty string is treated the same as a
/// missing flag. Use [`LocationQuery::from_flags`] to validate them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocationFlags {
    pub city: Option<String>,
    pub postal: Option<String>,
    pub country: Option<String>,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
}

/// A location the air-quality service can be queried for.
///
/// Exactly one of three shapes is accepted, so a value of this type is always
/// a valid query.
///
/// # Examples
///
/// ```
/// use aqi::{LocationFlags, LocationQuery};
///
/// let flags = LocationFlags {
///     city: Some("Lahore".to_string()),
///     ..Default::default()
/// };
/// let query = LocationQuery::from_flags(flags).unwrap();
/// assert_eq!(query, LocationQuery::City { city: "Lahore".to_string() });
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocationQuery {
    /// Look up stations by city name.
    City { city: String },
    /// Look up stations by postal code within a country.
    PostalCode { postal: String, country: String },
    /// Look up stations near a coordinate. Values are passed through verbatim.
    Coordinates { latitude: String, longitude: String },
}

impl LocationQuery {
    /// Validates the raw flags into a query.
    ///
    /// # Errors
    ///
    /// Returns [`LocationError::InvalidCombination`] unless exactly one of
    /// `city`, `postal + country` or `latitude + longitude` is given and no
    /// other flag is set.
    pub fn from_flags(flags: LocationFlags) -> Result<Self, LocationError> {
        let LocationFlags {
            city,
            postal,
            country,
            latitude,
            longitude,
        } = flags;

        match (
            present(city),
            present(postal),
            present(country),
            present(latitude),
            present(longitude),
        ) {
            (Some(city), None, None, None, None) => Ok(LocationQuery::City { city }),
            (None, Some(postal), Some(country), None, None) => {
                Ok(LocationQuery::PostalCode { postal, country })
            }
            (None, None, None, Some(latitude), Some(longitude)) => {
                Ok(LocationQuery::Coordinates {
                    latitude,
                    longitude,
                })
            }
            _ => Err(LocationError::InvalidCombination),
        }
    }

    /// The query parameters for this location, in request order.
    pub fn query_pairs(&self) -> Vec<(&'static str, &str)> {
        match self {
            LocationQuery::City { city } => vec![("city", city.as_str())],
            LocationQuery::PostalCode { postal, country } => {
                vec![("postal", postal.as_str()), ("country", country.as_str())]
            }
            LocationQuery::Coordinates {
                latitude,
                longitude,
            } => vec![("lat", latitude.as_str()), ("lng", longitude.as_str())],
        }
    }

    /// Builds the request URL by appending this query's parameters to `base`.
    ///
    /// Values are form-encoded, so plain values appear unchanged while
    /// characters such as `&`, `=` or spaces cannot corrupt the query string.
    pub fn url(&self, base: &Url) -> Url {
        let mut url = base.clone();
        url.query_pairs_mut().extend_pairs(self.query_pairs());
        url
    }
}

impl TryFrom<LocationFlags> for LocationQuery {
    type Error = LocationError;

    fn try_from(flags: LocationFlags) -> Result<Self, Self::Error> {
        Self::from_flags(flags)
    }
}

impl fmt::Display for LocationQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocationQuery::City { city } => write!(f, "city {}", city),
            LocationQuery::PostalCode { postal, country } => {
                write!(f, "postal code {} ({})", postal, country)
            }
            LocationQuery::Coordinates {
                latitude,
                longitude,
            } => write!(f, "coordinates {}, {}", latitude, longitude),
        }
    }
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::readings::fetcher::DEFAULT_BASE_URL;

    fn flags(
        city: Option<&str>,
        postal: Option<&str>,
        country: Option<&str>,
        latitude: Option<&str>,
        longitude: Option<&str>,
    ) -> LocationFlags {
        LocationFlags {
            city: city.map(str::to_string),
            postal: postal.map(str::to_string),
            country: country.map(str::to_string),
            latitude: latitude.map(str::to_string),
            longitude: longitude.map(str::to_string),
        }
    }

    fn url_for(flags: LocationFlags) -> String {
        let base = Url::parse(DEFAULT_BASE_URL).unwrap();
        LocationQuery::from_flags(flags).unwrap().url(&base).to_string()
    }

    #[test]
    fn test_city_url() {
        assert_eq!(
            url_for(flags(Some("Lahore"), None, None, None, None)),
            "http://localhost:3000/api?city=Lahore"
        );
    }

    #[test]
    fn test_postal_url() {
        assert_eq!(
            url_for(flags(None, Some("54000"), Some("PK"), None, None)),
            "http://localhost:3000/api?postal=54000&country=PK"
        );
    }

    #[test]
    fn test_coordinates_url() {
        assert_eq!(
            url_for(flags(None, None, None, Some("31.5"), Some("74.3"))),
            "http://localhost:3000/api?lat=31.5&lng=74.3"
        );
    }

    #[test]
    fn test_negative_coordinates_pass_through() {
        assert_eq!(
            url_for(flags(None, None, None, Some("-33.86"), Some("151.2"))),
            "http://localhost:3000/api?lat=-33.86&lng=151.2"
        );
    }

    #[test]
    fn test_reserved_characters_are_encoded() {
        assert_eq!(
            url_for(flags(Some("New York&x=1"), None, None, None, None)),
            "http://localhost:3000/api?city=New+York%26x%3D1"
        );
    }

    #[test]
    fn test_invalid_combinations_rejected() {
        let invalid = [
            flags(None, None, None, None, None),
            flags(None, None, Some("PK"), None, None),
            flags(None, Some("54000"), None, None, None),
            flags(None, None, None, Some("31.5"), None),
            flags(None, None, None, None, Some("74.3")),
            flags(Some("Lahore"), Some("54000"), Some("PK"), None, None),
            flags(Some("Lahore"), None, Some("PK"), None, None),
            flags(Some("Lahore"), None, None, Some("31.5"), Some("74.3")),
            flags(None, Some("54000"), Some("PK"), Some("31.5"), Some("74.3")),
            flags(None, None, Some("PK"), Some("31.5"), Some("74.3")),
            flags(Some("Lahore"), Some("54000"), Some("PK"), Some("31.5"), Some("74.3")),
        ];
        for combination in invalid {
            assert_eq!(
                LocationQuery::from_flags(combination.clone()),
                Err(LocationError::InvalidCombination),
                "{:?} should be rejected",
                combination
            );
        }
    }

    #[test]
    fn test_empty_strings_count_as_absent() {
        assert_eq!(
            LocationQuery::from_flags(flags(Some(""), None, None, None, None)),
            Err(LocationError::InvalidCombination)
        );
        assert_eq!(
            LocationQuery::from_flags(flags(Some("Lahore"), Some(""), Some(""), Some(""), None)),
            Ok(LocationQuery::City {
                city: "Lahore".to_string()
            })
        );
    }

    #[test]
    fn test_error_names_accepted_flags() {
        let message = LocationError::InvalidCombination.to_string();
        assert!(message.contains("--city"));
        assert!(message.contains("--postal"));
        assert!(message.contains("--latitude"));
    }
}
