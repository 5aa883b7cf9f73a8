//! Walks the stations of a response in order, logging a one-line summary of
//! each before handing it to a [`StationViewer`].

use crate::error::AqiError;
use crate::types::category::AqiCategory;
use crate::types::station::{Station, StationSummary};
use log::{info, warn};

/// Something that presents a single station to the user.
///
/// `view` blocks until the user is done with the station; the next station is
/// not presented before it returns.
pub trait StationViewer {
    fn view(&mut self, station: &Station) -> Result<(), AqiError>;
}

/// The JSON line logged for a station.
pub fn summary_line(station: &Station) -> Result<String, AqiError> {
    serde_json::to_string(&StationSummary::from(station)).map_err(AqiError::SummaryEncode)
}

/// Logs and views every station, strictly in order.
///
/// Stops at the first error; stations after it are neither logged nor viewed.
pub fn report_stations<V: StationViewer>(
    stations: &[Station],
    viewer: &mut V,
) -> Result<(), AqiError> {
    for station in stations {
        let line = summary_line(station)?;
        info!(target: "aqi::report", "{}", line);

        if AqiCategory::from_label(&station.aqi_info.category).is_none() {
            warn!(
                "Unrecognized AQI category '{}' for {}",
                station.aqi_info.category, station.place
            );
        }

        viewer.view(station)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::station::AqiInfo;
    use std::io;

    #[derive(Default)]
    struct RecordingViewer {
        seen: Vec<String>,
        fail_on: Option<String>,
    }

    impl StationViewer for RecordingViewer {
        fn view(&mut self, station: &Station) -> Result<(), AqiError> {
            self.seen.push(station.place.clone());
            if self.fail_on.as_deref() == Some(station.place.as_str()) {
                return Err(AqiError::TerminalInit(io::Error::new(
                    io::ErrorKind::Other,
                    "no tty",
                )));
            }
            Ok(())
        }
    }

    fn station(place: &str, aqi: f64, category: &str) -> Station {
        Station {
            city: "Lahore".to_string(),
            place: place.to_string(),
            state: "Punjab".to_string(),
            updated_at: "2023-01-01T10:00:00.000Z".to_string(),
            aqi,
            aqi_info: AqiInfo {
                pollutant: "PM2.5".to_string(),
                concentration: 42.0,
                category: category.to_string(),
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_stations_viewed_in_order() -> Result<(), AqiError> {
        let stations = vec![
            station("Gulberg", 171.0, "Unhealthy"),
            station("Model Town", 45.0, "Good"),
            station("Johar Town", 90.0, "Moderate"),
        ];
        let mut viewer = RecordingViewer::default();
        report_stations(&stations, &mut viewer)?;
        assert_eq!(viewer.seen, ["Gulberg", "Model Town", "Johar Town"]);
        Ok(())
    }

    #[test]
    fn test_viewer_error_stops_the_walk() {
        let stations = vec![
            station("Gulberg", 171.0, "Unhealthy"),
            station("Model Town", 45.0, "Good"),
        ];
        let mut viewer = RecordingViewer {
            fail_on: Some("Gulberg".to_string()),
            ..Default::default()
        };
        let result = report_stations(&stations, &mut viewer);
        assert!(matches!(result, Err(AqiError::TerminalInit(_))));
        assert_eq!(viewer.seen, ["Gulberg"]);
    }

    #[test]
    fn test_unknown_category_is_still_viewed() -> Result<(), AqiError> {
        let stations = vec![station("Gulberg", 171.0, "Smoky")];
        let mut viewer = RecordingViewer::default();
        report_stations(&stations, &mut viewer)?;
        assert_eq!(viewer.seen, ["Gulberg"]);
        Ok(())
    }

    #[test]
    fn test_summary_line() -> Result<(), AqiError> {
        let line = summary_line(&station("Gulberg", 171.0, "Unhealthy"))?;
        assert_eq!(
            line,
            r#"{"city":"Lahore","placeName":"Gulberg","state":"Punjab","updatedAt":"2023-01-01T10:00:00.000Z","AQI":171.0,"AqiInfo":{"pollutant":"PM2.5","concentration":42.0,"category":"Unhealthy"}}"#
        );
        assert!(!line.contains('\n'));
        Ok(())
    }
}
