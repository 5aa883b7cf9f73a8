//! Builds the three widgets of a station dashboard: the AQI gauge, the
//! pollutant list and the location list.

use crate::types::category::AqiCategory;
use crate::types::station::{AqiInfo, Station};
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Gauge, List};
use ratatui::Frame;

/// Upper bound of the AQI scale; a reading at this value fills the gauge.
pub const AQI_SCALE_MAX: f64 = 500.0;

/// Bar color for categories outside the standard set.
pub const UNKNOWN_CATEGORY_COLOR: Color = Color::White;

const GAUGE_AREA: Rect = Rect::new(0, 0, 50, 5);
const POLLUTANT_AREA: Rect = Rect::new(50, 0, 50, 5);
const LOCATION_AREA: Rect = Rect::new(0, 5, 50, 6);

/// Share of the AQI scale covered by `aqi`, as a whole percentage.
///
/// Truncates rather than rounds, and clamps to `0..=100` so readings beyond
/// the scale still render.
///
/// ```
/// use aqi::gauge_percent;
///
/// assert_eq!(gauge_percent(250.0), 50);
/// assert_eq!(gauge_percent(171.0), 34);
/// ```
pub fn gauge_percent(aqi: f64) -> u16 {
    let percent = ((aqi / AQI_SCALE_MAX) * 100.0) as i64;
    percent.clamp(0, 100) as u16
}

/// Bar color for a category label.
pub fn category_color(label: &str) -> Color {
    match AqiCategory::from_label(label) {
        Some(AqiCategory::Good) => Color::Green,
        Some(AqiCategory::Moderate) => Color::Yellow,
        Some(
            AqiCategory::UnhealthyForSensitiveGroups
            | AqiCategory::Unhealthy
            | AqiCategory::VeryUnhealthy
            | AqiCategory::Hazardous,
        ) => Color::Red,
        None => UNKNOWN_CATEGORY_COLOR,
    }
}

pub fn aqi_gauge(station: &Station) -> Gauge<'static> {
    Gauge::default()
        .block(Block::bordered().title(format!("Air Quality Index = {}", station.aqi as i64)))
        .gauge_style(Style::default().fg(category_color(&station.aqi_info.category)))
        .percent(gauge_percent(station.aqi))
}

pub fn pollutant_rows(info: &AqiInfo) -> [String; 3] {
    [
        format!("Pollutant: {}", info.pollutant),
        format!("Concentration: {}", info.concentration as i64),
        format!("Category: {}", info.category),
    ]
}

pub fn location_rows(station: &Station) -> [String; 4] {
    [
        format!("City: {}", station.city),
        format!("State: {}", station.state),
        format!("Place: {}", station.place),
        format!("Updated At: {}", station.updated_at),
    ]
}

/// Renders a station: gauge top left, pollutant list to its right, location
/// list below it. Areas are clipped to the frame; a widget that no longer fits
/// at all is skipped.
pub fn draw_station(frame: &mut Frame, station: &Station) {
    let area = frame.area();

    if let Some(gauge_area) = clip(GAUGE_AREA, area) {
        frame.render_widget(aqi_gauge(station), gauge_area);
    }
    if let Some(pollutant_area) = clip(POLLUTANT_AREA, area) {
        frame.render_widget(
            List::new(pollutant_rows(&station.aqi_info)).block(Block::bordered()),
            pollutant_area,
        );
    }
    if let Some(location_area) = clip(LOCATION_AREA, area) {
        frame.render_widget(
            List::new(location_rows(station)).block(Block::bordered()),
            location_area,
        );
    }
}

fn clip(rect: Rect, area: Rect) -> Option<Rect> {
    Some(rect.intersection(area)).filter(|r| !r.is_empty())
}
