//! Defines the `AqiCategory` enum, mapping the service's category labels to
//! the six standard AQI bands.

use std::fmt;

/// One of the standard AQI bands reported in [`crate::AqiInfo::category`].
///
/// The service reports the band as a free-form label. Use
/// [`AqiCategory::from_label`] to turn it into a variant; labels outside the
/// standard set have no variant.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum AqiCategory {
    /// AQI 0-50.
    Good,
    /// AQI 51-100.
    Moderate,
    /// AQI 101-150.
    UnhealthyForSensitiveGroups,
    /// AQI 151-200.
    Unhealthy,
    /// AQI 201-300.
    VeryUnhealthy,
    /// AQI 301 and above.
    Hazardous,
}

impl AqiCategory {
    /// Every recognized category, from least to most severe.
    pub const ALL: [AqiCategory; 6] = [
        AqiCategory::Good,
        AqiCategory::Moderate,
        AqiCategory::UnhealthyForSensitiveGroups,
        AqiCategory::Unhealthy,
        AqiCategory::VeryUnhealthy,
        AqiCategory::Hazardous,
    ];

    /// Attempts to convert a category label into an `AqiCategory`.
    ///
    /// Matching is exact, as the service emits these labels verbatim.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use aqi::AqiCategory;
    ///
    /// assert_eq!(AqiCategory::from_label("Moderate"), Some(AqiCategory::Moderate));
    /// assert_eq!(AqiCategory::from_label("Smoky"), None);
    /// ```
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }

    /// The label the service uses for this category.
    pub fn label(&self) -> &'static str {
        match self {
            AqiCategory::Good => "Good",
            AqiCategory::Moderate => "Moderate",
            AqiCategory::UnhealthyForSensitiveGroups => "Unhealthy for Sensitive Groups",
            AqiCategory::Unhealthy => "Unhealthy",
            AqiCategory::VeryUnhealthy => "Very Unhealthy",
            AqiCategory::Hazardous => "Hazardous",
        }
    }
}

impl fmt::Display for AqiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_round_trip() {
        for category in AqiCategory::ALL {
            assert_eq!(AqiCategory::from_label(category.label()), Some(category));
        }
    }

    #[test]
    fn test_unknown_and_case_mismatch() {
        assert_eq!(AqiCategory::from_label(""), None);
        assert_eq!(AqiCategory::from_label("good"), None);
        assert_eq!(AqiCategory::from_label("Unhealthy for sensitive groups"), None);
    }

    #[test]
    fn test_display_matches_label() {
        assert_eq!(
            AqiCategory::UnhealthyForSensitiveGroups.to_string(),
            "Unhealthy for Sensitive Groups"
        );
    }
}
