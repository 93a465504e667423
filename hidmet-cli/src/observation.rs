//! Observed-weather value types.
//!
//! These types represent one station's readings after extraction has
//! validated them. Code that receives a [`StationObservation`] can trust
//! that every field is populated; there is no partially-observed state.

use std::fmt;

use serde::Serialize;

/// A physical quantity paired with its unit text, exactly as the
/// bulletin reports it (e.g. `5.0` and `"°C"`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Measurement {
    /// Numeric magnitude of the quantity.
    pub value: f64,
    /// Unit text as it appeared in the feed.
    pub unit: String,
}

impl Measurement {
    /// Create a measurement from a value and unit text.
    pub fn new(value: f64, unit: impl Into<String>) -> Self {
        Self {
            value,
            unit: unit.into(),
        }
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}

/// One station's observed conditions, fully populated.
///
/// The "no wind" and "no snow" feed sentinels are already normalized to
/// regular zero-valued measurements by the time a value of this type
/// exists, so consumers never special-case them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationObservation {
    /// Station name, trimmed and non-empty.
    pub station_name: String,
    /// Numeric station identifier from the "Station ID" segment.
    pub station_id: i64,
    pub temperature: Measurement,
    pub pressure: Measurement,
    /// Single-letter compass code, or `-` when there is no wind.
    pub wind_direction: String,
    /// Zero with unit `m/s` when `wind_direction` is the `-` sentinel.
    pub wind_speed: Measurement,
    pub humidity: Measurement,
    /// Free-text conditions label; may be empty.
    pub weather_description: String,
    pub weather_description_id: i64,
    /// Zero with unit `cm` when the feed reports no snow.
    pub snow_thickness: Measurement,
}
