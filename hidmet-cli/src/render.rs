//! Console rendering of a station observation.
//!
//! Pure formatting over an already-validated record; no parsing and no
//! decision logic beyond hiding zero-valued wind and snow lines.

use crate::observation::StationObservation;

/// Render an observation as aligned human-readable lines.
///
/// Wind and snow lines are omitted when their value is zero, matching
/// how the bulletin itself treats absent quantities.
pub fn render_observation(obs: &StationObservation) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "       station: {} ({})\n",
        obs.station_name, obs.station_id
    ));
    out.push_str(&format!(
        "   description: {} ({})\n",
        obs.weather_description, obs.weather_description_id
    ));
    out.push_str(&format!("   temperature: {}\n", obs.temperature));
    out.push_str(&format!("      pressure: {}\n", obs.pressure));
    out.push_str(&format!("      humidity: {}\n", obs.humidity));

    if obs.wind_speed.value != 0.0 {
        out.push_str(&format!(
            "wind direction: {}, speed: {}\n",
            obs.wind_direction, obs.wind_speed
        ));
    }
    if obs.snow_thickness.value != 0.0 {
        out.push_str(&format!("          snow: {}\n", obs.snow_thickness));
    }

    out
}

/// Render an observation as pretty-printed JSON.
pub fn render_json(obs: &StationObservation) -> serde_json::Result<String> {
    serde_json::to_string_pretty(obs)
}
