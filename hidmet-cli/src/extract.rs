//! Extraction of typed observations from raw feed entries.
//!
//! Each bulletin entry stores one station's readings as free text. The
//! title has the shape `Station: <name>` and the summary is a
//! semicolon-separated run of `Label: value` segments:
//!
//! ```text
//! Station ID: 13274; Temperature: 5 °C; Pressure: 1013.2 hPa;
//! Wind direction: -; Wind speed: 0 m/s; Humidity: 80 %;
//! Weather description: Cloudy; Snow: cm; Weather description ID: 3;
//! ```
//!
//! The tokenizer turns the summary into a label → value map and the
//! extractor reads the required labels explicitly, so a feed that
//! reorders segments still extracts correctly and a feed that drops one
//! fails loudly instead of misparsing.
//!
//! When a quantity is physically absent the feed omits the number
//! instead of writing `0`: wind direction becomes `-` and the snow
//! segment carries only the bare unit `cm`. Extraction normalizes both
//! into regular zero-valued measurements via the sentinel rule table in
//! this module.

use std::collections::HashMap;

use crate::feed::RawEntry;
use crate::observation::{Measurement, StationObservation};

const STATION_ID: &str = "Station ID";
const TEMPERATURE: &str = "Temperature";
const PRESSURE: &str = "Pressure";
const WIND_DIRECTION: &str = "Wind direction";
const WIND_SPEED: &str = "Wind speed";
const HUMIDITY: &str = "Humidity";
const WEATHER_DESCRIPTION: &str = "Weather description";
const SNOW: &str = "Snow";
const WEATHER_DESCRIPTION_ID: &str = "Weather description ID";

/// Labels a summary must carry for extraction to succeed.
const REQUIRED_LABELS: [&str; 9] = [
    STATION_ID,
    TEMPERATURE,
    PRESSURE,
    WIND_DIRECTION,
    WIND_SPEED,
    HUMIDITY,
    WEATHER_DESCRIPTION,
    SNOW,
    WEATHER_DESCRIPTION_ID,
];

/// Error during entry-to-observation extraction.
///
/// A malformed entry fails only its own extraction; other entries in
/// the same fetch are unaffected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExtractError {
    /// Title lacks the `Station: <name>` colon structure, or names nothing
    #[error("malformed title: expected \"Station: <name>\"")]
    MalformedTitle,

    /// A required labeled segment is missing from the summary
    #[error("malformed summary: missing segment {0:?}")]
    MalformedSummary(&'static str),

    /// A segment's numeric portion failed to parse
    #[error("malformed field {0:?}: numeric value did not parse")]
    MalformedField(&'static str),
}

/// A substitution the feed expresses by omitting a number.
///
/// When the `trigger` segment's trimmed value equals `sentinel`, the
/// `target` quantity is replaced wholesale by zero in `zero_unit` and
/// the target segment's literal content is not parsed at all. Adding a
/// future sentinel is a row here, not new branching.
struct SentinelRule {
    trigger: &'static str,
    sentinel: &'static str,
    target: &'static str,
    zero_unit: &'static str,
}

const SENTINEL_RULES: [SentinelRule; 2] = [
    // No wind: direction is "-", speed segment content is unreliable.
    SentinelRule {
        trigger: WIND_DIRECTION,
        sentinel: "-",
        target: WIND_SPEED,
        zero_unit: "m/s",
    },
    // No snow: the segment carries only the bare unit token.
    SentinelRule {
        trigger: SNOW,
        sentinel: "cm",
        target: SNOW,
        zero_unit: "cm",
    },
];

/// Split a summary into a label → raw value map.
///
/// Pure syntactic split: `;` separates segments, the first `:` inside a
/// segment separates the label from its value. Segments without a colon
/// (including the empty trailing segment) are dropped; values keep their
/// surrounding whitespace for the extractor to trim.
pub fn tokenize_summary(summary: &str) -> HashMap<&str, &str> {
    summary
        .split(';')
        .filter_map(|segment| {
            let (label, value) = segment.split_once(':')?;
            let label = label.trim();
            if label.is_empty() {
                None
            } else {
                Some((label, value))
            }
        })
        .collect()
}

/// Derive the station name from an entry title (`Station: <name>`).
///
/// Returns the trimmed text after the first colon. Fails if the title
/// has no colon or names nothing after it.
pub fn station_name(title: &str) -> Result<&str, ExtractError> {
    let (_, name) = title.split_once(':').ok_or(ExtractError::MalformedTitle)?;
    let name = name.trim();
    if name.is_empty() {
        return Err(ExtractError::MalformedTitle);
    }
    Ok(name)
}

/// Extract one typed observation from one raw entry.
///
/// Pure function of its input: either every field of the result is
/// populated or extraction fails, never a partial record.
pub fn extract_observation(entry: &RawEntry) -> Result<StationObservation, ExtractError> {
    let name = station_name(&entry.title)?;
    let fields = tokenize_summary(&entry.summary);

    for label in REQUIRED_LABELS {
        if !fields.contains_key(label) {
            return Err(ExtractError::MalformedSummary(label));
        }
    }

    Ok(StationObservation {
        station_name: name.to_string(),
        station_id: integer_field(&fields, STATION_ID)?,
        temperature: quantity_field(&fields, TEMPERATURE)?,
        pressure: quantity_field(&fields, PRESSURE)?,
        wind_direction: raw_field(&fields, WIND_DIRECTION)?.trim().to_string(),
        wind_speed: quantity_field(&fields, WIND_SPEED)?,
        humidity: quantity_field(&fields, HUMIDITY)?,
        weather_description: raw_field(&fields, WEATHER_DESCRIPTION)?.trim().to_string(),
        weather_description_id: integer_field(&fields, WEATHER_DESCRIPTION_ID)?,
        snow_thickness: quantity_field(&fields, SNOW)?,
    })
}

fn raw_field<'a>(
    fields: &HashMap<&str, &'a str>,
    label: &'static str,
) -> Result<&'a str, ExtractError> {
    fields
        .get(label)
        .copied()
        .ok_or(ExtractError::MalformedSummary(label))
}

/// Parse a `Label: <integer>` segment (no unit portion).
fn integer_field(fields: &HashMap<&str, &str>, label: &'static str) -> Result<i64, ExtractError> {
    raw_field(fields, label)?
        .trim()
        .parse()
        .map_err(|_| ExtractError::MalformedField(label))
}

/// Parse a `Label: <number> <unit>` segment into a measurement,
/// applying any sentinel rule targeting `label` first.
fn quantity_field(
    fields: &HashMap<&str, &str>,
    label: &'static str,
) -> Result<Measurement, ExtractError> {
    for rule in &SENTINEL_RULES {
        if rule.target == label && raw_field(fields, rule.trigger)?.trim() == rule.sentinel {
            return Ok(Measurement::new(0.0, rule.zero_unit));
        }
    }

    let raw = raw_field(fields, label)?.trim();
    let (number, unit) = match raw.split_once(char::is_whitespace) {
        Some((number, unit)) => (number, unit.trim_start()),
        None => (raw, ""),
    };

    let value: f64 = number
        .parse()
        .map_err(|_| ExtractError::MalformedField(label))?;

    Ok(Measurement::new(value, unit.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const BELGRADE_SUMMARY: &str = "Station ID: 13274; Temperature: 5 °C; \
         Pressure: 1013.2 hPa; Wind direction: -; Wind speed: 0 m/s; \
         Humidity: 80 %; Weather description: Cloudy; Snow: cm; \
         Weather description ID: 3;";

    fn belgrade() -> RawEntry {
        RawEntry::new("Station: Belgrade", BELGRADE_SUMMARY)
    }

    fn windy() -> RawEntry {
        RawEntry::new(
            "Station: Zlatibor",
            "Station ID: 13367; Temperature: -1.5 °C; Pressure: 904.6 hPa; \
             Wind direction: NW; Wind speed: 6 m/s; Humidity: 93 %; \
             Weather description: Snow; Snow: 12 cm; Weather description ID: 22;",
        )
    }

    #[test]
    fn tokenize_splits_on_semicolons_and_first_colon() {
        let fields = tokenize_summary(BELGRADE_SUMMARY);

        assert_eq!(fields.len(), 9);
        assert_eq!(fields["Station ID"], " 13274");
        assert_eq!(fields["Temperature"], " 5 °C");
        assert_eq!(fields["Weather description ID"], " 3");
    }

    #[test]
    fn tokenize_drops_trailing_and_colonless_segments() {
        let fields = tokenize_summary("Temperature: 5 °C; just noise; ;");
        assert_eq!(fields.len(), 1);
        assert_eq!(fields["Temperature"], " 5 °C");
    }

    #[test]
    fn tokenize_empty_summary() {
        assert!(tokenize_summary("").is_empty());
    }

    #[test]
    fn extracts_the_reference_entry() {
        let obs = extract_observation(&belgrade()).unwrap();

        assert_eq!(obs.station_name, "Belgrade");
        assert_eq!(obs.station_id, 13274);
        assert_eq!(obs.temperature, Measurement::new(5.0, "°C"));
        assert_eq!(obs.pressure, Measurement::new(1013.2, "hPa"));
        assert_eq!(obs.wind_direction, "-");
        assert_eq!(obs.wind_speed, Measurement::new(0.0, "m/s"));
        assert_eq!(obs.humidity, Measurement::new(80.0, "%"));
        assert_eq!(obs.weather_description, "Cloudy");
        assert_eq!(obs.weather_description_id, 3);
        assert_eq!(obs.snow_thickness, Measurement::new(0.0, "cm"));
    }

    #[test]
    fn extracts_wind_and_snow_when_present() {
        let obs = extract_observation(&windy()).unwrap();

        assert_eq!(obs.wind_direction, "NW");
        assert_eq!(obs.wind_speed, Measurement::new(6.0, "m/s"));
        assert_eq!(obs.snow_thickness, Measurement::new(12.0, "cm"));
        assert_eq!(obs.temperature, Measurement::new(-1.5, "°C"));
    }

    #[test]
    fn extraction_is_idempotent() {
        let entry = windy();
        assert_eq!(
            extract_observation(&entry).unwrap(),
            extract_observation(&entry).unwrap()
        );
    }

    #[test]
    fn title_without_colon_is_malformed() {
        let entry = RawEntry::new("StationBelgrade", BELGRADE_SUMMARY);
        assert_eq!(
            extract_observation(&entry),
            Err(ExtractError::MalformedTitle)
        );
    }

    #[test]
    fn title_with_nothing_after_colon_is_malformed() {
        assert_eq!(station_name("Station:   "), Err(ExtractError::MalformedTitle));
    }

    #[test]
    fn station_name_trims_surrounding_spaces() {
        assert_eq!(station_name("Station:  Novi Sad "), Ok("Novi Sad"));
    }

    #[test]
    fn missing_label_is_malformed_summary() {
        let summary = BELGRADE_SUMMARY.replace("Humidity", "Moisture");
        let entry = RawEntry::new("Station: Belgrade", summary);

        assert_eq!(
            extract_observation(&entry),
            Err(ExtractError::MalformedSummary("Humidity"))
        );
    }

    #[test]
    fn truncated_summary_is_malformed_summary() {
        let entry = RawEntry::new("Station: Belgrade", "Station ID: 13274; Temperature: 5 °C");
        assert_eq!(
            extract_observation(&entry),
            Err(ExtractError::MalformedSummary("Pressure"))
        );
    }

    #[test]
    fn unparsable_number_is_malformed_field() {
        let summary = BELGRADE_SUMMARY.replace("Temperature: 5 °C", "Temperature: warm °C");
        let entry = RawEntry::new("Station: Belgrade", summary);

        assert_eq!(
            extract_observation(&entry),
            Err(ExtractError::MalformedField("Temperature"))
        );
    }

    #[test]
    fn unparsable_station_id_is_malformed_field() {
        let summary = BELGRADE_SUMMARY.replace("Station ID: 13274", "Station ID: x13274");
        let entry = RawEntry::new("Station: Belgrade", summary);

        assert_eq!(
            extract_observation(&entry),
            Err(ExtractError::MalformedField("Station ID"))
        );
    }

    #[test]
    fn wind_sentinel_ignores_speed_segment_content() {
        // With no wind, the speed segment is not parsed at all.
        let summary = BELGRADE_SUMMARY.replace("Wind speed: 0 m/s", "Wind speed: garbage");
        let entry = RawEntry::new("Station: Belgrade", summary);
        let obs = extract_observation(&entry).unwrap();

        assert_eq!(obs.wind_speed, Measurement::new(0.0, "m/s"));
    }

    #[test]
    fn snow_sentinel_is_the_bare_unit_token() {
        let obs = extract_observation(&belgrade()).unwrap();
        assert_eq!(obs.snow_thickness, Measurement::new(0.0, "cm"));

        // "0 cm" is an ordinary reading, not the sentinel.
        let summary = BELGRADE_SUMMARY.replace("Snow: cm", "Snow: 0 cm");
        let entry = RawEntry::new("Station: Belgrade", summary);
        let obs = extract_observation(&entry).unwrap();
        assert_eq!(obs.snow_thickness, Measurement::new(0.0, "cm"));
    }

    #[test]
    fn extra_trailing_segments_are_ignored() {
        let summary = format!("{BELGRADE_SUMMARY} UV index: 2;");
        let entry = RawEntry::new("Station: Belgrade", summary);

        let obs = extract_observation(&entry).unwrap();
        assert_eq!(obs.station_id, 13274);
    }

    #[test]
    fn reordered_segments_still_extract() {
        // Label-driven reads survive a reordered feed.
        let entry = RawEntry::new(
            "Station: Belgrade",
            "Temperature: 5 °C; Station ID: 13274; Pressure: 1013.2 hPa; \
             Wind speed: 2 m/s; Wind direction: E; Humidity: 80 %; \
             Snow: cm; Weather description ID: 3; Weather description: Cloudy;",
        );

        let obs = extract_observation(&entry).unwrap();
        assert_eq!(obs.station_id, 13274);
        assert_eq!(obs.wind_direction, "E");
        assert_eq!(obs.wind_speed, Measurement::new(2.0, "m/s"));
    }

    #[test]
    fn empty_description_is_allowed() {
        let summary = BELGRADE_SUMMARY.replace("Weather description: Cloudy", "Weather description: ");
        let entry = RawEntry::new("Station: Belgrade", summary);

        let obs = extract_observation(&entry).unwrap();
        assert_eq!(obs.weather_description, "");
    }
}
