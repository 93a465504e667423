//! Station-indexed access to one fetched set of entries.

use crate::extract::{self, ExtractError};
use crate::feed::RawEntry;
use crate::observation::StationObservation;

/// Station-name lookup over one fetched snapshot of feed entries.
///
/// An index owns the entries of a single fetch and is rebuilt wholesale
/// on the next one, never mutated in place. Extraction is deferred:
/// listing names reads only titles, and [`lookup`](Self::lookup)
/// extracts just the matched entry, so most summaries are never parsed.
#[derive(Debug, Clone)]
pub struct StationIndex {
    entries: Vec<RawEntry>,
}

impl StationIndex {
    /// Build an index over a snapshot of raw entries.
    pub fn new(entries: Vec<RawEntry>) -> Self {
        Self { entries }
    }

    /// Number of entries in the snapshot.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the snapshot holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Every station name, in feed order, one per entry.
    ///
    /// Duplicate names are kept as-is; callers sort when they want a
    /// sorted view. Needs only titles, so it succeeds even when some
    /// summaries would fail extraction.
    pub fn station_names(&self) -> Result<Vec<String>, ExtractError> {
        self.entries
            .iter()
            .map(|entry| extract::station_name(&entry.title).map(str::to_string))
            .collect()
    }

    /// Find and extract the observation for `name`.
    ///
    /// Scans titles for an exact, case-sensitive match (post-trim) and
    /// extracts only the first matching entry; later duplicates are
    /// ignored. `Ok(None)` means no entry carries that name. A
    /// malformed matched entry propagates its extraction error rather
    /// than masquerading as not-found.
    pub fn lookup(&self, name: &str) -> Result<Option<StationObservation>, ExtractError> {
        for entry in &self.entries {
            // Entries whose titles yield no name cannot match anything.
            let Ok(candidate) = extract::station_name(&entry.title) else {
                continue;
            };
            if candidate == name {
                return extract::extract_observation(entry).map(Some);
            }
        }
        Ok(None)
    }

    /// Extract every entry, in feed order.
    ///
    /// The first malformed entry aborts the whole listing.
    pub fn observations(&self) -> Result<Vec<StationObservation>, ExtractError> {
        self.entries.iter().map(extract::extract_observation).collect()
    }
}
