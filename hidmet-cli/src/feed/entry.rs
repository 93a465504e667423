//! Raw feed entry type.

/// One item of the weather bulletin, as retrieved: free text only,
/// immutable once fetched. Extraction turns this into a typed
/// [`crate::observation::StationObservation`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEntry {
    /// Item title, expected shape `Station: <name>`.
    pub title: String,
    /// Item description: semicolon-separated `Label: value` segments.
    pub summary: String,
}

impl RawEntry {
    /// Create an entry from title and summary text.
    pub fn new(title: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            summary: summary.into(),
        }
    }
}
