use super::SeriesMeta;
use time::UtcDateTime;

/// One scraped table-of-contents row, in the page's natural order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawEntry {
    /// Free-text title exactly as it appeared on the page.
    pub title: String,
    /// Link to the episode; empty for pure volume boundary markers.
    pub url: String,
    /// Release date; absent for boundary markers by convention.
    #[cfg_attr(feature = "serde", serde(default))]
    pub release_date: Option<UtcDateTime>,
    /// Whether the episode is behind a paywall or otherwise locked.
    #[cfg_attr(feature = "serde", serde(default))]
    pub locked: bool,
}
impl RawEntry {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            release_date: None,
            locked: false,
        }
    }

    #[must_use]
    pub fn released(mut self, date: UtcDateTime) -> Self {
        self.release_date = Some(date);
        self
    }

    #[must_use]
    pub fn locked(mut self, locked: bool) -> Self {
        self.locked = locked;
        self
    }
}

/// An item of the stream handed to the normalizer.
///
/// At most one [`TocItem::Meta`] may appear, and only as the very first item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TocItem {
    Meta(SeriesMeta),
    Entry(RawEntry),
}
impl From<SeriesMeta> for TocItem {
    fn from(meta: SeriesMeta) -> Self {
        Self::Meta(meta)
    }
}
impl From<RawEntry> for TocItem {
    fn from(entry: RawEntry) -> Self {
        Self::Entry(entry)
    }
}
