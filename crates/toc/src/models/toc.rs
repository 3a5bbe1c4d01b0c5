use super::{SeriesMeta, combi_index};
use time::UtcDateTime;

/// A single normalized episode.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Episode {
    /// Display title with chapter designation and separators removed.
    pub title: String,
    pub total_index: u32,
    pub partial_index: Option<u32>,
    /// Decimal concatenation of the total and partial index.
    pub combi_index: f64,
    pub locked: bool,
    pub url: String,
    pub release_date: Option<UtcDateTime>,
}
impl Episode {
    pub(crate) fn new(
        title: String,
        total_index: u32,
        partial_index: Option<u32>,
        url: String,
        release_date: Option<UtcDateTime>,
        locked: bool,
    ) -> Self {
        Self {
            title,
            total_index,
            partial_index,
            combi_index: combi_index(total_index, partial_index),
            locked,
            url,
            release_date,
        }
    }
}

/// A volume (book, season) grouping episodes.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Part {
    /// Volume title, empty when the source never named the volume.
    pub title: String,
    /// The volume number.
    pub total_index: u32,
    /// Always `None`; volumes are never split.
    pub partial_index: Option<u32>,
    pub combi_index: f64,
    pub episodes: Vec<Episode>,
}
impl Part {
    pub(crate) fn new(title: String, volume: u32, episodes: Vec<Episode>) -> Self {
        Self {
            title,
            total_index: volume,
            partial_index: None,
            combi_index: f64::from(volume),
            episodes,
        }
    }
}

/// Normalized content: flat episodes, or parts each holding episodes.
/// Never a mix of both.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", content = "items", rename_all = "lowercase"))]
pub enum TocContent {
    Episodes(Vec<Episode>),
    Parts(Vec<Part>),
}
impl TocContent {
    /// Iterates every episode, descending into parts.
    pub fn episodes(&self) -> Box<dyn Iterator<Item = &Episode> + '_> {
        match self {
            TocContent::Episodes(episodes) => Box::new(episodes.iter()),
            TocContent::Parts(parts) => Box::new(parts.iter().flat_map(|part| part.episodes.iter())),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            TocContent::Episodes(episodes) => episodes.is_empty(),
            TocContent::Parts(parts) => parts.is_empty(),
        }
    }
}
impl Default for TocContent {
    fn default() -> Self {
        Self::Episodes(Vec::new())
    }
}

/// The result of normalizing one table of contents.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Toc {
    /// Series metadata, passed through as received.
    pub meta: Option<SeriesMeta>,
    pub content: TocContent,
}
