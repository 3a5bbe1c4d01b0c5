use super::MediumType;

/// Series-level information scraped alongside the table of contents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SeriesMeta {
    /// Series title, stripped from the front of entry titles when present.
    pub title: String,
    pub medium: MediumType,
    /// `Some(true)` only when the source marks the series as finished.
    #[cfg_attr(feature = "serde", serde(default))]
    pub end: Option<bool>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub authors: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub artists: Vec<String>,
    /// Alternative titles.
    #[cfg_attr(feature = "serde", serde(default))]
    pub synonyms: Vec<String>,
    /// Language in the country of origin.
    #[cfg_attr(feature = "serde", serde(default))]
    pub lang_coo: Option<String>,
    /// Language of the translation.
    #[cfg_attr(feature = "serde", serde(default))]
    pub lang_tl: Option<String>,
}
impl SeriesMeta {
    pub fn new(title: impl Into<String>, medium: MediumType) -> Self {
        Self {
            title: title.into(),
            medium,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn finished(mut self, end: bool) -> Self {
        self.end = Some(end);
        self
    }

    /// Returns true only if the series is explicitly marked as finished;
    /// an unknown status counts as ongoing.
    pub fn is_finished(&self) -> bool {
        self.end == Some(true)
    }
}
