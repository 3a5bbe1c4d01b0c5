/// Tunables for the normalizer.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Options {
    /// Words which, found where a chapter number should be, mark an entry
    /// that must be discarded (compared case-insensitively).
    pub sentinels: Vec<String>,
    /// Remove a leading `"{series title}:"` or `"{series title} "` from
    /// entry titles before parsing.
    pub strip_series_prefix: bool,
    /// Widest index range (`C1-1000`) expanded into episodes; wider ranges
    /// are discarded.
    pub max_range: u32,
}
impl Options {
    pub(crate) fn is_sentinel(&self, word: &str) -> bool {
        self.sentinels.iter().any(|sentinel| sentinel.eq_ignore_ascii_case(word))
    }
}
impl Default for Options {
    fn default() -> Self {
        Self {
            sentinels: vec!["DELETED".to_string(), "SPAM".to_string()],
            strip_series_prefix: true,
            max_range: 1000,
        }
    }
}
