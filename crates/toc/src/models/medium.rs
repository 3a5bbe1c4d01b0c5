use std::fmt::{Display, Formatter, Result as FmtResult};

/// The kind of media a series is released as.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum MediumType {
    #[default]
    Text,
    Audio,
    Video,
    Image,
}
impl MediumType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediumType::Text => "text",
            MediumType::Audio => "audio",
            MediumType::Video => "video",
            MediumType::Image => "image",
        }
    }
}
impl Display for MediumType {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}
