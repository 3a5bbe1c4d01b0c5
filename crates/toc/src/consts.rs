use regex::Regex;
use std::sync::LazyLock;

// Chapter keywords, longest spelling first (the regex engine is leftmost-first).
const CHAPTER_KEYWORD: &str = r"(?:chapter|chap|ch|episode|ep|c)";
const VOLUME_KEYWORD: &str = r"(?:volume|vol|book|season|v)";
// Separator allowed between a keyword and its number.
const KEYWORD_GAP: &str = r"\.?\s*[:\-–]?\s*";

macro_rules! regex {
    ($name:ident, $regex:expr) => {
        pub(crate) static $name: LazyLock<Regex> = LazyLock::new(|| Regex::new($regex).unwrap());
    };
}

// "C4-7", "Chapter 10~12", "C4–7", "4-7: Title"
regex!(RANGE_REGEX, format!(r"^(?i){CHAPTER_KEYWORD}?{KEYWORD_GAP}(\d+)[-~–](\d+)(.*)$").as_str());
// "V1C2P3", "v 1 c 2 p 3 - Title"
regex!(COMBINED_REGEX, r"^(?i)v\s*(\d+)\s*c\s*(\d+)\s*p\s*(\d+)(.*)$");
// "Chapter 3 - Title", "Ch. 2.5: Title", "12 Title"
// The number must end on a word boundary: "C3PO" is a name, not chapter 3.
regex!(CHAPTER_REGEX, format!(r"^(?i)(?:{CHAPTER_KEYWORD}{KEYWORD_GAP})?(\d+)(?:\.(\d+))?\b(.*)$").as_str());
// Start of a chapter designation somewhere after a volume prefix.
regex!(CHAPTER_START_REGEX, format!(r"(?i)(?:^|[\s:\-–,.(\[])({CHAPTER_KEYWORD}{KEYWORD_GAP}\d+\b)").as_str());
// "Volume 2: Title - Chapter 3", "Book 1 Ch 2", "Vol.3 12"
regex!(VOLUME_REGEX, format!(r"^(?i){VOLUME_KEYWORD}\.?\s*(\d+)(.*)$").as_str());
// Trailing "Part 2", "(Pt. 2)"
regex!(PART_SUFFIX_REGEX, r"(?i)(?:^|[\s(\[:\-–,])(?:part|pt)\.?\s*(\d+)\s*[)\]]?\s*$");
// Trailing "[1/3]", "(2/3)", "2/3"
regex!(FRACTION_SUFFIX_REGEX, r"(?:^|[\s(\[:\-–,])[\[(]?\s*(\d+)\s*/\s*(\d+)\s*[\])]?\s*$");
// A title consisting solely of a volume designation, optionally titled.
regex!(MARKER_REGEX, r"^(?i)\s*(?:volume|vol|book|season)\.?\s*(\d+)\s*(?:[:\-–]\s*(.*?))?\s*$");
// A word standing where a chapter number is expected: right after a chapter
// keyword ("Chapter Deleted"), or as the whole slot ("DELETED", "[spam]",
// "SPAM: buy now"). A bare leading word ("Deleted Scenes") is not a slot.
regex!(
    INDEX_SLOT_WORD_REGEX,
    format!(
        r"^(?i)(?:{CHAPTER_KEYWORD}[\s.:\-–]+[\[(]?([[:alpha:]]+)|[\[(]?([[:alpha:]]+)[\])]?\s*(?:$|[:\-–,.]))"
    )
    .as_str()
);

/// Characters trimmed from both ends of every display title.
pub(crate) fn is_title_separator(c: char) -> bool {
    c.is_whitespace() || matches!(c, ':' | '-' | '–' | ',' | '.')
}
