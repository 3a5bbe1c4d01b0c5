//! Title grammar: decomposes one free-text entry title into a [`Token`].
//!
//! Forms are tried in a fixed order, first match wins:
//!
//! 1. index range (`C4-7`)
//! 2. combined short form (`V1C2P3`)
//! 3. embedded volume prefix (`Volume 2: Title - ...`), followed by the
//!    remaining forms on what is left of the title
//! 4. sentinel words (`DELETED`, `SPAM`) in place of the chapter number,
//!    either after a chapter keyword or filling the whole index slot
//! 5. keyword + integer (`Chapter 3`, `Ch. 2.5`, `12`)
//! 6. partial-index suffix on the residual title (`Part 2`, `[1/3]`)
//!
//! Anything else is an [`Token::Orphan`]. Every matcher is a stateless
//! static regex, so there is no state carried between calls.

use derive_more::{Display, Error};
use regex::Match;

use crate::consts::{self, is_title_separator};
use crate::options::Options;

/// The structured reading of a single title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Indexed(Indexed),
    /// No chapter index could be recognized.
    Orphan { title: String },
}
impl Token {
    pub fn title(&self) -> &str {
        match self {
            Token::Indexed(indexed) => &indexed.title,
            Token::Orphan { title } => title,
        }
    }

    pub fn as_indexed(&self) -> Option<&Indexed> {
        match self {
            Token::Indexed(indexed) => Some(indexed),
            Token::Orphan { .. } => None,
        }
    }

    /// The volume number embedded in the title, if any.
    pub fn volume(&self) -> Option<u32> {
        self.as_indexed().and_then(|indexed| indexed.volume)
    }
}

/// A title carrying a recognizable chapter index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Indexed {
    pub total: u32,
    pub partial: Option<u32>,
    /// Last index of a range; always greater than `total` when present.
    pub range_end: Option<u32>,
    pub volume: Option<u32>,
    pub volume_title: Option<String>,
    /// Residual display title.
    pub title: String,
}
impl Indexed {
    pub(crate) fn new(total: u32, title: impl Into<String>) -> Self {
        Self {
            total,
            partial: None,
            range_end: None,
            volume: None,
            volume_title: None,
            title: title.into(),
        }
    }

    /// The index of the chronologically last chapter this token covers.
    pub(crate) fn last(&self) -> u32 {
        self.range_end.unwrap_or(self.total)
    }
}

/// Why a title was discarded outright.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum Rejection {
    #[display("sentinel '{_0}' in place of a chapter number")]
    Sentinel(#[error(not(source))] String),
    #[display("inverted range {start}-{end}")]
    InvertedRange { start: u32, end: u32 },
    #[display("range {start}-{end} is wider than {max} chapters")]
    OversizedRange { start: u32, end: u32, max: u32 },
}

/// Parses one (already prefix-stripped) title.
pub fn parse_title(title: &str, options: &Options) -> Result<Token, Rejection> {
    let title = title.trim();
    if let Some(indexed) = combined(title) {
        return Ok(Token::Indexed(indexed));
    }
    let (volume, rest) = match volume_prefix(title) {
        Some(prefix) => (Some((prefix.number, prefix.title)), prefix.rest),
        None => (None, title),
    };
    if let Some(word) = sentinel(rest, options) {
        return Err(Rejection::Sentinel(word.to_string()));
    }
    let Some(mut indexed) = range(rest, options)?.or_else(|| chapter(rest)) else {
        return Ok(Token::Orphan { title: clean_title(title) });
    };
    if let Some((number, volume_title)) = volume {
        indexed.volume = Some(number);
        indexed.volume_title = volume_title;
    }
    Ok(Token::Indexed(indexed))
}

/// Trims whitespace and separator punctuation from both ends.
pub fn clean_title(title: &str) -> String {
    title.trim_matches(is_title_separator).to_string()
}

fn number(m: Option<Match<'_>>) -> Option<u32> {
    m?.as_str().parse().ok()
}

fn range(title: &str, options: &Options) -> Result<Option<Indexed>, Rejection> {
    let Some(captures) = consts::RANGE_REGEX.captures(title) else {
        return Ok(None);
    };
    let (Some(start), Some(end)) = (number(captures.get(1)), number(captures.get(2))) else {
        return Ok(None);
    };
    if end < start {
        return Err(Rejection::InvertedRange { start, end });
    }
    if end - start >= options.max_range {
        return Err(Rejection::OversizedRange {
            start,
            end,
            max: options.max_range,
        });
    }
    let mut indexed = Indexed::new(start, clean_title(captures.get(3).map_or("", |m| m.as_str())));
    indexed.range_end = Some(end).filter(|end| *end > start);
    Ok(Some(indexed))
}

fn combined(title: &str) -> Option<Indexed> {
    let captures = consts::COMBINED_REGEX.captures(title)?;
    let mut indexed = Indexed::new(
        number(captures.get(2))?,
        clean_title(captures.get(4).map_or("", |m| m.as_str())),
    );
    indexed.volume = Some(number(captures.get(1))?);
    indexed.partial = Some(number(captures.get(3))?);
    Some(indexed)
}

struct VolumePrefix<'a> {
    number: u32,
    title: Option<String>,
    /// Whatever follows the volume designation (and its title).
    rest: &'a str,
}

fn volume_prefix(title: &str) -> Option<VolumePrefix<'_>> {
    let captures = consts::VOLUME_REGEX.captures(title)?;
    let number = number(captures.get(1))?;
    let rest = captures.get(2).map_or("", |m| m.as_str());
    // "v2.5" is a decimal, not volume 2 followed by chapter 5.
    if rest.strip_prefix('.').is_some_and(|r| r.starts_with(|c: char| c.is_ascii_digit())) {
        return None;
    }
    if let Some(start) = consts::CHAPTER_START_REGEX.captures(rest).and_then(|c| c.get(1)) {
        let volume_title = clean_title(&rest[..start.start()]);
        return Some(VolumePrefix {
            number,
            title: Some(volume_title).filter(|t| !t.is_empty()),
            rest: &rest[start.start()..],
        });
    }
    // No chapter keyword; either a bare number follows or there is no index at all.
    Some(VolumePrefix {
        number,
        title: None,
        rest: rest.trim_start_matches(is_title_separator),
    })
}

fn sentinel<'a>(title: &'a str, options: &Options) -> Option<&'a str> {
    let captures = consts::INDEX_SLOT_WORD_REGEX.captures(title)?;
    let word = captures.get(1).or_else(|| captures.get(2))?.as_str();
    options.is_sentinel(word).then_some(word)
}

fn chapter(title: &str) -> Option<Indexed> {
    let captures = consts::CHAPTER_REGEX.captures(title)?;
    let total = number(captures.get(1))?;
    let residual = captures.get(3).map_or("", |m| m.as_str());
    // A decimal point wins over any suffix; the residual is then left alone.
    let (partial, residual) = match number(captures.get(2)) {
        Some(partial) => (Some(partial), residual),
        None => partial_suffix(residual),
    };
    let mut indexed = Indexed::new(total, clean_title(residual));
    indexed.partial = partial;
    Some(indexed)
}

/// Splits a trailing "Part M" or "M/K" piece designation off `residual`.
fn partial_suffix(residual: &str) -> (Option<u32>, &str) {
    if let Some(captures) = consts::PART_SUFFIX_REGEX.captures(residual)
        && let Some(whole) = captures.get(0)
        && let Some(part) = number(captures.get(1))
    {
        return (Some(part), &residual[..whole.start()]);
    }
    if let Some(captures) = consts::FRACTION_SUFFIX_REGEX.captures(residual)
        && let Some(whole) = captures.get(0)
        && let (Some(piece), Some(pieces)) = (number(captures.get(1)), number(captures.get(2)))
        && piece >= 1
        && piece <= pieces
    {
        return (Some(piece), &residual[..whole.start()]);
    }
    (None, residual)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn indexed(total: u32, partial: Option<u32>, title: &str) -> Token {
        let mut indexed = Indexed::new(total, title);
        indexed.partial = partial;
        Token::Indexed(indexed)
    }

    fn parse(title: &str) -> Result<Token, Rejection> {
        parse_title(title, &Options::default())
    }

    #[rstest]
    #[case("Chapter 1", 1, None, "")]
    #[case("Ch. 1 - X", 1, None, "X")]
    #[case("C2: Y", 2, None, "Y")]
    #[case("2.5: Y", 2, Some(5), "Y")]
    #[case("Chapter. 3 - Z", 3, None, "Z")]
    #[case("c4 - W Part 1", 4, Some(1), "W")]
    #[case("4 - W Part 2", 4, Some(2), "W")]
    #[case("Chap. 7: The End", 7, None, "The End")]
    #[case("Episode 12", 12, None, "")]
    #[case("EP.3 Return", 3, None, "Return")]
    #[case("12 Days of Christmas", 12, None, "Days of Christmas")]
    #[case("1. Introduction", 1, None, "Introduction")]
    #[case("Chapter 3.14", 3, Some(14), "")]
    #[case("Chapter 8: Homecoming [2/3]", 8, Some(2), "Homecoming")]
    #[case("Chapter 8: Homecoming (Pt. 3)", 8, Some(3), "Homecoming")]
    #[case("Chapter 9 - Homecoming 1/2", 9, Some(1), "Homecoming")]
    fn parses_chapter_titles(
        #[case] title: &str,
        #[case] total: u32,
        #[case] partial: Option<u32>,
        #[case] display: &str,
    ) {
        assert_eq!(parse(title), Ok(indexed(total, partial, display)));
    }

    #[test]
    fn fraction_larger_than_its_whole_is_part_of_the_title() {
        assert_eq!(parse("Chapter 5: 24/7"), Ok(indexed(5, None, "24/7")));
    }

    #[rstest]
    #[case("C4-7", 4, Some(7), "")]
    #[case("Chapter 10~12: Festival", 10, Some(12), "Festival")]
    #[case("5-5 Same", 5, None, "Same")]
    #[case("C4–7", 4, Some(7), "")]
    #[case("C1-1000", 1, Some(1000), "")]
    fn parses_ranges(#[case] title: &str, #[case] start: u32, #[case] end: Option<u32>, #[case] display: &str) {
        let mut expected = Indexed::new(start, display);
        expected.range_end = end;
        assert_eq!(parse(title), Ok(Token::Indexed(expected)));
    }

    #[test]
    fn spaced_dash_is_not_a_range() {
        assert_eq!(parse("Chapter 10 - 12 Days"), Ok(indexed(10, None, "12 Days")));
    }

    #[test]
    fn inverted_range_is_rejected() {
        assert_eq!(parse("C7-4"), Err(Rejection::InvertedRange { start: 7, end: 4 }));
    }

    #[rstest]
    #[case("C1-1001", 1, 1001, 1000)]
    #[case("C1-4294967295 Spam page", 1, u32::MAX, 1000)]
    #[case("Chapter 0-5000000", 0, 5_000_000, 1000)]
    fn oversized_range_is_rejected(#[case] title: &str, #[case] start: u32, #[case] end: u32, #[case] max: u32) {
        assert_eq!(parse(title), Err(Rejection::OversizedRange { start, end, max }));
    }

    #[test]
    fn range_width_is_configurable() {
        let options = Options {
            max_range: 3,
            ..Options::default()
        };
        assert!(matches!(parse_title("C4-6", &options), Ok(Token::Indexed(_))));
        assert_eq!(
            parse_title("C4-7", &options),
            Err(Rejection::OversizedRange { start: 4, end: 7, max: 3 })
        );
    }

    #[rstest]
    #[case("V1C2P3", 1, 2, 3, "")]
    #[case("v 2 c 10 p 1 - Storm", 2, 10, 1, "Storm")]
    fn parses_combined_short_form(
        #[case] title: &str,
        #[case] volume: u32,
        #[case] total: u32,
        #[case] partial: u32,
        #[case] display: &str,
    ) {
        let Ok(Token::Indexed(token)) = parse(title) else {
            panic!("expected an indexed token for {title}");
        };
        assert_eq!(token.volume, Some(volume));
        assert_eq!(token.total, total);
        assert_eq!(token.partial, Some(partial));
        assert_eq!(token.title, display);
    }

    #[rstest]
    #[case("Volume 2: The Return - Chapter 3: Home", 2, Some("The Return"), 3, None, "Home")]
    #[case("Vol. 1 Ch. 4", 1, None, 4, None, "")]
    #[case("Book 3 - 7 Part 2", 3, None, 7, Some(2), "")]
    #[case("Season 1 Episode 5 - Pilot", 1, None, 5, None, "Pilot")]
    #[case("V4 C2-3", 4, None, 2, None, "")]
    #[case("Volume 1: C3PO Returns - Chapter 5", 1, Some("C3PO Returns"), 5, None, "")]
    fn parses_embedded_volume(
        #[case] title: &str,
        #[case] volume: u32,
        #[case] volume_title: Option<&str>,
        #[case] total: u32,
        #[case] partial: Option<u32>,
        #[case] display: &str,
    ) {
        let Ok(Token::Indexed(token)) = parse(title) else {
            panic!("expected an indexed token for {title}");
        };
        assert_eq!(token.volume, Some(volume));
        assert_eq!(token.volume_title.as_deref(), volume_title);
        assert_eq!(token.total, total);
        assert_eq!(token.partial, partial);
        assert_eq!(token.title, display);
    }

    #[rstest]
    #[case("DELETED")]
    #[case("Chapter Deleted")]
    #[case("Ch. SPAM")]
    #[case("[deleted]")]
    #[case("Volume 2: spam")]
    #[case("SPAM: buy now")]
    #[case("(Deleted)")]
    fn sentinels_are_rejected(#[case] title: &str) {
        assert!(matches!(parse(title), Err(Rejection::Sentinel(_))));
    }

    #[test]
    fn sentinels_are_configurable() {
        let options = Options {
            sentinels: vec!["REMOVED".to_string()],
            ..Options::default()
        };
        assert!(matches!(parse_title("Chapter REMOVED", &options), Err(Rejection::Sentinel(_))));
        assert!(matches!(parse_title("Chapter DELETED", &options), Ok(Token::Orphan { .. })));
    }

    #[rstest]
    #[case("Intermission", "Intermission")]
    #[case("  Prologue: ", "Prologue")]
    #[case("Cats and Dogs", "Cats and Dogs")]
    #[case("Epilogue", "Epilogue")]
    #[case("Volume 2 Afterword", "Volume 2 Afterword")]
    #[case("Spamalot", "Spamalot")]
    #[case("Deleted Scenes", "Deleted Scenes")]
    #[case("Spam Musubi", "Spam Musubi")]
    #[case("C3PO", "C3PO")]
    #[case("v2.5", "v2.5")]
    #[case("-", "")]
    fn unindexed_titles_are_orphans(#[case] title: &str, #[case] display: &str) {
        assert_eq!(parse(title), Ok(Token::Orphan { title: display.to_string() }));
    }

    #[test]
    fn leading_zeros_in_a_decimal_are_lost() {
        // "1.05" and "1.5" share partial 5 and therefore one combined index.
        assert_eq!(parse("Chapter 1.05"), Ok(indexed(1, Some(5), "")));
        assert_eq!(parse("Chapter 1.05"), parse("Chapter 1.5"));
    }

    #[test]
    fn parsing_is_stateless_across_calls() {
        for _ in 0..3 {
            assert_eq!(parse("Chapter 2"), Ok(indexed(2, None, "")));
            assert_eq!(parse("Chapter 2"), Ok(indexed(2, None, "")));
        }
    }
}
