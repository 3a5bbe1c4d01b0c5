use crate::consts::is_title_separator;

/// Removes a leading `"{series}:"` or `"{series} "` from `title`.
///
/// The comparison ignores ASCII case. Titles that consist of nothing but the
/// series name are returned untouched, as there would be nothing left to parse.
pub fn strip_series_prefix<'a>(title: &'a str, series: &str) -> &'a str {
    let series = series.trim();
    if series.is_empty() {
        return title;
    }
    let trimmed = title.trim_start();
    let Some(head) = trimmed.get(..series.len()) else {
        return title;
    };
    if !head.eq_ignore_ascii_case(series) {
        return title;
    }
    let tail = &trimmed[series.len()..];
    if !tail.starts_with(':') && !tail.starts_with(char::is_whitespace) {
        return title;
    }
    let tail = tail.trim_start_matches(is_title_separator);
    if tail.is_empty() { title } else { tail }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Overlord: Chapter 3", "Overlord", "Chapter 3")]
    #[case("Overlord Chapter 3", "Overlord", "Chapter 3")]
    #[case("overlord - Chapter 3", "Overlord", "Chapter 3")]
    #[case("Overlords Chapter 3", "Overlord", "Overlords Chapter 3")]
    #[case("Chapter 3", "Overlord", "Chapter 3")]
    #[case("Overlord", "Overlord", "Overlord")]
    #[case("Overlord: ", "Overlord", "Overlord: ")]
    #[case("Chapter 3", "", "Chapter 3")]
    #[case("Sōkyū: 2", "Sōkyū", "2")]
    fn strips_series_title(#[case] title: &str, #[case] series: &str, #[case] expected: &str) {
        assert_eq!(strip_series_prefix(title, series), expected);
    }
}
