//! Index arithmetic shared by episodes and parts.
//!
//! A combined index is the *decimal concatenation* of the total and partial
//! index, not a scaled sum: total `2` with partial `301` is `2.301`, partial
//! `5` is `2.5`. Consequently partials `1` and `10` collide (`2.1`), which
//! matches how the storage layer has always keyed episodes.

/// Concatenates `total` and `partial` (or `0`) into a combined index.
///
/// Leading zeros of a partial index do not exist once parsed, so a title
/// numbered "1.05" ends up with partial `5` and shares `1.5` with "1.5".
pub fn combi_index(total: u32, partial: Option<u32>) -> f64 {
    format!("{total}.{}", partial.unwrap_or(0)).parse().unwrap_or_else(|_| f64::from(total))
}

/// Splits a combined index back into its total and partial parts.
///
/// Returns `None` for negative or non-finite values. Trailing zeros of the
/// partial part cannot be recovered (`2.10` reads back as partial `1`).
pub fn separate_index(combi: f64) -> Option<(u32, Option<u32>)> {
    if !combi.is_finite() || combi < 0.0 {
        return None;
    }
    let rendered = combi.to_string();
    let (total, partial) = match rendered.split_once('.') {
        Some((total, partial)) => (total, Some(partial)),
        None => (rendered.as_str(), None),
    };
    let total = total.parse().ok()?;
    let partial = match partial {
        Some(partial) => Some(partial.parse().ok()?),
        None => None,
    };
    Some((total, partial.filter(|p| *p != 0)))
}
