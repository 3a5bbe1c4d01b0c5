use crate::grammar::Token;
use crate::models::Episode;
use crate::orphan::Slot;

/// Renders a slot into its episodes; a range `N-M` becomes `M-N+1` siblings
/// sharing everything but their index.
pub(crate) fn expand(slot: Slot) -> Vec<Episode> {
    let Slot { item, total, partial } = slot;
    let range_end = item.token.as_indexed().and_then(|indexed| indexed.range_end);
    let title = match item.token {
        Token::Indexed(indexed) => indexed.title,
        Token::Orphan { title } => title,
    };
    match range_end {
        Some(end) if end > total => (total..=end)
            .map(|index| Episode::new(title.clone(), index, None, item.url.clone(), item.release_date, item.locked))
            .collect(),
        _ => vec![Episode::new(title, total, partial, item.url, item.release_date, item.locked)],
    }
}
