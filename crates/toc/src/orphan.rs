//! Index synthesis for entries without a recognizable chapter number.
//!
//! Orphans are grouped into contiguous blocks and numbered relative to the
//! indexed entries surrounding them, in story order rather than page order:
//!
//! - **leading** blocks (nothing indexed before them) become `0.1`, `0.2`, ...
//! - **interior** blocks hang off the smaller neighbour: `N.101`, `N.102`, ...
//!   or `N.301`, ... when that neighbour is itself a partial chapter
//! - **trailing** blocks are numbered like interior ones if the series is
//!   finished, and dropped otherwise (they are usually announcements that
//!   will be replaced by real chapters).

use crate::grammar::Indexed;
use crate::segment::Item;

/// Sub-index offset for orphans anchored to a whole chapter.
const WHOLE_ANCHOR_OFFSET: u32 = 100;
/// Sub-index offset for orphans anchored to a partial chapter.
const PARTIAL_ANCHOR_OFFSET: u32 = 300;

/// Story order of the entries in a run, as listed on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Direction {
    Ascending,
    Descending,
}

/// An entry with its final total and partial index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Slot {
    pub(crate) item: Item,
    pub(crate) total: u32,
    pub(crate) partial: Option<u32>,
}

/// Determines the listing direction from the indexed entries.
///
/// Pages mixing both directions are resolved by majority, ties ascending.
pub(crate) fn direction(items: &[Item]) -> Direction {
    let totals: Vec<u32> = items.iter().filter_map(|item| item.token.as_indexed()).map(|i| i.total).collect();
    let (mut rising, mut falling) = (0usize, 0usize);
    for pair in totals.windows(2) {
        if pair[1] > pair[0] {
            rising += 1;
        } else if pair[1] < pair[0] {
            falling += 1;
        }
    }
    if falling == 0 {
        return Direction::Ascending;
    }
    if rising == 0 {
        return Direction::Descending;
    }
    tracing::debug!(rising, falling, "Chapter order is not monotonic; deciding by majority");
    if falling > rising { Direction::Descending } else { Direction::Ascending }
}

/// Which page-order neighbour of a block the numbering is counted from.
#[derive(Clone, Copy)]
enum Side {
    Previous,
    Next,
}

struct Anchor {
    total: u32,
    partial: Option<u32>,
    side: Side,
}
impl Anchor {
    /// Anchoring to the chronologically earlier neighbour counts from its last chapter.
    fn earlier(indexed: &Indexed, side: Side) -> Self {
        Self {
            total: indexed.last(),
            partial: indexed.partial.filter(|_| indexed.range_end.is_none()),
            side,
        }
    }

    fn later(indexed: &Indexed, side: Side) -> Self {
        Self {
            total: indexed.total,
            partial: indexed.partial,
            side,
        }
    }

    fn offset(&self) -> u32 {
        if self.partial.is_some() { PARTIAL_ANCHOR_OFFSET } else { WHOLE_ANCHOR_OFFSET }
    }
}

/// Assigns indices to every orphan in `items`, dropping trailing orphans of
/// ongoing series. Relative order is preserved.
pub(crate) fn synthesize(items: Vec<Item>, finished: bool) -> Vec<Slot> {
    let direction = direction(&items);
    let mut indices: Vec<Option<(u32, Option<u32>)>> =
        items.iter().map(|item| item.token.as_indexed().map(|i| (i.total, i.partial))).collect();
    let mut dropped = vec![false; items.len()];

    let mut start = 0;
    while start < items.len() {
        if indices[start].is_some() {
            start += 1;
            continue;
        }
        let end = (start..items.len()).find(|&i| items[i].token.as_indexed().is_some()).unwrap_or(items.len());
        let previous = start.checked_sub(1).and_then(|i| items[i].token.as_indexed());
        let next = items.get(end).and_then(|item| item.token.as_indexed());
        let (before, after) = match direction {
            Direction::Ascending => ((previous, Side::Previous), (next, Side::Next)),
            Direction::Descending => ((next, Side::Next), (previous, Side::Previous)),
        };
        let anchor = match (before, after) {
            ((Some(before), before_side), (Some(after), after_side)) => {
                if after.total < before.last() {
                    Some(Anchor::later(after, after_side))
                } else {
                    Some(Anchor::earlier(before, before_side))
                }
            },
            ((Some(before), before_side), (None, _)) if finished => Some(Anchor::earlier(before, before_side)),
            ((Some(_), _), (None, _)) => {
                tracing::debug!(count = end - start, "Dropping trailing orphans of an ongoing series");
                dropped[start..end].fill(true);
                None
            },
            ((None, _), _) => {
                for (k, index) in (1..).zip(start..end) {
                    indices[index] = Some((0, Some(k)));
                }
                None
            },
        };
        if let Some(anchor) = anchor {
            let len = end - start;
            for offset in 0..len {
                let k = match anchor.side {
                    Side::Previous => offset + 1,
                    Side::Next => len - offset,
                };
                let k = u32::try_from(k).unwrap_or(u32::MAX);
                indices[start + offset] = Some((anchor.total, Some(anchor.offset().saturating_add(k))));
            }
        }
        start = end;
    }

    items
        .into_iter()
        .zip(indices)
        .zip(dropped)
        .filter(|(_, dropped)| !dropped)
        .filter_map(|((item, index), _)| index.map(|(total, partial)| Slot { item, total, partial }))
        .collect()
}
