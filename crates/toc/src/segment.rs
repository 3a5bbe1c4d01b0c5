//! Volume run segmentation.
//!
//! Entries arrive one at a time; the segmenter decides which volume each one
//! belongs to and groups them into [`Run`]s. Entries seen before any volume
//! number is known wait in `pending` and join the first run that opens.

use std::mem;

use time::UtcDateTime;

use crate::consts;
use crate::grammar::{Token, clean_title};
use crate::models::RawEntry;

/// A parsed entry travelling through the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Item {
    pub(crate) token: Token,
    pub(crate) url: String,
    pub(crate) release_date: Option<UtcDateTime>,
    pub(crate) locked: bool,
}
impl Item {
    pub(crate) fn new(token: Token, entry: RawEntry) -> Self {
        Self {
            token,
            url: entry.url,
            release_date: entry.release_date,
            locked: entry.locked,
        }
    }
}

/// Entries sharing one resolved volume number (or none at all).
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Run {
    pub(crate) volume: Option<u32>,
    pub(crate) title: String,
    pub(crate) items: Vec<Item>,
}
impl Run {
    fn open(volume: u32, title: Option<String>, pending: Vec<Item>) -> Self {
        Self {
            volume: Some(volume),
            title: title.unwrap_or_default(),
            items: pending,
        }
    }

    fn adopt_title(&mut self, title: Option<&String>) {
        if self.title.is_empty()
            && let Some(title) = title
        {
            self.title.clone_from(title);
        }
    }
}

/// A volume boundary: an entry without a link or date whose title is just a
/// volume designation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Marker {
    pub(crate) volume: u32,
    pub(crate) title: Option<String>,
}

/// Returns the marker `entry` represents (given its prefix-stripped title).
pub(crate) fn boundary_marker(entry: &RawEntry, title: &str) -> Option<Marker> {
    if !entry.url.trim().is_empty() || entry.release_date.is_some() {
        return None;
    }
    let captures = consts::MARKER_REGEX.captures(title)?;
    let volume = captures.get(1)?.as_str().parse().ok()?;
    let title = captures.get(2).map(|m| clean_title(m.as_str())).filter(|t| !t.is_empty());
    Some(Marker { volume, title })
}

#[derive(Debug, Default)]
pub(crate) struct Segmenter {
    current: Option<Run>,
    pending: Vec<Item>,
    runs: Vec<Run>,
}
impl Segmenter {
    pub(crate) fn marker(&mut self, marker: Marker) {
        self.flush();
        self.current = Some(Run::open(marker.volume, marker.title, mem::take(&mut self.pending)));
    }

    pub(crate) fn push(&mut self, item: Item) {
        let Some(volume) = item.token.volume() else {
            match self.current.as_mut() {
                Some(run) => run.items.push(item),
                None => self.pending.push(item),
            }
            return;
        };
        let volume_title = item.token.as_indexed().and_then(|indexed| indexed.volume_title.as_ref());
        if let Some(run) = self.current.as_mut().filter(|run| run.volume == Some(volume)) {
            run.adopt_title(volume_title);
            run.items.push(item);
            return;
        }
        let title = volume_title.cloned();
        self.flush();
        let mut run = Run::open(volume, title, mem::take(&mut self.pending));
        run.items.push(item);
        self.current = Some(run);
    }

    /// Closes the open run and returns every run in flush order.
    ///
    /// If no volume was ever resolved, everything lands in a single
    /// volume-less run.
    pub(crate) fn finish(mut self) -> Vec<Run> {
        self.flush();
        if self.runs.is_empty() && !self.pending.is_empty() {
            self.runs.push(Run {
                volume: None,
                title: String::new(),
                items: mem::take(&mut self.pending),
            });
        }
        self.runs
    }

    fn flush(&mut self) {
        if let Some(run) = self.current.take() {
            tracing::trace!(volume = ?run.volume, items = run.items.len(), "Flushing volume run");
            self.runs.push(run);
        }
    }
}
