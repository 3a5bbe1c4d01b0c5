//! The normalization driver, feeding each stream item through the pipeline.

use futures::{Stream, StreamExt};
use tracing::{Span, field, instrument};

use crate::assemble::assemble;
use crate::error::{ErrorKind, Result};
use crate::grammar::parse_title;
use crate::models::{RawEntry, SeriesMeta, Toc, TocItem};
use crate::options::Options;
use crate::prefix::strip_series_prefix;
use crate::segment::{Item, Segmenter, boundary_marker};

/// Incremental normalizer: [`push`](Self::push) every item in page order,
/// then [`finish`](Self::finish).
///
/// Orphan numbering needs a whole run, so nothing is produced before the
/// input has been drained.
#[derive(Debug)]
pub struct Normalizer<'o> {
    options: &'o Options,
    meta: Option<SeriesMeta>,
    position: usize,
    segmenter: Segmenter,
}
impl<'o> Normalizer<'o> {
    pub fn new(options: &'o Options) -> Self {
        Self {
            options,
            meta: None,
            position: 0,
            segmenter: Segmenter::default(),
        }
    }

    /// Feeds the next item of the stream.
    ///
    /// # Errors
    ///
    /// Fails only when series metadata is supplied twice, or after an entry.
    /// Scraped content never causes an error.
    pub fn push(&mut self, item: impl Into<TocItem>) -> Result<()> {
        let position = self.position;
        self.position += 1;
        match item.into() {
            TocItem::Meta(meta) => {
                if self.meta.is_some() {
                    exn::bail!(ErrorKind::DuplicateMeta);
                }
                if position > 0 {
                    exn::bail!(ErrorKind::MetaNotFirst(position));
                }
                self.meta = Some(meta);
            },
            TocItem::Entry(entry) => self.entry(entry),
        }
        Ok(())
    }

    fn entry(&mut self, entry: RawEntry) {
        let title = match &self.meta {
            Some(meta) if self.options.strip_series_prefix => strip_series_prefix(&entry.title, &meta.title),
            _ => entry.title.as_str(),
        };
        if let Some(marker) = boundary_marker(&entry, title) {
            self.segmenter.marker(marker);
            return;
        }
        match parse_title(title, self.options) {
            Ok(token) => self.segmenter.push(Item::new(token, entry)),
            Err(rejection) => tracing::debug!(%rejection, title = %entry.title, "Discarding table of contents entry"),
        }
    }

    /// Number of items pushed so far.
    pub fn len(&self) -> usize {
        self.position
    }

    pub fn is_empty(&self) -> bool {
        self.position == 0
    }

    pub fn finish(self) -> Toc {
        let finished = self.meta.as_ref().is_some_and(SeriesMeta::is_finished);
        Toc {
            content: assemble(self.segmenter.finish(), finished),
            meta: self.meta,
        }
    }
}

/// Normalizes an asynchronously produced table of contents.
///
/// # Errors
///
/// See [`Normalizer::push`].
#[instrument(skip_all, fields(items = field::Empty, episodes = field::Empty))]
pub async fn normalize<S>(items: S, options: &Options) -> Result<Toc>
where
    S: Stream<Item = TocItem>,
{
    let mut items = std::pin::pin!(items);
    let mut normalizer = Normalizer::new(options);
    while let Some(item) = items.next().await {
        normalizer.push(item)?;
    }
    Ok(record(normalizer))
}

/// Normalizes a table of contents that is already in memory.
///
/// # Errors
///
/// See [`Normalizer::push`].
#[instrument(skip_all, fields(items = field::Empty, episodes = field::Empty))]
pub fn normalize_iter<I>(items: I, options: &Options) -> Result<Toc>
where
    I: IntoIterator<Item = TocItem>,
{
    let mut normalizer = Normalizer::new(options);
    for item in items {
        normalizer.push(item)?;
    }
    Ok(record(normalizer))
}

fn record(normalizer: Normalizer<'_>) -> Toc {
    let span = Span::current();
    span.record("items", normalizer.len());
    let toc = normalizer.finish();
    span.record("episodes", toc.content.episodes().count());
    toc
}
