//! Table-of-contents normalization.
//!
//! Scraped TOC pages list chapters with wildly inconsistent titles ("Ch. 1",
//! "C2: Foo", "2.5", "Volume 3 - Chapter 1 Part 2", "Intermission", ...) in
//! whatever order the site prefers. This crate turns such a listing into an
//! ordered tree of volumes and episodes with numeric indices the storage
//! layer can sort, deduplicate and diff against what it already knows.
//!
//! ```rust
//! use novella_toc::models::{RawEntry, TocContent, TocItem};
//! use novella_toc::{Options, normalize_iter};
//!
//! let items = ["Chapter 1", "Chapter 1.5: Interlude", "Chapter 2 - The End"]
//!     .into_iter()
//!     .map(|title| TocItem::Entry(RawEntry::new(title, format!("https://example.com/{title}"))));
//! let toc = normalize_iter(items, &Options::default()).unwrap();
//! let TocContent::Episodes(episodes) = toc.content else { unreachable!() };
//! let indices: Vec<f64> = episodes.iter().map(|e| e.combi_index).collect();
//! assert_eq!(indices, vec![1.0, 1.5, 2.0]);
//! assert_eq!(episodes[2].title, "The End");
//! ```

mod assemble;
mod consts;
pub mod error;
pub mod grammar;
pub mod models;
mod normalize;
mod options;
mod orphan;
mod prefix;
mod range;
mod segment;

pub use crate::normalize::{Normalizer, normalize, normalize_iter};
pub use crate::options::Options;
pub use crate::prefix::strip_series_prefix;
