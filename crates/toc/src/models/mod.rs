mod entry;
mod index;
mod medium;
mod meta;
mod toc;

pub use self::entry::{RawEntry, TocItem};
pub use self::index::{combi_index, separate_index};
pub use self::medium::MediumType;
pub use self::meta::SeriesMeta;
pub use self::toc::{Episode, Part, Toc, TocContent};
