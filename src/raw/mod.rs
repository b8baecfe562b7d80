mod arena;
mod handle;
mod node;
mod raw_rank_map;
mod span;

pub(crate) use handle::Handle;
pub(crate) use raw_rank_map::{IntoEntries, RawRankMap};
