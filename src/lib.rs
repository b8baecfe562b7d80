//! An ordered map with O(log n) rank queries, built on a skip list.
//!
//! This crate provides [`OrderedRankMap`], a sorted key-value map that can answer
//! order-statistic queries alongside the usual dictionary operations:
//!
//! - [`get_rank`](OrderedRankMap::get_rank) - The 1-based sorted position of a key
//! - [`find_by_rank`](OrderedRankMap::find_by_rank) - The value at a given sorted position
//! - Indexing by [`Rank`] - e.g., `map[Rank(1)]` for the first entry
//!
//! # Example
//!
//! ```
//! use ordered_rank_map::{OrderedRankMap, Rank};
//!
//! let mut scores = OrderedRankMap::new();
//! scores.insert("Alice", 100);
//! scores.insert("Bob", 85);
//! scores.insert("Carol", 92);
//!
//! assert_eq!(scores.find(&"Bob"), Some(&85));
//! assert_eq!(scores.len(), 3);
//!
//! // Ranks are 1-based; 0 means "not present".
//! assert_eq!(scores.get_rank(&"Carol"), 3);
//! assert_eq!(scores.get_rank(&"Dave"), 0);
//!
//! assert_eq!(scores.find_by_rank(2), Some(&85)); // Bob is second alphabetically
//! assert_eq!(scores[Rank(1)], 100);
//! ```
//!
//! # Features
//!
//! - **`no_std` compatible** - Only requires `alloc` with `default-features = false`
//! - **Unpredictable heights** - The default `std` feature seeds node heights from the OS
//! - **Insert-if-absent** - [`insert`](OrderedRankMap::insert) never overwrites an existing key
//! - **O(log n) rank operations** - Every forward link records how many entries it skips
//! - **Tunable height policy** - See [`LevelGenerator`]
//!
//! # Logging
//!
//! Structural changes to the list (height raised or lowered, list cleared) are
//! reported through the [`log`](https://docs.rs/log) facade at `trace` level.

#![no_std]
// These forbid rules and lint groups are meant to be very restrictive.
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;

mod error;
mod level;
mod order_statistic;
mod raw;

pub mod rank_map;

pub use error::OccupiedError;
pub use level::{DEFAULT_PROBABILITY, LevelGenerator, MAX_LEVEL};
pub use order_statistic::Rank;
pub use rank_map::OrderedRankMap;
