//! Zone system for card locations.
//!
//! A session has four kinds of zone: the shared Deck and Discard, and a
//! private Hand plus a public Stable per seat.
//!
//! ## Key Types
//!
//! - `Zone`: Zone identifier
//! - `ZoneStore`: Instance ownership, location tracking and movement
//! - `DrawReport`: Outcome of a draw, including any reshuffle

pub mod store;

pub use store::{DrawReport, Zone, ZoneStore};
