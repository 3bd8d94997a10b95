//! Paddock: a small stable-building card game for exercising the engine.
//!
//! - Every seat starts with a Foal in its Stable and five cards in hand
//! - On your turn: draw, then play one card (units, upgrades, downgrades,
//!   one-shots) and end the turn
//! - Other seats may counter most plays with Refusal or Veto
//! - First seat with seven unit-class cards in its Stable wins; the last
//!   seat standing also wins
//!
//! Supports 2-8 seats.

mod cards;
mod game;

pub use cards::{deck, ids, registry};
pub use game::{Paddock, PaddockBuilder};
