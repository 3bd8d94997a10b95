//! Ruleset trait for game implementations.
//!
//! Games implement `Ruleset` to supply:
//! - Session configuration (seats, hand sizes, victory conditions)
//! - The card definitions and the deck list
//! - Starting Stable contents per seat
//! - The effect handler table
//!
//! The session engine calls into `Ruleset` once at session start and never
//! interprets game-specific content directly.

mod victory;

pub use victory::WinChecker;

use std::sync::Arc;

use crate::cards::{CardId, CardRegistry};
use crate::core::{SeatId, SessionConfig};
use crate::effects::HandlerTable;

/// Everything a game variant contributes to a session.
pub trait Ruleset {
    /// Display name of the game.
    fn name(&self) -> &str;

    /// Session configuration.
    fn config(&self) -> SessionConfig;

    /// Shared card definitions. Loaded once and never mutated.
    fn registry(&self) -> Arc<CardRegistry>;

    /// Definitions making up the starting Deck, one entry per instance.
    fn deck(&self) -> Vec<CardId>;

    /// Cards placed in `seat`'s Stable before the deal.
    fn starting_stable(&self, _seat: SeatId) -> Vec<CardId> {
        Vec::new()
    }

    /// Effect handlers. Override to add or replace handlers by composition.
    fn handlers(&self) -> HandlerTable {
        HandlerTable::standard()
    }
}
