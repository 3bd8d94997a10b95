//! Paddock ruleset.

use std::sync::Arc;

use super::cards::{self, ids};
use crate::cards::{CardId, CardRegistry};
use crate::core::{ConfigError, SeatId, SessionConfig, VictoryCondition};
use crate::rules::Ruleset;

/// The paddock game.
#[derive(Clone, Debug)]
pub struct Paddock {
    config: SessionConfig,
    registry: Arc<CardRegistry>,
}

/// Builder for creating a Paddock.
#[derive(Clone, Debug)]
pub struct PaddockBuilder {
    seat_count: usize,
    starting_hand_size: usize,
    draw_per_turn: usize,
    hand_limit: usize,
    win_threshold: u8,
    counter_chains: bool,
}

impl Default for PaddockBuilder {
    fn default() -> Self {
        Self {
            seat_count: 2,
            starting_hand_size: 5,
            draw_per_turn: 1,
            hand_limit: 7,
            win_threshold: 7,
            counter_chains: false,
        }
    }
}

impl PaddockBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn seat_count(mut self, count: usize) -> Self {
        self.seat_count = count;
        self
    }

    #[must_use]
    pub fn starting_hand_size(mut self, size: usize) -> Self {
        self.starting_hand_size = size;
        self
    }

    #[must_use]
    pub fn draw_per_turn(mut self, count: usize) -> Self {
        self.draw_per_turn = count;
        self
    }

    #[must_use]
    pub fn hand_limit(mut self, limit: usize) -> Self {
        self.hand_limit = limit;
        self
    }

    /// Unit-class cards needed in a Stable to win.
    #[must_use]
    pub fn win_threshold(mut self, units: u8) -> Self {
        self.win_threshold = units;
        self
    }

    #[must_use]
    pub fn counter_chains(mut self, enabled: bool) -> Self {
        self.counter_chains = enabled;
        self
    }

    /// Build the ruleset. Fails if the resulting configuration is invalid.
    pub fn build(self) -> Result<Paddock, ConfigError> {
        let config = SessionConfig::new(self.seat_count)
            .with_starting_hand(self.starting_hand_size)
            .with_draw_per_turn(self.draw_per_turn)
            .with_hand_limit(self.hand_limit)
            .with_counter_chains(self.counter_chains)
            .with_victory(vec![
                VictoryCondition::UnitThreshold(self.win_threshold),
                VictoryCondition::LastSeatStanding,
            ]);
        config.validate()?;

        Ok(Paddock {
            config,
            registry: Arc::new(cards::registry()?),
        })
    }
}

impl Ruleset for Paddock {
    fn name(&self) -> &str {
        "Paddock"
    }

    fn config(&self) -> SessionConfig {
        self.config.clone()
    }

    fn registry(&self) -> Arc<CardRegistry> {
        Arc::clone(&self.registry)
    }

    fn deck(&self) -> Vec<CardId> {
        cards::deck()
    }

    fn starting_stable(&self, _seat: SeatId) -> Vec<CardId> {
        vec![ids::FOAL]
    }
}
