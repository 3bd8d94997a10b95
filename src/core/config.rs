//! Session configuration.
//!
//! A ruleset hands the engine one `SessionConfig` at startup:
//! - seat count and dealing parameters
//! - base hand limit and actions per turn (passives modify both)
//! - reaction window behavior
//! - an ordered list of `VictoryCondition`s
//!
//! The engine never hardcodes any of these numbers.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use crate::cards::CardId;

/// Smallest seat count a session accepts.
pub const MIN_SEATS: usize = 2;

/// Largest seat count a session accepts.
pub const MAX_SEATS: usize = 8;

/// A terminal condition checked after every accepted action.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum VictoryCondition {
    /// Own at least this many unit-class cards in your Stable.
    /// A card with an active `CountsDouble` passive counts twice.
    UnitThreshold(u8),

    /// Own at least one instance of every listed definition in your Stable.
    FullSet(Vec<CardId>),

    /// Be the only seat still alive.
    LastSeatStanding,
}

/// Configuration for one session.
///
/// ## Example
///
/// ```
/// use tabletop_session::core::{SessionConfig, VictoryCondition};
///
/// let config = SessionConfig::new(4)
///     .with_starting_hand(5)
///     .with_hand_limit(7)
///     .with_victory(vec![VictoryCondition::UnitThreshold(6)]);
///
/// assert!(config.validate().is_ok());
/// assert_eq!(config.seat_count, 4);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Number of seats (2-8).
    pub seat_count: usize,

    /// Cards dealt to each seat before the first turn.
    pub starting_hand: usize,

    /// Base number of cards drawn at the start of each turn.
    pub draw_per_turn: usize,

    /// Base hand limit checked after the begin-of-turn draw.
    pub hand_limit: usize,

    /// Base number of cards a seat may play per turn.
    pub actions_per_turn: u8,

    /// When set, an ordinary counter reopens the reaction window to every
    /// other alive seat instead of closing it.
    pub counter_chains: bool,

    /// How many events the snapshot log keeps.
    pub recent_event_limit: usize,

    /// Victory conditions, all checked for each seat.
    pub victory: Vec<VictoryCondition>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seat_count: 2,
            starting_hand: 5,
            draw_per_turn: 1,
            hand_limit: 7,
            actions_per_turn: 1,
            counter_chains: false,
            recent_event_limit: 20,
            victory: vec![VictoryCondition::UnitThreshold(7)],
        }
    }
}

impl SessionConfig {
    /// Default configuration for `seat_count` seats.
    #[must_use]
    pub fn new(seat_count: usize) -> Self {
        Self {
            seat_count,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_starting_hand(mut self, cards: usize) -> Self {
        self.starting_hand = cards;
        self
    }

    #[must_use]
    pub fn with_draw_per_turn(mut self, cards: usize) -> Self {
        self.draw_per_turn = cards;
        self
    }

    #[must_use]
    pub fn with_hand_limit(mut self, limit: usize) -> Self {
        self.hand_limit = limit;
        self
    }

    #[must_use]
    pub fn with_actions_per_turn(mut self, actions: u8) -> Self {
        self.actions_per_turn = actions;
        self
    }

    #[must_use]
    pub fn with_counter_chains(mut self, enabled: bool) -> Self {
        self.counter_chains = enabled;
        self
    }

    #[must_use]
    pub fn with_recent_event_limit(mut self, limit: usize) -> Self {
        self.recent_event_limit = limit;
        self
    }

    #[must_use]
    pub fn with_victory(mut self, victory: Vec<VictoryCondition>) -> Self {
        self.victory = victory;
        self
    }

    /// Check the configuration before a session is built from it.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_SEATS..=MAX_SEATS).contains(&self.seat_count) {
            return Err(ConfigError::SeatCount(self.seat_count));
        }
        if self.hand_limit == 0 {
            return Err(ConfigError::ZeroHandLimit);
        }
        if self.actions_per_turn == 0 {
            return Err(ConfigError::ZeroActions);
        }
        if self.victory.is_empty() {
            return Err(ConfigError::NoVictoryCondition);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(SessionConfig::default().validate().is_ok());
    }

    #[test]
    fn test_seat_count_bounds() {
        assert_eq!(
            SessionConfig::new(1).validate(),
            Err(ConfigError::SeatCount(1))
        );
        assert_eq!(
            SessionConfig::new(9).validate(),
            Err(ConfigError::SeatCount(9))
        );
        for seats in MIN_SEATS..=MAX_SEATS {
            assert!(SessionConfig::new(seats).validate().is_ok());
        }
    }

    #[test]
    fn test_rejects_degenerate_limits() {
        let config = SessionConfig::new(3).with_hand_limit(0);
        assert_eq!(config.validate(), Err(ConfigError::ZeroHandLimit));

        let config = SessionConfig::new(3).with_actions_per_turn(0);
        assert_eq!(config.validate(), Err(ConfigError::ZeroActions));

        let config = SessionConfig::new(3).with_victory(Vec::new());
        assert_eq!(config.validate(), Err(ConfigError::NoVictoryCondition));
    }

    #[test]
    fn test_config_deserializes_from_json() {
        let json = r#"{
            "seat_count": 3,
            "starting_hand": 4,
            "draw_per_turn": 1,
            "hand_limit": 6,
            "actions_per_turn": 2,
            "counter_chains": true,
            "recent_event_limit": 10,
            "victory": [{"UnitThreshold": 5}, "LastSeatStanding"]
        }"#;
        let config: SessionConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.seat_count, 3);
        assert!(config.counter_chains);
        assert_eq!(
            config.victory,
            vec![VictoryCondition::UnitThreshold(5), VictoryCondition::LastSeatStanding]
        );
    }
}
