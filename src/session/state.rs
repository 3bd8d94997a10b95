//! The session aggregate.
//!
//! `SessionState` owns everything that changes during play: seats, zones,
//! the turn, the open interaction and the logs. It is plain data; the rules
//! that change it live in `GameSession`, `TurnController` and the effect
//! handlers.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::events::EventLog;
use crate::cards::InstanceId;
use crate::core::{ActionRecord, SeatId, SeatMap};
use crate::prompt::PromptState;
use crate::reaction::ReactionWindow;
use crate::turn::{Phase, TurnState};
use crate::zones::ZoneStore;

/// Per-seat status.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatState {
    pub alive: bool,
    /// Turns of protection left; counted down at the start of the seat's turn.
    pub protection: u8,
}

impl Default for SeatState {
    fn default() -> Self {
        Self {
            alive: true,
            protection: 0,
        }
    }
}

/// A card temporarily moved into another seat's Stable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BorrowRecord {
    pub card: InstanceId,
    pub owner: SeatId,
    pub borrower: SeatId,
}

/// The sub-state layered on top of the turn phase. At most one prompt or
/// reaction window is open at a time.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Interaction {
    #[default]
    Idle,
    Prompt(PromptState),
    Reaction(ReactionWindow),
}

impl Interaction {
    #[must_use]
    pub fn prompt(&self) -> Option<&PromptState> {
        match self {
            Interaction::Prompt(prompt) => Some(prompt),
            _ => None,
        }
    }

    #[must_use]
    pub fn reaction(&self) -> Option<&ReactionWindow> {
        match self {
            Interaction::Reaction(window) => Some(window),
            _ => None,
        }
    }

    /// The card held in hand by an open prompt or reaction.
    #[must_use]
    pub fn held_card(&self) -> Option<InstanceId> {
        match self {
            Interaction::Idle => None,
            Interaction::Prompt(prompt) => Some(prompt.card),
            Interaction::Reaction(window) => Some(window.card),
        }
    }
}

/// Everything that changes during a session.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SessionState {
    pub seats: SeatMap<SeatState>,
    pub zones: ZoneStore,
    pub turn: TurnState,
    pub interaction: Interaction,
    /// Open loans, in the order they were made.
    pub borrows: Vec<BorrowRecord>,
    pub winner: Option<SeatId>,
    pub events: EventLog,
    /// Every accepted action, oldest first.
    pub history: Vector<ActionRecord>,
    /// Sequence number of the next accepted action.
    pub sequence: u64,
}

impl SessionState {
    /// A fresh state with every seat alive.
    #[must_use]
    pub fn new(seat_count: usize, zones: ZoneStore, recent_event_limit: usize) -> Self {
        Self {
            seats: SeatMap::with_default(seat_count),
            zones,
            turn: TurnState::default(),
            interaction: Interaction::Idle,
            borrows: Vec::new(),
            winner: None,
            events: EventLog::new(recent_event_limit),
            history: Vector::new(),
            sequence: 0,
        }
    }

    #[must_use]
    pub fn is_alive(&self, seat: SeatId) -> bool {
        self.seats.get(seat).is_some_and(|s| s.alive)
    }

    /// Alive seats in ascending order.
    #[must_use]
    pub fn alive_seats(&self) -> Vec<SeatId> {
        self.seats
            .iter()
            .filter(|(_, s)| s.alive)
            .map(|(seat, _)| seat)
            .collect()
    }

    /// Current turn phase. An open prompt or reaction window sits on top
    /// of it and does not change it.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.turn.phase
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_has_all_seats_alive() {
        let state = SessionState::new(3, ZoneStore::new(), 5);
        assert_eq!(state.alive_seats(), vec![SeatId(0), SeatId(1), SeatId(2)]);
        assert_eq!(state.interaction, Interaction::Idle);
        assert!(!state.is_over());
    }

    #[test]
    fn test_is_alive() {
        let mut state = SessionState::new(2, ZoneStore::new(), 5);
        state.seats[SeatId(1)].alive = false;

        assert!(state.is_alive(SeatId(0)));
        assert!(!state.is_alive(SeatId(1)));
        assert!(!state.is_alive(SeatId(7)));
        assert_eq!(state.alive_seats(), vec![SeatId(0)]);
    }
}
