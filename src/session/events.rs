//! Session events.
//!
//! Every state change the engine makes is reported as a `SessionEvent`.
//! Events are not inputs to anything inside the engine; they feed the
//! snapshot's recent-event log and any subscribers a host registers on the
//! session (UI animation, chat log, persistence).

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::CardId;
use crate::core::SeatId;
use crate::effects::EffectKind;

/// Something that happened in a session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEvent {
    TurnStarted { seat: SeatId, turn: u32 },
    CardsDrawn { seat: SeatId, count: usize, reshuffled: usize },
    CardPlayed { seat: SeatId, card: CardId },
    PromptOpened { seat: SeatId, card: CardId },
    PromptCancelled { seat: SeatId, card: CardId },
    ReactionOpened { seat: SeatId, card: CardId, pending: usize },
    ReactionPassed { seat: SeatId },
    Countered { seat: SeatId, card: CardId, absolute: bool },
    /// The source card of a reaction window was negated.
    Negated { seat: SeatId, card: CardId },
    Resolved { seat: SeatId, card: CardId },
    /// A card's effect had no handler; the card was discarded.
    NoHandler { card: CardId, effect: EffectKind },
    Destroyed { seat: SeatId, card: CardId },
    Substituted { seat: SeatId, substitute: CardId, saved: CardId },
    /// A destroy or sacrifice hit an immune card.
    Immune { seat: SeatId, card: CardId },
    Sacrificed { seat: SeatId, card: CardId },
    Stolen { from: SeatId, to: SeatId, card: CardId },
    Borrowed { from: SeatId, to: SeatId, card: CardId },
    BorrowReturned { owner: SeatId, card: CardId },
    ReturnedToHand { seat: SeatId, card: CardId },
    Discarded { seat: SeatId, card: CardId },
    ForcedDiscard { seat: SeatId, count: usize },
    HandsSwapped { a: SeatId, b: SeatId },
    Protected { seat: SeatId, turns: u8 },
    Created { seat: SeatId, card: CardId },
    Reshuffled { count: usize },
    Eliminated { seat: SeatId },
    Won { seat: SeatId },
}

impl std::fmt::Display for SessionEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionEvent::TurnStarted { seat, turn } => write!(f, "{} starts turn {}", seat, turn),
            SessionEvent::CardsDrawn { seat, count, reshuffled: 0 } => {
                write!(f, "{} draws {}", seat, count)
            }
            SessionEvent::CardsDrawn { seat, count, reshuffled } => write!(
                f,
                "{} draws {} after {} cards are reshuffled into the deck",
                seat, count, reshuffled
            ),
            SessionEvent::CardPlayed { seat, card } => write!(f, "{} plays {}", seat, card),
            SessionEvent::PromptOpened { seat, card } => {
                write!(f, "{} is choosing a target for {}", seat, card)
            }
            SessionEvent::PromptCancelled { seat, card } => {
                write!(f, "{} takes back {}", seat, card)
            }
            SessionEvent::ReactionOpened { seat, card, pending } => write!(
                f,
                "{} waits for {} seats to respond to {}",
                seat, pending, card
            ),
            SessionEvent::ReactionPassed { seat } => write!(f, "{} passes", seat),
            SessionEvent::Countered { seat, card, absolute: false } => {
                write!(f, "{} counters with {}", seat, card)
            }
            SessionEvent::Countered { seat, card, absolute: true } => {
                write!(f, "{} counters absolutely with {}", seat, card)
            }
            SessionEvent::Negated { seat, card } => write!(f, "{}'s {} is negated", seat, card),
            SessionEvent::Resolved { seat, card } => write!(f, "{}'s {} resolves", seat, card),
            SessionEvent::NoHandler { card, effect } => {
                write!(f, "{} fizzles: no {} handler", card, effect)
            }
            SessionEvent::Destroyed { seat, card } => {
                write!(f, "{} is destroyed in {}'s stable", card, seat)
            }
            SessionEvent::Substituted { seat, substitute, saved } => write!(
                f,
                "{} leaves {}'s stable in place of {}",
                substitute, seat, saved
            ),
            SessionEvent::Immune { seat, card } => write!(f, "{} in {}'s stable is immune", card, seat),
            SessionEvent::Sacrificed { seat, card } => write!(f, "{} sacrifices {}", seat, card),
            SessionEvent::Stolen { from, to, card } => {
                write!(f, "{} steals {} from {}", to, card, from)
            }
            SessionEvent::Borrowed { from, to, card } => {
                write!(f, "{} borrows {} from {}", to, card, from)
            }
            SessionEvent::BorrowReturned { owner, card } => {
                write!(f, "{} returns to {}", card, owner)
            }
            SessionEvent::ReturnedToHand { seat, card } => {
                write!(f, "{} returns to {}'s hand", card, seat)
            }
            SessionEvent::Discarded { seat, card } => write!(f, "{} discards {}", seat, card),
            SessionEvent::ForcedDiscard { seat, count } => {
                write!(f, "{} is forced to discard {}", seat, count)
            }
            SessionEvent::HandsSwapped { a, b } => write!(f, "{} and {} swap hands", a, b),
            SessionEvent::Protected { seat, turns } => {
                write!(f, "{} is protected for {} turns", seat, turns)
            }
            SessionEvent::Created { seat, card } => write!(f, "{} gains a new {}", seat, card),
            SessionEvent::Reshuffled { count } => {
                write!(f, "{} cards are shuffled back into the deck", count)
            }
            SessionEvent::Eliminated { seat } => write!(f, "{} is eliminated", seat),
            SessionEvent::Won { seat } => write!(f, "{} wins", seat),
        }
    }
}

/// Bounded log of recent events plus the events not yet delivered to
/// subscribers.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct EventLog {
    recent: Vector<SessionEvent>,
    #[serde(skip)]
    fresh: Vec<SessionEvent>,
    limit: usize,
}

impl EventLog {
    /// A log keeping the last `limit` events.
    #[must_use]
    pub fn new(limit: usize) -> Self {
        Self {
            recent: Vector::new(),
            fresh: Vec::new(),
            limit,
        }
    }

    pub fn push(&mut self, event: SessionEvent) {
        self.recent.push_back(event.clone());
        while self.recent.len() > self.limit {
            self.recent.pop_front();
        }
        self.fresh.push(event);
    }

    /// Events pushed since the last call.
    pub fn take_fresh(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.fresh)
    }

    /// The most recent events, oldest first.
    pub fn recent(&self) -> impl Iterator<Item = &SessionEvent> {
        self.recent.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.recent.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.recent.is_empty()
    }
}
