//! Shared fixtures for integration tests.
//!
//! `Table` is a paddock variant with no opening hands and no turn draws, so
//! each test places exactly the cards it needs with `give` and `place`.

#![allow(dead_code)]

use std::sync::Arc;

use tabletop_session::cards::{CardId, CardRegistry, InstanceId};
use tabletop_session::core::{Action, ActionMessage, GameRng, SeatId, SessionConfig, VictoryCondition};
use tabletop_session::effects::HandlerTable;
use tabletop_session::games::paddock::{self, ids};
use tabletop_session::rules::Ruleset;
use tabletop_session::session::{GameSession, Outcome};
use tabletop_session::zones::Zone;

/// A configurable paddock table for fixtures.
#[derive(Clone, Debug)]
pub struct Table {
    pub config: SessionConfig,
    pub registry: Arc<CardRegistry>,
    pub deck: Vec<CardId>,
    pub handlers: HandlerTable,
}

impl Table {
    /// `seats` seats, twenty Mares in the Deck, nothing dealt.
    pub fn new(seats: usize) -> Self {
        Self {
            config: SessionConfig::new(seats)
                .with_starting_hand(0)
                .with_draw_per_turn(0)
                .with_victory(vec![
                    VictoryCondition::UnitThreshold(7),
                    VictoryCondition::LastSeatStanding,
                ]),
            registry: Arc::new(paddock::registry().unwrap()),
            deck: vec![ids::MARE; 20],
            handlers: HandlerTable::standard(),
        }
    }

    pub fn with_config(mut self, f: impl FnOnce(SessionConfig) -> SessionConfig) -> Self {
        self.config = f(self.config);
        self
    }

    pub fn with_handlers(mut self, handlers: HandlerTable) -> Self {
        self.handlers = handlers;
        self
    }

    pub fn start(&self, rng: &mut GameRng) -> GameSession {
        GameSession::new(self, rng).unwrap()
    }
}

impl Ruleset for Table {
    fn name(&self) -> &str {
        "Table"
    }

    fn config(&self) -> SessionConfig {
        self.config.clone()
    }

    fn registry(&self) -> Arc<CardRegistry> {
        Arc::clone(&self.registry)
    }

    fn deck(&self) -> Vec<CardId> {
        self.deck.clone()
    }

    fn handlers(&self) -> HandlerTable {
        self.handlers.clone()
    }
}

/// Put a new copy of `card` into `seat`'s hand; returns its hand index.
pub fn give(session: &mut GameSession, seat: SeatId, card: CardId) -> usize {
    session.state_mut().zones.spawn(card, Zone::Hand(seat));
    session.state().zones.len(Zone::Hand(seat)) - 1
}

/// Put a new copy of `card` into `seat`'s Stable.
pub fn place(session: &mut GameSession, seat: SeatId, card: CardId) -> InstanceId {
    session.state_mut().zones.spawn(card, Zone::Stable(seat))
}

/// Index of `instance` in `seat`'s Stable.
pub fn stable_index(session: &GameSession, seat: SeatId, instance: InstanceId) -> usize {
    session
        .state()
        .zones
        .position(Zone::Stable(seat), instance)
        .unwrap()
}

pub fn act(session: &mut GameSession, seat: SeatId, action: Action, rng: &mut GameRng) -> Outcome {
    session.submit(&ActionMessage::new(seat, action), rng)
}

/// Every seat still pending in the open window passes.
pub fn all_pass(session: &mut GameSession, rng: &mut GameRng) {
    let pending: Vec<SeatId> = session
        .state()
        .interaction
        .reaction()
        .map(|w| w.pending().collect())
        .unwrap_or_default();
    for seat in pending {
        assert_eq!(act(session, seat, Action::ReactionPass, rng), Outcome::Applied);
    }
}

/// Definitions in a zone.
pub fn cards_in(session: &GameSession, zone: Zone) -> Vec<CardId> {
    session.state().zones.card_ids(zone).collect()
}
