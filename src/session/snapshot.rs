//! Per-viewer read models.
//!
//! A `ViewModel` is what one seat's client is allowed to see: its own hand,
//! every public Stable, sizes of hidden zones, the open prompt or reaction
//! window, recent events and the seat's buttons. Other seats' hands appear
//! only when a live `RevealHand` passive sits in that seat's Stable.
//!
//! Buttons are derived from the same checks `GameSession::submit` runs, so
//! an enabled button is always accepted when clicked.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::game::GameSession;
use super::state::Interaction;
use crate::cards::CardId;
use crate::core::{Action, SeatId};
use crate::effects::{PromptStep, SeatPassives};
use crate::turn::Phase;
use crate::zones::Zone;

/// One clickable action.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonSpec {
    /// Button id; doubles as the wire action (see `Action::from_button_id`).
    pub id: String,
    pub label: String,
    pub enabled: bool,
}

/// A card in the viewer's hand.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HandCard {
    pub card_id: CardId,
    pub name: String,
    pub playable: bool,
    /// Waiting on an open prompt or reaction window.
    pub held: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReactionView {
    pub actor: SeatId,
    pub pending_seats: Vec<SeatId>,
    pub stack_size: usize,
    pub card_id: Option<CardId>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptView {
    pub actor: SeatId,
    pub step: Option<PromptStep>,
    pub card_id: Option<CardId>,
    pub target_seat: Option<SeatId>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeatView {
    pub seat: SeatId,
    pub alive: bool,
    pub protection: u8,
}

/// Everything one viewer may see.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewModel {
    pub viewer: SeatId,
    pub phase: Phase,
    pub current_turn_seat: SeatId,
    pub turn_number: u32,
    pub actions_remaining: u8,
    pub reaction: Option<ReactionView>,
    pub prompt: Option<PromptView>,
    pub your_hand: Vec<HandCard>,
    pub public_stables: BTreeMap<SeatId, Vec<CardId>>,
    /// Hands of other seats exposed by a reveal passive.
    pub revealed_hands: BTreeMap<SeatId, Vec<CardId>>,
    pub hand_sizes: BTreeMap<SeatId, usize>,
    pub deck_size: usize,
    pub discard_size: usize,
    pub seats: Vec<SeatView>,
    pub winner: Option<SeatId>,
    pub recent_events: Vec<String>,
    pub actions: Vec<ButtonSpec>,
}

/// Builds view models and buttons from a session.
pub struct SnapshotBuilder<'a> {
    session: &'a GameSession,
}

impl<'a> SnapshotBuilder<'a> {
    #[must_use]
    pub fn new(session: &'a GameSession) -> Self {
        Self { session }
    }

    #[must_use]
    pub fn build(&self, viewer: SeatId) -> ViewModel {
        let session = self.session;
        let state = session.state();
        let zones = &state.zones;
        let registry = session.registry();

        let held = state.interaction.held_card();
        let your_hand: Vec<HandCard> = zones
            .cards(Zone::Hand(viewer))
            .iter()
            .filter_map(|&id| zones.instance(id))
            .enumerate()
            .map(|(index, copy)| HandCard {
                card_id: copy.card,
                name: registry.get(copy.card).map(|d| d.name.clone()).unwrap_or_default(),
                playable: session.check(viewer, &Action::PlayCard { index }).is_ok(),
                held: held == Some(copy.id),
            })
            .collect();

        let seat_ids: Vec<_> = state.seats.seat_ids().collect();
        let public_stables: BTreeMap<SeatId, Vec<CardId>> = seat_ids
            .iter()
            .map(|&seat| (seat, zones.card_ids(Zone::Stable(seat)).collect()))
            .collect();
        let revealed_hands: BTreeMap<SeatId, Vec<CardId>> = seat_ids
            .iter()
            .filter(|&&seat| seat != viewer && SeatPassives::compute(zones, registry, seat).reveal_hand)
            .map(|&seat| (seat, zones.card_ids(Zone::Hand(seat)).collect()))
            .collect();
        let hand_sizes: BTreeMap<SeatId, usize> = seat_ids
            .iter()
            .map(|&seat| (seat, zones.len(Zone::Hand(seat))))
            .collect();

        let reaction = state.interaction.reaction().map(|window| ReactionView {
            actor: window.actor,
            pending_seats: window.pending().collect(),
            stack_size: window.stack().len(),
            card_id: zones.card_of(window.card),
        });
        let prompt = state.interaction.prompt().map(|prompt| PromptView {
            actor: prompt.actor,
            step: prompt.current_step(),
            card_id: zones.card_of(prompt.card),
            target_seat: prompt.target_seat,
        });

        ViewModel {
            viewer,
            phase: state.turn.phase,
            current_turn_seat: state.turn.seat,
            turn_number: state.turn.number,
            actions_remaining: state.turn.actions_remaining,
            reaction,
            prompt,
            your_hand,
            public_stables,
            revealed_hands,
            hand_sizes,
            deck_size: zones.len(Zone::Deck),
            discard_size: zones.len(Zone::Discard),
            seats: state
                .seats
                .iter()
                .map(|(seat, s)| SeatView {
                    seat,
                    alive: s.alive,
                    protection: s.protection,
                })
                .collect(),
            winner: state.winner,
            recent_events: state.events.recent().map(ToString::to_string).collect(),
            actions: self.buttons(viewer),
        }
    }

    /// Buttons for `viewer`, each enabled iff `submit` would accept it.
    #[must_use]
    pub fn buttons(&self, viewer: SeatId) -> Vec<ButtonSpec> {
        self.candidates(viewer)
            .into_iter()
            .map(|action| ButtonSpec {
                id: action.button_id(),
                label: self.label(viewer, &action),
                enabled: self.session.check(viewer, &action).is_ok(),
            })
            .collect()
    }

    /// Actions worth showing to `viewer` in the current context.
    #[must_use]
    pub fn candidates(&self, viewer: SeatId) -> Vec<Action> {
        let state = self.session.state();
        let registry = self.session.registry();
        if state.winner.is_some() || !state.is_alive(viewer) {
            return Vec::new();
        }
        let hand = state.zones.len(Zone::Hand(viewer));

        match &state.interaction {
            Interaction::Prompt(prompt) if prompt.actor == viewer => {
                let mut actions = Vec::new();
                match prompt.current_step() {
                    Some(PromptStep::PickPlayer) => {
                        actions.extend(state.seats.seat_ids().map(|seat| Action::PromptPickPlayer { seat }));
                    }
                    Some(PromptStep::PickCard) => {
                        let seats: Vec<_> = match prompt.target_seat {
                            Some(seat) => vec![seat],
                            None => state.seats.seat_ids().collect(),
                        };
                        for seat in seats {
                            let len = state.zones.len(Zone::Stable(seat));
                            actions.extend((0..len).map(|index| Action::PromptPickCard { seat, index }));
                        }
                    }
                    None => {}
                }
                actions.push(Action::PromptCancel);
                actions
            }
            Interaction::Reaction(window) if window.is_pending(viewer) => {
                let counters = state
                    .zones
                    .card_ids(Zone::Hand(viewer))
                    .enumerate()
                    .filter(|(_, id)| registry.get(*id).is_some_and(|d| d.kind.is_counter_class()))
                    .map(|(card_index, _)| Action::ReactionCounter { card_index });
                std::iter::once(Action::ReactionPass).chain(counters).collect()
            }
            Interaction::Idle if state.turn.seat == viewer => {
                let per_card: Vec<Action> = if state.turn.phase == Phase::Discard {
                    (0..hand).map(|index| Action::Discard { index }).collect()
                } else {
                    (0..hand).map(|index| Action::PlayCard { index }).collect()
                };
                per_card.into_iter().chain(std::iter::once(Action::EndTurn)).collect()
            }
            _ => Vec::new(),
        }
    }

    fn label(&self, viewer: SeatId, action: &Action) -> String {
        let state = self.session.state();
        let name = |zone: Zone, index: usize| {
            state
                .zones
                .card_at(zone, index)
                .and_then(|card| self.session.definition(card))
                .map_or_else(|| "?".to_string(), |d| d.name.clone())
        };
        match *action {
            Action::PlayCard { index } => format!("Play {}", name(Zone::Hand(viewer), index)),
            Action::PromptPickPlayer { seat } => format!("Target {}", seat),
            Action::PromptPickCard { seat, index } => {
                format!("Pick {} from {}", name(Zone::Stable(seat), index), seat)
            }
            Action::PromptCancel => "Cancel".to_string(),
            Action::ReactionPass => "Pass".to_string(),
            Action::ReactionCounter { card_index } => {
                format!("Counter with {}", name(Zone::Hand(viewer), card_index))
            }
            Action::EndTurn => "End turn".to_string(),
            Action::Discard { index } => format!("Discard {}", name(Zone::Hand(viewer), index)),
        }
    }
}
