//! Inbound actions and their wire format.
//!
//! Remote seats send `{ actorSeat, actionId, payload }`. The `actionId`
//! vocabulary is fixed:
//!
//! | actionId             | payload               |
//! |----------------------|-----------------------|
//! | `play_card`          | `{ index }`           |
//! | `prompt_pick_player` | `{ seat }`            |
//! | `prompt_pick_card`   | `{ seat, index }`     |
//! | `prompt_cancel`      | none                  |
//! | `reaction_pass`      | none                  |
//! | `reaction_counter`   | `{ cardIndex }`       |
//! | `end_turn`           | none                  |
//! | `discard`            | `{ index }`           |
//!
//! The same vocabulary doubles as button ids in snapshots
//! (`play_card:2`, `prompt_pick_card:1:0`, ...), so a front-end can send
//! back whatever button the seat clicked.

use serde::{Deserialize, Serialize};

use super::error::MessageError;
use super::seat::SeatId;

/// One thing a seat asks the session to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Play the card at `index` in your hand.
    PlayCard { index: usize },
    /// Answer a pick-player prompt step.
    PromptPickPlayer { seat: SeatId },
    /// Answer a pick-card prompt step with the card at `index` in `seat`'s Stable.
    PromptPickCard { seat: SeatId, index: usize },
    /// Abandon the open prompt.
    PromptCancel,
    /// Decline to counter.
    ReactionPass,
    /// Counter with the card at `card_index` in your hand.
    ReactionCounter { card_index: usize },
    /// Finish your turn.
    EndTurn,
    /// Discard the card at `index` in your hand.
    Discard { index: usize },
}

impl Action {
    /// The wire `actionId` for this action.
    #[must_use]
    pub fn action_id(&self) -> &'static str {
        match self {
            Action::PlayCard { .. } => "play_card",
            Action::PromptPickPlayer { .. } => "prompt_pick_player",
            Action::PromptPickCard { .. } => "prompt_pick_card",
            Action::PromptCancel => "prompt_cancel",
            Action::ReactionPass => "reaction_pass",
            Action::ReactionCounter { .. } => "reaction_counter",
            Action::EndTurn => "end_turn",
            Action::Discard { .. } => "discard",
        }
    }

    /// Stable button id: the action id followed by its arguments.
    ///
    /// ```
    /// use tabletop_session::core::{Action, SeatId};
    ///
    /// let pick = Action::PromptPickCard { seat: SeatId(2), index: 0 };
    /// assert_eq!(pick.button_id(), "prompt_pick_card:2:0");
    /// assert_eq!(Action::from_button_id("prompt_pick_card:2:0"), Some(pick));
    /// ```
    #[must_use]
    pub fn button_id(&self) -> String {
        match self {
            Action::PlayCard { index } | Action::Discard { index } => {
                format!("{}:{}", self.action_id(), index)
            }
            Action::PromptPickPlayer { seat } => format!("{}:{}", self.action_id(), seat.0),
            Action::PromptPickCard { seat, index } => {
                format!("{}:{}:{}", self.action_id(), seat.0, index)
            }
            Action::ReactionCounter { card_index } => {
                format!("{}:{}", self.action_id(), card_index)
            }
            Action::PromptCancel | Action::ReactionPass | Action::EndTurn => {
                self.action_id().to_string()
            }
        }
    }

    /// Parse a button id produced by `button_id`.
    #[must_use]
    pub fn from_button_id(id: &str) -> Option<Action> {
        let mut parts = id.split(':');
        let name = parts.next()?;
        let args: Vec<&str> = parts.collect();
        let arg = |i: usize| args.get(i).and_then(|s| s.parse::<usize>().ok());
        let seat = |i: usize| args.get(i).and_then(|s| s.parse::<u8>().ok()).map(SeatId);

        let action = match (name, args.len()) {
            ("play_card", 1) => Action::PlayCard { index: arg(0)? },
            ("prompt_pick_player", 1) => Action::PromptPickPlayer { seat: seat(0)? },
            ("prompt_pick_card", 2) => Action::PromptPickCard {
                seat: seat(0)?,
                index: arg(1)?,
            },
            ("prompt_cancel", 0) => Action::PromptCancel,
            ("reaction_pass", 0) => Action::ReactionPass,
            ("reaction_counter", 1) => Action::ReactionCounter { card_index: arg(0)? },
            ("end_turn", 0) => Action::EndTurn,
            ("discard", 1) => Action::Discard { index: arg(0)? },
            _ => return None,
        };
        Some(action)
    }
}

/// Payload fields of a wire message. Absent fields are `None`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seat: Option<SeatId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_index: Option<usize>,
}

/// The JSON shape of an inbound message.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireMessage {
    pub actor_seat: SeatId,
    pub action_id: String,
    #[serde(default)]
    pub payload: Payload,
}

/// An inbound action attributed to a seat.
///
/// ```
/// use tabletop_session::core::{Action, ActionMessage, SeatId};
///
/// let msg = ActionMessage::new(SeatId(1), Action::ReactionCounter { card_index: 3 });
/// assert_eq!(msg.actor_seat, SeatId(1));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "WireMessage", into = "WireMessage")]
pub struct ActionMessage {
    pub actor_seat: SeatId,
    pub action: Action,
}

impl ActionMessage {
    #[must_use]
    pub fn new(actor_seat: SeatId, action: Action) -> Self {
        Self { actor_seat, action }
    }
}

impl From<ActionMessage> for WireMessage {
    fn from(msg: ActionMessage) -> Self {
        let mut payload = Payload::default();
        match msg.action {
            Action::PlayCard { index } | Action::Discard { index } => payload.index = Some(index),
            Action::PromptPickPlayer { seat } => payload.seat = Some(seat),
            Action::PromptPickCard { seat, index } => {
                payload.seat = Some(seat);
                payload.index = Some(index);
            }
            Action::ReactionCounter { card_index } => payload.card_index = Some(card_index),
            Action::PromptCancel | Action::ReactionPass | Action::EndTurn => {}
        }
        WireMessage {
            actor_seat: msg.actor_seat,
            action_id: msg.action.action_id().to_string(),
            payload,
        }
    }
}

impl TryFrom<WireMessage> for ActionMessage {
    type Error = MessageError;

    fn try_from(wire: WireMessage) -> Result<Self, Self::Error> {
        let p = &wire.payload;
        let need = |value: Option<usize>, action: &'static str, field: &'static str| {
            value.ok_or(MessageError::MissingField { action, field })
        };
        let need_seat = |action: &'static str| {
            p.seat.ok_or(MessageError::MissingField { action, field: "seat" })
        };

        let action = match wire.action_id.as_str() {
            "play_card" => Action::PlayCard {
                index: need(p.index, "play_card", "index")?,
            },
            "prompt_pick_player" => Action::PromptPickPlayer {
                seat: need_seat("prompt_pick_player")?,
            },
            "prompt_pick_card" => Action::PromptPickCard {
                seat: need_seat("prompt_pick_card")?,
                index: need(p.index, "prompt_pick_card", "index")?,
            },
            "prompt_cancel" => Action::PromptCancel,
            "reaction_pass" => Action::ReactionPass,
            "reaction_counter" => Action::ReactionCounter {
                card_index: need(p.card_index, "reaction_counter", "cardIndex")?,
            },
            "end_turn" => Action::EndTurn,
            "discard" => Action::Discard {
                index: need(p.index, "discard", "index")?,
            },
            other => return Err(MessageError::UnknownAction(other.to_string())),
        };

        Ok(ActionMessage::new(wire.actor_seat, action))
    }
}

/// An accepted action with metadata for history and replay.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The seat that took this action.
    pub seat: SeatId,

    /// The action taken.
    pub action: Action,

    /// Turn number when the action was taken.
    pub turn: u32,

    /// Position in the session's accepted-action sequence (0-based).
    pub sequence: u64,
}
