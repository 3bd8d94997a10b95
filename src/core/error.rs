//! Error taxonomy.
//!
//! - `Rejection`: an inbound action that cannot be applied. Returned to the
//!   caller, never raised; a rejected action leaves the session untouched.
//! - `ZoneError`: a zone primitive was asked to move a card that is not
//!   where the caller claimed.
//! - `ConfigError`: a ruleset or configuration that cannot start a session.
//! - `MessageError`: a wire message that does not decode to an action.
//! - `CheckpointError`: checkpoint encoding or decoding failed.

use thiserror::Error;

use crate::cards::{CardId, InstanceId};
use crate::turn::Phase;
use crate::zones::Zone;

/// Why an inbound action was not applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("unknown seat")]
    UnknownSeat,
    #[error("seat has been eliminated")]
    SeatEliminated,
    #[error("the game is over")]
    GameOver,
    #[error("not your turn")]
    OutOfTurn,
    #[error("not allowed during the {0} phase")]
    WrongPhase(Phase),
    #[error("a target prompt is open")]
    PromptOpen,
    #[error("no target prompt is open")]
    NoPrompt,
    #[error("a reaction window is open")]
    ReactionOpen,
    #[error("no reaction window is open")]
    NoReaction,
    #[error("only the seat that opened the prompt may answer it")]
    NotAuthor,
    #[error("seat is not waiting to respond")]
    NotPending,
    #[error("no card at index {0}")]
    NoSuchCard(usize),
    #[error("card cannot be played now")]
    NotPlayable,
    #[error("card has no legal target")]
    NoLegalTarget,
    #[error("illegal target")]
    IllegalTarget,
    #[error("target seat is protected")]
    ProtectedSeat,
    #[error("selection does not match the current prompt step")]
    WrongStep,
    #[error("card is not a counter")]
    NotCounter,
    #[error("counters are blocked for this seat")]
    CountersBlocked,
    #[error("no actions remaining this turn")]
    NoActionsRemaining,
    #[error("hand is over the limit; discard first")]
    MustDiscard,
}

/// Zone primitive failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ZoneError {
    #[error("{instance} is not in {zone}")]
    InvalidMove { instance: InstanceId, zone: Zone },
}

/// A ruleset or configuration that cannot start a session.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("seat count {0} is outside 2..=8")]
    SeatCount(usize),
    #[error("hand limit must be at least 1")]
    ZeroHandLimit,
    #[error("actions per turn must be at least 1")]
    ZeroActions,
    #[error("at least one victory condition is required")]
    NoVictoryCondition,
    #[error("{0} is registered twice")]
    DuplicateCard(CardId),
    #[error("{0} is not registered")]
    UnknownCard(CardId),
}

/// A wire message that does not decode to an action.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MessageError {
    #[error("unknown action id `{0}`")]
    UnknownAction(String),
    #[error("action `{action}` is missing payload field `{field}`")]
    MissingField {
        action: &'static str,
        field: &'static str,
    },
}

/// Checkpoint encode/decode failure.
#[derive(Debug, Error)]
pub enum CheckpointError {
    #[error("checkpoint codec: {0}")]
    Codec(#[from] bincode::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SeatId;

    #[test]
    fn test_rejection_messages() {
        assert_eq!(Rejection::OutOfTurn.to_string(), "not your turn");
        assert_eq!(Rejection::NoSuchCard(4).to_string(), "no card at index 4");
        assert_eq!(
            Rejection::WrongPhase(Phase::Discard).to_string(),
            "not allowed during the discard phase"
        );
    }

    #[test]
    fn test_zone_error_names_location() {
        let err = ZoneError::InvalidMove {
            instance: InstanceId::new(3),
            zone: Zone::Hand(SeatId(1)),
        };
        assert_eq!(err.to_string(), "Instance(3) is not in Hand(Seat 1)");
    }
}
