//! Core engine types: seats, RNG, configuration, errors, inbound actions.
//!
//! Everything here is game-agnostic. Rulesets configure the engine through
//! `SessionConfig` rather than by modifying the core.

pub mod seat;
pub mod rng;
pub mod config;
pub mod error;
pub mod action;

pub use seat::{SeatId, SeatMap};
pub use rng::{GameRng, GameRngState};
pub use config::{SessionConfig, VictoryCondition, MAX_SEATS, MIN_SEATS};
pub use error::{CheckpointError, ConfigError, MessageError, Rejection, ZoneError};
pub use action::{Action, ActionMessage, ActionRecord, Payload, WireMessage};
