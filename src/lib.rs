//! # tabletop-session
//!
//! An authoritative session engine for turn-based multiplayer tabletop
//! card games.
//!
//! ## Design Principles
//!
//! 1. **Game-Agnostic**: No hardcoded cards or win thresholds. Games supply
//!    a `Ruleset` with card definitions, a deck list and a configuration.
//!
//! 2. **N-Seat First**: Every API takes seats as context. Nothing assumes
//!    two players.
//!
//! 3. **Single Writer**: One `GameSession::submit` call per inbound
//!    message. Remote seats race freely; duplicate or late messages are
//!    rejected without side effects.
//!
//! ## Architecture
//!
//! - **Layered sub-states**: a turn phase (`Discard` / `Action`) with at most
//!   one prompt or reaction window open on top of it.
//!
//! - **Check then mutate**: every action is validated in full before any
//!   state changes, and the same checks drive the snapshot buttons.
//!
//! - **Injected randomness**: every shuffle takes a `&mut GameRng`, so a
//!   seed plus the action log replays a whole session.
//!
//! ## Modules
//!
//! - `core`: Seats, RNG, configuration, errors, inbound actions
//! - `cards`: Card definitions, instances and registry
//! - `zones`: Deck, Discard, Hands and Stables
//! - `effects`: Effects, targeting, passives and the effect resolver
//! - `prompt`: Multi-step target selection
//! - `reaction`: Simultaneous counter/pass windows
//! - `turn`: Phase state machine and seat rotation
//! - `rules`: `Ruleset` trait and victory evaluation
//! - `session`: Session aggregate, entry point, events and snapshots
//! - `games`: Sample rulesets

pub mod core;
pub mod cards;
pub mod zones;
pub mod effects;
pub mod prompt;
pub mod reaction;
pub mod turn;
pub mod rules;
pub mod session;
pub mod games;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionMessage, ActionRecord, ConfigError, GameRng, GameRngState, Rejection, SeatId,
    SeatMap, SessionConfig, VictoryCondition,
};

pub use crate::cards::{CardDefinition, CardId, CardKind, CardRegistry, InstanceId, Passive};

pub use crate::zones::{Zone, ZoneStore};

pub use crate::effects::{Effect, EffectKind, EffectResolver, HandlerTable, Target, TargetSpec};

pub use crate::prompt::PromptState;

pub use crate::reaction::{ReactionWindow, Verdict};

pub use crate::turn::{Phase, TurnController};

pub use crate::rules::{Ruleset, WinChecker};

pub use crate::session::{GameSession, Outcome, SessionEvent, SessionState, ViewModel};
