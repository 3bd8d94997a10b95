//! Effect system for card abilities.
//!
//! - `Effect` / `EffectKind`: closed enumeration of what cards can do
//! - `TargetSpec` / `Eligibility`: what an effect may target and whether a
//!   concrete selection is legal right now
//! - `passives`: seat flags derived from Stable contents
//! - `EffectResolver` / `HandlerTable`: dispatch from effect kind to a
//!   mutation procedure over the zones
//!
//! Rulesets never touch the dispatch code. They describe cards with
//! `Effect` values and may replace handlers in the table.

mod effect;
mod targeting;
pub mod passives;
mod resolver;

pub use effect::{Effect, EffectKind};
pub use passives::SeatPassives;
pub use targeting::{CardRule, Eligibility, PromptStep, SeatRule, Target, TargetSpec};
pub use resolver::{EffectResolver, Handler, HandlerTable, Resolution, ResolveCtx};
