//! Sample rulesets built on the engine.

pub mod paddock;
