//! Card instances - physical copies of a definition.
//!
//! Each copy in a session gets its own `InstanceId`, so two copies of the
//! same definition can be told apart while they move between zones.

use serde::{Deserialize, Serialize};

use super::definition::CardId;

/// Identifier for one physical copy of a card in a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct InstanceId(pub u32);

impl InstanceId {
    /// Create a new instance ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for InstanceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Instance({})", self.0)
    }
}

/// A copy of a definition.
///
/// Where the copy currently sits is tracked by `ZoneStore`, not here.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardInstance {
    pub id: InstanceId,
    pub card: CardId,
}

impl CardInstance {
    #[must_use]
    pub const fn new(id: InstanceId, card: CardId) -> Self {
        Self { id, card }
    }
}
