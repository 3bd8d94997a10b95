//! Card registry for definition lookup.
//!
//! The `CardRegistry` holds every definition a ruleset uses. It is built
//! once, wrapped in an `Arc`, and shared read-only by all sessions running
//! that ruleset.

use rustc_hash::FxHashMap;

use super::definition::{CardDefinition, CardId, CardKind};
use crate::core::ConfigError;

/// Registry of card definitions.
///
/// ## Example
///
/// ```
/// use tabletop_session::cards::{CardDefinition, CardId, CardKind, CardRegistry};
/// use tabletop_session::effects::Effect;
///
/// let mut registry = CardRegistry::new();
/// registry
///     .register(CardDefinition::new(CardId::new(1), "Mare", CardKind::Unit, Effect::Nothing))
///     .unwrap();
///
/// assert_eq!(registry.get(CardId::new(1)).unwrap().name, "Mare");
/// assert!(registry
///     .register(CardDefinition::new(CardId::new(1), "Copy", CardKind::Unit, Effect::Nothing))
///     .is_err());
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardRegistry {
    cards: FxHashMap<CardId, CardDefinition>,
}

impl CardRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a card definition.
    ///
    /// Fails if a card with the same ID already exists.
    pub fn register(&mut self, card: CardDefinition) -> Result<(), ConfigError> {
        if self.cards.contains_key(&card.id) {
            return Err(ConfigError::DuplicateCard(card.id));
        }
        self.cards.insert(card.id, card);
        Ok(())
    }

    /// Get a card definition by ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&CardDefinition> {
        self.cards.get(&id)
    }

    /// Check if a card ID is registered.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.cards.contains_key(&id)
    }

    /// Check that every id in `ids` is registered.
    pub fn require_all(&self, ids: &[CardId]) -> Result<(), ConfigError> {
        match ids.iter().find(|id| !self.contains(**id)) {
            Some(missing) => Err(ConfigError::UnknownCard(*missing)),
            None => Ok(()),
        }
    }

    /// Get the number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all card definitions.
    pub fn iter(&self) -> impl Iterator<Item = &CardDefinition> {
        self.cards.values()
    }

    /// Find cards by kind.
    pub fn find_by_kind(&self, kind: CardKind) -> impl Iterator<Item = &CardDefinition> {
        self.cards.values().filter(move |c| c.kind == kind)
    }
}
