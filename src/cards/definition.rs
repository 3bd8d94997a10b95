//! Card definitions - static card data.
//!
//! A `CardDefinition` is loaded once per ruleset and shared read-only by
//! every session built from it. It names the card's *kind* (which decides
//! where the card lands when it resolves), the effect it carries, the
//! passives it grants while sitting in a Stable, and an optional trigger
//! that fires when it leaves a Stable.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::effects::Effect;

/// Unique identifier for a card definition.
///
/// This identifies the "type" of card, not a specific copy in a session;
/// copies are `InstanceId`s.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
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

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Card category.
///
/// | Kind              | Played in action phase | Lands in           |
/// |-------------------|------------------------|--------------------|
/// | `Baseline`        | yes                    | actor's Stable     |
/// | `Unit`            | yes                    | actor's Stable     |
/// | `Upgrade`         | yes                    | actor's Stable     |
/// | `Downgrade`       | yes                    | target's Stable    |
/// | `OneShot`         | yes                    | Discard            |
/// | `Counter`         | no (reaction only)     | Discard            |
/// | `AbsoluteCounter` | no (reaction only)     | Discard            |
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    Baseline,
    Unit,
    Upgrade,
    Downgrade,
    OneShot,
    Counter,
    AbsoluteCounter,
}

impl CardKind {
    /// Units and baseline units: the cards victory thresholds count and
    /// destroy/steal/borrow effects may target.
    #[must_use]
    pub const fn is_unit_class(self) -> bool {
        matches!(self, CardKind::Baseline | CardKind::Unit)
    }

    /// Cards that may only be played into a reaction window.
    #[must_use]
    pub const fn is_counter_class(self) -> bool {
        matches!(self, CardKind::Counter | CardKind::AbsoluteCounter)
    }
}

/// An ability that applies while the card sits in a Stable.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Passive {
    /// Suppresses the passives and leave triggers of every other
    /// unit-class card in the same Stable.
    Blinding,
    /// Resolved for the Stable's owner at the start of each of their turns.
    BeginTurn(Effect),
    /// Extra cards drawn at the start of the owner's turn.
    BonusDraw(u8),
    /// Added to the owner's hand limit (may be negative).
    HandLimit(i8),
    /// One extra card play per turn.
    ExtraAction,
    /// Destroy effects leave this card alone.
    Indestructible,
    /// Sacrifice effects leave this card alone; it also never substitutes.
    Unsacrificeable,
    /// Takes the place of another unit-class card in the same Stable
    /// when that card is destroyed.
    Substitute,
    /// The owner's hand is shown to every viewer.
    RevealHand,
    /// The owner may not play counters.
    BlockCounters,
    /// Cards the owner plays skip the reaction window.
    Uncounterable,
    /// Counts twice toward unit thresholds.
    CountsDouble,
}

/// Static card definition.
///
/// ## Example
///
/// ```
/// use tabletop_session::cards::{CardDefinition, CardId, CardKind, Passive};
/// use tabletop_session::effects::Effect;
///
/// let seer = CardDefinition::new(CardId::new(3), "Seer", CardKind::Unit, Effect::Draw { count: 1 })
///     .with_passive(Passive::BonusDraw(1));
///
/// assert!(seer.kind.is_unit_class());
/// assert!(seer.has_passive(|p| matches!(p, Passive::BonusDraw(_))));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDefinition {
    /// Unique identifier for this card definition.
    pub id: CardId,

    /// Card name (for display/debugging).
    pub name: String,

    /// Card category.
    pub kind: CardKind,

    /// Effect resolved when the card is played and not negated.
    pub effect: Effect,

    /// Passives granted while in a Stable.
    pub passives: SmallVec<[Passive; 2]>,

    /// Effect resolved for the Stable's owner when the card leaves it.
    pub on_leave: Option<Effect>,

    /// Whether other seats get a reaction window when this card is played.
    pub interruptible: bool,
}

impl CardDefinition {
    /// Create a new card definition.
    #[must_use]
    pub fn new(id: CardId, name: impl Into<String>, kind: CardKind, effect: Effect) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
            effect,
            passives: SmallVec::new(),
            on_leave: None,
            interruptible: true,
        }
    }

    /// Add a passive (builder pattern).
    #[must_use]
    pub fn with_passive(mut self, passive: Passive) -> Self {
        self.passives.push(passive);
        self
    }

    /// Set the leave trigger (builder pattern).
    #[must_use]
    pub fn with_on_leave(mut self, effect: Effect) -> Self {
        self.on_leave = Some(effect);
        self
    }

    /// Mark the card as never opening a reaction window.
    #[must_use]
    pub fn uninterruptible(mut self) -> Self {
        self.interruptible = false;
        self
    }

    /// Whether any passive matches `pred`.
    #[must_use]
    pub fn has_passive(&self, pred: impl Fn(&Passive) -> bool) -> bool {
        self.passives.iter().any(pred)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_id() {
        let id = CardId::new(42);
        assert_eq!(id.raw(), 42);
        assert_eq!(format!("{}", id), "Card(42)");
    }

    #[test]
    fn test_kind_classes() {
        assert!(CardKind::Baseline.is_unit_class());
        assert!(CardKind::Unit.is_unit_class());
        assert!(!CardKind::Upgrade.is_unit_class());
        assert!(CardKind::Counter.is_counter_class());
        assert!(CardKind::AbsoluteCounter.is_counter_class());
        assert!(!CardKind::OneShot.is_counter_class());
    }

    #[test]
    fn test_definition_builder() {
        let martyr = CardDefinition::new(CardId::new(6), "Martyr", CardKind::Unit, Effect::Nothing)
            .with_on_leave(Effect::Draw { count: 2 })
            .with_passive(Passive::Substitute)
            .uninterruptible();

        assert_eq!(martyr.on_leave, Some(Effect::Draw { count: 2 }));
        assert!(martyr.has_passive(|p| *p == Passive::Substitute));
        assert!(!martyr.has_passive(|p| *p == Passive::Blinding));
        assert!(!martyr.interruptible);
    }

    #[test]
    fn test_definition_serialization() {
        let card = CardDefinition::new(CardId::new(1), "Oracle", CardKind::Unit, Effect::Nothing)
            .with_passive(Passive::BeginTurn(Effect::Draw { count: 1 }));

        let json = serde_json::to_string(&card).unwrap();
        let deserialized: CardDefinition = serde_json::from_str(&json).unwrap();

        assert_eq!(card, deserialized);
    }
}
