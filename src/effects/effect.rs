//! Effect definitions.
//!
//! `Effect` is a closed enum: adding a variant forces every exhaustive
//! `match` (including `Effect::kind`) to be updated, and the handler table
//! is keyed by the matching `EffectKind`.

use serde::{Deserialize, Serialize};

use crate::cards::CardId;

/// A card's effect with its typed parameters.
///
/// ## Targeting
///
/// | Effect          | Prompt steps            | Target                       |
/// |-----------------|-------------------------|------------------------------|
/// | `Destroy`       | pick player, pick card  | unit-class card, other seat  |
/// | `Steal`         | pick player, pick card  | unit-class card, other seat  |
/// | `Borrow`        | pick player, pick card  | unit-class card, other seat  |
/// | `ReturnToHand`  | pick card               | any Stable card              |
/// | `Sacrifice`     | pick card               | a card in your own Stable    |
/// | `ForceDiscard`  | pick player             | other seat                   |
/// | `SwapHands`     | pick player             | other seat                   |
/// | everything else | none                    |                              |
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Effect {
    /// No effect beyond placing the card.
    Nothing,

    /// The actor draws `count` cards.
    Draw { count: u8 },

    /// Move the target card to Discard. On success the actor draws
    /// `draw_on_success` cards.
    Destroy { draw_on_success: u8 },

    /// Move the target card from the actor's own Stable to Discard.
    Sacrifice,

    /// Move the target card into the actor's Stable for good.
    Steal,

    /// Move the target card into the actor's Stable until the end of the
    /// actor's turn.
    Borrow,

    /// Return the target card to its Stable owner's hand.
    ReturnToHand,

    /// The target seat discards `count` cards chosen at random.
    ForceDiscard { count: u8 },

    /// The actor and the target seat exchange hands.
    SwapHands,

    /// Other seats may not target the actor for `turns` of the actor's turns.
    Protect { turns: u8 },

    /// Put a new copy of `card` into the actor's Stable.
    Create { card: CardId },

    /// Shuffle the Discard back into the Deck.
    ReshuffleDiscard,
}

impl Effect {
    /// The handler-table key for this effect.
    #[must_use]
    pub const fn kind(&self) -> EffectKind {
        match self {
            Effect::Nothing => EffectKind::Nothing,
            Effect::Draw { .. } => EffectKind::Draw,
            Effect::Destroy { .. } => EffectKind::Destroy,
            Effect::Sacrifice => EffectKind::Sacrifice,
            Effect::Steal => EffectKind::Steal,
            Effect::Borrow => EffectKind::Borrow,
            Effect::ReturnToHand => EffectKind::ReturnToHand,
            Effect::ForceDiscard { .. } => EffectKind::ForceDiscard,
            Effect::SwapHands => EffectKind::SwapHands,
            Effect::Protect { .. } => EffectKind::Protect,
            Effect::Create { .. } => EffectKind::Create,
            Effect::ReshuffleDiscard => EffectKind::ReshuffleDiscard,
        }
    }
}

/// Discriminant of `Effect`, used as the handler-table key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EffectKind {
    Nothing,
    Draw,
    Destroy,
    Sacrifice,
    Steal,
    Borrow,
    ReturnToHand,
    ForceDiscard,
    SwapHands,
    Protect,
    Create,
    ReshuffleDiscard,
}

impl EffectKind {
    /// Every kind, in declaration order.
    pub const ALL: [EffectKind; 12] = [
        EffectKind::Nothing,
        EffectKind::Draw,
        EffectKind::Destroy,
        EffectKind::Sacrifice,
        EffectKind::Steal,
        EffectKind::Borrow,
        EffectKind::ReturnToHand,
        EffectKind::ForceDiscard,
        EffectKind::SwapHands,
        EffectKind::Protect,
        EffectKind::Create,
        EffectKind::ReshuffleDiscard,
    ];
}

impl std::fmt::Display for EffectKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            EffectKind::Nothing => "nothing",
            EffectKind::Draw => "draw",
            EffectKind::Destroy => "destroy",
            EffectKind::Sacrifice => "sacrifice",
            EffectKind::Steal => "steal",
            EffectKind::Borrow => "borrow",
            EffectKind::ReturnToHand => "return to hand",
            EffectKind::ForceDiscard => "force discard",
            EffectKind::SwapHands => "swap hands",
            EffectKind::Protect => "protect",
            EffectKind::Create => "create",
            EffectKind::ReshuffleDiscard => "reshuffle discard",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_matches_variant() {
        assert_eq!(Effect::Draw { count: 2 }.kind(), EffectKind::Draw);
        assert_eq!(
            Effect::Destroy { draw_on_success: 1 }.kind(),
            EffectKind::Destroy
        );
        assert_eq!(
            Effect::Create { card: CardId::new(4) }.kind(),
            EffectKind::Create
        );
    }

    #[test]
    fn test_all_kinds_are_distinct() {
        let mut kinds = EffectKind::ALL.to_vec();
        kinds.sort();
        kinds.dedup();
        assert_eq!(kinds.len(), EffectKind::ALL.len());
    }

    #[test]
    fn test_effect_serialization() {
        let effect = Effect::ForceDiscard { count: 2 };
        let json = serde_json::to_string(&effect).unwrap();
        let deserialized: Effect = serde_json::from_str(&json).unwrap();
        assert_eq!(effect, deserialized);
    }
}
