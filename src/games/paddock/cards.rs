//! Paddock card table and deck list.

use crate::cards::{CardDefinition, CardId, CardKind, CardRegistry, Passive};
use crate::core::ConfigError;
use crate::effects::Effect;

/// Definition ids.
pub mod ids {
    use crate::cards::CardId;

    // Baseline
    pub const FOAL: CardId = CardId::new(1);

    // Units
    pub const MARE: CardId = CardId::new(2);
    pub const SEER: CardId = CardId::new(3);
    pub const GUARDIAN: CardId = CardId::new(4);
    pub const STONE_HORSE: CardId = CardId::new(5);
    pub const MARTYR: CardId = CardId::new(6);
    pub const TWINS: CardId = CardId::new(7);
    pub const ORACLE: CardId = CardId::new(8);

    // Upgrades
    pub const SADDLEBAGS: CardId = CardId::new(20);
    pub const LANTERN: CardId = CardId::new(21);
    pub const SPURS: CardId = CardId::new(22);
    pub const IRON_GATE: CardId = CardId::new(23);

    // Downgrades
    pub const BLINDERS: CardId = CardId::new(30);
    pub const GLASS_STALL: CardId = CardId::new(31);
    pub const MUZZLE: CardId = CardId::new(32);
    pub const CRAMPED_PEN: CardId = CardId::new(33);

    // One-shots
    pub const STAMPEDE: CardId = CardId::new(40);
    pub const CULL: CardId = CardId::new(41);
    pub const LEND_A_HOOF: CardId = CardId::new(42);
    pub const RUSTLE: CardId = CardId::new(43);
    pub const RECALL: CardId = CardId::new(44);
    pub const OFFERING: CardId = CardId::new(45);
    pub const SWITCHEROO: CardId = CardId::new(46);
    pub const SPOOK: CardId = CardId::new(47);
    pub const FENCE: CardId = CardId::new(48);
    pub const BREED: CardId = CardId::new(49);
    pub const ROUNDUP: CardId = CardId::new(50);
    pub const GALLOP: CardId = CardId::new(51);

    // Counters
    pub const REFUSAL: CardId = CardId::new(60);
    pub const VETO: CardId = CardId::new(61);
}

use ids::*;

fn definitions() -> Vec<CardDefinition> {
    use CardKind::{AbsoluteCounter, Baseline, Counter, Downgrade, OneShot, Unit, Upgrade};

    vec![
        CardDefinition::new(FOAL, "Foal", Baseline, Effect::Nothing),
        CardDefinition::new(MARE, "Mare", Unit, Effect::Nothing),
        CardDefinition::new(SEER, "Seer", Unit, Effect::Draw { count: 1 }),
        CardDefinition::new(GUARDIAN, "Guardian", Unit, Effect::Nothing).with_passive(Passive::Substitute),
        CardDefinition::new(STONE_HORSE, "Stone Horse", Unit, Effect::Nothing)
            .with_passive(Passive::Indestructible)
            .with_passive(Passive::Unsacrificeable),
        CardDefinition::new(MARTYR, "Martyr", Unit, Effect::Nothing).with_on_leave(Effect::Draw { count: 2 }),
        CardDefinition::new(TWINS, "Twins", Unit, Effect::Nothing).with_passive(Passive::CountsDouble),
        CardDefinition::new(ORACLE, "Oracle", Unit, Effect::Nothing)
            .with_passive(Passive::BeginTurn(Effect::Draw { count: 1 })),
        CardDefinition::new(SADDLEBAGS, "Saddlebags", Upgrade, Effect::Nothing)
            .with_passive(Passive::HandLimit(2)),
        CardDefinition::new(LANTERN, "Lantern", Upgrade, Effect::Nothing).with_passive(Passive::BonusDraw(1)),
        CardDefinition::new(SPURS, "Spurs", Upgrade, Effect::Nothing).with_passive(Passive::ExtraAction),
        CardDefinition::new(IRON_GATE, "Iron Gate", Upgrade, Effect::Nothing).with_passive(Passive::Uncounterable),
        CardDefinition::new(BLINDERS, "Blinders", Downgrade, Effect::Nothing).with_passive(Passive::Blinding),
        CardDefinition::new(GLASS_STALL, "Glass Stall", Downgrade, Effect::Nothing)
            .with_passive(Passive::RevealHand),
        CardDefinition::new(MUZZLE, "Muzzle", Downgrade, Effect::Nothing).with_passive(Passive::BlockCounters),
        CardDefinition::new(CRAMPED_PEN, "Cramped Pen", Downgrade, Effect::Nothing)
            .with_passive(Passive::HandLimit(-2)),
        CardDefinition::new(STAMPEDE, "Stampede", OneShot, Effect::Destroy { draw_on_success: 0 }),
        CardDefinition::new(CULL, "Cull", OneShot, Effect::Destroy { draw_on_success: 1 }),
        CardDefinition::new(LEND_A_HOOF, "Lend a Hoof", OneShot, Effect::Borrow),
        CardDefinition::new(RUSTLE, "Rustle", OneShot, Effect::Steal),
        CardDefinition::new(RECALL, "Recall", OneShot, Effect::ReturnToHand),
        CardDefinition::new(OFFERING, "Offering", OneShot, Effect::Sacrifice),
        CardDefinition::new(SWITCHEROO, "Switcheroo", OneShot, Effect::SwapHands),
        CardDefinition::new(SPOOK, "Spook", OneShot, Effect::ForceDiscard { count: 2 }),
        CardDefinition::new(FENCE, "Fence", OneShot, Effect::Protect { turns: 1 }),
        CardDefinition::new(BREED, "Breed", OneShot, Effect::Create { card: MARE }),
        CardDefinition::new(ROUNDUP, "Roundup", OneShot, Effect::ReshuffleDiscard),
        CardDefinition::new(GALLOP, "Gallop", OneShot, Effect::Draw { count: 2 }).uninterruptible(),
        CardDefinition::new(REFUSAL, "Refusal", Counter, Effect::Nothing),
        CardDefinition::new(VETO, "Veto", AbsoluteCounter, Effect::Nothing),
    ]
}

/// Register every paddock card.
pub fn registry() -> Result<CardRegistry, ConfigError> {
    let mut registry = CardRegistry::new();
    for def in definitions() {
        registry.register(def)?;
    }
    Ok(registry)
}

/// Copies of each card in the shared Deck.
const DECK_LIST: &[(CardId, usize)] = &[
    (MARE, 7),
    (SEER, 2),
    (GUARDIAN, 1),
    (STONE_HORSE, 1),
    (MARTYR, 2),
    (TWINS, 1),
    (ORACLE, 1),
    (SADDLEBAGS, 1),
    (LANTERN, 1),
    (SPURS, 1),
    (IRON_GATE, 1),
    (BLINDERS, 1),
    (GLASS_STALL, 1),
    (MUZZLE, 1),
    (CRAMPED_PEN, 1),
    (STAMPEDE, 3),
    (CULL, 2),
    (LEND_A_HOOF, 2),
    (RUSTLE, 2),
    (RECALL, 2),
    (OFFERING, 1),
    (SWITCHEROO, 1),
    (SPOOK, 2),
    (FENCE, 2),
    (BREED, 1),
    (ROUNDUP, 1),
    (GALLOP, 2),
    (REFUSAL, 5),
    (VETO, 1),
];

/// The Deck, one entry per instance.
pub fn deck() -> Vec<CardId> {
    DECK_LIST
        .iter()
        .flat_map(|&(card, copies)| std::iter::repeat(card).take(copies))
        .collect()
}
