//! Passive abilities derived from Stable contents.
//!
//! Passives are never stored per seat; they are recomputed from whatever
//! currently sits in the seat's Stable. A `Blinding` card switches off the
//! passives and leave triggers of every other unit-class card beside it.

use crate::cards::{CardDefinition, CardRegistry, InstanceId, Passive};
use crate::core::SeatId;
use crate::zones::{Zone, ZoneStore};

/// Whether `seat`'s Stable holds a blinding card.
#[must_use]
pub fn is_blinded(zones: &ZoneStore, registry: &CardRegistry, seat: SeatId) -> bool {
    zones
        .card_ids(Zone::Stable(seat))
        .filter_map(|id| registry.get(id))
        .any(|def| def.has_passive(|p| *p == Passive::Blinding))
}

fn suppressed(def: &CardDefinition, blinded: bool) -> bool {
    blinded && def.kind.is_unit_class() && !def.has_passive(|p| *p == Passive::Blinding)
}

/// Cards in `seat`'s Stable whose passives are currently live, in Stable order.
#[must_use]
pub fn active_cards<'r>(
    zones: &ZoneStore,
    registry: &'r CardRegistry,
    seat: SeatId,
) -> Vec<(InstanceId, &'r CardDefinition)> {
    let blinded = is_blinded(zones, registry, seat);
    zones
        .cards(Zone::Stable(seat))
        .iter()
        .filter_map(|&id| {
            let def = registry.get(zones.card_of(id)?)?;
            (!suppressed(def, blinded)).then_some((id, def))
        })
        .collect()
}

/// Whether `instance`, sitting in `seat`'s Stable, has live passives.
#[must_use]
pub fn is_active(zones: &ZoneStore, registry: &CardRegistry, seat: SeatId, instance: InstanceId) -> bool {
    if zones.location(instance) != Some(Zone::Stable(seat)) {
        return false;
    }
    match zones.card_of(instance).and_then(|id| registry.get(id)) {
        Some(def) => !suppressed(def, is_blinded(zones, registry, seat)),
        None => false,
    }
}

/// Whether `instance` in `seat`'s Stable has a live passive matching `pred`.
#[must_use]
pub fn has_active(
    zones: &ZoneStore,
    registry: &CardRegistry,
    seat: SeatId,
    instance: InstanceId,
    pred: impl Fn(&Passive) -> bool,
) -> bool {
    is_active(zones, registry, seat, instance)
        && zones
            .card_of(instance)
            .and_then(|id| registry.get(id))
            .is_some_and(|def| def.has_passive(pred))
}

/// A card in the same Stable that takes a destroy aimed at `target`.
///
/// Only unit-class targets are covered, and the substitute must be a
/// different instance with a live `Substitute` passive that is neither
/// indestructible nor unsacrificeable.
#[must_use]
pub fn find_substitute(
    zones: &ZoneStore,
    registry: &CardRegistry,
    seat: SeatId,
    target: InstanceId,
) -> Option<InstanceId> {
    let target_def = registry.get(zones.card_of(target)?)?;
    if !target_def.kind.is_unit_class() {
        return None;
    }
    active_cards(zones, registry, seat)
        .into_iter()
        .find(|(id, def)| {
            *id != target
                && def.has_passive(|p| *p == Passive::Substitute)
                && !def.has_passive(|p| matches!(p, Passive::Indestructible | Passive::Unsacrificeable))
        })
        .map(|(id, _)| id)
}

/// Seat-scoped flags folded from every live passive in a Stable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SeatPassives {
    pub bonus_draw: usize,
    pub hand_limit_delta: i32,
    pub extra_actions: u8,
    pub reveal_hand: bool,
    pub block_counters: bool,
    pub uncounterable: bool,
    pub blinded: bool,
}

impl SeatPassives {
    /// Fold the live passives of `seat`'s Stable.
    #[must_use]
    pub fn compute(zones: &ZoneStore, registry: &CardRegistry, seat: SeatId) -> Self {
        let mut flags = SeatPassives {
            blinded: is_blinded(zones, registry, seat),
            ..SeatPassives::default()
        };
        for (_, def) in active_cards(zones, registry, seat) {
            for passive in &def.passives {
                match passive {
                    Passive::BonusDraw(n) => flags.bonus_draw += usize::from(*n),
                    Passive::HandLimit(delta) => flags.hand_limit_delta += i32::from(*delta),
                    Passive::ExtraAction => flags.extra_actions = flags.extra_actions.saturating_add(1),
                    Passive::RevealHand => flags.reveal_hand = true,
                    Passive::BlockCounters => flags.block_counters = true,
                    Passive::Uncounterable => flags.uncounterable = true,
                    Passive::Blinding
                    | Passive::BeginTurn(_)
                    | Passive::Indestructible
                    | Passive::Unsacrificeable
                    | Passive::Substitute
                    | Passive::CountsDouble => {}
                }
            }
        }
        flags
    }

    /// Base limit plus passive modifiers, never below zero.
    #[must_use]
    pub fn hand_limit(&self, base: usize) -> usize {
        let limit = i64::try_from(base).unwrap_or(i64::MAX) + i64::from(self.hand_limit_delta);
        usize::try_from(limit.max(0)).unwrap_or(usize::MAX)
    }
}
