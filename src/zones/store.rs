//! Zone store for card locations and movement.
//!
//! The `ZoneStore` owns every card instance in a session and tracks which
//! zone each one occupies. It supports:
//! - Checked moves (`move_card` fails if the card is not where the caller says)
//! - Drawing with an automatic reshuffle of Discard into Deck
//! - Deterministic shuffles through an injected `GameRng`
//! - A census for checking that cards are never duplicated or lost
//!
//! Every zone is an ordered `Vec`. For the Deck the last element is the
//! top; hands and stables append in arrival order, which is also the
//! index order clients use to address cards.

use std::collections::BTreeMap;

use log::trace;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::{CardId, CardInstance, InstanceId};
use crate::core::{GameRng, SeatId, ZoneError};

/// A named container of card instances.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Zone {
    /// Shared draw pile. Last element is the top.
    Deck,
    /// Shared discard pile; source for reshuffles.
    Discard,
    /// A seat's private hand.
    Hand(SeatId),
    /// A seat's public play area.
    Stable(SeatId),
}

impl std::fmt::Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Zone::Deck => write!(f, "Deck"),
            Zone::Discard => write!(f, "Discard"),
            Zone::Hand(seat) => write!(f, "Hand({})", seat),
            Zone::Stable(seat) => write!(f, "Stable({})", seat),
        }
    }
}

/// What a `draw` did.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DrawReport {
    /// Instances moved into the hand, in draw order.
    pub drawn: Vec<InstanceId>,
    /// Number of Discard cards shuffled back under the Deck (0 if none).
    pub reshuffled: usize,
}

/// Owns card instances and their locations.
///
/// ## Usage
///
/// ```
/// use tabletop_session::cards::CardId;
/// use tabletop_session::core::{GameRng, SeatId};
/// use tabletop_session::zones::{Zone, ZoneStore};
///
/// let mut store = ZoneStore::new();
/// for _ in 0..3 {
///     store.spawn(CardId::new(1), Zone::Deck);
/// }
///
/// let mut rng = GameRng::new(1);
/// let report = store.draw(SeatId(0), 2, &mut rng);
/// assert_eq!(report.drawn.len(), 2);
/// assert_eq!(store.len(Zone::Hand(SeatId(0))), 2);
/// assert_eq!(store.len(Zone::Deck), 1);
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ZoneStore {
    /// Definition of each instance.
    instances: FxHashMap<InstanceId, CardId>,

    /// Current zone of each instance.
    locations: FxHashMap<InstanceId, Zone>,

    /// Ordered contents of each zone.
    contents: FxHashMap<Zone, Vec<InstanceId>>,

    next_instance: u32,

    /// Instances introduced by create effects, per definition.
    created: FxHashMap<CardId, usize>,
}

impl ZoneStore {
    /// Create a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Introduce a card during session setup. Placed on top for the Deck.
    pub fn spawn(&mut self, card: CardId, zone: Zone) -> InstanceId {
        let id = InstanceId::new(self.next_instance);
        self.next_instance += 1;

        self.instances.insert(id, card);
        self.locations.insert(id, zone);
        self.contents.entry(zone).or_default().push(id);
        id
    }

    /// Introduce a card through a create effect.
    ///
    /// Counted separately so conservation checks can account for it.
    pub fn create(&mut self, card: CardId, zone: Zone) -> InstanceId {
        *self.created.entry(card).or_default() += 1;
        self.spawn(card, zone)
    }

    /// Move an instance from `from` to the end of `to`.
    ///
    /// Fails with `InvalidMove` if the instance is not currently in `from`;
    /// nothing changes in that case.
    pub fn move_card(&mut self, instance: InstanceId, from: Zone, to: Zone) -> Result<(), ZoneError> {
        if self.locations.get(&instance) != Some(&from) {
            return Err(ZoneError::InvalidMove { instance, zone: from });
        }
        if let Some(order) = self.contents.get_mut(&from) {
            order.retain(|&i| i != instance);
        }
        self.locations.insert(instance, to);
        self.contents.entry(to).or_default().push(instance);
        Ok(())
    }

    /// Move up to `count` cards from the top of the Deck into `seat`'s hand.
    ///
    /// When the Deck holds fewer than `count` cards and the Discard is not
    /// empty, the Discard is shuffled and slid under the Deck first, so the
    /// cards already on the Deck are still drawn first. If both run dry
    /// the draw stops short; that is not an error.
    pub fn draw(&mut self, seat: SeatId, count: usize, rng: &mut GameRng) -> DrawReport {
        let mut report = DrawReport::default();
        if self.len(Zone::Deck) < count && self.len(Zone::Discard) > 0 {
            report.reshuffled = self.recycle_discard(rng);
        }

        let hand = Zone::Hand(seat);
        for _ in 0..count {
            let Some(id) = self.contents.get_mut(&Zone::Deck).and_then(Vec::pop) else {
                break;
            };
            self.locations.insert(id, hand);
            self.contents.entry(hand).or_default().push(id);
            report.drawn.push(id);
        }

        trace!(
            "{} drew {} of {} (reshuffled {})",
            seat,
            report.drawn.len(),
            count,
            report.reshuffled
        );
        report
    }

    /// Shuffle the Discard and place it beneath the Deck.
    ///
    /// Returns the number of cards moved.
    pub fn recycle_discard(&mut self, rng: &mut GameRng) -> usize {
        let mut pile = self.contents.remove(&Zone::Discard).unwrap_or_default();
        let moved = pile.len();
        for id in &pile {
            self.locations.insert(*id, Zone::Deck);
        }
        rng.shuffle(&mut pile);

        let deck = self.contents.entry(Zone::Deck).or_default();
        pile.append(deck);
        *deck = pile;
        moved
    }

    /// Put the whole Discard into the Deck and shuffle the Deck.
    ///
    /// Returns the number of cards moved.
    pub fn reshuffle_discard_into_deck(&mut self, rng: &mut GameRng) -> usize {
        let pile = self.contents.remove(&Zone::Discard).unwrap_or_default();
        let moved = pile.len();
        for id in &pile {
            self.locations.insert(*id, Zone::Deck);
        }

        let deck = self.contents.entry(Zone::Deck).or_default();
        deck.extend(pile);
        rng.shuffle(deck);
        moved
    }

    /// Shuffle a zone in place. Deterministic given `rng`.
    pub fn shuffle(&mut self, zone: Zone, rng: &mut GameRng) {
        if let Some(order) = self.contents.get_mut(&zone) {
            rng.shuffle(order);
        }
    }

    /// Exchange the contents of two zones.
    pub fn swap_contents(&mut self, a: Zone, b: Zone) {
        if a == b {
            return;
        }
        let left = self.contents.remove(&a).unwrap_or_default();
        let right = self.contents.remove(&b).unwrap_or_default();
        for id in &left {
            self.locations.insert(*id, b);
        }
        for id in &right {
            self.locations.insert(*id, a);
        }
        self.contents.insert(a, right);
        self.contents.insert(b, left);
    }

    /// Cards in a zone, in order.
    #[must_use]
    pub fn cards(&self, zone: Zone) -> &[InstanceId] {
        self.contents.get(&zone).map_or(&[], |v| v.as_slice())
    }

    /// Number of cards in a zone.
    #[must_use]
    pub fn len(&self, zone: Zone) -> usize {
        self.cards(zone).len()
    }

    /// Whether a zone is empty.
    #[must_use]
    pub fn is_empty(&self, zone: Zone) -> bool {
        self.cards(zone).is_empty()
    }

    /// The instance at `index` in a zone.
    #[must_use]
    pub fn card_at(&self, zone: Zone, index: usize) -> Option<InstanceId> {
        self.cards(zone).get(index).copied()
    }

    /// Where an instance is.
    #[must_use]
    pub fn location(&self, instance: InstanceId) -> Option<Zone> {
        self.locations.get(&instance).copied()
    }

    /// Which definition an instance is a copy of.
    #[must_use]
    pub fn card_of(&self, instance: InstanceId) -> Option<CardId> {
        self.instances.get(&instance).copied()
    }

    /// Instance plus definition.
    #[must_use]
    pub fn instance(&self, instance: InstanceId) -> Option<CardInstance> {
        self.card_of(instance).map(|card| CardInstance::new(instance, card))
    }

    /// Definitions of the cards in a zone, in order.
    pub fn card_ids(&self, zone: Zone) -> impl Iterator<Item = CardId> + '_ {
        self.cards(zone).iter().filter_map(|id| self.card_of(*id))
    }

    /// Position of an instance within a zone.
    #[must_use]
    pub fn position(&self, zone: Zone, instance: InstanceId) -> Option<usize> {
        self.cards(zone).iter().position(|&i| i == instance)
    }

    /// Number of instances ever created by create effects for `card`.
    #[must_use]
    pub fn created(&self, card: CardId) -> usize {
        self.created.get(&card).copied().unwrap_or(0)
    }

    /// Number of instances tracked.
    #[must_use]
    pub fn total(&self) -> usize {
        self.instances.len()
    }

    /// Count of each definition across every zone's contents.
    #[must_use]
    pub fn census(&self) -> BTreeMap<CardId, usize> {
        let mut counts = BTreeMap::new();
        for order in self.contents.values() {
            for id in order {
                if let Some(card) = self.card_of(*id) {
                    *counts.entry(card).or_insert(0) += 1;
                }
            }
        }
        counts
    }

    /// Every instance sits in exactly one zone and the location index
    /// agrees with the zone contents.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let mut seen = 0;
        for (zone, order) in &self.contents {
            for id in order {
                if self.locations.get(id) != Some(zone) {
                    return false;
                }
                seen += 1;
            }
        }
        seen == self.instances.len() && self.locations.len() == self.instances.len()
    }
}
