//! Terminal condition evaluation.

use crate::cards::{CardRegistry, Passive};
use crate::core::{SeatId, SessionConfig, VictoryCondition};
use crate::effects::passives;
use crate::session::SessionState;
use crate::zones::Zone;

/// Pure evaluator of victory conditions.
///
/// Alive seats are scanned in ascending seat order and the first seat that
/// meets any configured condition wins. When several seats qualify after
/// the same step, the lowest seat number therefore wins; repeated
/// evaluation of the same state always returns the same seat.
pub struct WinChecker;

impl WinChecker {
    #[must_use]
    pub fn evaluate(
        state: &SessionState,
        registry: &CardRegistry,
        config: &SessionConfig,
    ) -> Option<SeatId> {
        let alive = state.alive_seats();
        alive.iter().copied().find(|&seat| {
            config
                .victory
                .iter()
                .any(|condition| Self::meets(state, registry, seat, alive.len(), condition))
        })
    }

    fn meets(
        state: &SessionState,
        registry: &CardRegistry,
        seat: SeatId,
        alive: usize,
        condition: &VictoryCondition,
    ) -> bool {
        match condition {
            VictoryCondition::UnitThreshold(n) => Self::unit_count(state, registry, seat) >= usize::from(*n),
            VictoryCondition::FullSet(cards) => {
                let stable: Vec<_> = state.zones.card_ids(Zone::Stable(seat)).collect();
                !cards.is_empty() && cards.iter().all(|c| stable.contains(c))
            }
            VictoryCondition::LastSeatStanding => alive == 1 && state.seats.seat_count() > 1,
        }
    }

    /// Unit-class cards in `seat`'s Stable. A card with a live
    /// `CountsDouble` passive counts twice.
    #[must_use]
    pub fn unit_count(state: &SessionState, registry: &CardRegistry, seat: SeatId) -> usize {
        state
            .zones
            .cards(Zone::Stable(seat))
            .iter()
            .filter_map(|&id| Some((id, registry.get(state.zones.card_of(id)?)?)))
            .filter(|(_, def)| def.kind.is_unit_class())
            .map(|(id, _)| {
                let double = passives::has_active(&state.zones, registry, seat, id, |p| {
                    *p == Passive::CountsDouble
                });
                if double {
                    2
                } else {
                    1
                }
            })
            .sum()
    }
}
