//! Effect targeting rules.
//!
//! - `TargetSpec`: which prompt steps a card needs and what they may pick
//! - `Eligibility`: checks concrete selections against a spec and the
//!   current session state
//! - `Target`: the finished selection handed to the resolver

use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};

use super::Effect;
use crate::cards::{CardDefinition, CardKind, CardRegistry, InstanceId};
use crate::core::{Rejection, SeatId};
use crate::session::SessionState;
use crate::zones::Zone;

/// One step of a target-selection prompt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PromptStep {
    PickPlayer,
    PickCard,
}

/// Which seats a selection may name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeatRule {
    Anyone,
    NotSelf,
    OnlySelf,
}

/// Which Stable cards a selection may name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardRule {
    Any,
    UnitClass,
}

/// The targeting a card needs before it can resolve.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetSpec {
    pub steps: SmallVec<[PromptStep; 2]>,
    pub seats: SeatRule,
    pub cards: CardRule,
}

impl TargetSpec {
    /// No targeting at all.
    #[must_use]
    pub fn none() -> Self {
        Self {
            steps: SmallVec::new(),
            seats: SeatRule::Anyone,
            cards: CardRule::Any,
        }
    }

    fn new(steps: SmallVec<[PromptStep; 2]>, seats: SeatRule, cards: CardRule) -> Self {
        Self { steps, seats, cards }
    }

    /// Targeting for an effect on its own.
    #[must_use]
    pub fn for_effect(effect: &Effect) -> Self {
        use PromptStep::{PickCard, PickPlayer};
        match effect {
            Effect::Destroy { .. } | Effect::Steal | Effect::Borrow => {
                Self::new(smallvec![PickPlayer, PickCard], SeatRule::NotSelf, CardRule::UnitClass)
            }
            Effect::ReturnToHand => Self::new(smallvec![PickCard], SeatRule::Anyone, CardRule::Any),
            Effect::Sacrifice => Self::new(smallvec![PickCard], SeatRule::OnlySelf, CardRule::Any),
            Effect::ForceDiscard { .. } | Effect::SwapHands => {
                Self::new(smallvec![PickPlayer], SeatRule::NotSelf, CardRule::Any)
            }
            Effect::Nothing
            | Effect::Draw { .. }
            | Effect::Protect { .. }
            | Effect::Create { .. }
            | Effect::ReshuffleDiscard => Self::none(),
        }
    }

    /// Targeting for playing a card.
    ///
    /// A downgrade with an untargeted effect still needs a seat to land on.
    #[must_use]
    pub fn for_definition(def: &CardDefinition) -> Self {
        let spec = Self::for_effect(&def.effect);
        if def.kind == CardKind::Downgrade && spec.steps.is_empty() {
            return Self::new(smallvec![PromptStep::PickPlayer], SeatRule::NotSelf, CardRule::Any);
        }
        spec
    }

    #[must_use]
    pub fn needs_target(&self) -> bool {
        !self.steps.is_empty()
    }

    #[must_use]
    pub fn needs_card(&self) -> bool {
        self.steps.contains(&PromptStep::PickCard)
    }
}

/// A completed selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Target {
    pub seat: SeatId,
    pub card: Option<InstanceId>,
}

impl Target {
    #[must_use]
    pub const fn seat(seat: SeatId) -> Self {
        Self { seat, card: None }
    }

    #[must_use]
    pub const fn card(seat: SeatId, card: InstanceId) -> Self {
        Self { seat, card: Some(card) }
    }
}

/// Checks selections for one actor and spec against the current state.
pub struct Eligibility<'a> {
    state: &'a SessionState,
    registry: &'a CardRegistry,
    actor: SeatId,
    spec: &'a TargetSpec,
}

impl<'a> Eligibility<'a> {
    #[must_use]
    pub fn new(
        state: &'a SessionState,
        registry: &'a CardRegistry,
        actor: SeatId,
        spec: &'a TargetSpec,
    ) -> Self {
        Self { state, registry, actor, spec }
    }

    fn card_allowed(&self, instance: InstanceId) -> bool {
        match self.spec.cards {
            CardRule::Any => true,
            CardRule::UnitClass => self
                .state
                .zones
                .card_of(instance)
                .and_then(|id| self.registry.get(id))
                .is_some_and(|def| def.kind.is_unit_class()),
        }
    }

    /// Whether `seat` may be named. When the spec also picks a card, the
    /// seat must hold at least one eligible card.
    pub fn check_seat(&self, seat: SeatId) -> Result<(), Rejection> {
        let state = self.state.seats.get(seat).ok_or(Rejection::UnknownSeat)?;
        if !state.alive {
            return Err(Rejection::IllegalTarget);
        }
        match self.spec.seats {
            SeatRule::NotSelf if seat == self.actor => return Err(Rejection::IllegalTarget),
            SeatRule::OnlySelf if seat != self.actor => return Err(Rejection::IllegalTarget),
            _ => {}
        }
        if seat != self.actor && state.protection > 0 {
            return Err(Rejection::ProtectedSeat);
        }
        if self.spec.needs_card()
            && !self
                .state
                .zones
                .cards(Zone::Stable(seat))
                .iter()
                .any(|&id| self.card_allowed(id))
        {
            return Err(Rejection::IllegalTarget);
        }
        Ok(())
    }

    /// Resolve `index` in `seat`'s Stable to an eligible instance.
    pub fn check_card(&self, seat: SeatId, index: usize) -> Result<InstanceId, Rejection> {
        self.check_seat(seat)?;
        let instance = self
            .state
            .zones
            .card_at(Zone::Stable(seat), index)
            .ok_or(Rejection::NoSuchCard(index))?;
        if !self.card_allowed(instance) {
            return Err(Rejection::IllegalTarget);
        }
        Ok(instance)
    }

    /// Whether any complete selection exists.
    #[must_use]
    pub fn has_any_target(&self) -> bool {
        !self.spec.needs_target() || self.state.seats.seat_ids().any(|s| self.check_seat(s).is_ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardId;

    #[test]
    fn test_steps_per_effect() {
        let destroy = TargetSpec::for_effect(&Effect::Destroy { draw_on_success: 0 });
        assert_eq!(destroy.steps.as_slice(), &[PromptStep::PickPlayer, PromptStep::PickCard]);
        assert_eq!(destroy.seats, SeatRule::NotSelf);
        assert_eq!(destroy.cards, CardRule::UnitClass);

        let swap = TargetSpec::for_effect(&Effect::SwapHands);
        assert_eq!(swap.steps.as_slice(), &[PromptStep::PickPlayer]);
        assert!(!swap.needs_card());

        let sacrifice = TargetSpec::for_effect(&Effect::Sacrifice);
        assert_eq!(sacrifice.seats, SeatRule::OnlySelf);

        assert!(!TargetSpec::for_effect(&Effect::Draw { count: 1 }).needs_target());
    }

    #[test]
    fn test_downgrade_needs_a_seat() {
        let def = CardDefinition::new(CardId::new(1), "Muzzle", CardKind::Downgrade, Effect::Nothing);
        let spec = TargetSpec::for_definition(&def);
        assert_eq!(spec.steps.as_slice(), &[PromptStep::PickPlayer]);
        assert_eq!(spec.seats, SeatRule::NotSelf);

        let unit = CardDefinition::new(CardId::new(2), "Mare", CardKind::Unit, Effect::Nothing);
        assert!(!TargetSpec::for_definition(&unit).needs_target());
    }
}
