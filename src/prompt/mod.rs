//! Multi-step target selection.
//!
//! A `PromptState` is opened when a played card needs targets. It walks the
//! card's `PromptStep`s in order (for example pick a player, then pick a
//! card in that player's Stable), accepting answers only from the seat that
//! played the card. When the last step is answered the prompt yields a
//! `Target` and the session hands the card on to a reaction window or
//! straight to the resolver.
//!
//! The source card stays in the actor's hand while the prompt is open, so
//! cancelling only has to restore the turn phase and refund the action.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::InstanceId;
use crate::core::{Rejection, SeatId};
use crate::effects::{Eligibility, PromptStep, Target};
use crate::turn::Phase;

/// An answer to the current prompt step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selection {
    Player(SeatId),
    Card { seat: SeatId, index: usize },
}

/// Result of a successful `advance`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PromptProgress {
    /// More steps remain.
    NeedsMore,
    /// All steps answered.
    Complete(Target),
}

/// An open target-selection prompt.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptState {
    /// Seat that played the card; the only seat allowed to answer.
    pub actor: SeatId,
    /// The card being played.
    pub card: InstanceId,
    pub steps: SmallVec<[PromptStep; 2]>,
    pub step_index: usize,
    pub target_seat: Option<SeatId>,
    pub target_card: Option<InstanceId>,
    /// Phase restored on cancel.
    pub resume_phase: Phase,
}

impl PromptState {
    #[must_use]
    pub fn open(
        actor: SeatId,
        card: InstanceId,
        steps: SmallVec<[PromptStep; 2]>,
        resume_phase: Phase,
    ) -> Self {
        Self {
            actor,
            card,
            steps,
            step_index: 0,
            target_seat: None,
            target_card: None,
            resume_phase,
        }
    }

    /// The step waiting for an answer.
    #[must_use]
    pub fn current_step(&self) -> Option<PromptStep> {
        self.steps.get(self.step_index).copied()
    }

    /// Answer the current step.
    ///
    /// Fails with `NotAuthor` unless `seat` opened the prompt, `WrongStep`
    /// if the selection is for a different step, or whatever `eligibility`
    /// reports for an illegal pick. A failed call changes nothing.
    pub fn advance(
        &mut self,
        seat: SeatId,
        selection: Selection,
        eligibility: &Eligibility<'_>,
    ) -> Result<PromptProgress, Rejection> {
        if seat != self.actor {
            return Err(Rejection::NotAuthor);
        }
        match (self.current_step(), selection) {
            (Some(PromptStep::PickPlayer), Selection::Player(target)) => {
                eligibility.check_seat(target)?;
                self.target_seat = Some(target);
            }
            (Some(PromptStep::PickCard), Selection::Card { seat: owner, index }) => {
                if self.target_seat.is_some_and(|picked| picked != owner) {
                    return Err(Rejection::IllegalTarget);
                }
                let card = eligibility.check_card(owner, index)?;
                self.target_seat = Some(owner);
                self.target_card = Some(card);
            }
            _ => return Err(Rejection::WrongStep),
        }

        self.step_index += 1;
        if self.step_index < self.steps.len() {
            return Ok(PromptProgress::NeedsMore);
        }
        match self.target_seat {
            Some(seat) => Ok(PromptProgress::Complete(Target {
                seat,
                card: self.target_card,
            })),
            None => Err(Rejection::WrongStep),
        }
    }

    /// Check that `seat` may cancel this prompt.
    pub fn check_cancel(&self, seat: SeatId) -> Result<(), Rejection> {
        if seat == self.actor {
            Ok(())
        } else {
            Err(Rejection::NotAuthor)
        }
    }
}
