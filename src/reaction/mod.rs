//! Simultaneous reaction windows.
//!
//! When an interruptible card is played, every other alive seat gets one
//! chance to respond before it resolves. Responses arrive in any order:
//! the window keeps a *pending set* of seats that have not answered yet
//! and consumes a seat's entry on its first answer, so a duplicate or late
//! message finds the seat missing and is rejected without side effects.
//!
//! ## Close rule
//!
//! The window closes when the pending set is empty. A counter empties it
//! at once (unless counter chains are enabled, see `counter`). On close:
//! - any absolute counter on the stack negates the source effect;
//! - otherwise the effect resolves iff the number of ordinary counters is
//!   even.

use im::OrdSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::InstanceId;
use crate::core::{Rejection, SeatId};
use crate::effects::Target;
use crate::turn::Phase;

/// A counter card played into the window. The card is already in Discard.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackedCounter {
    pub seat: SeatId,
    pub card: InstanceId,
    pub absolute: bool,
}

/// How a closed window ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Resolves,
    Negated,
}

/// An open reaction window.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReactionWindow {
    /// Seat that played the source card.
    pub actor: SeatId,
    /// The card waiting to resolve; still in the actor's hand.
    pub card: InstanceId,
    pub target: Option<Target>,
    pending: OrdSet<SeatId>,
    stack: SmallVec<[StackedCounter; 2]>,
    /// Phase restored when the window closes.
    pub resume_phase: Phase,
}

impl ReactionWindow {
    /// Open a window; every seat in `alive` except `actor` is pending.
    #[must_use]
    pub fn open(
        actor: SeatId,
        card: InstanceId,
        target: Option<Target>,
        alive: impl IntoIterator<Item = SeatId>,
        resume_phase: Phase,
    ) -> Self {
        let pending = alive.into_iter().filter(|s| *s != actor).collect();
        Self {
            actor,
            card,
            target,
            pending,
            stack: SmallVec::new(),
            resume_phase,
        }
    }

    /// Seats that have not answered, in seat order.
    pub fn pending(&self) -> impl Iterator<Item = SeatId> + '_ {
        self.pending.iter().copied()
    }

    #[must_use]
    pub fn is_pending(&self, seat: SeatId) -> bool {
        self.pending.contains(&seat)
    }

    /// Counters played so far, oldest first.
    #[must_use]
    pub fn stack(&self) -> &[StackedCounter] {
        &self.stack
    }

    /// `seat` declines to counter.
    ///
    /// Fails with `NotPending` if the seat already answered or the window
    /// has closed; the pending set is unchanged in that case.
    pub fn pass(&mut self, seat: SeatId) -> Result<(), Rejection> {
        self.pending.remove(&seat).map(|_| ()).ok_or(Rejection::NotPending)
    }

    /// `seat` counters with `card`.
    ///
    /// An absolute counter, or any counter when `reopen` is `None`, closes
    /// the window. With `Some(alive)`, an ordinary counter reopens the
    /// window to every alive seat except the one who countered.
    pub fn counter(
        &mut self,
        seat: SeatId,
        card: InstanceId,
        absolute: bool,
        reopen: Option<&[SeatId]>,
    ) -> Result<(), Rejection> {
        if !self.pending.contains(&seat) {
            return Err(Rejection::NotPending);
        }
        self.stack.push(StackedCounter { seat, card, absolute });
        self.pending = match reopen {
            Some(alive) if !absolute => alive.iter().copied().filter(|s| *s != seat).collect(),
            _ => OrdSet::new(),
        };
        Ok(())
    }

    /// Remove a seat that can no longer answer (eliminated).
    pub fn drop_seat(&mut self, seat: SeatId) {
        self.pending.remove(&seat);
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.pending.is_empty()
    }

    #[must_use]
    pub fn ordinary_counters(&self) -> usize {
        self.stack.iter().filter(|c| !c.absolute).count()
    }

    #[must_use]
    pub fn has_absolute(&self) -> bool {
        self.stack.iter().any(|c| c.absolute)
    }

    /// Outcome for the source effect.
    #[must_use]
    pub fn verdict(&self) -> Verdict {
        if self.has_absolute() || self.ordinary_counters() % 2 == 1 {
            Verdict::Negated
        } else {
            Verdict::Resolves
        }
    }
}
