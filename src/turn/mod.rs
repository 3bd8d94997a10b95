//! Turn and phase state machine.
//!
//! Each alive seat takes turns in ascending seat order, wrapping around and
//! skipping eliminated seats:
//!
//! ```text
//! Begin -> Discard? -> Action -> End -> (next seat) Begin ...
//! ```
//!
//! `Begin` and `End` are transient: `begin_turn` and `end_turn` run them to
//! completion inside a single call, so a client only ever observes
//! `Discard` or `Action` between operations.

use log::{info, trace};
use serde::{Deserialize, Serialize};

use crate::cards::{CardRegistry, InstanceId, Passive};
use crate::core::{SeatId, SeatMap, SessionConfig};
use crate::effects::passives::{self, SeatPassives};
use crate::effects::{Effect, EffectResolver, ResolveCtx};
use crate::session::{SeatState, SessionEvent, SessionState};
use crate::zones::Zone;

/// Phase of the current turn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    #[default]
    Begin,
    /// Hand is over the limit; only discards are accepted.
    Discard,
    Action,
    End,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Phase::Begin => "begin",
            Phase::Discard => "discard",
            Phase::Action => "action",
            Phase::End => "end",
        };
        f.write_str(name)
    }
}

/// Whose turn it is and how far along it is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnState {
    /// Seat taking the turn.
    pub seat: SeatId,
    pub phase: Phase,
    /// Turn counter across all seats (first turn is 1).
    pub number: u32,
    /// Card plays left this turn.
    pub actions_remaining: u8,
}

/// Drives `begin_turn` and `end_turn`.
pub struct TurnController;

impl TurnController {
    /// Start `seat`'s turn.
    ///
    /// 1. Count down the seat's protection.
    /// 2. Run begin-of-turn passives from the seat's Stable, in Stable order.
    ///    A passive whose card has left the Stable (or was blinded) by the
    ///    time its turn comes is skipped.
    /// 3. Draw the base amount plus bonus draws.
    /// 4. Enter `Discard` if the hand is over the limit, else `Action`.
    pub fn begin_turn(resolver: &EffectResolver, ctx: &mut ResolveCtx<'_>, seat: SeatId) {
        let turn = &mut ctx.state.turn;
        turn.seat = seat;
        turn.phase = Phase::Begin;
        turn.number += 1;
        turn.actions_remaining = 0;
        let number = turn.number;

        ctx.state.events.push(SessionEvent::TurnStarted { seat, turn: number });
        info!("{} begins turn {}", seat, number);

        if let Some(state) = ctx.state.seats.get_mut(seat) {
            state.protection = state.protection.saturating_sub(1);
        }

        for (instance, effect) in begin_turn_passives(ctx, seat) {
            if passives::is_active(&ctx.state.zones, ctx.registry, seat, instance) {
                trace!("{} begin-turn passive from {}", seat, instance);
                resolver.apply(ctx, seat, Some(instance), &effect, None);
            }
        }

        let flags = ctx.passives(seat);
        let count = ctx.config.draw_per_turn + flags.bonus_draw;
        ctx.draw(seat, count);

        let over_limit = ctx.state.zones.len(Zone::Hand(seat)) > flags.hand_limit(ctx.config.hand_limit);
        ctx.state.turn.actions_remaining = ctx.config.actions_per_turn.saturating_add(flags.extra_actions);
        ctx.state.turn.phase = if over_limit { Phase::Discard } else { Phase::Action };
    }

    /// Finish the current turn and start the next alive seat's.
    ///
    /// Cards the current seat borrowed go back to their owners first (to
    /// Discard if the owner has been eliminated).
    pub fn end_turn(resolver: &EffectResolver, ctx: &mut ResolveCtx<'_>) {
        let seat = ctx.state.turn.seat;
        ctx.state.turn.phase = Phase::End;

        Self::return_borrowed(resolver, ctx, seat);

        match Self::next_alive(&ctx.state.seats, seat) {
            Some(next) => Self::begin_turn(resolver, ctx, next),
            None => trace!("no alive seat after {}", seat),
        }
    }

    /// Send every card `borrower` holds on loan back where it belongs.
    pub fn return_borrowed(resolver: &EffectResolver, ctx: &mut ResolveCtx<'_>, borrower: SeatId) {
        let loans: Vec<_> = ctx
            .state
            .borrows
            .iter()
            .filter(|b| b.borrower == borrower)
            .copied()
            .collect();

        for loan in loans {
            let Some(card) = ctx.state.zones.card_of(loan.card) else {
                continue;
            };
            let to = if ctx.state.is_alive(loan.owner) {
                Zone::Stable(loan.owner)
            } else {
                Zone::Discard
            };
            if resolver.leave_stable(ctx, loan.card, borrower, to) {
                ctx.state.events.push(SessionEvent::BorrowReturned { owner: loan.owner, card });
            }
        }
        ctx.state.borrows.retain(|b| b.borrower != borrower);
    }

    /// The first alive seat after `from` in rotation order, wrapping around.
    /// May return `from` itself when it is the only alive seat.
    #[must_use]
    pub fn next_alive(seats: &SeatMap<SeatState>, from: SeatId) -> Option<SeatId> {
        let count = seats.seat_count();
        (1..=count)
            .map(|step| SeatId(((from.index() + step) % count) as u8))
            .find(|seat| seats.get(*seat).is_some_and(|s| s.alive))
    }

    /// `seat`'s current hand limit.
    #[must_use]
    pub fn hand_limit(
        state: &SessionState,
        registry: &CardRegistry,
        config: &SessionConfig,
        seat: SeatId,
    ) -> usize {
        SeatPassives::compute(&state.zones, registry, seat).hand_limit(config.hand_limit)
    }
}

fn begin_turn_passives(ctx: &ResolveCtx<'_>, seat: SeatId) -> Vec<(InstanceId, Effect)> {
    passives::active_cards(&ctx.state.zones, ctx.registry, seat)
        .into_iter()
        .flat_map(|(id, def)| {
            def.passives.iter().filter_map(move |p| match p {
                Passive::BeginTurn(effect) => Some((id, effect.clone())),
                _ => None,
            })
        })
        .collect()
}
