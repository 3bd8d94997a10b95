//! Effect resolution - executing effects on session state.
//!
//! The `EffectResolver` owns a `HandlerTable` mapping each `EffectKind` to
//! a plain function. Rulesets swap, add or remove handlers by composition;
//! the engine itself never matches on card names.
//!
//! Two rules cut across handlers:
//! - **Immunity**: destroy skips indestructible targets and sacrifice skips
//!   unsacrificeable ones. The effect no-ops and reports failure, so
//!   follow-ups that are contingent on success (destroy-then-draw) do not run.
//! - **Substitution**: a live `Substitute` card beside a destroyed unit
//!   leaves in its place. This counts as a successful destroy.
//!
//! Handlers never panic on stale references: a card that is not where the
//! resolution expects is logged at `warn!` and the handler no-ops.

use log::{trace, warn};
use rustc_hash::FxHashMap;

use super::passives::{self, SeatPassives};
use super::{Effect, EffectKind, Target};
use crate::cards::{CardDefinition, CardKind, CardRegistry, InstanceId, Passive};
use crate::core::{GameRng, SeatId, SessionConfig};
use crate::session::{BorrowRecord, SessionEvent, SessionState};
use crate::zones::Zone;

/// Everything a handler may touch.
pub struct ResolveCtx<'a> {
    pub state: &'a mut SessionState,
    pub registry: &'a CardRegistry,
    pub config: &'a SessionConfig,
    pub rng: &'a mut GameRng,
}

impl<'a> ResolveCtx<'a> {
    pub fn new(
        state: &'a mut SessionState,
        registry: &'a CardRegistry,
        config: &'a SessionConfig,
        rng: &'a mut GameRng,
    ) -> Self {
        Self { state, registry, config, rng }
    }

    /// Definition of an instance.
    #[must_use]
    pub fn definition(&self, instance: InstanceId) -> Option<&'a CardDefinition> {
        let registry = self.registry;
        self.state.zones.card_of(instance).and_then(|id| registry.get(id))
    }

    /// Live passive flags for a seat.
    #[must_use]
    pub fn passives(&self, seat: SeatId) -> SeatPassives {
        SeatPassives::compute(&self.state.zones, self.registry, seat)
    }

    /// Draw for a seat and record it.
    pub fn draw(&mut self, seat: SeatId, count: usize) -> usize {
        if count == 0 {
            return 0;
        }
        let report = self.state.zones.draw(seat, count, self.rng);
        self.state.events.push(SessionEvent::CardsDrawn {
            seat,
            count: report.drawn.len(),
            reshuffled: report.reshuffled,
        });
        report.drawn.len()
    }
}

/// One effect being resolved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolution {
    /// Seat on whose behalf the effect runs.
    pub actor: SeatId,
    /// Card the effect came from, if any.
    pub source: Option<InstanceId>,
    pub effect: Effect,
    pub target: Option<Target>,
}

/// A mutation procedure for one effect kind. Returns whether it succeeded.
pub type Handler = fn(&EffectResolver, &mut ResolveCtx<'_>, &Resolution) -> bool;

/// Handlers keyed by effect kind.
#[derive(Clone, Default)]
pub struct HandlerTable {
    handlers: FxHashMap<EffectKind, Handler>,
}

impl std::fmt::Debug for HandlerTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut kinds: Vec<_> = self.handlers.keys().collect();
        kinds.sort();
        f.debug_struct("HandlerTable").field("kinds", &kinds).finish()
    }
}

impl HandlerTable {
    /// An empty table; every effect resolves as a missing handler.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// The built-in handler for every `EffectKind`.
    #[must_use]
    pub fn standard() -> Self {
        EffectKind::ALL
            .into_iter()
            .fold(Self::empty(), |table, kind| table.with(kind, standard_handler(kind)))
    }

    /// Register or replace a handler (builder pattern).
    #[must_use]
    pub fn with(mut self, kind: EffectKind, handler: Handler) -> Self {
        self.handlers.insert(kind, handler);
        self
    }

    /// Remove a handler (builder pattern).
    #[must_use]
    pub fn without(mut self, kind: EffectKind) -> Self {
        self.handlers.remove(&kind);
        self
    }

    #[must_use]
    pub fn get(&self, kind: EffectKind) -> Option<Handler> {
        self.handlers.get(&kind).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

fn standard_handler(kind: EffectKind) -> Handler {
    match kind {
        EffectKind::Nothing => nothing,
        EffectKind::Draw => draw,
        EffectKind::Destroy => destroy,
        EffectKind::Sacrifice => sacrifice,
        EffectKind::Steal => steal,
        EffectKind::Borrow => borrow,
        EffectKind::ReturnToHand => return_to_hand,
        EffectKind::ForceDiscard => force_discard,
        EffectKind::SwapHands => swap_hands,
        EffectKind::Protect => protect,
        EffectKind::Create => create,
        EffectKind::ReshuffleDiscard => reshuffle_discard,
    }
}

/// Resolves played cards and passive effects against session state.
#[derive(Clone, Debug)]
pub struct EffectResolver {
    handlers: HandlerTable,
}

impl Default for EffectResolver {
    fn default() -> Self {
        Self::new(HandlerTable::standard())
    }
}

impl EffectResolver {
    #[must_use]
    pub fn new(handlers: HandlerTable) -> Self {
        Self { handlers }
    }

    #[must_use]
    pub fn handlers(&self) -> &HandlerTable {
        &self.handlers
    }

    /// Resolve a played card: place it according to its kind, then run its
    /// effect.
    ///
    /// A card whose effect has no handler goes straight to Discard and
    /// nothing else happens. Returns whether the effect succeeded.
    pub fn resolve(
        &self,
        ctx: &mut ResolveCtx<'_>,
        actor: SeatId,
        card: InstanceId,
        target: Option<Target>,
    ) -> bool {
        let Some(from) = ctx.state.zones.location(card) else {
            warn!("resolve: {} is not in any zone", card);
            return false;
        };
        let Some(def) = ctx.definition(card) else {
            warn!("resolve: {} has no definition; discarding", card);
            if let Err(err) = ctx.state.zones.move_card(card, from, Zone::Discard) {
                warn!("resolve: {}", err);
            }
            return false;
        };

        let kind = def.effect.kind();
        if self.handlers.get(kind).is_none() {
            warn!("no handler for {} effect of {}; discarding", kind, def.name);
            if let Err(err) = ctx.state.zones.move_card(card, from, Zone::Discard) {
                warn!("resolve: {}", err);
            }
            ctx.state.events.push(SessionEvent::NoHandler { card: def.id, effect: kind });
            return false;
        }

        let destination = match def.kind {
            CardKind::Baseline | CardKind::Unit | CardKind::Upgrade => Zone::Stable(actor),
            CardKind::Downgrade => match target {
                Some(t) if ctx.state.is_alive(t.seat) => Zone::Stable(t.seat),
                Some(_) => Zone::Discard,
                None => Zone::Stable(actor),
            },
            CardKind::OneShot | CardKind::Counter | CardKind::AbsoluteCounter => Zone::Discard,
        };
        if let Err(err) = ctx.state.zones.move_card(card, from, destination) {
            warn!("resolve: {}", err);
            return false;
        }
        ctx.state.events.push(SessionEvent::Resolved { seat: actor, card: def.id });
        trace!("{} resolved {} into {}", actor, def.name, destination);

        self.apply(ctx, actor, Some(card), &def.effect, target)
    }

    /// Run one effect through the handler table. Used for played cards and
    /// for passive triggers. Returns whether the effect succeeded.
    pub fn apply(
        &self,
        ctx: &mut ResolveCtx<'_>,
        actor: SeatId,
        source: Option<InstanceId>,
        effect: &Effect,
        target: Option<Target>,
    ) -> bool {
        let kind = effect.kind();
        let Some(handler) = self.handlers.get(kind) else {
            warn!("no handler for {} effect", kind);
            if let Some(card) = source.and_then(|s| ctx.state.zones.card_of(s)) {
                ctx.state.events.push(SessionEvent::NoHandler { card, effect: kind });
            }
            return false;
        };
        let resolution = Resolution {
            actor,
            source,
            effect: effect.clone(),
            target,
        };
        trace!("{} applies {:?}", actor, resolution.effect);
        handler(self, ctx, &resolution)
    }

    /// Move `instance` out of `owner`'s Stable into `to`, firing its leave
    /// trigger for `owner` when the card's passives are live.
    ///
    /// Also ends any borrow of the card. Returns whether the card moved.
    pub fn leave_stable(
        &self,
        ctx: &mut ResolveCtx<'_>,
        instance: InstanceId,
        owner: SeatId,
        to: Zone,
    ) -> bool {
        let trigger = if passives::is_active(&ctx.state.zones, ctx.registry, owner, instance) {
            ctx.definition(instance).and_then(|def| def.on_leave.clone())
        } else {
            None
        };

        if let Err(err) = ctx.state.zones.move_card(instance, Zone::Stable(owner), to) {
            warn!("leave_stable: {}", err);
            return false;
        }
        ctx.state.borrows.retain(|b| b.card != instance);

        if let Some(effect) = trigger {
            if ctx.state.is_alive(owner) {
                self.apply(ctx, owner, Some(instance), &effect, None);
            }
        }
        true
    }
}

/// The target card of a resolution, if it is still in the target's Stable.
fn stable_target(ctx: &ResolveCtx<'_>, res: &Resolution) -> Option<(SeatId, InstanceId)> {
    let target = res.target?;
    let card = target.card?;
    if ctx.state.zones.location(card) != Some(Zone::Stable(target.seat)) {
        warn!("{:?}: {} is no longer in {}'s stable", res.effect.kind(), card, target.seat);
        return None;
    }
    Some((target.seat, card))
}

fn alive_target(ctx: &ResolveCtx<'_>, res: &Resolution) -> Option<SeatId> {
    res.target.map(|t| t.seat).filter(|seat| ctx.state.is_alive(*seat))
}

fn nothing(_: &EffectResolver, _: &mut ResolveCtx<'_>, _: &Resolution) -> bool {
    true
}

fn draw(_: &EffectResolver, ctx: &mut ResolveCtx<'_>, res: &Resolution) -> bool {
    let Effect::Draw { count } = res.effect else {
        return false;
    };
    ctx.draw(res.actor, usize::from(count));
    true
}

fn destroy(resolver: &EffectResolver, ctx: &mut ResolveCtx<'_>, res: &Resolution) -> bool {
    let Effect::Destroy { draw_on_success } = res.effect else {
        return false;
    };
    let Some((seat, card)) = stable_target(ctx, res) else {
        return false;
    };
    let Some(card_id) = ctx.state.zones.card_of(card) else {
        return false;
    };

    let registry = ctx.registry;
    if passives::has_active(&ctx.state.zones, registry, seat, card, |p| *p == Passive::Indestructible) {
        ctx.state.events.push(SessionEvent::Immune { seat, card: card_id });
        return false;
    }

    let substitute = passives::find_substitute(&ctx.state.zones, registry, seat, card);
    let victim = substitute.unwrap_or(card);
    let Some(victim_id) = ctx.state.zones.card_of(victim) else {
        return false;
    };
    if !resolver.leave_stable(ctx, victim, seat, Zone::Discard) {
        return false;
    }

    if substitute.is_some() {
        ctx.state.events.push(SessionEvent::Substituted {
            seat,
            substitute: victim_id,
            saved: card_id,
        });
    }
    ctx.state.events.push(SessionEvent::Destroyed { seat, card: victim_id });

    ctx.draw(res.actor, usize::from(draw_on_success));
    true
}

fn sacrifice(resolver: &EffectResolver, ctx: &mut ResolveCtx<'_>, res: &Resolution) -> bool {
    let Some((seat, card)) = stable_target(ctx, res) else {
        return false;
    };
    let Some(card_id) = ctx.state.zones.card_of(card) else {
        return false;
    };
    if passives::has_active(&ctx.state.zones, ctx.registry, seat, card, |p| *p == Passive::Unsacrificeable) {
        ctx.state.events.push(SessionEvent::Immune { seat, card: card_id });
        return false;
    }
    if !resolver.leave_stable(ctx, card, seat, Zone::Discard) {
        return false;
    }
    ctx.state.events.push(SessionEvent::Sacrificed { seat, card: card_id });
    true
}

fn steal(resolver: &EffectResolver, ctx: &mut ResolveCtx<'_>, res: &Resolution) -> bool {
    let Some((from, card)) = stable_target(ctx, res) else {
        return false;
    };
    let Some(card_id) = ctx.state.zones.card_of(card) else {
        return false;
    };
    if !resolver.leave_stable(ctx, card, from, Zone::Stable(res.actor)) {
        return false;
    }
    ctx.state.events.push(SessionEvent::Stolen {
        from,
        to: res.actor,
        card: card_id,
    });
    true
}

fn borrow(resolver: &EffectResolver, ctx: &mut ResolveCtx<'_>, res: &Resolution) -> bool {
    let Some((owner, card)) = stable_target(ctx, res) else {
        return false;
    };
    let Some(card_id) = ctx.state.zones.card_of(card) else {
        return false;
    };
    if !resolver.leave_stable(ctx, card, owner, Zone::Stable(res.actor)) {
        return false;
    }
    ctx.state.borrows.push(BorrowRecord {
        card,
        owner,
        borrower: res.actor,
    });
    ctx.state.events.push(SessionEvent::Borrowed {
        from: owner,
        to: res.actor,
        card: card_id,
    });
    true
}

fn return_to_hand(resolver: &EffectResolver, ctx: &mut ResolveCtx<'_>, res: &Resolution) -> bool {
    let Some((seat, card)) = stable_target(ctx, res) else {
        return false;
    };
    let Some(card_id) = ctx.state.zones.card_of(card) else {
        return false;
    };
    if !resolver.leave_stable(ctx, card, seat, Zone::Hand(seat)) {
        return false;
    }
    ctx.state.events.push(SessionEvent::ReturnedToHand { seat, card: card_id });
    true
}

fn force_discard(_: &EffectResolver, ctx: &mut ResolveCtx<'_>, res: &Resolution) -> bool {
    let Effect::ForceDiscard { count } = res.effect else {
        return false;
    };
    let Some(seat) = alive_target(ctx, res) else {
        return false;
    };
    let hand = Zone::Hand(seat);
    let mut discarded = 0;
    for _ in 0..count {
        let len = ctx.state.zones.len(hand);
        if len == 0 {
            break;
        }
        let index = ctx.rng.gen_range_usize(0..len);
        let Some(card) = ctx.state.zones.card_at(hand, index) else {
            break;
        };
        if ctx.state.zones.move_card(card, hand, Zone::Discard).is_ok() {
            discarded += 1;
        }
    }
    ctx.state.events.push(SessionEvent::ForcedDiscard { seat, count: discarded });
    true
}

fn swap_hands(_: &EffectResolver, ctx: &mut ResolveCtx<'_>, res: &Resolution) -> bool {
    let Some(seat) = alive_target(ctx, res) else {
        return false;
    };
    ctx.state.zones.swap_contents(Zone::Hand(res.actor), Zone::Hand(seat));
    ctx.state.events.push(SessionEvent::HandsSwapped { a: res.actor, b: seat });
    true
}

fn protect(_: &EffectResolver, ctx: &mut ResolveCtx<'_>, res: &Resolution) -> bool {
    let Effect::Protect { turns } = res.effect else {
        return false;
    };
    let Some(seat) = ctx.state.seats.get_mut(res.actor) else {
        return false;
    };
    seat.protection = seat.protection.saturating_add(turns);
    ctx.state.events.push(SessionEvent::Protected { seat: res.actor, turns });
    true
}

fn create(_: &EffectResolver, ctx: &mut ResolveCtx<'_>, res: &Resolution) -> bool {
    let Effect::Create { card } = res.effect else {
        return false;
    };
    if !ctx.registry.contains(card) {
        warn!("create: {} is not registered", card);
        return false;
    }
    ctx.state.zones.create(card, Zone::Stable(res.actor));
    ctx.state.events.push(SessionEvent::Created { seat: res.actor, card });
    true
}

fn reshuffle_discard(_: &EffectResolver, ctx: &mut ResolveCtx<'_>, _: &Resolution) -> bool {
    let count = ctx.state.zones.reshuffle_discard_into_deck(ctx.rng);
    ctx.state.events.push(SessionEvent::Reshuffled { count });
    true
}
