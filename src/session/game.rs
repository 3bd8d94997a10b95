//! The session entry point.
//!
//! `GameSession` is the single writer for one session. Every inbound
//! message goes through `submit`, which validates the action against the
//! turn, prompt and reaction state before touching anything:
//!
//! ```text
//! submit(msg) -> check actor -> check action -> mutate -> WinChecker -> events
//!                     |               |
//!                     +-- Rejected ---+   (no state change)
//! ```
//!
//! Hosts serving several remote seats hold the session behind whatever
//! serialization they already have (a task, a mutex) and call `submit` for
//! each message in arrival order. Duplicate and late messages are expected;
//! they come back as `Outcome::Rejected` and leave the session untouched.
//!
//! ## Usage
//!
//! ```
//! use tabletop_session::core::{Action, ActionMessage, GameRng, SeatId};
//! use tabletop_session::games::paddock::PaddockBuilder;
//! use tabletop_session::session::{GameSession, Outcome};
//!
//! let mut rng = GameRng::new(42);
//! let paddock = PaddockBuilder::new().seat_count(3).build().unwrap();
//! let mut session = GameSession::new(&paddock, &mut rng).unwrap();
//!
//! // Seat 1 cannot act on seat 0's turn.
//! let early = ActionMessage::new(SeatId(1), Action::EndTurn);
//! assert!(matches!(session.submit(&early, &mut rng), Outcome::Rejected(_)));
//!
//! let end = ActionMessage::new(SeatId(0), Action::EndTurn);
//! assert_eq!(session.submit(&end, &mut rng), Outcome::Applied);
//! assert_eq!(session.state().turn.seat, SeatId(1));
//! ```

use std::collections::BTreeMap;
use std::sync::Arc;

use log::{debug, info, warn};

use super::events::SessionEvent;
use super::snapshot::{ButtonSpec, SnapshotBuilder, ViewModel};
use super::state::{Interaction, SessionState};
use crate::cards::{CardDefinition, CardId, CardKind, CardRegistry, InstanceId};
use crate::core::{
    Action, ActionMessage, ActionRecord, CheckpointError, ConfigError, GameRng, Rejection, SeatId,
    SessionConfig,
};
use crate::effects::{EffectResolver, Eligibility, ResolveCtx, SeatPassives, Target, TargetSpec};
use crate::prompt::{PromptProgress, PromptState, Selection};
use crate::reaction::{ReactionWindow, Verdict};
use crate::rules::{Ruleset, WinChecker};
use crate::turn::{Phase, TurnController};
use crate::zones::{Zone, ZoneStore};

/// Result of submitting an action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    /// Nothing changed.
    Rejected(Rejection),
}

impl Outcome {
    #[must_use]
    pub fn is_applied(self) -> bool {
        matches!(self, Outcome::Applied)
    }
}

/// Callback receiving each event after the action that produced it.
pub type Listener = Box<dyn FnMut(&SessionEvent) + Send>;

/// One authoritative session.
pub struct GameSession {
    name: String,
    registry: Arc<CardRegistry>,
    resolver: EffectResolver,
    config: SessionConfig,
    state: SessionState,
    listeners: Vec<Listener>,
}

impl std::fmt::Debug for GameSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameSession")
            .field("name", &self.name)
            .field("config", &self.config)
            .field("state", &self.state)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

impl GameSession {
    /// Start a session: build and shuffle the Deck, place starting Stables,
    /// deal opening hands and begin seat 0's turn.
    pub fn new(ruleset: &dyn Ruleset, rng: &mut GameRng) -> Result<Self, ConfigError> {
        let config = ruleset.config();
        config.validate()?;
        let registry = ruleset.registry();

        let deck = ruleset.deck();
        registry.require_all(&deck)?;
        let mut zones = ZoneStore::new();
        for card in deck {
            zones.spawn(card, Zone::Deck);
        }
        zones.shuffle(Zone::Deck, rng);

        for seat in SeatId::all(config.seat_count) {
            let stable = ruleset.starting_stable(seat);
            registry.require_all(&stable)?;
            for card in stable {
                zones.spawn(card, Zone::Stable(seat));
            }
        }

        let state = SessionState::new(config.seat_count, zones, config.recent_event_limit);
        let mut session = Self {
            name: ruleset.name().to_string(),
            registry,
            resolver: EffectResolver::new(ruleset.handlers()),
            config,
            state,
            listeners: Vec::new(),
        };

        session.with_ctx(rng, |resolver, ctx| {
            let hand = ctx.config.starting_hand;
            for seat in SeatId::all(ctx.config.seat_count) {
                ctx.draw(seat, hand);
            }
            TurnController::begin_turn(resolver, ctx, SeatId(0));
        });
        session.check_winner();
        session.state.events.take_fresh();

        info!(
            "{} session started: {} seats, {} cards",
            session.name,
            session.config.seat_count,
            session.state.zones.total()
        );
        Ok(session)
    }

    /// Rebuild a session from `checkpoint` bytes.
    pub fn restore(ruleset: &dyn Ruleset, bytes: &[u8]) -> Result<Self, CheckpointError> {
        let config = ruleset.config();
        config.validate()?;
        let state: SessionState = bincode::deserialize(bytes)?;
        if state.seats.seat_count() != config.seat_count {
            return Err(ConfigError::SeatCount(state.seats.seat_count()).into());
        }
        Ok(Self {
            name: ruleset.name().to_string(),
            registry: ruleset.registry(),
            resolver: EffectResolver::new(ruleset.handlers()),
            config,
            state,
            listeners: Vec::new(),
        })
    }

    /// Encode the whole session state.
    pub fn checkpoint(&self) -> Result<Vec<u8>, CheckpointError> {
        Ok(bincode::serialize(&self.state)?)
    }

    /// Register a callback for every future event.
    pub fn subscribe(&mut self, listener: impl FnMut(&SessionEvent) + Send + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Apply one inbound action.
    pub fn submit(&mut self, message: &ActionMessage, rng: &mut GameRng) -> Outcome {
        let seat = message.actor_seat;
        let action = message.action;
        let turn = self.state.turn.number;

        match self.apply(seat, action, rng) {
            Ok(()) => {
                let sequence = self.state.sequence;
                self.state.history.push_back(ActionRecord {
                    seat,
                    action,
                    turn,
                    sequence,
                });
                self.state.sequence += 1;
                self.check_winner();
                self.flush();
                Outcome::Applied
            }
            Err(rejection) => {
                debug!("{} {:?} rejected: {}", seat, action, rejection);
                Outcome::Rejected(rejection)
            }
        }
    }

    /// Whether `seat` may take `action` right now. `submit` applies exactly
    /// the actions this accepts.
    pub fn check(&self, seat: SeatId, action: &Action) -> Result<(), Rejection> {
        self.check_actor(seat)?;
        match *action {
            Action::PlayCard { index } => self.check_play(seat, index).map(drop),
            Action::PromptPickPlayer { seat: target } => {
                self.check_selection(seat, Selection::Player(target)).map(drop)
            }
            Action::PromptPickCard { seat: owner, index } => self
                .check_selection(seat, Selection::Card { seat: owner, index })
                .map(drop),
            Action::PromptCancel => self.check_prompt(seat).map(drop),
            Action::ReactionPass => self.check_pass(seat),
            Action::ReactionCounter { card_index } => self.check_counter(seat, card_index).map(drop),
            Action::EndTurn => self.check_end_turn(seat),
            Action::Discard { index } => self.check_discard(seat, index).map(drop),
        }
    }

    /// Remove `seat` from play (forfeit or disconnect).
    ///
    /// Cards it borrowed go back to their owners, its Hand and Stable go to
    /// Discard, and it is dropped from any open reaction window. A prompt
    /// it opened is abandoned and a window it opened is negated. If it was
    /// the current seat, the next alive seat begins its turn.
    pub fn eliminate(&mut self, seat: SeatId, rng: &mut GameRng) -> Outcome {
        if let Err(rejection) = self.check_actor(seat) {
            debug!("eliminate {} rejected: {}", seat, rejection);
            return Outcome::Rejected(rejection);
        }
        if let Some(state) = self.state.seats.get_mut(seat) {
            state.alive = false;
        }
        self.state.events.push(SessionEvent::Eliminated { seat });
        info!("{} is eliminated", seat);

        match std::mem::take(&mut self.state.interaction) {
            Interaction::Prompt(prompt) if prompt.actor == seat => {
                self.state.turn.phase = prompt.resume_phase;
            }
            Interaction::Reaction(window) if window.actor == seat => {
                self.state.turn.phase = window.resume_phase;
                self.negate(&window);
            }
            Interaction::Reaction(mut window) => {
                window.drop_seat(seat);
                self.state.interaction = Interaction::Reaction(window);
            }
            other => self.state.interaction = other,
        }

        self.with_ctx(rng, |resolver, ctx| TurnController::return_borrowed(resolver, ctx, seat));
        self.state.borrows.retain(|b| b.owner != seat);
        for zone in [Zone::Hand(seat), Zone::Stable(seat)] {
            for card in self.state.zones.cards(zone).to_vec() {
                if let Err(err) = self.state.zones.move_card(card, zone, Zone::Discard) {
                    warn!("eliminate: {}", err);
                }
            }
        }

        if self.state.interaction.reaction().is_some_and(ReactionWindow::is_closed) {
            self.close_reaction(rng);
        }
        self.check_winner();
        if self.state.turn.seat == seat {
            match (TurnController::next_alive(&self.state.seats, seat), self.state.winner) {
                (Some(next), None) => {
                    self.with_ctx(rng, |resolver, ctx| TurnController::begin_turn(resolver, ctx, next));
                }
                // game over: park the turn on a living seat without starting it
                (Some(next), Some(_)) => self.state.turn.seat = next,
                (None, _) => {}
            }
        }
        self.flush();
        Outcome::Applied
    }

    /// `viewer`'s filtered view of the session.
    #[must_use]
    pub fn snapshot(&self, viewer: SeatId) -> ViewModel {
        SnapshotBuilder::new(self).build(viewer)
    }

    /// `viewer`'s buttons, enabled or not.
    #[must_use]
    pub fn buttons(&self, viewer: SeatId) -> Vec<ButtonSpec> {
        SnapshotBuilder::new(self).buttons(viewer)
    }

    /// Every action `seat` could submit right now.
    #[must_use]
    pub fn legal_actions(&self, seat: SeatId) -> Vec<Action> {
        SnapshotBuilder::new(self)
            .candidates(seat)
            .into_iter()
            .filter(|action| self.check(seat, action).is_ok())
            .collect()
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[must_use]
    pub fn registry(&self) -> &CardRegistry {
        &self.registry
    }

    #[must_use]
    pub fn resolver(&self) -> &EffectResolver {
        &self.resolver
    }

    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Direct state access for hosts and fixtures. Bypasses validation.
    pub fn state_mut(&mut self) -> &mut SessionState {
        &mut self.state
    }

    #[must_use]
    pub fn winner(&self) -> Option<SeatId> {
        self.state.winner
    }

    /// Instances per definition across every zone.
    #[must_use]
    pub fn census(&self) -> BTreeMap<CardId, usize> {
        self.state.zones.census()
    }

    /// Definition of a card instance.
    #[must_use]
    pub fn definition(&self, instance: InstanceId) -> Option<&CardDefinition> {
        self.registry.get(self.state.zones.card_of(instance)?)
    }

    fn with_ctx<R>(
        &mut self,
        rng: &mut GameRng,
        f: impl FnOnce(&EffectResolver, &mut ResolveCtx<'_>) -> R,
    ) -> R {
        let mut ctx = ResolveCtx::new(&mut self.state, &self.registry, &self.config, rng);
        f(&self.resolver, &mut ctx)
    }

    fn apply(&mut self, seat: SeatId, action: Action, rng: &mut GameRng) -> Result<(), Rejection> {
        self.check_actor(seat)?;
        match action {
            Action::PlayCard { index } => self.play_card(seat, index, rng),
            Action::PromptPickPlayer { seat: target } => {
                self.prompt_select(seat, Selection::Player(target), rng)
            }
            Action::PromptPickCard { seat: owner, index } => {
                self.prompt_select(seat, Selection::Card { seat: owner, index }, rng)
            }
            Action::PromptCancel => self.prompt_cancel(seat),
            Action::ReactionPass => self.reaction_pass(seat, rng),
            Action::ReactionCounter { card_index } => self.reaction_counter(seat, card_index, rng),
            Action::EndTurn => self.end_turn(seat, rng),
            Action::Discard { index } => self.discard(seat, index),
        }
    }

    // Checks. Each one is side-effect free and is shared by `check`,
    // `apply` and the snapshot buttons.

    fn check_actor(&self, seat: SeatId) -> Result<(), Rejection> {
        let state = self.state.seats.get(seat).ok_or(Rejection::UnknownSeat)?;
        if self.state.winner.is_some() {
            return Err(Rejection::GameOver);
        }
        if !state.alive {
            return Err(Rejection::SeatEliminated);
        }
        Ok(())
    }

    fn check_turn(&self, seat: SeatId) -> Result<(), Rejection> {
        match self.state.interaction {
            Interaction::Idle => {}
            Interaction::Prompt(_) => return Err(Rejection::PromptOpen),
            Interaction::Reaction(_) => return Err(Rejection::ReactionOpen),
        }
        if self.state.turn.seat != seat {
            return Err(Rejection::OutOfTurn);
        }
        Ok(())
    }

    fn check_play(&self, seat: SeatId, index: usize) -> Result<(InstanceId, CardId, TargetSpec), Rejection> {
        self.check_turn(seat)?;
        match self.state.turn.phase {
            Phase::Action => {}
            Phase::Discard => return Err(Rejection::MustDiscard),
            phase => return Err(Rejection::WrongPhase(phase)),
        }
        if self.state.turn.actions_remaining == 0 {
            return Err(Rejection::NoActionsRemaining);
        }
        let card = self
            .state
            .zones
            .card_at(Zone::Hand(seat), index)
            .ok_or(Rejection::NoSuchCard(index))?;
        let def = self.definition(card).ok_or(Rejection::NotPlayable)?;
        if def.kind.is_counter_class() {
            return Err(Rejection::NotPlayable);
        }
        let spec = TargetSpec::for_definition(def);
        if !Eligibility::new(&self.state, &self.registry, seat, &spec).has_any_target() {
            return Err(Rejection::NoLegalTarget);
        }
        Ok((card, def.id, spec))
    }

    fn check_prompt(&self, seat: SeatId) -> Result<&PromptState, Rejection> {
        match &self.state.interaction {
            Interaction::Prompt(prompt) => {
                prompt.check_cancel(seat)?;
                Ok(prompt)
            }
            Interaction::Reaction(_) => Err(Rejection::ReactionOpen),
            Interaction::Idle => Err(Rejection::NoPrompt),
        }
    }

    /// Advance a copy of the open prompt.
    fn check_selection(
        &self,
        seat: SeatId,
        selection: Selection,
    ) -> Result<(PromptState, PromptProgress), Rejection> {
        let prompt = self.check_prompt(seat)?;
        let def = self.definition(prompt.card).ok_or(Rejection::NotPlayable)?;
        let spec = TargetSpec::for_definition(def);
        let eligibility = Eligibility::new(&self.state, &self.registry, seat, &spec);

        let mut next = prompt.clone();
        let progress = next.advance(seat, selection, &eligibility)?;
        Ok((next, progress))
    }

    fn check_reaction(&self) -> Result<&ReactionWindow, Rejection> {
        match &self.state.interaction {
            Interaction::Reaction(window) => Ok(window),
            Interaction::Prompt(_) => Err(Rejection::PromptOpen),
            Interaction::Idle => Err(Rejection::NoReaction),
        }
    }

    fn check_pass(&self, seat: SeatId) -> Result<(), Rejection> {
        if self.check_reaction()?.is_pending(seat) {
            Ok(())
        } else {
            Err(Rejection::NotPending)
        }
    }

    fn check_counter(&self, seat: SeatId, card_index: usize) -> Result<(InstanceId, CardId, bool), Rejection> {
        self.check_pass(seat)?;
        if SeatPassives::compute(&self.state.zones, &self.registry, seat).block_counters {
            return Err(Rejection::CountersBlocked);
        }
        let card = self
            .state
            .zones
            .card_at(Zone::Hand(seat), card_index)
            .ok_or(Rejection::NoSuchCard(card_index))?;
        let def = self.definition(card).ok_or(Rejection::NotCounter)?;
        if !def.kind.is_counter_class() {
            return Err(Rejection::NotCounter);
        }
        Ok((card, def.id, def.kind == CardKind::AbsoluteCounter))
    }

    fn check_end_turn(&self, seat: SeatId) -> Result<(), Rejection> {
        self.check_turn(seat)?;
        match self.state.turn.phase {
            Phase::Action => Ok(()),
            Phase::Discard => Err(Rejection::MustDiscard),
            phase => Err(Rejection::WrongPhase(phase)),
        }
    }

    fn check_discard(&self, seat: SeatId, index: usize) -> Result<InstanceId, Rejection> {
        self.check_turn(seat)?;
        if self.state.turn.phase != Phase::Discard {
            return Err(Rejection::WrongPhase(self.state.turn.phase));
        }
        self.state
            .zones
            .card_at(Zone::Hand(seat), index)
            .ok_or(Rejection::NoSuchCard(index))
    }

    // Mutations. Each runs its check first and changes nothing on failure.

    fn play_card(&mut self, seat: SeatId, index: usize, rng: &mut GameRng) -> Result<(), Rejection> {
        let (card, card_id, spec) = self.check_play(seat, index)?;
        self.state.turn.actions_remaining -= 1;
        self.state.events.push(SessionEvent::CardPlayed { seat, card: card_id });

        if spec.needs_target() {
            let prompt = PromptState::open(seat, card, spec.steps, self.state.turn.phase);
            self.state.interaction = Interaction::Prompt(prompt);
            self.state.events.push(SessionEvent::PromptOpened { seat, card: card_id });
        } else {
            self.proceed(seat, card, None, rng);
        }
        Ok(())
    }

    fn prompt_select(&mut self, seat: SeatId, selection: Selection, rng: &mut GameRng) -> Result<(), Rejection> {
        let (prompt, progress) = self.check_selection(seat, selection)?;
        match progress {
            PromptProgress::NeedsMore => self.state.interaction = Interaction::Prompt(prompt),
            PromptProgress::Complete(target) => {
                self.state.interaction = Interaction::Idle;
                self.state.turn.phase = prompt.resume_phase;
                self.proceed(seat, prompt.card, Some(target), rng);
            }
        }
        Ok(())
    }

    fn prompt_cancel(&mut self, seat: SeatId) -> Result<(), Rejection> {
        let prompt = self.check_prompt(seat)?.clone();
        self.state.interaction = Interaction::Idle;
        self.state.turn.phase = prompt.resume_phase;
        self.state.turn.actions_remaining = self.state.turn.actions_remaining.saturating_add(1);
        if let Some(card) = self.state.zones.card_of(prompt.card) {
            self.state.events.push(SessionEvent::PromptCancelled { seat, card });
        }
        Ok(())
    }

    /// Targets are settled: open a reaction window, or resolve at once when
    /// the card cannot be interrupted or nobody is left to respond.
    fn proceed(&mut self, seat: SeatId, card: InstanceId, target: Option<Target>, rng: &mut GameRng) {
        let Some(def) = self.definition(card) else {
            warn!("proceed: {} has no definition", card);
            return;
        };
        let card_id = def.id;
        let interruptible = def.interruptible;
        let uncounterable = SeatPassives::compute(&self.state.zones, &self.registry, seat).uncounterable;
        let alive = self.state.alive_seats();
        let responders = alive.iter().filter(|s| **s != seat).count();

        if interruptible && !uncounterable && responders > 0 {
            let window = ReactionWindow::open(seat, card, target, alive, self.state.turn.phase);
            self.state.interaction = Interaction::Reaction(window);
            self.state.events.push(SessionEvent::ReactionOpened {
                seat,
                card: card_id,
                pending: responders,
            });
        } else {
            self.resolve(seat, card, target, rng);
        }
    }

    fn resolve(&mut self, seat: SeatId, card: InstanceId, target: Option<Target>, rng: &mut GameRng) {
        self.with_ctx(rng, |resolver, ctx| {
            resolver.resolve(ctx, seat, card, target);
        });
        self.settle_phase();
    }

    /// Enter or leave the Discard phase based on the current seat's hand.
    fn settle_phase(&mut self) {
        let seat = self.state.turn.seat;
        if !self.state.is_alive(seat) {
            return;
        }
        let limit = TurnController::hand_limit(&self.state, &self.registry, &self.config, seat);
        if self.state.zones.len(Zone::Hand(seat)) > limit {
            self.state.turn.phase = Phase::Discard;
        } else if self.state.turn.phase == Phase::Discard {
            self.state.turn.phase = Phase::Action;
        }
    }

    fn reaction_pass(&mut self, seat: SeatId, rng: &mut GameRng) -> Result<(), Rejection> {
        self.check_pass(seat)?;
        let Interaction::Reaction(window) = &mut self.state.interaction else {
            return Err(Rejection::NoReaction);
        };
        window.pass(seat)?;
        let closed = window.is_closed();

        self.state.events.push(SessionEvent::ReactionPassed { seat });
        if closed {
            self.close_reaction(rng);
        }
        Ok(())
    }

    fn reaction_counter(&mut self, seat: SeatId, card_index: usize, rng: &mut GameRng) -> Result<(), Rejection> {
        let (card, card_id, absolute) = self.check_counter(seat, card_index)?;
        let reopen = self.config.counter_chains.then(|| self.state.alive_seats());
        let Interaction::Reaction(window) = &mut self.state.interaction else {
            return Err(Rejection::NoReaction);
        };
        window.counter(seat, card, absolute, reopen.as_deref())?;
        let closed = window.is_closed();

        if let Err(err) = self.state.zones.move_card(card, Zone::Hand(seat), Zone::Discard) {
            warn!("counter: {}", err);
        }
        self.state.events.push(SessionEvent::Countered {
            seat,
            card: card_id,
            absolute,
        });
        if closed {
            self.close_reaction(rng);
        }
        Ok(())
    }

    fn close_reaction(&mut self, rng: &mut GameRng) {
        let window = match std::mem::take(&mut self.state.interaction) {
            Interaction::Reaction(window) => window,
            other => {
                self.state.interaction = other;
                return;
            }
        };
        self.state.turn.phase = window.resume_phase;

        match window.verdict() {
            Verdict::Resolves => self.resolve(window.actor, window.card, window.target, rng),
            Verdict::Negated => {
                self.negate(&window);
                self.settle_phase();
            }
        }
    }

    /// Send a window's source card from its actor's hand to Discard.
    fn negate(&mut self, window: &ReactionWindow) {
        let card_id = self.state.zones.card_of(window.card);
        if let Err(err) = self
            .state
            .zones
            .move_card(window.card, Zone::Hand(window.actor), Zone::Discard)
        {
            warn!("negate: {}", err);
        }
        if let Some(card) = card_id {
            self.state.events.push(SessionEvent::Negated {
                seat: window.actor,
                card,
            });
        }
    }

    fn end_turn(&mut self, seat: SeatId, rng: &mut GameRng) -> Result<(), Rejection> {
        self.check_end_turn(seat)?;
        self.with_ctx(rng, |resolver, ctx| TurnController::end_turn(resolver, ctx));
        Ok(())
    }

    fn discard(&mut self, seat: SeatId, index: usize) -> Result<(), Rejection> {
        let card = self.check_discard(seat, index)?;
        let card_id = self.state.zones.card_of(card);
        if let Err(err) = self.state.zones.move_card(card, Zone::Hand(seat), Zone::Discard) {
            warn!("discard: {}", err);
        }
        if let Some(card) = card_id {
            self.state.events.push(SessionEvent::Discarded { seat, card });
        }
        self.settle_phase();
        Ok(())
    }

    fn check_winner(&mut self) {
        if self.state.winner.is_some() {
            return;
        }
        if let Some(seat) = WinChecker::evaluate(&self.state, &self.registry, &self.config) {
            self.state.winner = Some(seat);
            self.state.events.push(SessionEvent::Won { seat });
            info!("{} wins {}", seat, self.name);
        }
    }

    fn flush(&mut self) {
        let events = self.state.events.take_fresh();
        for event in &events {
            for listener in &mut self.listeners {
                listener(event);
            }
        }
    }
}
