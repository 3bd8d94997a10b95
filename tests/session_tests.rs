//! Session flow tests.
//!
//! These drive `GameSession::submit` the way a host would: one message at
//! a time, from any seat, in any order.

mod common;

use std::sync::{Arc, Mutex};

use common::{act, all_pass, cards_in, give, place, stable_index, Table};
use tabletop_session::core::{Action, ActionMessage, GameRng, Rejection, SeatId, VictoryCondition};
use tabletop_session::games::paddock::{ids, PaddockBuilder};
use tabletop_session::session::{GameSession, Outcome, SessionEvent};
use tabletop_session::turn::Phase;
use tabletop_session::zones::Zone;

fn recorder(session: &mut GameSession) -> Arc<Mutex<Vec<SessionEvent>>> {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    session.subscribe(move |event| sink.lock().unwrap().push(event.clone()));
    seen
}

/// A counter closes the window at once, negates the effect and sends both
/// cards to Discard. The third seat is never asked.
#[test]
fn test_counter_negates_targeted_card() {
    let mut rng = GameRng::new(1);
    let mut session = Table::new(3).start(&mut rng);
    let stampede = give(&mut session, SeatId(0), ids::STAMPEDE);
    let mare = place(&mut session, SeatId(1), ids::MARE);
    let refusal = give(&mut session, SeatId(1), ids::REFUSAL);
    let events = recorder(&mut session);

    assert_eq!(act(&mut session, SeatId(0), Action::PlayCard { index: stampede }, &mut rng), Outcome::Applied);
    assert_eq!(
        act(&mut session, SeatId(0), Action::PromptPickPlayer { seat: SeatId(1) }, &mut rng),
        Outcome::Applied
    );
    let index = stable_index(&session, SeatId(1), mare);
    assert_eq!(
        act(&mut session, SeatId(0), Action::PromptPickCard { seat: SeatId(1), index }, &mut rng),
        Outcome::Applied
    );

    let window = session.state().interaction.reaction().unwrap();
    assert_eq!(window.pending().collect::<Vec<_>>(), vec![SeatId(1), SeatId(2)]);

    assert_eq!(
        act(&mut session, SeatId(1), Action::ReactionCounter { card_index: refusal }, &mut rng),
        Outcome::Applied
    );

    assert!(session.state().interaction.reaction().is_none());
    assert_eq!(session.state().zones.location(mare), Some(Zone::Stable(SeatId(1))));
    let discard = cards_in(&session, Zone::Discard);
    assert!(discard.contains(&ids::STAMPEDE));
    assert!(discard.contains(&ids::REFUSAL));
    assert!(session.state().zones.is_empty(Zone::Hand(SeatId(0))));
    assert!(session.state().zones.is_empty(Zone::Hand(SeatId(1))));

    // seat 2 answers too late
    assert_eq!(
        act(&mut session, SeatId(2), Action::ReactionPass, &mut rng),
        Outcome::Rejected(Rejection::NoReaction)
    );

    let events = events.lock().unwrap();
    assert!(events.contains(&SessionEvent::Negated { seat: SeatId(0), card: ids::STAMPEDE }));
    assert!(!events.iter().any(|e| matches!(e, SessionEvent::ReactionPassed { .. })));
    assert!(!events.iter().any(|e| matches!(e, SessionEvent::Destroyed { .. })));
}

/// When every pending seat passes, the effect resolves.
#[test]
fn test_all_pass_resolves_targeted_card() {
    let mut rng = GameRng::new(2);
    let mut session = Table::new(3).start(&mut rng);
    let stampede = give(&mut session, SeatId(0), ids::STAMPEDE);
    let mare = place(&mut session, SeatId(2), ids::MARE);

    act(&mut session, SeatId(0), Action::PlayCard { index: stampede }, &mut rng);
    act(&mut session, SeatId(0), Action::PromptPickPlayer { seat: SeatId(2) }, &mut rng);
    act(&mut session, SeatId(0), Action::PromptPickCard { seat: SeatId(2), index: 0 }, &mut rng);

    assert_eq!(act(&mut session, SeatId(2), Action::ReactionPass, &mut rng), Outcome::Applied);
    assert_eq!(
        act(&mut session, SeatId(2), Action::ReactionPass, &mut rng),
        Outcome::Rejected(Rejection::NotPending)
    );
    assert!(session.state().interaction.reaction().is_some());
    assert_eq!(act(&mut session, SeatId(1), Action::ReactionPass, &mut rng), Outcome::Applied);

    assert_eq!(session.state().zones.location(mare), Some(Zone::Discard));
    assert_eq!(cards_in(&session, Zone::Discard), vec![ids::STAMPEDE, ids::MARE]);
    assert_eq!(session.state().turn.phase, Phase::Action);
}

/// With counter chains on, an ordinary counter can itself be countered and
/// the effect resolves on an even count.
#[test]
fn test_counter_chain_parity() {
    let mut rng = GameRng::new(3);
    let table = Table::new(3).with_config(|c| c.with_counter_chains(true));
    let mut session = table.start(&mut rng);
    let seer = give(&mut session, SeatId(0), ids::SEER);
    give(&mut session, SeatId(0), ids::REFUSAL);
    give(&mut session, SeatId(1), ids::REFUSAL);

    act(&mut session, SeatId(0), Action::PlayCard { index: seer }, &mut rng);
    assert_eq!(
        act(&mut session, SeatId(1), Action::ReactionCounter { card_index: 0 }, &mut rng),
        Outcome::Applied
    );
    let window = session.state().interaction.reaction().unwrap();
    assert_eq!(window.pending().collect::<Vec<_>>(), vec![SeatId(0), SeatId(2)]);

    // the Seer is still in hand at index 0, the Refusal at 1
    assert_eq!(
        act(&mut session, SeatId(0), Action::ReactionCounter { card_index: 0 }, &mut rng),
        Outcome::Rejected(Rejection::NotCounter)
    );
    assert_eq!(
        act(&mut session, SeatId(0), Action::ReactionCounter { card_index: 1 }, &mut rng),
        Outcome::Applied
    );
    all_pass(&mut session, &mut rng);

    assert!(session.state().interaction.reaction().is_none());
    assert_eq!(cards_in(&session, Zone::Stable(SeatId(0))), vec![ids::SEER]);
    // the Seer's draw ran
    assert_eq!(cards_in(&session, Zone::Hand(SeatId(0))), vec![ids::MARE]);
}

/// An absolute counter negates regardless of what else was played.
#[test]
fn test_absolute_counter_negates() {
    let mut rng = GameRng::new(4);
    let table = Table::new(2).with_config(|c| c.with_counter_chains(true));
    let mut session = table.start(&mut rng);
    let mare = give(&mut session, SeatId(0), ids::MARE);
    give(&mut session, SeatId(1), ids::VETO);

    act(&mut session, SeatId(0), Action::PlayCard { index: mare }, &mut rng);
    assert_eq!(
        act(&mut session, SeatId(1), Action::ReactionCounter { card_index: 0 }, &mut rng),
        Outcome::Applied
    );

    assert!(session.state().interaction.reaction().is_none());
    assert!(session.state().zones.is_empty(Zone::Stable(SeatId(0))));
    assert_eq!(cards_in(&session, Zone::Discard), vec![ids::VETO, ids::MARE]);
}

#[test]
fn test_uninterruptible_and_uncounterable_skip_the_window() {
    let mut rng = GameRng::new(5);
    let table = Table::new(2).with_config(|c| c.with_actions_per_turn(2));
    let mut session = table.start(&mut rng);
    let gallop = give(&mut session, SeatId(0), ids::GALLOP);

    act(&mut session, SeatId(0), Action::PlayCard { index: gallop }, &mut rng);
    assert!(session.state().interaction.reaction().is_none());
    assert_eq!(session.state().zones.len(Zone::Hand(SeatId(0))), 2);

    place(&mut session, SeatId(0), ids::IRON_GATE);
    act(&mut session, SeatId(0), Action::PlayCard { index: 0 }, &mut rng);
    assert!(session.state().interaction.reaction().is_none());
    assert_eq!(cards_in(&session, Zone::Stable(SeatId(0))), vec![ids::IRON_GATE, ids::MARE]);
}

#[test]
fn test_muzzled_seat_cannot_counter() {
    let mut rng = GameRng::new(6);
    let mut session = Table::new(2).start(&mut rng);
    let mare = give(&mut session, SeatId(0), ids::MARE);
    give(&mut session, SeatId(1), ids::REFUSAL);
    place(&mut session, SeatId(1), ids::MUZZLE);

    act(&mut session, SeatId(0), Action::PlayCard { index: mare }, &mut rng);
    assert_eq!(
        act(&mut session, SeatId(1), Action::ReactionCounter { card_index: 0 }, &mut rng),
        Outcome::Rejected(Rejection::CountersBlocked)
    );

    let buttons = session.buttons(SeatId(1));
    let counter = buttons.iter().find(|b| b.id == "reaction_counter:0").unwrap();
    assert!(!counter.enabled);
    assert!(buttons.iter().find(|b| b.id == "reaction_pass").unwrap().enabled);
}

/// Cancelling a prompt refunds the action and leaves the card in hand.
#[test]
fn test_prompt_cancel_refunds_action() {
    let mut rng = GameRng::new(7);
    let mut session = Table::new(2).start(&mut rng);
    let rustle = give(&mut session, SeatId(0), ids::RUSTLE);
    place(&mut session, SeatId(1), ids::MARE);

    act(&mut session, SeatId(0), Action::PlayCard { index: rustle }, &mut rng);
    assert_eq!(session.state().turn.actions_remaining, 0);
    assert!(session.state().interaction.prompt().is_some());
    let view = session.snapshot(SeatId(0));
    assert!(view.your_hand[rustle].held);
    assert!(!view.your_hand[rustle].playable);

    assert_eq!(
        act(&mut session, SeatId(1), Action::PromptCancel, &mut rng),
        Outcome::Rejected(Rejection::NotAuthor)
    );
    assert_eq!(
        act(&mut session, SeatId(1), Action::PromptPickPlayer { seat: SeatId(1) }, &mut rng),
        Outcome::Rejected(Rejection::NotAuthor)
    );
    assert_eq!(
        act(&mut session, SeatId(0), Action::EndTurn, &mut rng),
        Outcome::Rejected(Rejection::PromptOpen)
    );

    assert_eq!(act(&mut session, SeatId(0), Action::PromptCancel, &mut rng), Outcome::Applied);
    assert!(session.state().interaction.prompt().is_none());
    assert_eq!(session.state().turn.actions_remaining, 1);
    assert_eq!(cards_in(&session, Zone::Hand(SeatId(0))), vec![ids::RUSTLE]);
    assert!(!session.snapshot(SeatId(0)).your_hand[rustle].held);
}

#[test]
fn test_card_without_target_is_not_playable() {
    let mut rng = GameRng::new(8);
    let mut session = Table::new(2).start(&mut rng);
    let stampede = give(&mut session, SeatId(0), ids::STAMPEDE);
    let refusal = give(&mut session, SeatId(0), ids::REFUSAL);

    assert_eq!(
        act(&mut session, SeatId(0), Action::PlayCard { index: stampede }, &mut rng),
        Outcome::Rejected(Rejection::NoLegalTarget)
    );
    assert_eq!(
        act(&mut session, SeatId(0), Action::PlayCard { index: refusal }, &mut rng),
        Outcome::Rejected(Rejection::NotPlayable)
    );
    assert_eq!(
        act(&mut session, SeatId(0), Action::PlayCard { index: 9 }, &mut rng),
        Outcome::Rejected(Rejection::NoSuchCard(9))
    );

    let hand = session.snapshot(SeatId(0)).your_hand;
    assert!(!hand[stampede].playable);
    assert!(!hand[refusal].playable);
}

#[test]
fn test_actions_are_limited_per_turn() {
    let mut rng = GameRng::new(9);
    let mut session = Table::new(2).start(&mut rng);
    give(&mut session, SeatId(0), ids::GALLOP);
    give(&mut session, SeatId(0), ids::GALLOP);

    assert_eq!(act(&mut session, SeatId(0), Action::PlayCard { index: 0 }, &mut rng), Outcome::Applied);
    assert_eq!(
        act(&mut session, SeatId(0), Action::PlayCard { index: 0 }, &mut rng),
        Outcome::Rejected(Rejection::NoActionsRemaining)
    );
    assert_eq!(
        act(&mut session, SeatId(1), Action::PlayCard { index: 0 }, &mut rng),
        Outcome::Rejected(Rejection::OutOfTurn)
    );
}

/// Over the hand limit at the start of a turn, only discards are accepted
/// until the hand fits.
#[test]
fn test_discard_phase() {
    let mut rng = GameRng::new(10);
    let table = Table::new(2).with_config(|c| c.with_hand_limit(2));
    let mut session = table.start(&mut rng);
    for _ in 0..4 {
        give(&mut session, SeatId(1), ids::MARE);
    }

    assert_eq!(act(&mut session, SeatId(0), Action::EndTurn, &mut rng), Outcome::Applied);
    assert_eq!(session.state().turn.seat, SeatId(1));
    assert_eq!(session.state().turn.phase, Phase::Discard);

    let buttons = session.buttons(SeatId(1));
    assert!(buttons.iter().filter(|b| b.id.starts_with("discard:")).all(|b| b.enabled));
    assert!(!buttons.iter().find(|b| b.id == "end_turn").unwrap().enabled);

    assert_eq!(
        act(&mut session, SeatId(1), Action::PlayCard { index: 0 }, &mut rng),
        Outcome::Rejected(Rejection::MustDiscard)
    );
    assert_eq!(
        act(&mut session, SeatId(1), Action::EndTurn, &mut rng),
        Outcome::Rejected(Rejection::MustDiscard)
    );

    assert_eq!(act(&mut session, SeatId(1), Action::Discard { index: 0 }, &mut rng), Outcome::Applied);
    assert_eq!(session.state().turn.phase, Phase::Discard);
    assert_eq!(act(&mut session, SeatId(1), Action::Discard { index: 0 }, &mut rng), Outcome::Applied);
    assert_eq!(session.state().turn.phase, Phase::Action);
    assert_eq!(
        act(&mut session, SeatId(1), Action::Discard { index: 0 }, &mut rng),
        Outcome::Rejected(Rejection::WrongPhase(Phase::Action))
    );
    assert_eq!(session.state().zones.len(Zone::Discard), 2);
}

#[test]
fn test_hand_limit_passive_avoids_discard() {
    let mut rng = GameRng::new(11);
    let table = Table::new(2).with_config(|c| c.with_hand_limit(2));
    let mut session = table.start(&mut rng);
    for _ in 0..4 {
        give(&mut session, SeatId(1), ids::MARE);
    }
    place(&mut session, SeatId(1), ids::SADDLEBAGS);

    act(&mut session, SeatId(0), Action::EndTurn, &mut rng);
    assert_eq!(session.state().turn.phase, Phase::Action);
}

/// Hands are private unless a reveal passive sits in the owner's Stable.
#[test]
fn test_hidden_hands_and_reveal() {
    let mut rng = GameRng::new(12);
    let mut session = Table::new(3).start(&mut rng);
    give(&mut session, SeatId(1), ids::MARE);
    give(&mut session, SeatId(1), ids::VETO);
    give(&mut session, SeatId(0), ids::SEER);

    let view = session.snapshot(SeatId(0));
    assert_eq!(view.your_hand.len(), 1);
    assert_eq!(view.your_hand[0].card_id, ids::SEER);
    assert_eq!(view.your_hand[0].name, "Seer");
    assert!(view.revealed_hands.is_empty());
    assert_eq!(view.hand_sizes[&SeatId(1)], 2);

    place(&mut session, SeatId(1), ids::GLASS_STALL);
    let view = session.snapshot(SeatId(0));
    assert_eq!(view.revealed_hands[&SeatId(1)], vec![ids::MARE, ids::VETO]);
    assert_eq!(view.public_stables[&SeatId(1)], vec![ids::GLASS_STALL]);

    // the owner sees their hand as usual
    assert!(session.snapshot(SeatId(1)).revealed_hands.is_empty());

    // blinders do not switch off a downgrade's reveal
    place(&mut session, SeatId(1), ids::BLINDERS);
    assert!(session.snapshot(SeatId(2)).revealed_hands.contains_key(&SeatId(1)));
}

#[test]
fn test_snapshot_json_shape() {
    let mut rng = GameRng::new(13);
    let mut session = Table::new(2).start(&mut rng);
    give(&mut session, SeatId(0), ids::MARE);
    place(&mut session, SeatId(1), ids::FOAL);

    let value = serde_json::to_value(session.snapshot(SeatId(0))).unwrap();

    assert_eq!(value["viewer"], 0);
    assert_eq!(value["phase"], "action");
    assert_eq!(value["currentTurnSeat"], 0);
    assert_eq!(value["turnNumber"], 1);
    assert_eq!(value["yourHand"][0]["name"], "Mare");
    assert_eq!(value["yourHand"][0]["playable"], true);
    assert_eq!(value["yourHand"][0]["held"], false);
    assert_eq!(value["publicStables"]["1"][0], ids::FOAL.raw());
    assert_eq!(value["handSizes"]["0"], 1);
    assert_eq!(value["deckSize"], 20);
    assert!(value["reaction"].is_null());
    assert_eq!(value["actions"][0]["id"], "play_card:0");
    assert_eq!(value["actions"][0]["label"], "Play Mare");
    assert!(value["recentEvents"].as_array().unwrap().len() >= 1);
}

/// A button id sent back over the wire is the action it names.
#[test]
fn test_wire_messages_and_buttons() {
    let mut rng = GameRng::new(14);
    let mut session = Table::new(2).start(&mut rng);
    give(&mut session, SeatId(0), ids::MARE);

    let json = r#"{"actorSeat":0,"actionId":"play_card","payload":{"index":0}}"#;
    let msg: ActionMessage = serde_json::from_str(json).unwrap();
    assert_eq!(session.submit(&msg, &mut rng), Outcome::Applied);

    let pass = session
        .buttons(SeatId(1))
        .into_iter()
        .find(|b| b.enabled)
        .unwrap();
    assert_eq!(pass.label, "Pass");
    let action = Action::from_button_id(&pass.id).unwrap();
    assert_eq!(act(&mut session, SeatId(1), action, &mut rng), Outcome::Applied);
    assert_eq!(cards_in(&session, Zone::Stable(SeatId(0))), vec![ids::MARE]);

    // back on seat 0's turn, seat 1 has nothing to click
    assert!(session.buttons(SeatId(1)).iter().all(|b| !b.enabled));
}

#[test]
fn test_rejections_leave_history_alone() {
    let mut rng = GameRng::new(15);
    let mut session = Table::new(2).start(&mut rng);

    act(&mut session, SeatId(1), Action::EndTurn, &mut rng);
    act(&mut session, SeatId(9), Action::EndTurn, &mut rng);
    assert!(session.state().history.is_empty());

    act(&mut session, SeatId(0), Action::EndTurn, &mut rng);
    let history = &session.state().history;
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].seat, SeatId(0));
    assert_eq!(history[0].turn, 1);
    assert_eq!(history[0].sequence, 0);
}

#[test]
fn test_turns_rotate_past_eliminated_seats() {
    let mut rng = GameRng::new(16);
    let mut session = Table::new(3).start(&mut rng);
    give(&mut session, SeatId(1), ids::MARE);
    place(&mut session, SeatId(1), ids::FOAL);

    assert_eq!(session.eliminate(SeatId(1), &mut rng), Outcome::Applied);
    assert_eq!(session.eliminate(SeatId(1), &mut rng), Outcome::Rejected(Rejection::SeatEliminated));
    assert_eq!(cards_in(&session, Zone::Discard), vec![ids::MARE, ids::FOAL]);

    act(&mut session, SeatId(0), Action::EndTurn, &mut rng);
    assert_eq!(session.state().turn.seat, SeatId(2));
    assert_eq!(
        act(&mut session, SeatId(1), Action::EndTurn, &mut rng),
        Outcome::Rejected(Rejection::SeatEliminated)
    );

    // eliminating the current seat hands the turn on; the last seat wins
    assert_eq!(session.eliminate(SeatId(2), &mut rng), Outcome::Applied);
    assert_eq!(session.winner(), Some(SeatId(0)));
    assert_eq!(session.state().turn.seat, SeatId(0));
    assert_eq!(session.snapshot(SeatId(0)).current_turn_seat, SeatId(0));
    assert_eq!(
        act(&mut session, SeatId(0), Action::EndTurn, &mut rng),
        Outcome::Rejected(Rejection::GameOver)
    );
    assert!(session.legal_actions(SeatId(0)).is_empty());
}

/// A forfeit that ends the game still leaves the turn on a living seat.
#[test]
fn test_forfeit_on_own_turn_moves_turn_to_winner() {
    let mut rng = GameRng::new(26);
    let mut session = Table::new(2).start(&mut rng);
    assert_eq!(session.state().turn.seat, SeatId(0));

    assert_eq!(session.eliminate(SeatId(0), &mut rng), Outcome::Applied);

    let state = session.state();
    assert_eq!(state.winner, Some(SeatId(1)));
    assert!(state.is_alive(state.turn.seat));
    assert_eq!(state.turn.seat, SeatId(1));
    assert_eq!(session.snapshot(SeatId(1)).current_turn_seat, SeatId(1));
}

/// A seat dropping out of an open window can close it.
#[test]
fn test_elimination_closes_reaction_window() {
    let mut rng = GameRng::new(17);
    let mut session = Table::new(3).start(&mut rng);
    let mare = give(&mut session, SeatId(0), ids::MARE);

    act(&mut session, SeatId(0), Action::PlayCard { index: mare }, &mut rng);
    act(&mut session, SeatId(1), Action::ReactionPass, &mut rng);
    session.eliminate(SeatId(2), &mut rng);

    assert!(session.state().interaction.reaction().is_none());
    assert_eq!(cards_in(&session, Zone::Stable(SeatId(0))), vec![ids::MARE]);
    assert_eq!(session.winner(), None);
}

#[test]
fn test_eliminated_actor_abandons_window() {
    let mut rng = GameRng::new(18);
    let mut session = Table::new(3).start(&mut rng);
    let mare = give(&mut session, SeatId(0), ids::MARE);

    act(&mut session, SeatId(0), Action::PlayCard { index: mare }, &mut rng);
    session.eliminate(SeatId(0), &mut rng);

    assert!(session.state().interaction.reaction().is_none());
    assert_eq!(cards_in(&session, Zone::Discard), vec![ids::MARE]);
    assert_eq!(session.state().turn.seat, SeatId(1));
    assert_eq!(
        act(&mut session, SeatId(1), Action::ReactionPass, &mut rng),
        Outcome::Rejected(Rejection::NoReaction)
    );
}

#[test]
fn test_reaching_the_threshold_wins() {
    let mut rng = GameRng::new(19);
    let table = Table::new(2).with_config(|c| c.with_victory(vec![VictoryCondition::UnitThreshold(4)]));
    let mut session = table.start(&mut rng);
    place(&mut session, SeatId(0), ids::FOAL);
    place(&mut session, SeatId(0), ids::TWINS);
    let events = recorder(&mut session);
    let mare = give(&mut session, SeatId(0), ids::MARE);

    act(&mut session, SeatId(0), Action::PlayCard { index: mare }, &mut rng);
    assert_eq!(session.winner(), None);
    all_pass(&mut session, &mut rng);

    // Foal 1 + Twins 2 + Mare 1
    assert_eq!(session.winner(), Some(SeatId(0)));
    assert_eq!(events.lock().unwrap().last(), Some(&SessionEvent::Won { seat: SeatId(0) }));
    assert!(session.snapshot(SeatId(1)).actions.is_empty());
}

#[test]
fn test_listener_sees_events_in_order() {
    let mut rng = GameRng::new(20);
    let mut session = Table::new(2).start(&mut rng);
    let events = recorder(&mut session);

    act(&mut session, SeatId(0), Action::EndTurn, &mut rng);
    act(&mut session, SeatId(1), Action::EndTurn, &mut rng);

    let text: Vec<String> = events.lock().unwrap().iter().map(ToString::to_string).collect();
    assert_eq!(text, vec!["Seat 1 starts turn 2", "Seat 0 starts turn 3"]);
}

#[test]
fn test_paddock_session_starts_dealt() {
    let mut rng = GameRng::new(21);
    let paddock = PaddockBuilder::new().seat_count(4).build().unwrap();
    let session = GameSession::new(&paddock, &mut rng).unwrap();
    let state = session.state();

    for seat in SeatId::all(4) {
        assert_eq!(cards_in(&session, Zone::Stable(seat)), vec![ids::FOAL]);
    }
    // seat 0 also drew for its first turn
    assert_eq!(state.zones.len(Zone::Hand(SeatId(0))), 6);
    assert_eq!(state.zones.len(Zone::Hand(SeatId(3))), 5);
    assert_eq!(state.turn.number, 1);
    assert_eq!(session.name(), "Paddock");
    assert!(state.zones.is_consistent());
}
