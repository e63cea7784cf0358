//! Rules verification through the public engine API.
//!
//! These tests drive `GameEngine` the way a presentation layer would:
//! room decisions, card indices, snapshots and events.

use scoundrel::cards::{Card, Rank, Suit};
use scoundrel::core::{EngineError, GameConfig, DECK_SIZE};
use scoundrel::events::GameEvent;
use scoundrel::rules::{GameEngine, Outcome, Phase};
use scoundrel::zones::{Deck, SkipOutcome, Zone};
use scoundrel::WeaponUse;

fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

/// Engine whose deck starts with `front`, then the rest of the dungeon.
fn rigged(front: &[Card]) -> GameEngine {
    let mut cards = front.to_vec();
    cards.extend(
        Deck::build()
            .cards()
            .iter()
            .filter(|c| !front.contains(c))
            .copied(),
    );
    GameEngine::with_deck(GameConfig::new().with_seed(99), Deck::from_cards(cards))
}

// =============================================================================
// Deck construction
// =============================================================================

#[test]
fn test_dungeon_deck_contents() {
    let deck = Deck::build();
    assert_eq!(deck.len(), DECK_SIZE);

    for rank in [Rank::Jack, Rank::Queen, Rank::King, Rank::Ace] {
        for suit in [Suit::Hearts, Suit::Diamonds] {
            assert!(!deck.contains(&card(rank, suit)));
        }
        for suit in [Suit::Spades, Suit::Clubs] {
            assert!(deck.contains(&card(rank, suit)));
        }
    }
}

#[test]
fn test_new_game_accounts_for_every_card() {
    for seed in 0..20 {
        let engine = GameEngine::new(GameConfig::new().with_seed(seed));
        let census = engine.census();

        assert!(census.verify().is_ok(), "seed {seed}");
        assert_eq!(census.count(Zone::Room), 4);
        assert_eq!(census.count(Zone::Deck), DECK_SIZE - 4);
    }
}

// =============================================================================
// Scenarios
// =============================================================================

/// Equip a 5, then fight 9, 3 and 10 in turn.
#[test]
fn test_weapon_ladder_walkthrough() {
    let mut engine = rigged(&[
        card(Rank::Five, Suit::Diamonds),
        card(Rank::Nine, Suit::Clubs),
        card(Rank::Three, Suit::Clubs),
        card(Rank::Ten, Suit::Clubs),
    ]);

    let equip = engine.submit_card_choice(0).unwrap();
    assert_eq!(
        equip.event,
        GameEvent::WeaponEquipped {
            weapon: card(Rank::Five, Suit::Diamonds),
            discarded: vec![],
        }
    );

    let nine = engine.submit_card_choice(0).unwrap();
    match nine.event {
        GameEvent::MonsterFought(report) => {
            assert_eq!(report.weapon_use, WeaponUse::Weapon);
            assert_eq!(report.damage, 4);
            assert_eq!(report.health_after, 16);
        }
        other => panic!("expected a fight, got {other:?}"),
    }

    let three = engine.submit_card_choice(0).unwrap();
    assert_eq!(three.event.damage(), 0);

    let state = engine.query_state();
    assert_eq!(state.health, 16);
    assert_eq!(
        state.ladder,
        vec![card(Rank::Nine, Suit::Clubs), card(Rank::Three, Suit::Clubs)]
    );
    assert_eq!(state.ladder_limit(), Some(3));
    assert_eq!(state.weapon_strength(), 5);

    // The 10 carried over into the next room
    assert_eq!(state.current_room[0], card(Rank::Ten, Suit::Clubs));
    assert_eq!(state.phase, Phase::AwaitingRoomDecision);

    let ten = engine.submit_card_choice(0).unwrap();
    match ten.event {
        GameEvent::MonsterFought(report) => {
            assert_eq!(report.weapon_use, WeaponUse::BarehandedLadderBlocked);
            assert_eq!(report.damage, 10);
        }
        other => panic!("expected a fight, got {other:?}"),
    }
    assert_eq!(engine.query_state().health, 6);
}

#[test]
fn test_barehanded_queen() {
    let mut engine = rigged(&[
        card(Rank::Queen, Suit::Spades),
        card(Rank::Two, Suit::Clubs),
        card(Rank::Two, Suit::Spades),
        card(Rank::Three, Suit::Clubs),
    ]);

    let r = engine.submit_card_choice(0).unwrap();
    assert_eq!(r.event.damage(), 12);
    assert_eq!(r.event.discarded(), vec![card(Rank::Queen, Suit::Spades)]);
    assert_eq!(engine.query_state().health, 8);
}

#[test]
fn test_second_potion_is_wasted() {
    let mut engine = rigged(&[
        card(Rank::Five, Suit::Clubs),
        card(Rank::Seven, Suit::Hearts),
        card(Rank::Four, Suit::Hearts),
        card(Rank::Two, Suit::Clubs),
    ]);

    engine.submit_card_choice(0).unwrap();
    assert_eq!(engine.query_state().health, 15);

    let first = engine.submit_card_choice(0).unwrap();
    assert_eq!(first.event.healed(), 5);
    assert_eq!(engine.query_state().health, 20);

    let second = engine.submit_card_choice(0).unwrap();
    match second.event {
        GameEvent::PotionUsed(report) => {
            assert!(!report.consumed);
            assert_eq!(report.healed, 0);
        }
        other => panic!("expected a potion, got {other:?}"),
    }

    let state = engine.query_state();
    assert_eq!(state.health, 20);
    assert!(state.potion_used_this_turn);
    assert!(state.discard_pile.contains(&card(Rank::Four, Suit::Hearts)));
}

/// Only the first potion of a room heals, whatever order the room is played in.
#[test]
fn test_potion_flag_stays_set() {
    let mut engine = rigged(&[
        card(Rank::Two, Suit::Hearts),
        card(Rank::Three, Suit::Hearts),
        card(Rank::Four, Suit::Hearts),
        card(Rank::Ace, Suit::Clubs),
    ]);

    engine.submit_card_choice(3).unwrap();
    assert_eq!(engine.query_state().health, 6);

    assert_eq!(engine.submit_card_choice(0).unwrap().event.healed(), 2);
    assert_eq!(engine.submit_card_choice(0).unwrap().event.healed(), 0);
    assert_eq!(engine.query_state().health, 8);
}

#[test]
fn test_replacing_weapon_discards_weapon_and_ladder() {
    let mut engine = rigged(&[
        card(Rank::Eight, Suit::Diamonds),
        card(Rank::Six, Suit::Clubs),
        card(Rank::Four, Suit::Diamonds),
        card(Rank::Two, Suit::Spades),
    ]);

    engine.submit_card_choice(0).unwrap();
    engine.submit_card_choice(0).unwrap();
    let swap = engine.submit_card_choice(0).unwrap();

    assert_eq!(
        swap.event.discarded(),
        vec![card(Rank::Eight, Suit::Diamonds), card(Rank::Six, Suit::Clubs)]
    );

    let state = engine.query_state();
    assert_eq!(state.weapon, Some(card(Rank::Four, Suit::Diamonds)));
    assert!(state.ladder.is_empty());
    assert_eq!(
        state.discard_pile,
        vec![card(Rank::Eight, Suit::Diamonds), card(Rank::Six, Suit::Clubs)]
    );
    assert!(engine.census().verify().is_ok());
}

// =============================================================================
// Room decisions
// =============================================================================

#[test]
fn test_skip_requeues_room() {
    let mut engine = GameEngine::new(GameConfig::new().with_seed(5));
    let room = engine.query_state().current_room;

    assert_eq!(engine.submit_skip_decision(true), SkipOutcome::Skipped);

    let census = engine.census();
    assert!(census.verify().is_ok());
    assert_eq!(census.count(Zone::Discard), 0);
    for c in &room {
        assert!(matches!(census.zone_of(c), Some(Zone::Deck | Zone::Room)));
    }

    let state = engine.query_state();
    assert!(!state.can_skip);
    assert_eq!(state.health, 20);
    assert_eq!(state.deck_remaining, DECK_SIZE - 4);
}

#[test]
fn test_no_two_skips_in_a_row() {
    let mut engine = GameEngine::new(GameConfig::new().with_seed(5));

    assert_eq!(engine.submit_skip_decision(true), SkipOutcome::Skipped);
    assert_eq!(engine.submit_skip_decision(true), SkipOutcome::Rejected);
    assert!(matches!(engine.phase(), Phase::ResolvingRoom { remaining_actions: 3 }));
}

#[test]
fn test_skip_not_applicable_mid_room() {
    let mut engine = GameEngine::new(GameConfig::new().with_seed(5));

    assert_eq!(engine.submit_skip_decision(false), SkipOutcome::Declined);
    assert_eq!(engine.submit_skip_decision(true), SkipOutcome::NotApplicable);
    assert_eq!(engine.submit_skip_decision(false), SkipOutcome::NotApplicable);
}

#[test]
fn test_carryover_is_the_unchosen_card() {
    let mut engine = rigged(&[
        card(Rank::Five, Suit::Clubs),
        card(Rank::Two, Suit::Hearts),
        card(Rank::Three, Suit::Clubs),
        card(Rank::Four, Suit::Diamonds),
    ]);

    // Weapon, then the 3 under it, then the potion; the 5 stays behind
    for _ in 0..3 {
        let last = engine.room().len() - 1;
        engine.submit_card_choice(last).unwrap();
    }

    let state = engine.query_state();
    assert_eq!(state.health, 20);
    assert_eq!(state.phase, Phase::AwaitingRoomDecision);
    assert_eq!(state.current_room.len(), 4);
    assert_eq!(state.current_room[0], card(Rank::Five, Suit::Clubs));
    assert_eq!(state.deck_remaining, DECK_SIZE - 7);
}

/// A game dealt from a fixed deck replays onto the same deck.
#[test]
fn test_fixed_deck_game_replays() {
    let mut engine = rigged(&[
        card(Rank::Ace, Suit::Spades),
        card(Rank::Two, Suit::Clubs),
        card(Rank::Three, Suit::Clubs),
        card(Rank::Four, Suit::Clubs),
    ]);
    engine.submit_card_choice(0).unwrap();
    assert_eq!(engine.query_state().health, 6);

    let replayed = engine.replay_history().unwrap();
    assert_eq!(replayed.query_state(), engine.query_state());
    assert_eq!(replayed.query_state().health, 6);
}

// =============================================================================
// Errors and terminal states
// =============================================================================

#[test]
fn test_invalid_index_is_recoverable() {
    let mut engine = GameEngine::new(GameConfig::new().with_seed(8));
    let before = engine.query_state();

    let err = engine.submit_card_choice(17).unwrap_err();
    assert!(err.is_retryable());
    assert_eq!(engine.query_state(), before);

    assert!(engine.submit_card_choice(3).is_ok());
}

#[test]
fn test_death_mid_room() {
    let mut engine = rigged(&[
        card(Rank::Ace, Suit::Clubs),
        card(Rank::Nine, Suit::Spades),
        card(Rank::Two, Suit::Hearts),
        card(Rank::Three, Suit::Hearts),
    ]);

    engine.submit_card_choice(0).unwrap();
    let fatal = engine.submit_card_choice(0).unwrap();

    assert_eq!(fatal.phase, Phase::GameOver(Outcome::Loss));
    assert_eq!(engine.query_state().health, -3);
    assert_eq!(engine.query_state().current_room.len(), 2);
    assert_eq!(
        engine.submit_card_choice(0),
        Err(EngineError::GameOver(Outcome::Loss))
    );
}

#[test]
fn test_win_on_short_room() {
    // Only potions: the player can never die and the dungeon runs dry
    let potions: Vec<Card> = Deck::build()
        .cards()
        .iter()
        .filter(|c| c.is_potion())
        .copied()
        .collect();
    assert_eq!(potions.len(), 9);

    let mut engine =
        GameEngine::with_deck(GameConfig::new().with_seed(1), Deck::from_cards(potions));

    // Rooms: 4 from the deck, carryover + 3, then carryover + the last 2
    for _ in 0..6 {
        engine.submit_card_choice(0).unwrap();
    }

    assert_eq!(engine.is_game_over(), Some(Outcome::Win));
    assert_eq!(engine.query_state().current_room.len(), 3);
    assert_eq!(engine.query_state().deck_remaining, 0);
}
