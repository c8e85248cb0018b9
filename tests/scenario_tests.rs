//! Scenario tests for full sessions.
//!
//! These tests drive a `Session` through the public command surface on
//! stacked dungeons, so every room is known in advance.

use rust_scoundrel::cards::{build_population, Card, Composition, Suit};
use rust_scoundrel::core::{
    Command, FightMode, GameConfig, GameState, Outcome, ReasonCode, RuleViolation,
};
use rust_scoundrel::rules::Report;
use rust_scoundrel::session::Session;

/// A full 44-card dungeon with `front` dealt first, in order.
fn stacked(front: &[Card]) -> Vec<Card> {
    let mut cards = front.to_vec();
    cards.extend(
        build_population(false)
            .into_iter()
            .filter(|c| !front.contains(c)),
    );
    cards
}

fn session(front: &[Card]) -> Session {
    let config = GameConfig::default().with_seed(42);
    Session::from_state(GameState::with_deck(config, stacked(front)).unwrap())
}

fn spade(v: u8) -> Card {
    Card::new(Suit::Spade, v)
}

fn club(v: u8) -> Card {
    Card::new(Suit::Club, v)
}

fn diamond(v: u8) -> Card {
    Card::new(Suit::Diamond, v)
}

fn heart(v: u8) -> Card {
    Card::new(Suit::Heart, v)
}

// ============================================================================
// Dealing
// ============================================================================

/// A normal game deals 44 cards and a first room of four.
#[test]
fn test_new_game_normal() {
    let mut session = Session::with_config(GameConfig::default().with_seed(3)).unwrap();
    session.new_game(false).unwrap();

    let snapshot = session.snapshot();
    let mut all: Vec<Card> = snapshot.deck.iter().copied().collect();
    all.extend(snapshot.room.iter().copied());
    let comp = Composition::of(&all);

    assert_eq!(all.len(), 44);
    assert_eq!((comp.monsters, comp.weapons, comp.potions), (26, 9, 9));
    assert_eq!(snapshot.room.len(), 4);
    assert_eq!(snapshot.health, 20);
    assert_eq!(snapshot.outcome, Outcome::Active);
    assert!(snapshot.can_run);
    assert!(snapshot.can_drink_potion);
    assert!(snapshot.weapon.is_none());
}

/// Easy mode adds the diamond and heart faces and aces.
#[test]
fn test_new_game_easy() {
    let mut session = Session::new();
    session.new_game(true).unwrap();

    assert_eq!(session.remaining_cards().len(), 52);
    assert!(session.remaining_cards().contains(&heart(14)));
    assert_eq!(session.snapshot().remaining_monsters, 26);
}

/// New games keep drawing from the same seeded stream.
#[test]
fn test_reseeded_sessions_agree() {
    let mut a = Session::with_config(GameConfig::default().with_seed(11)).unwrap();
    let mut b = Session::with_config(GameConfig::default().with_seed(11)).unwrap();

    a.new_game(false).unwrap();
    b.new_game(false).unwrap();

    assert_eq!(a.snapshot(), b.snapshot());
}

// ============================================================================
// Combat
// ============================================================================

/// Barehanded fight from full health.
#[test]
fn test_barehanded_fight() {
    let mut session = session(&[spade(5), heart(3), diamond(2), club(4)]);

    let report = session.fight(spade(5), FightMode::Barehanded).unwrap();

    let snapshot = session.snapshot();
    assert!(matches!(report, Report::Fight(f) if f.slain && f.damage_taken == 5));
    assert_eq!(snapshot.health, 15);
    assert_eq!(snapshot.remaining_monsters, 25);
    assert!(!snapshot.room.contains(&spade(5)));
    assert!(!snapshot.can_run);
}

/// Equip, fight down the chain, then get refused by a bigger monster.
#[test]
fn test_weapon_chain_refuses_bigger_monster() {
    let mut session = session(&[diamond(8), club(6), club(9), heart(3)]);

    session.equip(diamond(8)).unwrap();
    assert_eq!(session.snapshot().weapon.map(|w| w.durability), Some(15));

    session.fight(club(6), FightMode::WeaponAssisted).unwrap();
    let snapshot = session.snapshot();
    assert_eq!(snapshot.weapon.as_ref().map(|w| w.durability), Some(6));
    assert_eq!(snapshot.weapon_chain(), &[club(6)]);
    assert_eq!(snapshot.health, 20);

    let err = session.fight(club(9), FightMode::WeaponAssisted).unwrap_err();
    assert_eq!(err.code(), ReasonCode::InsufficientDurability);
    assert_eq!(session.snapshot(), snapshot);
}

/// Fighting barehanded is still allowed when the weapon is too worn.
#[test]
fn test_barehanded_with_worn_weapon() {
    let mut session = session(&[diamond(8), club(6), club(9), heart(3)]);
    session.equip(diamond(8)).unwrap();
    session.fight(club(6), FightMode::WeaponAssisted).unwrap();

    session.fight(club(9), FightMode::Barehanded).unwrap();

    let snapshot = session.snapshot();
    assert_eq!(snapshot.health, 11);
    // The weapon is untouched by a barehanded fight.
    assert_eq!(snapshot.weapon.map(|w| w.durability), Some(6));
}

/// A lethal blow loses the game and locks out everything but a new game.
#[test]
fn test_lethal_blow_ends_game() {
    let state = GameState::with_deck(
        GameConfig::default().with_seed(5),
        stacked(&[spade(10), heart(3), diamond(2), club(4)]),
    )
    .unwrap()
    .with_health(3);
    let mut session = Session::from_state(state);

    session.fight(spade(10), FightMode::Barehanded).unwrap();

    let snapshot = session.snapshot();
    assert_eq!(snapshot.health, 0);
    assert_eq!(snapshot.outcome, Outcome::Lost);
    assert!(!snapshot.can_run);
    assert!(session.legal_commands().is_empty());

    for command in [
        Command::Run,
        Command::Drink(heart(3)),
        Command::Equip(diamond(2)),
        Command::Fight {
            card: club(4),
            mode: FightMode::Barehanded,
        },
    ] {
        assert_eq!(session.apply(command), Err(RuleViolation::GameAlreadyOver));
    }

    session.new_game(false).unwrap();
    assert_eq!(session.outcome(), Outcome::Active);
    assert_eq!(session.snapshot().health, 20);
}

/// The killing monster stays in the room and is not counted.
#[test]
fn test_lethal_kill_does_not_complete() {
    let state = GameState::with_deck(
        GameConfig::default(),
        stacked(&[spade(10), heart(3), diamond(2), club(4)]),
    )
    .unwrap()
    .with_health(3);
    let mut session = Session::from_state(state);

    session.fight(spade(10), FightMode::Barehanded).unwrap();

    let snapshot = session.snapshot();
    assert!(snapshot.room.contains(&spade(10)));
    assert_eq!(snapshot.remaining_monsters, 26);
}

// ============================================================================
// Potions
// ============================================================================

/// Only the first potion in a room heals.
#[test]
fn test_second_potion_in_room_wasted() {
    let state = GameState::with_deck(
        GameConfig::default(),
        stacked(&[heart(5), heart(6), spade(2), club(2)]),
    )
    .unwrap()
    .with_health(8);
    let mut session = Session::from_state(state);

    session.drink(heart(5)).unwrap();
    let report = session.drink(heart(6)).unwrap();

    assert!(matches!(report, Report::Drink(p) if p.wasted && p.restored == 0));
    assert_eq!(session.snapshot().health, 13);
    assert!(!session.snapshot().room.contains(&heart(6)));
    assert_eq!(
        session.log().back().map(String::as_str),
        Some("Drank the Six of Hearts, but it had no effect. Potions can only be used once per room.")
    );
}

/// Fleeing deals the next room from the front of the deck.
#[test]
fn test_run_deals_from_front() {
    let mut session = session(&[spade(2), club(2), spade(3), club(3), heart(4), heart(5)]);

    session.run().unwrap();

    // The new room starts with the two hearts.
    let room = session.snapshot().room;
    assert_eq!(&room[..2], &[heart(4), heart(5)]);
    assert!(session.snapshot().can_drink_potion);
}

// ============================================================================
// Rooms
// ============================================================================

/// Clearing a room to one card carries it into the next room.
#[test]
fn test_carry_over() {
    let mut session = session(&[spade(2), spade(3), spade(4), heart(9), club(5), club(7)]);

    session.fight(spade(2), FightMode::Barehanded).unwrap();
    session.fight(spade(3), FightMode::Barehanded).unwrap();
    assert_eq!(session.snapshot().room_number, 1);
    session.fight(spade(4), FightMode::Barehanded).unwrap();

    let snapshot = session.snapshot();
    assert_eq!(snapshot.room_number, 2);
    assert_eq!(snapshot.room.len(), 4);
    assert_eq!(&snapshot.room[..3], &[heart(9), club(5), club(7)]);
    assert!(snapshot.can_run);
    assert!(snapshot.can_drink_potion);
    assert_eq!(snapshot.health, 11);
}

/// Runs are refused twice in a row and after playing a card.
#[test]
fn test_run_legality() {
    let mut session = session(&[spade(2), spade(3), spade(4), spade(5)]);

    session.run().unwrap();
    let err = session.run().unwrap_err();
    assert_eq!(err, RuleViolation::CannotRunNow);
    assert_eq!(
        err.to_string(),
        "You can't run twice in a row or after you have selected a card!"
    );

    let mut session = session_after_play();
    assert_eq!(session.run(), Err(RuleViolation::CannotRunNow));
    assert!(!session.legal_commands().contains(&Command::Run));
}

fn session_after_play() -> Session {
    let mut session = session(&[spade(2), spade(3), spade(4), spade(5)]);
    session.fight(spade(2), FightMode::Barehanded).unwrap();
    session
}

/// Fleeing sends the room to the bottom of the deck in order.
#[test]
fn test_run_sends_room_to_bottom() {
    let front = [spade(2), diamond(3), heart(4), club(5)];
    let mut session = session(&front);

    session.run().unwrap();

    let snapshot = session.snapshot();
    let tail: Vec<Card> = snapshot.deck.iter().skip(snapshot.deck.len() - 4).copied().collect();
    assert_eq!(tail, front.to_vec());
    assert_eq!(snapshot.room_number, 2);
    assert!(!snapshot.can_run);
}

/// Unknown cards are rejected without effect.
#[test]
fn test_card_not_in_room() {
    let mut session = session(&[spade(2), spade(3), spade(4), spade(5)]);
    let before = session.snapshot();

    let err = session.fight(club(14), FightMode::Barehanded).unwrap_err();

    assert_eq!(err.code(), ReasonCode::CardNotInRoom);
    assert_eq!(session.snapshot(), before);
}

// ============================================================================
// Winning
// ============================================================================

/// Killing the last monster wins at once.
#[test]
fn test_win_on_last_monster() {
    let cards = vec![spade(2), heart(5), diamond(4), heart(2), club(3)];
    let mut session = Session::from_state(GameState::with_deck(GameConfig::default(), cards).unwrap());

    session.fight(spade(2), FightMode::Barehanded).unwrap();
    assert_eq!(session.outcome(), Outcome::Active);
    session.drink(heart(5)).unwrap();
    session.equip(diamond(4)).unwrap();
    // Room cleared to ♥2: carried over with ♣3.
    assert_eq!(session.snapshot().room.as_slice(), &[heart(2), club(3)]);

    session.fight(club(3), FightMode::WeaponAssisted).unwrap();

    assert_eq!(session.outcome(), Outcome::Won);
    assert_eq!(session.snapshot().remaining_monsters, 0);
    assert!(!session.snapshot().can_run);
    assert_eq!(
        session.log().back().map(String::as_str),
        Some("You defeated all monsters! You win!")
    );
    assert_eq!(session.run(), Err(RuleViolation::GameAlreadyOver));
}

// ============================================================================
// History
// ============================================================================

/// Successful commands are recorded with sequence and room numbers.
#[test]
fn test_history() {
    let mut session = session(&[spade(2), spade(3), spade(4), spade(5)]);
    session.run().unwrap();
    let _ = session.run();
    let card = session.snapshot().room[0];
    session.apply(session.legal_commands()[0]).unwrap();

    let history: Vec<_> = session
        .history()
        .iter()
        .map(|r| (r.sequence, r.room, r.command))
        .collect();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0], (0, 1, Command::Run));
    assert_eq!(history[1].0, 1);
    assert_eq!(history[1].1, 2);
    assert_eq!(history[1].2.card(), Some(card));
}
