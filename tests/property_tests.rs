//! Property tests: random legal playouts.
//!
//! Each case deals a seeded dungeon and plays random legal commands until
//! the game ends or the script runs out, checking the session invariants
//! after every step.

use proptest::prelude::*;

use rust_scoundrel::core::{Command, FightMode, GameConfig, Outcome, RuleViolation};
use rust_scoundrel::rules::Report;
use rust_scoundrel::session::Session;

fn dealt(seed: u64, easy_mode: bool) -> Session {
    let config = GameConfig::default().with_seed(seed).with_easy_mode(easy_mode);
    Session::with_config(config).unwrap()
}

fn zone_total(session: &Session) -> usize {
    let dungeon = session.state().dungeon();
    dungeon.deck().len() + dungeon.room().len() + dungeon.discard().len()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Cards are never created or lost.
    #[test]
    fn conservation(seed in any::<u64>(), easy in any::<bool>(), script in prop::collection::vec(any::<usize>(), 0..120)) {
        let mut session = dealt(seed, easy);
        let population = session.state().dungeon().population();
        prop_assert_eq!(population, if easy { 52 } else { 44 });

        for pick in script {
            let legal = session.legal_commands();
            if legal.is_empty() {
                break;
            }
            session.apply(legal[pick % legal.len()]).unwrap();
            prop_assert_eq!(zone_total(&session), population);
        }
    }

    /// Every listed command is accepted, and health only moves the right way.
    #[test]
    fn legal_commands_succeed_and_health_bounded(seed in any::<u64>(), script in prop::collection::vec(any::<usize>(), 0..120)) {
        let mut session = dealt(seed, false);

        for pick in script {
            let legal = session.legal_commands();
            if legal.is_empty() {
                break;
            }
            let command = legal[pick % legal.len()];
            let before = session.snapshot().health;

            let result = session.apply(command);
            prop_assert!(result.is_ok(), "{} rejected: {:?}", command, result);

            let after = session.snapshot().health;
            prop_assert!(after <= session.state().max_health());
            match command {
                Command::Drink(_) => prop_assert!(after >= before),
                Command::Fight { .. } => prop_assert!(after <= before),
                _ => prop_assert_eq!(after, before),
            }
        }
    }

    /// Weapon kills overwrite durability with a strictly smaller value.
    #[test]
    fn durability_monotonic(seed in any::<u64>(), script in prop::collection::vec(any::<usize>(), 0..120)) {
        let mut session = dealt(seed, false);

        for pick in script {
            let legal = session.legal_commands();
            if legal.is_empty() {
                break;
            }
            let command = legal[pick % legal.len()];
            let prior = session.state().weapon().map(|w| w.durability);

            let report = session.apply(command).unwrap();

            if let Report::Fight(fight) = report {
                if fight.mode == FightMode::WeaponAssisted && fight.slain {
                    let durability = session.state().weapon().map(|w| w.durability);
                    prop_assert_eq!(durability, Some(fight.monster.value));
                    prop_assert!(Some(fight.monster.value) < prior);
                }
            }
        }
    }

    /// A room cleared to one card leads the next room with that card.
    #[test]
    fn carry_over(seed in any::<u64>(), script in prop::collection::vec(any::<usize>(), 0..120)) {
        let mut session = dealt(seed, false);

        for pick in script {
            let legal = session.legal_commands();
            if legal.is_empty() {
                break;
            }
            let command = legal[pick % legal.len()];
            let before = session.snapshot();

            let report = session.apply(command).unwrap();

            let Some(played) = command.card() else { continue };
            let completed = !matches!(report, Report::Fight(f) if !f.slain);
            if before.room.len() == 2 && completed {
                let left = before.room.iter().copied().find(|&c| c != played);
                let after = session.snapshot();
                prop_assert_eq!(after.room.first().copied(), left);
                prop_assert_eq!(after.room_number, before.room_number + 1);
            }
        }
    }

    /// Running succeeds exactly when allowed, and never twice in a row.
    #[test]
    fn run_legality(seed in any::<u64>(), script in prop::collection::vec(any::<usize>(), 0..120)) {
        let mut session = dealt(seed, false);

        for pick in script {
            let can_run = session.snapshot().can_run;
            prop_assert_eq!(session.legal_commands().contains(&Command::Run), can_run);

            if !can_run {
                let before = session.snapshot();
                let expected = if session.is_over() {
                    RuleViolation::GameAlreadyOver
                } else {
                    RuleViolation::CannotRunNow
                };
                prop_assert_eq!(session.run(), Err(expected));
                prop_assert_eq!(session.snapshot(), before);
            }

            let legal = session.legal_commands();
            if legal.is_empty() {
                break;
            }
            let command = legal[pick % legal.len()];
            session.apply(command).unwrap();
            if command != Command::Run {
                continue;
            }
            prop_assert!(!session.snapshot().can_run);
        }
    }

    /// The game is won exactly when no monsters remain.
    #[test]
    fn win_timing(seed in any::<u64>(), script in prop::collection::vec(any::<usize>(), 0..200)) {
        let mut session = dealt(seed, true);

        for pick in script {
            let legal = session.legal_commands();
            if legal.is_empty() {
                break;
            }
            session.apply(legal[pick % legal.len()]).unwrap();

            let snapshot = session.snapshot();
            prop_assert_eq!(snapshot.outcome == Outcome::Won, snapshot.remaining_monsters == 0);
            if snapshot.outcome == Outcome::Lost {
                prop_assert_eq!(snapshot.health, 0);
            }
        }
    }
}
