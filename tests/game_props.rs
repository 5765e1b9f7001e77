use battleship3d::{Board, Coord, GameConfig, GameState, Player, ShotResult, WinCondition};
use proptest::prelude::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};

fn random_game(seed: u64, win_condition: WinCondition) -> (GameState, SmallRng) {
    let mut rng = SmallRng::seed_from_u64(seed);
    let config = GameConfig::new(6, 6).with_win_condition(win_condition);
    let game = GameState::new(&config, &mut rng).unwrap();
    (game, rng)
}

fn random_target(rng: &mut SmallRng, board: &Board) -> Coord {
    let dims = board.dimensions();
    Coord::new(
        rng.random_range(0..dims.rows),
        rng.random_range(0..dims.cols),
        rng.random_range(0..dims.layers),
    )
}

fn check_damage(board: &Board) -> Result<(), TestCaseError> {
    for vessel in board.vessels() {
        prop_assert!(vessel.hit_count() <= vessel.footprint());
        prop_assert_eq!(vessel.is_destroyed(), vessel.hit_count() == vessel.footprint());
        let marked = vessel.coords().filter(|&c| vessel.is_hit_at(c)).count();
        prop_assert_eq!(marked, vessel.hit_count());
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn damage_never_exceeds_footprint(seed in any::<u64>(), shots in 0usize..200) {
        let (mut game, mut rng) = random_game(seed, WinCondition::GeneralOrFleet);
        for _ in 0..shots {
            let Some(player) = game.current_player() else { break };
            let target = random_target(&mut rng, game.opponent_board(player));
            let report = game.fire_at(target).unwrap();
            prop_assert_eq!(report.shooter, player);
            if !report.is_winning() {
                prop_assert_eq!(game.current_player(), Some(player.opponent()));
            }
        }
        check_damage(game.board(Player::One))?;
        check_damage(game.board(Player::Two))?;
    }

    #[test]
    fn repeat_fire_adds_at_most_one_hit(seed in any::<u64>(), repeats in 1usize..5) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = Board::generate(&GameConfig::default(), &mut rng).unwrap();
        let vessel = board.vessels().nth(rng.random_range(0..6)).unwrap();
        let (id, target) = (vessel.id(), vessel.coords().next().unwrap());

        let first = board.fire_at(target).unwrap();
        prop_assert!(first.is_fresh_hit());
        let after_first = board.vessel(id).unwrap().hit_count();
        prop_assert_eq!(after_first, 1);
        for _ in 0..repeats {
            let again = board.fire_at(target).unwrap();
            let is_repeat_hit = matches!(again, ShotResult::AlreadyHit { .. });
            prop_assert!(is_repeat_hit);
            prop_assert_eq!(board.vessel(id).unwrap().hit_count(), after_first);
        }
    }

    #[test]
    fn general_hit_always_wins(seed in any::<u64>(), warmup in 0usize..40) {
        let (mut game, mut rng) = random_game(seed, WinCondition::GeneralDestroyed);
        for _ in 0..warmup {
            let Some(player) = game.current_player() else { break };
            let target = random_target(&mut rng, game.opponent_board(player));
            game.fire_at(target).unwrap();
        }
        if let Some(shooter) = game.current_player() {
            let general = game.opponent_board(shooter).general().coords().next().unwrap();
            game.fire_at(general).unwrap();
            prop_assert_eq!(game.winner(), Some(shooter));
        } else {
            // a random shot already found a General
            prop_assert!(game.winner().is_some());
        }
    }
}
