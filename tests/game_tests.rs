use battleship3d::{
    Board, BoardBuilder, Coord, FireError, GameConfig, GameState, GameStatus, Orientation, Player,
    ShotResult, VesselId, VesselKind, WinCondition,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

/// One Submarine across (0, 0..3) on the deep sea layer and the General at
/// (4, 4) at sea level. Ids: Submarine #1, General #2.
fn small_board() -> Board {
    let config = GameConfig::new(5, 5)
        .with_count(VesselKind::Submarine, 1)
        .with_count(VesselKind::Destroyer, 0)
        .with_count(VesselKind::Jet, 0);
    let mut builder = BoardBuilder::new(config).unwrap();
    builder
        .place(VesselKind::Submarine, Coord::new(0, 0, 0), Orientation::Unrotated)
        .unwrap();
    builder
        .place(VesselKind::General, Coord::new(4, 4, 1), Orientation::Unrotated)
        .unwrap();
    builder.finish().unwrap()
}

fn small_game(win_condition: WinCondition) -> GameState {
    GameState::from_boards(small_board(), small_board(), win_condition)
}

const SUB: ShotResult = ShotResult::Hit {
    id: VesselId(1),
    kind: VesselKind::Submarine,
};

#[test]
fn test_player_one_starts_and_turns_alternate() {
    let mut game = small_game(WinCondition::GeneralDestroyed);
    assert_eq!(game.status(), GameStatus::AwaitingFire(Player::One));

    let report = game.fire(2, 2, 2).unwrap();
    assert_eq!(report.shooter, Player::One);
    assert_eq!(report.result, ShotResult::Miss);
    assert_eq!(report.status, GameStatus::AwaitingFire(Player::Two));

    let report = game.fire(0, 0, 0).unwrap();
    assert_eq!(report.shooter, Player::Two);
    assert_eq!(report.result, SUB);
    assert_eq!(game.current_player(), Some(Player::One), "a hit still passes the turn");
    assert_eq!(game.history().len(), 2);
}

#[test]
fn test_shots_land_on_the_opponent_board() {
    let mut game = small_game(WinCondition::GeneralDestroyed);
    game.fire(0, 1, 0).unwrap();
    assert_eq!(game.board(Player::Two).vessel(VesselId(1)).unwrap().hit_count(), 1);
    assert_eq!(game.board(Player::One).vessel(VesselId(1)).unwrap().hit_count(), 0);
    assert!(game.opponent_board(Player::One).already_fired(Coord::new(0, 1, 0)));
}

#[test]
fn test_destroying_a_vessel() {
    let mut game = small_game(WinCondition::GeneralDestroyed);
    for col in 0..3 {
        let result = game.fire(0, col, 0).unwrap().result;
        if col < 2 {
            assert_eq!(result, SUB);
        } else {
            assert_eq!(
                result,
                ShotResult::Destroyed {
                    id: VesselId(1),
                    kind: VesselKind::Submarine
                }
            );
        }
        // player two wastes a turn
        game.fire(3, 3, 2).unwrap();
    }
    let sub = game.board(Player::Two).vessel(VesselId(1)).unwrap();
    assert!(sub.is_destroyed());
    assert!(game.board(Player::Two).fleet_destroyed());
    assert!(!game.is_over(), "the General is still alive");
}

#[test]
fn test_repeat_shots_are_idempotent() {
    let mut game = small_game(WinCondition::GeneralDestroyed);
    game.fire(0, 0, 0).unwrap();
    game.fire(1, 1, 1).unwrap();

    let before = game.board(Player::Two).clone();
    let report = game.fire(0, 0, 0).unwrap();
    assert_eq!(
        report.result,
        ShotResult::AlreadyHit {
            id: VesselId(1),
            kind: VesselKind::Submarine
        }
    );
    assert_eq!(game.board(Player::Two), &before);
    assert_eq!(game.current_player(), Some(Player::Two), "repeat shots use the turn");

    let report = game.fire(1, 1, 1).unwrap();
    assert_eq!(report.result, ShotResult::AlreadyMissed);
    assert!(report.result.is_repeat());
    assert_eq!(game.board(Player::One).vessel(VesselId(1)).unwrap().hit_count(), 0);
}

#[test]
fn test_out_of_bounds_does_not_consume_turn() {
    let mut game = small_game(WinCondition::GeneralDestroyed);
    let err = game.fire(5, 0, 0).unwrap_err();
    assert!(matches!(err, FireError::OutOfBounds { .. }));
    assert!(game.fire(0, 0, 3).is_err());
    assert_eq!(game.current_player(), Some(Player::One));
    assert!(game.history().is_empty());
}

#[test]
fn test_general_destroyed_wins() {
    let mut game = small_game(WinCondition::GeneralDestroyed);
    let report = game.fire(4, 4, 1).unwrap();
    assert_eq!(
        report.result,
        ShotResult::Destroyed {
            id: VesselId(2),
            kind: VesselKind::General
        }
    );
    assert!(report.is_winning());
    assert_eq!(game.status(), GameStatus::GameOver { winner: Player::One });
    assert_eq!(game.winner(), Some(Player::One));
    assert_eq!(game.current_player(), None);

    assert_eq!(
        game.fire(0, 0, 0).unwrap_err(),
        FireError::GameOver {
            winner: Player::One
        }
    );
    assert_eq!(game.history().len(), 1);
}

#[test]
fn test_fleet_destruction_under_either_rule() {
    let mut strict = small_game(WinCondition::GeneralDestroyed);
    let mut relaxed = small_game(WinCondition::GeneralOrFleet);
    for game in [&mut strict, &mut relaxed] {
        for col in 0..3 {
            game.fire(0, col, 0).unwrap();
            if !game.is_over() {
                game.fire(2, col, 2).unwrap();
            }
        }
    }
    assert!(!strict.is_over());
    assert_eq!(relaxed.winner(), Some(Player::One));
    assert_eq!(relaxed.win_condition(), WinCondition::GeneralOrFleet);
}

#[test]
fn test_generated_game_ends_on_general_hit() {
    let config = GameConfig::default();
    let mut rng = SmallRng::seed_from_u64(2024);
    let mut game = GameState::new(&config, &mut rng).unwrap();
    assert_ne!(game.board(Player::One), game.board(Player::Two));

    let target = game.board(Player::Two).general().coords().next().unwrap();
    let report = game.fire_at(target).unwrap();
    assert_eq!(report.result.kind(), Some(VesselKind::General));
    assert_eq!(game.winner(), Some(Player::One));
    assert_eq!(game.board(Player::Two).remaining().count(), 5);
}

#[test]
fn test_player_display() {
    assert_eq!(Player::One.to_string(), "Player 1");
    assert_eq!(Player::Two.opponent(), Player::One);
}
