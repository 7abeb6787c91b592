use glam::IVec2;
use pretty_assertions::assert_eq;

use muncher::game::GameWorld;
use muncher::map::direction::Direction;

mod common;

/// A one-tile-high corridor spanning columns 1 through 3 of row 10.
const SHORT_CORRIDOR: &str = "XPOOXXXXXXXXXXXXXXX";

#[test]
fn test_player_stays_put_without_input() {
    let board = common::walled_board(&[(10, SHORT_CORRIDOR)]);
    let mut game = GameWorld::custom(board, 1).unwrap();

    let spawn = game.snapshot().player.position;
    for _ in 0..5 {
        game.tick();
    }

    assert_eq!(game.snapshot().player.position, spawn);
}

#[test]
fn test_accepted_turn_advances_one_step_plus_move() {
    let board = common::walled_board(&[(10, SHORT_CORRIDOR)]);
    let mut game = GameWorld::custom(board, 1).unwrap();

    game.set_player_direction(Direction::Right);
    game.tick();

    // One step from the validated turn, one step from the tick's move.
    let snapshot = game.snapshot();
    assert_eq!(snapshot.player.position, IVec2::new(48, 320));
    assert_eq!(snapshot.player.facing, Direction::Right);
}

#[test]
fn test_rejected_turn_adopts_previous_heading() {
    let board = common::walled_board(&[(10, SHORT_CORRIDOR)]);
    let mut game = GameWorld::custom(board, 1).unwrap();

    // The wall above makes Up impossible; the turn is rolled back onto the
    // spawn facing (Right), which starts the player moving right.
    game.set_player_direction(Direction::Up);
    game.tick();

    let snapshot = game.snapshot();
    assert_eq!(snapshot.player.facing, Direction::Right);
    assert_eq!(snapshot.player.position, IVec2::new(40, 320));
}

#[test]
fn test_blocked_player_pins_against_wall() {
    let board = common::walled_board(&[(10, SHORT_CORRIDOR)]);
    let mut game = GameWorld::custom(board, 1).unwrap();

    game.set_player_direction(Direction::Right);
    for _ in 0..20 {
        game.tick();
        common::assert_no_wall_overlap(&game.snapshot());
    }

    // The corridor ends at column 4; the player parks flush against it and
    // keeps facing right rather than being redirected.
    let snapshot = game.snapshot();
    assert_eq!(snapshot.player.position, IVec2::new(96, 320));
    assert_eq!(snapshot.player.facing, Direction::Right);
}

#[test]
fn test_adversary_never_clips_walls_in_shared_corridor() {
    // An adversary two tiles from the player on an open corridor.
    let board = common::walled_board(&[(10, "XPOrOOOOOOOOOOOOOOX")]);
    let mut game = GameWorld::custom(board, 42).unwrap();

    for _ in 0..200 {
        game.tick();
        common::assert_no_wall_overlap(&game.snapshot());
    }
}

#[test]
fn test_no_clip_on_builtin_board() {
    let mut game = GameWorld::with_seed(7).unwrap();

    let mut lives = game.snapshot().lives;
    for _ in 0..400 {
        game.tick();
        let snapshot = game.snapshot();
        common::assert_no_wall_overlap(&snapshot);

        // The player never moves, so the score can only stay at zero and
        // lives can only count down.
        assert_eq!(snapshot.score, 0);
        assert!(snapshot.lives <= lives);
        lives = snapshot.lives;
    }
}

#[test]
fn test_no_clip_in_open_room_with_input() {
    let board = common::walled_board(&[
        (9, "XOOOOOOOOrOOOOOOOOX"),
        (10, "XOOOOOOOOOOOOOOOOOX"),
        (11, "XOOOOPOOOOOOOOOOOOX"),
    ]);
    let mut game = GameWorld::custom(board, 9).unwrap();

    let inputs = [Direction::Up, Direction::Left, Direction::Down, Direction::Right];
    for tick in 0..300 {
        if tick % 10 == 0 {
            game.set_player_direction(inputs[(tick / 10) % inputs.len()]);
        }
        game.tick();
        common::assert_no_wall_overlap(&game.snapshot());
    }
}
