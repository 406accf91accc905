use invaders::game::consts::{GRID_HEIGHT, GRID_WIDTH, MAX_INVADERS, SHIP_START_X};
use invaders::game::{create_invaders, invader_count, Direction};
use invaders::{Command, GameEvent, GameState, Phase};

#[test]
fn first_wave_layout() {
    let wave = create_invaders(1);
    assert_eq!(wave.len(), 12);
    let top: Vec<i32> = wave.iter().filter(|i| i.pos.y == 1).map(|i| i.pos.x).collect();
    let second: Vec<i32> = wave.iter().filter(|i| i.pos.y == 3).map(|i| i.pos.x).collect();
    assert_eq!(top, vec![1, 4, 7, 10, 13, 16, 19, 22]);
    assert_eq!(second, vec![1, 4, 7, 10]);
}

#[test]
fn wave_sizes_cap_at_forty() {
    for wave in 1..20u32 {
        let expected = (8 + wave as usize * 4).min(MAX_INVADERS);
        assert_eq!(invader_count(wave), expected);
        let formation = create_invaders(wave);
        let mut rows: Vec<i32> = formation.iter().map(|i| i.pos.y).collect();
        rows.dedup();
        assert!(rows.len() <= 5);
        for row in rows {
            assert!(formation.iter().filter(|i| i.pos.y == row).count() <= 8);
        }
    }
}

#[test]
fn random_walk_never_leaves_the_grid() {
    let mut state = GameState::new();
    state.start();
    // deterministic zig-zag with long runs against each wall
    let pattern = [Direction::Left; 25]
        .into_iter()
        .chain([Direction::Right; 3])
        .chain([Direction::Right; 40])
        .chain([Direction::Left; 7]);
    for dir in pattern {
        state.move_ship(dir);
        let x = state.ship().pos.x;
        assert!((0..GRID_WIDTH).contains(&x), "ship at {x}");
    }
}

#[test]
fn playing_through_the_command_interface() {
    let mut state = GameState::with_wave_pause(0);
    assert!(state.apply(Command::StartGame));
    assert_eq!(state.ship().pos.x, SHIP_START_X);

    let mut kills = 0;
    let mut over = false;
    for _ in 0..2_000 {
        state.apply(Command::Fire);
        for event in state.tick() {
            match event {
                GameEvent::InvaderDestroyed { .. } => kills += 1,
                GameEvent::GameOver => over = true,
                _ => {}
            }
        }
        if over {
            break;
        }
    }
    // a ship that never moves cannot stop the whole wave
    assert!(over);
    assert!(kills > 0);
    assert_eq!(state.phase(), Phase::GameOver);
    assert_eq!(state.score(), 0);
    assert!(state.invaders().iter().any(|i| i.pos.y >= GRID_HEIGHT - 2));
}
