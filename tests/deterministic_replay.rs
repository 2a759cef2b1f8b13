use proptest::prelude::*;

use star_barrage::FrameDriver;
use star_barrage::platform::{Action, ManualClock};
use star_barrage::replay::{self, Tape};
use star_barrage::sim::{Field, GameMode, GameState, TickInput, autopilot_input, start_game, tick};

fn session_key(state: &GameState) -> (u64, u32, u32, GameMode, usize, usize) {
    (
        state.score,
        state.lives,
        state.level,
        state.mode,
        state.bullets.len(),
        state.enemies.len(),
    )
}

#[test]
fn driver_recording_replays_to_identical_snapshot() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("tape.json");

    let clock = ManualClock::new(0.0);
    let mut driver = FrameDriver::new(Field::default(), &clock);
    driver.start_recording();

    let mut last = None;
    for _ in 0..2000 {
        let input = autopilot_input(&driver.view(), 0.0);
        last = driver.frame_with(input);
        clock.advance(16.0);
    }
    driver.stop();
    let last = last.expect("driver produced frames");

    let tape = driver.take_tape().expect("tape");
    tape.save(&path).expect("save tape");
    let loaded = Tape::load(&path).expect("load tape");

    let replayed = replay::replay(&loaded).expect("replay");
    assert_eq!(replayed, last);
}

#[test]
fn keyboard_session_survives_replay() {
    let clock = ManualClock::new(0.0);
    let mut driver = FrameDriver::new(Field::default(), &clock);
    driver.start_recording();

    let script: &[(u32, Action, bool)] = &[
        (0, Action::Start, true),
        (1, Action::Start, false),
        (5, Action::Fire, true),
        (10, Action::MoveLeft, true),
        (40, Action::MoveLeft, false),
        (40, Action::MoveRight, true),
        (120, Action::MoveRight, false),
        (300, Action::Fire, false),
    ];

    let mut last = None;
    for frame in 0..400u32 {
        for &(at, action, down) in script {
            if at == frame {
                if down {
                    driver.input_mut().press(action);
                } else {
                    driver.input_mut().release(action);
                }
            }
        }
        last = driver.frame();
        clock.advance(16.7);
    }

    let tape = driver.take_tape().expect("tape");
    let last = last.expect("frames ran");
    assert_ne!(last.mode, GameMode::NotStarted);
    let replayed = replay::verify(&tape, &last).expect("replay matches");
    assert_eq!(replayed.score, last.score);
}

#[test]
fn cadence_changes_movement_but_not_fire_rate() {
    // Same number of ticks, different wall-clock spacing
    let run = |frame_ms: f64| {
        let mut state = GameState::default();
        start_game(&mut state);
        let mut shots = 0;
        for i in 0..20 {
            let input = TickInput {
                move_left: true,
                fire: true,
                now_ms: i as f64 * frame_ms,
                ..Default::default()
            };
            let snapshot = tick(&mut state, &input);
            shots += snapshot
                .events
                .iter()
                .filter(|e| matches!(e, star_barrage::sim::GameEvent::Fired))
                .count();
        }
        (state.player.pos.x, shots)
    };

    let (x_60hz, shots_60hz) = run(1000.0 / 60.0);
    let (x_144hz, shots_144hz) = run(1000.0 / 144.0);
    // Still short of the left clamp, so the distance is purely per tick
    assert_eq!(x_60hz, 275.0 - 20.0 * 8.0);
    assert_eq!(x_60hz, x_144hz);
    assert!(shots_144hz < shots_60hz);
}

proptest! {
    #[test]
    fn reset_twice_equals_reset_once(score in 0u64..100_000, lives in 0u32..4, level in 1u32..30) {
        let mut dirty = GameState::default();
        start_game(&mut dirty);
        dirty.score = score;
        dirty.lives = lives;
        dirty.level = level;
        dirty.mode = GameMode::GameOver;

        let mut once = dirty.clone();
        start_game(&mut once);
        let mut twice = dirty;
        start_game(&mut twice);
        start_game(&mut twice);

        prop_assert_eq!(session_key(&once), session_key(&twice));
        prop_assert_eq!(session_key(&once), (0, 3, 1, GameMode::Playing, 0, 5));
    }
}
