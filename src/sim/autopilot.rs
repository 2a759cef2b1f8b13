//! Attract-mode controller
//!
//! Plays the game from the read-only view alone, so a headless run is still a
//! pure function of the starting state and the clock.

use super::state::{Enemy, FrameView, GameMode};
use super::tick::TickInput;
use crate::consts::{BULLET_SPEED, PLAYER_SPEED};

/// Produce the input an idle demo player would hold this tick
pub fn autopilot_input(view: &FrameView<'_>, now_ms: f64) -> TickInput {
    let mut input = TickInput {
        now_ms,
        ..Default::default()
    };

    match view.mode {
        GameMode::NotStarted => input.start = true,
        GameMode::GameOver => input.restart = true,
        GameMode::LevelTransition => {}
        GameMode::Playing => {
            // Chase the most advanced enemy; ties go to the earliest in the pool
            let target = view
                .enemies
                .iter()
                .filter(|e| e.active)
                .fold(None, |best: Option<&Enemy>, e| match best {
                    Some(b) if b.pos.y >= e.pos.y => Some(b),
                    _ => Some(e),
                });

            if let Some(enemy) = target {
                // Lead the target by its drift while the bullet climbs
                let climb = (view.player.muzzle().y - enemy.center().y).max(0.0);
                let lead = enemy.speed * enemy.direction * climb / BULLET_SPEED;
                let offset = enemy.center().x + lead - view.player.center().x;
                if offset < -PLAYER_SPEED / 2.0 {
                    input.move_left = true;
                } else if offset > PLAYER_SPEED / 2.0 {
                    input.move_right = true;
                }
                input.fire = true;
            }
        }
    }

    input
}
