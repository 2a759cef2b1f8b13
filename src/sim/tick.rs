//! Frame-driven simulation tick
//!
//! Movement is frame-count based (fixed deltas per tick). Only the fire
//! cooldown reads the wall clock, via `TickInput::now_ms`.

use serde::{Deserialize, Serialize};

use super::snapshot::{FrameSnapshot, GameEvent};
use super::state::{Bullet, Explosion, ExplosionColor, GameMode, GameState};
use crate::consts::*;

/// Input sampled at the start of a tick; immutable for its duration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TickInput {
    /// Held actions
    pub move_left: bool,
    pub move_right: bool,
    pub fire: bool,
    /// One-shot events (edge-triggered by the input collaborator)
    pub start: bool,
    pub restart: bool,
    /// Monotonic timestamp (ms) for the fire cooldown
    pub now_ms: f64,
}

/// Reset the session and enter Playing.
///
/// Safe to call repeatedly: each call simply re-initializes the session.
pub fn start_game(state: &mut GameState) {
    state.reset_session();
    state.mode = GameMode::Playing;
    log::info!("Session started at level {}", state.level);
}

/// Full session reset out of GameOver (score, lives, level, fresh wave)
pub fn restart_game(state: &mut GameState) {
    log::info!(
        "Restarting after game over (final score {}, level {})",
        state.score,
        state.level
    );
    start_game(state);
}

/// Advance the game by one tick and return the resulting snapshot
pub fn tick(state: &mut GameState, input: &TickInput) -> FrameSnapshot {
    let mut events = Vec::new();
    state.frame += 1;

    match state.mode {
        GameMode::NotStarted => {
            if input.start {
                start_game(state);
                events.push(GameEvent::SessionStarted);
            }
        }
        GameMode::GameOver => {
            if input.restart {
                restart_game(state);
                events.push(GameEvent::SessionStarted);
            }
        }
        GameMode::LevelTransition => advance_transition(state, &mut events),
        GameMode::Playing => advance_playing(state, input, &mut events),
    }

    state.snapshot(events)
}

fn advance_transition(state: &mut GameState, events: &mut Vec<GameEvent>) {
    state.transition_timer -= TRANSITION_TICK_MS;
    if state.transition_timer > 0.0 {
        return;
    }

    state.level += 1;
    state.transition_timer = 0.0;
    state.level_complete = false;
    state.bullets.clear();
    state.spawn_wave();
    state.mode = GameMode::Playing;
    log::info!("Level {} begins", state.level);
    events.push(GameEvent::LevelStarted { level: state.level });
}

fn advance_playing(state: &mut GameState, input: &TickInput, events: &mut Vec<GameEvent>) {
    let field = state.field;

    // 1. Input: left then right, applied in that order
    if input.move_left {
        state.player.move_left(&field);
    }
    if input.move_right {
        state.player.move_right(&field);
    }
    let cooled_down = state
        .last_fire_ms
        .is_none_or(|last| input.now_ms - last > FIRE_COOLDOWN_MS);
    if input.fire && cooled_down {
        let muzzle = state.player.muzzle();
        state.bullets.push(Bullet::new(muzzle));
        state.last_fire_ms = Some(input.now_ms);
        events.push(GameEvent::Fired);
    }

    // 2. Bullets travel up and leave the pool once off the top
    for bullet in state.bullets.iter_mut().filter(|b| b.active) {
        bullet.advance();
    }
    state.bullets.retain(|b| b.active && !b.off_field());

    // 3. Formation: move everyone, then one shared bounce decision
    for enemy in state.enemies.iter_mut().filter(|e| e.active) {
        enemy.advance();
    }
    let bounce = state
        .enemies
        .iter()
        .any(|e| e.active && e.touches_edge(&field));
    if bounce {
        for enemy in state.enemies.iter_mut().filter(|e| e.active) {
            enemy.bounce();
        }
    }

    // 4. Bullet vs enemy: each bullet scores at most one hit per tick
    let points = POINTS_PER_KILL * state.level as u64;
    let mut spawned = Vec::new();
    for bullet in state.bullets.iter_mut() {
        for enemy in state.enemies.iter_mut() {
            if !bullet.active {
                break;
            }
            if !enemy.active || !bullet.bounds().intersects(&enemy.bounds()) {
                continue;
            }

            bullet.active = false;
            if enemy.take_hit() {
                state.score = state.score.saturating_add(points);
                spawned.push(Explosion::new(
                    enemy.center(),
                    KILL_EXPLOSION_SIZE,
                    ExplosionColor::Kill,
                ));
                events.push(GameEvent::EnemyDestroyed { points });
            } else {
                spawned.push(Explosion::new(
                    bullet.pos,
                    HIT_EXPLOSION_SIZE,
                    ExplosionColor::Spark,
                ));
                events.push(GameEvent::EnemyHit);
            }
        }
    }

    // 5. Enemy vs player, and breaches past the bottom line
    let player_box = state.player.bounds();
    let breach_line = field.breach_line();
    for enemy in state.enemies.iter_mut().filter(|e| e.active) {
        let hit_player = enemy.bounds().intersects(&player_box);
        if !hit_player && enemy.pos.y <= breach_line {
            continue;
        }

        enemy.active = false;
        if !hit_player {
            log::debug!("Enemy breached at x={:.1}", enemy.pos.x);
            events.push(GameEvent::Breach);
            continue;
        }

        state.lives = state.lives.saturating_sub(1);
        spawned.push(Explosion::new(
            player_box.center(),
            PLAYER_EXPLOSION_SIZE,
            ExplosionColor::Player,
        ));
        log::debug!("Player hit, {} lives left", state.lives);
        events.push(GameEvent::PlayerHit {
            lives_left: state.lives,
        });

        if state.lives == 0 && state.mode != GameMode::GameOver {
            state.mode = GameMode::GameOver;
            log::info!("Game over: score {} at level {}", state.score, state.level);
            events.push(GameEvent::GameOver {
                score: state.score,
                level: state.level,
            });
        }
    }
    state.explosions.extend(spawned);

    // 6. Wave clear (a game over on this tick takes precedence)
    if state.mode == GameMode::Playing && state.active_enemy_count() == 0 {
        state.level_complete = true;
        state.transition_timer = LEVEL_TRANSITION_MS;
        state.mode = GameMode::LevelTransition;
        log::info!("Level {} cleared, score {}", state.level, state.score);
        events.push(GameEvent::WaveCleared { level: state.level });
    }

    // 7. Explosions grow and fade
    for explosion in state.explosions.iter_mut() {
        explosion.advance();
    }
    state.explosions.retain(|e| !e.is_spent());

    // Spent bullets never reach the renderer
    state.bullets.retain(|b| b.active);
}
