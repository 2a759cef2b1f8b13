//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed per-tick deltas for movement
//! - Wall-clock time only through `TickInput::now_ms` (fire cooldown)
//! - No randomness; waves are a function of the level
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod snapshot;
pub mod state;
pub mod tick;
pub mod wave;

pub use autopilot::autopilot_input;
pub use collision::{Aabb, intersects};
pub use snapshot::{FrameSnapshot, GameEvent};
pub use state::{
    Bullet, Enemy, EnemyKind, Explosion, ExplosionColor, Field, FrameView, GameMode, GameState,
    Player,
};
pub use tick::{TickInput, restart_game, start_game, tick};
pub use wave::{EnemySpec, WaveLayout, generate_wave};
