//! Star Barrage - a wave-based arcade shooter simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, waves, game modes)
//! - `platform`: Clock and input collaborators for the frame driver
//! - `driver`: One tick per host frame, with teardown and tape recording
//! - `replay`: Input tapes for deterministic re-execution
//! - `settings`: Runner configuration

pub mod driver;
pub mod error;
pub mod platform;
pub mod replay;
pub mod settings;
pub mod sim;

pub use driver::FrameDriver;
pub use error::{Error, Result};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions
    pub const FIELD_WIDTH: f32 = 600.0;
    pub const FIELD_HEIGHT: f32 = 700.0;
    /// Distance kept between the player/formation and the side walls
    pub const EDGE_MARGIN: f32 = 10.0;

    /// Player ship
    pub const PLAYER_WIDTH: f32 = 50.0;
    pub const PLAYER_HEIGHT: f32 = 30.0;
    /// Player top edge sits this far above the bottom of the field
    pub const PLAYER_BOTTOM_OFFSET: f32 = 80.0;
    /// Horizontal movement per tick while a move action is held
    pub const PLAYER_SPEED: f32 = 8.0;
    pub const STARTING_LIVES: u32 = 3;

    /// Player bullets
    pub const BULLET_WIDTH: f32 = 4.0;
    pub const BULLET_HEIGHT: f32 = 15.0;
    /// Upward travel per tick
    pub const BULLET_SPEED: f32 = 12.0;
    /// Minimum wall-clock gap between shots (ms)
    pub const FIRE_COOLDOWN_MS: f64 = 150.0;

    /// Enemies
    pub const ENEMY_WIDTH: f32 = 40.0;
    pub const ENEMY_HEIGHT: f32 = 30.0;
    /// Formation drop on a synchronized edge bounce
    pub const ENEMY_DROP: f32 = 20.0;
    pub const HIT_FLASH_DECAY: f32 = 0.1;
    /// Enemies below `FIELD_HEIGHT - BREACH_MARGIN` have breached
    pub const BREACH_MARGIN: f32 = 100.0;

    /// Formation grid
    pub const FORMATION_SPACING_X: f32 = 60.0;
    pub const FORMATION_SPACING_Y: f32 = 50.0;
    pub const FORMATION_TOP: f32 = 60.0;
    pub const MAX_FORMATION_ROWS: u32 = 4;

    /// Scoring
    pub const POINTS_PER_KILL: u64 = 100;

    /// Explosion sizes (max radius) and per-tick animation
    pub const KILL_EXPLOSION_SIZE: f32 = 35.0;
    pub const HIT_EXPLOSION_SIZE: f32 = 15.0;
    pub const PLAYER_EXPLOSION_SIZE: f32 = 50.0;
    pub const EXPLOSION_GROWTH: f32 = 2.0;
    pub const EXPLOSION_FADE: f32 = 0.04;

    /// Level transition countdown (ms) and its fixed per-tick decrement
    pub const LEVEL_TRANSITION_MS: f32 = 2000.0;
    pub const TRANSITION_TICK_MS: f32 = 16.0;
}
