//! Per-tick output handed to the HUD, renderer and audio collaborators

use serde::{Deserialize, Serialize};

use super::state::GameMode;

/// Something that happened during a tick, in the order it happened
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Session (re)initialized by a start or restart event
    SessionStarted,
    Fired,
    /// Enemy absorbed a bullet and survived
    EnemyHit,
    EnemyDestroyed { points: u64 },
    /// Enemy crossed the breach line without touching the player
    Breach,
    PlayerHit { lives_left: u32 },
    WaveCleared { level: u32 },
    LevelStarted { level: u32 },
    GameOver { score: u64, level: u32 },
}

/// Immutable summary emitted at the end of every tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub frame: u64,
    pub score: u64,
    pub lives: u32,
    pub level: u32,
    pub mode: GameMode,
    pub level_just_completed: bool,
    pub events: Vec<GameEvent>,
}

impl FrameSnapshot {
    /// Compare the session counters only (events and frame excluded)
    pub fn same_outcome(&self, other: &FrameSnapshot) -> bool {
        self.score == other.score
            && self.lives == other.lives
            && self.level == other.level
            && self.mode == other.mode
    }
}
