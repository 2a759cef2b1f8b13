//! Game state and core simulation types
//!
//! The whole session lives in one owned `GameState`; only the tick mutates it.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use super::snapshot::{FrameSnapshot, GameEvent};
use super::wave::{EnemySpec, generate_wave};
use crate::consts::*;

/// Top-level mode gating which update rules run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameMode {
    /// Title screen, waiting for the start event
    #[default]
    NotStarted,
    /// Active gameplay
    Playing,
    /// Wave cleared, counting down to the next level
    LevelTransition,
    /// Out of lives, waiting for the restart event
    GameOver,
}

/// Playfield dimensions; all clamp and formation math is relative to these
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub width: f32,
    pub height: f32,
}

impl Default for Field {
    fn default() -> Self {
        Self {
            width: FIELD_WIDTH,
            height: FIELD_HEIGHT,
        }
    }
}

impl Field {
    pub fn player_min_x(&self) -> f32 {
        EDGE_MARGIN
    }

    pub fn player_max_x(&self) -> f32 {
        self.width - PLAYER_WIDTH - EDGE_MARGIN
    }

    pub fn enemy_min_x(&self) -> f32 {
        EDGE_MARGIN
    }

    pub fn enemy_max_x(&self) -> f32 {
        self.width - ENEMY_WIDTH - EDGE_MARGIN
    }

    /// Enemies whose y exceeds this line have breached
    pub fn breach_line(&self) -> f32 {
        self.height - BREACH_MARGIN
    }
}

/// The player's ship
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
}

impl Player {
    pub const SIZE: Vec2 = Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT);

    /// Spawn horizontally centered near the bottom of the field
    pub fn new(field: &Field) -> Self {
        Self {
            pos: Vec2::new(
                (field.width - PLAYER_WIDTH) / 2.0,
                field.height - PLAYER_BOTTOM_OFFSET,
            ),
        }
    }

    pub fn move_left(&mut self, field: &Field) {
        self.pos.x = (self.pos.x - PLAYER_SPEED).max(field.player_min_x());
    }

    pub fn move_right(&mut self, field: &Field) {
        self.pos.x = (self.pos.x + PLAYER_SPEED).min(field.player_max_x());
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos, Self::SIZE)
    }

    pub fn center(&self) -> Vec2 {
        self.bounds().center()
    }

    /// Top-left of a bullet centered on the ship's top edge
    pub fn muzzle(&self) -> Vec2 {
        Vec2::new(
            self.pos.x + (PLAYER_WIDTH - BULLET_WIDTH) / 2.0,
            self.pos.y - BULLET_HEIGHT,
        )
    }
}

/// A player projectile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bullet {
    pub pos: Vec2,
    pub active: bool,
}

impl Bullet {
    pub const SIZE: Vec2 = Vec2::new(BULLET_WIDTH, BULLET_HEIGHT);

    pub fn new(pos: Vec2) -> Self {
        Self { pos, active: true }
    }

    pub fn advance(&mut self) {
        self.pos.y -= BULLET_SPEED;
    }

    /// Fully above the top of the field
    pub fn off_field(&self) -> bool {
        self.pos.y < -BULLET_HEIGHT
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos, Self::SIZE)
    }
}

/// Formation row grouping (row index mod 3); cosmetic only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyKind {
    Scout,
    Raider,
    Brute,
}

impl EnemyKind {
    pub fn for_row(row: u32) -> Self {
        match row % 3 {
            0 => EnemyKind::Scout,
            1 => EnemyKind::Raider,
            _ => EnemyKind::Brute,
        }
    }
}

/// An enemy in the current wave
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub pos: Vec2,
    pub kind: EnemyKind,
    pub health: u32,
    /// Horizontal distance per tick
    pub speed: f32,
    /// +1 moving right, -1 moving left
    pub direction: f32,
    /// Visual hit feedback in [0, 1]; not gameplay-affecting
    pub hit_flash: f32,
    pub active: bool,
}

impl Enemy {
    pub const SIZE: Vec2 = Vec2::new(ENEMY_WIDTH, ENEMY_HEIGHT);

    pub fn from_spec(spec: &EnemySpec) -> Self {
        Self {
            pos: spec.pos,
            kind: spec.kind,
            health: spec.health,
            speed: spec.speed,
            direction: spec.direction,
            hit_flash: 0.0,
            active: true,
        }
    }

    /// Horizontal step plus flash decay (clamped at 0)
    pub fn advance(&mut self) {
        self.pos.x += self.speed * self.direction;
        self.hit_flash = (self.hit_flash - HIT_FLASH_DECAY).max(0.0);
    }

    pub fn touches_edge(&self, field: &Field) -> bool {
        self.pos.x <= field.enemy_min_x() || self.pos.x >= field.enemy_max_x()
    }

    pub fn bounce(&mut self) {
        self.direction = -self.direction;
        self.pos.y += ENEMY_DROP;
    }

    /// Apply one bullet hit; returns true when the enemy is destroyed
    pub fn take_hit(&mut self) -> bool {
        self.health = self.health.saturating_sub(1);
        self.hit_flash = 1.0;
        if self.health == 0 {
            self.active = false;
            true
        } else {
            false
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos, Self::SIZE)
    }

    pub fn center(&self) -> Vec2 {
        self.bounds().center()
    }
}

/// Color tag for the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExplosionColor {
    /// Enemy destroyed
    Kill,
    /// Bullet absorbed by an enemy that survived
    Spark,
    /// Player ship hit
    Player,
}

/// A transient expanding, fading burst
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Explosion {
    /// Center point
    pub pos: Vec2,
    pub radius: f32,
    /// Informational cap for the renderer; the sim never clamps to it
    pub max_radius: f32,
    pub alpha: f32,
    pub color: ExplosionColor,
}

impl Explosion {
    pub fn new(pos: Vec2, max_radius: f32, color: ExplosionColor) -> Self {
        Self {
            pos,
            radius: 0.0,
            max_radius,
            alpha: 1.0,
            color,
        }
    }

    pub fn advance(&mut self) {
        self.radius += EXPLOSION_GROWTH;
        self.alpha -= EXPLOSION_FADE;
    }

    pub fn is_spent(&self) -> bool {
        self.alpha <= 0.0
    }
}

/// Read-only per-tick view of the entity pools for rendering
#[derive(Debug, Clone, Copy)]
pub struct FrameView<'a> {
    pub field: &'a Field,
    pub mode: GameMode,
    pub player: &'a Player,
    pub bullets: &'a [Bullet],
    pub enemies: &'a [Enemy],
    pub explosions: &'a [Explosion],
}

/// Complete session state (single writer: the tick)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub field: Field,
    pub mode: GameMode,
    pub score: u64,
    pub lives: u32,
    /// Current level (1-based, never decreases within a session)
    pub level: u32,
    /// Level transition countdown (ms)
    pub transition_timer: f32,
    /// Set when the wave is cleared, cleared when the next level starts
    pub level_complete: bool,
    /// Simulation tick counter
    pub frame: u64,
    pub player: Player,
    pub bullets: Vec<Bullet>,
    pub enemies: Vec<Enemy>,
    pub explosions: Vec<Explosion>,
    /// Wall-clock timestamp of the last shot (ms)
    pub last_fire_ms: Option<f64>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Field::default())
    }
}

impl GameState {
    /// Create a title-screen state with the level 1 formation in place
    pub fn new(field: Field) -> Self {
        let mut state = Self {
            field,
            mode: GameMode::NotStarted,
            score: 0,
            lives: STARTING_LIVES,
            level: 1,
            transition_timer: 0.0,
            level_complete: false,
            frame: 0,
            player: Player::new(&field),
            bullets: Vec::new(),
            enemies: Vec::new(),
            explosions: Vec::new(),
            last_fire_ms: None,
        };
        state.spawn_wave();
        state
    }

    /// Reinitialize score, lives, level and entity pools.
    ///
    /// Leaves `mode` and `frame` alone; calling it repeatedly yields the same
    /// state as calling it once.
    pub fn reset_session(&mut self) {
        self.score = 0;
        self.lives = STARTING_LIVES;
        self.level = 1;
        self.transition_timer = 0.0;
        self.level_complete = false;
        self.player = Player::new(&self.field);
        self.bullets.clear();
        self.explosions.clear();
        self.last_fire_ms = None;
        self.spawn_wave();
    }

    /// Replace the enemy pool with the formation for the current level
    pub fn spawn_wave(&mut self) {
        self.enemies = generate_wave(self.level, &self.field)
            .iter()
            .map(Enemy::from_spec)
            .collect();
    }

    pub fn active_enemy_count(&self) -> usize {
        self.enemies.iter().filter(|e| e.active).count()
    }

    pub fn spawn_explosion(&mut self, pos: Vec2, max_radius: f32, color: ExplosionColor) {
        self.explosions.push(Explosion::new(pos, max_radius, color));
    }

    pub fn view(&self) -> FrameView<'_> {
        FrameView {
            field: &self.field,
            mode: self.mode,
            player: &self.player,
            bullets: &self.bullets,
            enemies: &self.enemies,
            explosions: &self.explosions,
        }
    }

    pub fn snapshot(&self, events: Vec<GameEvent>) -> FrameSnapshot {
        FrameSnapshot {
            frame: self.frame,
            score: self.score,
            lives: self.lives,
            level: self.level,
            mode: self.mode,
            level_just_completed: self.level_complete,
            events,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_defaults() {
        let state = GameState::default();
        assert_eq!(state.mode, GameMode::NotStarted);
        assert_eq!(state.lives, 3);
        assert_eq!(state.level, 1);
        assert_eq!(state.score, 0);
        assert_eq!(state.enemies.len(), 5);
        assert!(state.bullets.is_empty());
    }

    #[test]
    fn test_player_spawns_centered() {
        let player = Player::new(&Field::default());
        assert_eq!(player.pos, Vec2::new(275.0, 620.0));
        assert_eq!(player.center().x, 300.0);
    }

    #[test]
    fn test_muzzle_centered_on_top_edge() {
        let player = Player::new(&Field::default());
        let bullet = Bullet::new(player.muzzle());
        assert_eq!(bullet.bounds().center().x, player.center().x);
        assert_eq!(bullet.bounds().bottom(), player.bounds().top());
    }

    #[test]
    fn test_hit_flash_never_negative() {
        let spec = EnemySpec {
            pos: Vec2::new(100.0, 60.0),
            kind: EnemyKind::Scout,
            health: 1,
            speed: 1.0,
            direction: 1.0,
        };
        let mut enemy = Enemy::from_spec(&spec);
        enemy.hit_flash = 0.05;
        enemy.advance();
        assert_eq!(enemy.hit_flash, 0.0);
        enemy.advance();
        assert_eq!(enemy.hit_flash, 0.0);
    }

    #[test]
    fn test_take_hit_destroys_at_zero() {
        let spec = EnemySpec {
            pos: Vec2::ZERO,
            kind: EnemyKind::Brute,
            health: 2,
            speed: 1.0,
            direction: -1.0,
        };
        let mut enemy = Enemy::from_spec(&spec);
        assert!(!enemy.take_hit());
        assert!(enemy.active);
        assert_eq!(enemy.hit_flash, 1.0);
        assert!(enemy.take_hit());
        assert!(!enemy.active);
        assert_eq!(enemy.health, 0);
    }

    #[test]
    fn test_explosion_fades_out() {
        let mut explosion = Explosion::new(Vec2::ZERO, 35.0, ExplosionColor::Kill);
        let mut ticks = 0;
        while !explosion.is_spent() {
            explosion.advance();
            ticks += 1;
        }
        // 1.0 / 0.04 = 25 ticks, give or take float rounding
        assert!((25..=26).contains(&ticks));
        assert!(explosion.radius > explosion.max_radius);
    }

    #[test]
    fn test_reset_session_restores_defaults() {
        let mut state = GameState::default();
        state.score = 1200;
        state.lives = 1;
        state.level = 4;
        state.level_complete = true;
        state.bullets.push(Bullet::new(Vec2::new(10.0, 10.0)));
        state.last_fire_ms = Some(99.0);
        state.reset_session();
        assert_eq!(state.score, 0);
        assert_eq!(state.lives, 3);
        assert_eq!(state.level, 1);
        assert!(!state.level_complete);
        assert!(state.bullets.is_empty());
        assert!(state.last_fire_ms.is_none());
        assert_eq!(state.enemies.len(), 5);
    }
}
