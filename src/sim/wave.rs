//! Wave generation
//!
//! A formation is a pure function of the level number: no RNG, no state.
//! Regression tests can re-derive any wave from its level alone.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{EnemyKind, Field};
use crate::consts::*;

/// Everything needed to spawn one enemy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnemySpec {
    /// Top-left corner
    pub pos: Vec2,
    pub kind: EnemyKind,
    pub health: u32,
    pub speed: f32,
    pub direction: f32,
}

/// Grid shape for a level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaveLayout {
    pub enemy_count: u32,
    pub rows: u32,
    pub cols: u32,
}

impl WaveLayout {
    pub fn for_level(level: u32) -> Self {
        let level = level.max(1);
        // 4 + floor(level * 1.5), saturating at the top of the range
        let enemy_count = level.saturating_add(level / 2).saturating_add(4);
        let rows = (2 + level / 3).min(MAX_FORMATION_ROWS);
        let cols = enemy_count.div_ceil(rows);
        Self {
            enemy_count,
            rows,
            cols,
        }
    }

    /// Width spanned by the formation from the first column's left edge to
    /// the last column's right edge
    pub fn span(&self) -> f32 {
        (self.cols - 1) as f32 * FORMATION_SPACING_X + ENEMY_WIDTH
    }
}

pub fn enemy_health(level: u32) -> u32 {
    1 + level / 4
}

pub fn enemy_speed(level: u32) -> f32 {
    1.0 + level as f32 * 0.15
}

/// Generate the formation for `level` (levels below 1 are treated as 1).
///
/// Row-major, horizontally centered, truncated once `enemy_count` specs have
/// been emitted so the last row may be partial.
pub fn generate_wave(level: u32, field: &Field) -> Vec<EnemySpec> {
    let level = level.max(1);
    let layout = WaveLayout::for_level(level);
    let start_x = (field.width - layout.span()) / 2.0;
    let health = enemy_health(level);
    let speed = enemy_speed(level);

    log::info!(
        "Level {} wave: {} enemies in {}x{} grid (hp {}, speed {:.2})",
        level,
        layout.enemy_count,
        layout.rows,
        layout.cols,
        health,
        speed
    );

    (0..layout.rows)
        .flat_map(|row| (0..layout.cols).map(move |col| (row, col)))
        .take(layout.enemy_count as usize)
        .map(|(row, col)| EnemySpec {
            pos: Vec2::new(
                start_x + col as f32 * FORMATION_SPACING_X,
                FORMATION_TOP + row as f32 * FORMATION_SPACING_Y,
            ),
            kind: EnemyKind::for_row(row),
            health,
            speed,
            direction: 1.0,
        })
        .collect()
}
