//! Keyboard-style input tracking
//!
//! Movement and fire are level-triggered (held). Start and restart are
//! edge-triggered: one event per press transition, key repeat ignored, and
//! the event is consumed by the next `sample`.

use serde::{Deserialize, Serialize};

use crate::sim::TickInput;

/// Logical actions the simulation understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    MoveLeft,
    MoveRight,
    Fire,
    Start,
    Restart,
}

#[derive(Debug, Clone, Copy, Default)]
struct EdgeKey {
    down: bool,
    pending: bool,
}

impl EdgeKey {
    fn press(&mut self) {
        if !self.down {
            self.pending = true;
        }
        self.down = true;
    }

    fn release(&mut self) {
        self.down = false;
    }

    fn take(&mut self) -> bool {
        std::mem::take(&mut self.pending)
    }
}

/// Externally maintained input set, sampled once per tick
#[derive(Debug, Clone, Default)]
pub struct InputState {
    move_left: bool,
    move_right: bool,
    fire: bool,
    start: EdgeKey,
    restart: EdgeKey,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, action: Action) {
        match action {
            Action::MoveLeft => self.move_left = true,
            Action::MoveRight => self.move_right = true,
            Action::Fire => self.fire = true,
            Action::Start => self.start.press(),
            Action::Restart => self.restart.press(),
        }
    }

    pub fn release(&mut self, action: Action) {
        match action {
            Action::MoveLeft => self.move_left = false,
            Action::MoveRight => self.move_right = false,
            Action::Fire => self.fire = false,
            Action::Start => self.start.release(),
            Action::Restart => self.restart.release(),
        }
    }

    pub fn is_held(&self, action: Action) -> bool {
        match action {
            Action::MoveLeft => self.move_left,
            Action::MoveRight => self.move_right,
            Action::Fire => self.fire,
            Action::Start => self.start.down,
            Action::Restart => self.restart.down,
        }
    }

    /// Drop every held key and pending event (focus loss)
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Snapshot for one tick, consuming pending one-shot events
    pub fn sample(&mut self, now_ms: f64) -> TickInput {
        TickInput {
            move_left: self.move_left,
            move_right: self.move_right,
            fire: self.fire,
            start: self.start.take(),
            restart: self.restart.take(),
            now_ms,
        }
    }
}
