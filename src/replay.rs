//! Input tapes
//!
//! A tape is the field size plus every `TickInput` a session consumed. Since
//! the simulation is deterministic, re-running the tape from a fresh state
//! reproduces the session exactly.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::sim::{Field, FrameSnapshot, GameState, TickInput, tick};

pub const TAPE_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tape {
    pub version: u32,
    pub field: Field,
    pub frames: Vec<TickInput>,
}

impl Tape {
    pub fn new(field: Field) -> Self {
        Self {
            version: TAPE_VERSION,
            field,
            frames: Vec::new(),
        }
    }

    pub fn record(&mut self, input: &TickInput) {
        self.frames.push(input.clone());
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let tape: Tape = serde_json::from_str(&json).map_err(|e| Error::json(path, e))?;
        tape.check_version()?;
        log::info!("Loaded tape with {} frames from {}", tape.len(), path.display());
        Ok(tape)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string(self).map_err(|e| Error::json(path, e))?;
        fs::write(path, json).map_err(|e| Error::io(path, e))?;
        log::info!("Tape saved ({} frames) to {}", self.len(), path.display());
        Ok(())
    }

    fn check_version(&self) -> Result<()> {
        if self.version != TAPE_VERSION {
            return Err(Error::UnsupportedTapeVersion {
                found: self.version,
                expected: TAPE_VERSION,
            });
        }
        Ok(())
    }
}

/// Re-run a tape from a fresh session and return the final snapshot
pub fn replay(tape: &Tape) -> Result<FrameSnapshot> {
    tape.check_version()?;
    let mut state = GameState::new(tape.field);
    let mut last = state.snapshot(Vec::new());
    for input in &tape.frames {
        last = tick(&mut state, input);
    }
    Ok(last)
}

/// Replay and check the session counters against an expected outcome
pub fn verify(tape: &Tape, expected: &FrameSnapshot) -> Result<FrameSnapshot> {
    let actual = replay(tape)?;
    if !actual.same_outcome(expected) {
        log::warn!(
            "Replay diverged after {} frames: expected score {}, got {}",
            tape.len(),
            expected.score,
            actual.score
        );
        return Err(Error::ReplayDiverged {
            expected: Box::new(expected.clone()),
            actual: Box::new(actual),
        });
    }
    Ok(actual)
}
