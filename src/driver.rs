//! Frame driver
//!
//! Owns the session state and its collaborators. The host calls `frame` once
//! per rendering frame; each call samples input and clock, runs exactly one
//! tick to completion, and hands back the snapshot.

use crate::platform::{Clock, InputState};
use crate::replay::Tape;
use crate::sim::{self, Field, FrameSnapshot, FrameView, GameState, TickInput};

#[derive(Debug)]
pub struct FrameDriver<C: Clock> {
    state: GameState,
    clock: C,
    input: InputState,
    tape: Option<Tape>,
    running: bool,
}

impl<C: Clock> FrameDriver<C> {
    pub fn new(field: Field, clock: C) -> Self {
        log::info!("Frame driver up ({}x{} field)", field.width, field.height);
        Self {
            state: GameState::new(field),
            clock,
            input: InputState::new(),
            tape: None,
            running: true,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn view(&self) -> FrameView<'_> {
        self.state.view()
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Input set maintained by the host's key handlers
    pub fn input_mut(&mut self) -> &mut InputState {
        &mut self.input
    }

    /// Record every sampled input from now on into a fresh tape.
    ///
    /// Call before the first frame; a tape started mid-session will not
    /// replay to the same state.
    pub fn start_recording(&mut self) {
        self.tape = Some(Tape::new(self.state.field));
    }

    pub fn take_tape(&mut self) -> Option<Tape> {
        self.tape.take()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Tear the loop down; later frames are no-ops
    pub fn stop(&mut self) {
        if self.running {
            log::info!("Frame driver stopped after {} ticks", self.state.frame);
        }
        self.running = false;
    }

    /// Start or restart the session directly, bypassing the input set
    pub fn reset(&mut self) {
        sim::start_game(&mut self.state);
    }

    /// Run one tick from the host's input set
    pub fn frame(&mut self) -> Option<FrameSnapshot> {
        if !self.running {
            return None;
        }
        let input = self.input.sample(self.clock.now_ms());
        Some(self.step(input))
    }

    /// Run one tick from an input built by someone else (autopilot, tape)
    pub fn frame_with(&mut self, mut input: TickInput) -> Option<FrameSnapshot> {
        if !self.running {
            return None;
        }
        input.now_ms = self.clock.now_ms();
        Some(self.step(input))
    }

    fn step(&mut self, input: TickInput) -> FrameSnapshot {
        if let Some(tape) = self.tape.as_mut() {
            tape.record(&input);
        }
        sim::tick(&mut self.state, &input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{Action, ManualClock};
    use crate::sim::GameMode;

    #[test]
    fn test_frame_samples_input_and_clock() {
        let clock = ManualClock::new(0.0);
        let mut driver = FrameDriver::new(Field::default(), &clock);

        driver.input_mut().press(Action::Start);
        let snapshot = driver.frame().expect("running");
        assert_eq!(snapshot.mode, GameMode::Playing);

        driver.input_mut().press(Action::Fire);
        clock.advance(16.0);
        driver.frame();
        assert_eq!(driver.state().bullets.len(), 1);
        assert_eq!(driver.state().last_fire_ms, Some(16.0));
    }

    #[test]
    fn test_held_start_does_not_reset_repeatedly() {
        let clock = ManualClock::new(0.0);
        let mut driver = FrameDriver::new(Field::default(), &clock);
        driver.input_mut().press(Action::Start);
        driver.frame();
        driver.input_mut().press(Action::MoveLeft);
        for _ in 0..5 {
            driver.input_mut().press(Action::Start);
            driver.frame();
        }
        // Player kept moving: no reset recentred it
        assert_eq!(driver.state().player.pos.x, 275.0 - 5.0 * 8.0);
    }

    #[test]
    fn test_stop_halts_ticks() {
        let clock = ManualClock::new(0.0);
        let mut driver = FrameDriver::new(Field::default(), &clock);
        driver.frame();
        driver.stop();
        assert!(!driver.is_running());
        assert!(driver.frame().is_none());
        assert!(driver.frame_with(TickInput::default()).is_none());
        assert_eq!(driver.state().frame, 1);
    }

    #[test]
    fn test_recording_captures_each_frame() {
        let clock = ManualClock::new(0.0);
        let mut driver = FrameDriver::new(Field::default(), &clock);
        driver.start_recording();
        driver.input_mut().press(Action::Start);
        for _ in 0..10 {
            driver.frame();
            clock.advance(16.0);
        }
        let tape = driver.take_tape().expect("recording");
        assert_eq!(tape.len(), 10);
        assert!(tape.frames[0].start);
        assert!(!tape.frames[1].start);
        assert_eq!(tape.frames[9].now_ms, 144.0);
    }
}
