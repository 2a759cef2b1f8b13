//! Platform abstraction layer
//!
//! The collaborators the frame driver samples once per tick:
//! - Time (monotonic clock for the fire cooldown)
//! - Input (held actions plus edge-triggered start/restart)

pub mod input;
pub mod time;

pub use input::{Action, InputState};
pub use time::{Clock, ManualClock, MonotonicClock};
