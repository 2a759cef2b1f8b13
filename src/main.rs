//! Star Barrage headless runner
//!
//! Drives the simulation at a fixed cadence on a manual clock, optionally
//! recording the session to a tape or replaying one.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use star_barrage::platform::{Action, Clock, ManualClock};
use star_barrage::replay::{self, Tape};
use star_barrage::sim::{FrameSnapshot, GameEvent, autopilot_input};
use star_barrage::{FrameDriver, Settings};

#[derive(Debug, Parser)]
#[command(name = "star-barrage", about = "Run the Star Barrage simulation headless")]
struct Args {
    /// Settings file (JSON); defaults are used if it is missing
    #[arg(long, default_value = "star-barrage.json")]
    settings: PathBuf,

    /// Number of frames to simulate (overrides the settings file)
    #[arg(long)]
    frames: Option<u64>,

    /// Record every tick input to this tape file
    #[arg(long)]
    record: Option<PathBuf>,

    /// Replay a tape instead of running a live session
    #[arg(long, conflicts_with = "record")]
    replay: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    log::info!("Star Barrage (headless) starting...");

    let settings = Settings::load(&args.settings);

    if let Some(path) = args.replay.as_deref() {
        return run_replay(path);
    }

    let frames = args.frames.unwrap_or(settings.frames);
    run_session(&settings, frames, args.record.as_deref())
}

fn run_replay(path: &Path) -> Result<()> {
    let tape = Tape::load(path).with_context(|| format!("loading tape {}", path.display()))?;
    let snapshot = replay::replay(&tape).context("replaying tape")?;
    report(&snapshot)
}

fn run_session(settings: &Settings, frames: u64, record: Option<&Path>) -> Result<()> {
    let clock = ManualClock::new(0.0);
    let mut driver = FrameDriver::new(settings.field, &clock);
    if record.is_some() {
        driver.start_recording();
    }
    if !settings.autopilot {
        driver.input_mut().press(Action::Start);
    }

    let mut last = driver.state().snapshot(Vec::new());
    for frame in 1..=frames {
        let snapshot = if settings.autopilot {
            let input = autopilot_input(&driver.view(), clock.now_ms());
            driver.frame_with(input)
        } else {
            driver.frame()
        };
        let Some(snapshot) = snapshot else { break };

        for event in &snapshot.events {
            if let GameEvent::GameOver { score, level } = event {
                log::info!("Frame {frame}: game over with {score} points on level {level}");
            }
        }
        if settings.snapshot_every > 0 && frame % settings.snapshot_every == 0 {
            log::info!(
                "Frame {frame}: score={} lives={} level={} mode={:?}",
                snapshot.score,
                snapshot.lives,
                snapshot.level,
                snapshot.mode
            );
        }

        last = snapshot;
        clock.advance(settings.frame_ms);
    }
    driver.stop();

    if let Some(path) = record {
        let tape = driver
            .take_tape()
            .context("recording was enabled but no tape was produced")?;
        tape.save(path)
            .with_context(|| format!("saving tape {}", path.display()))?;
        replay::verify(&tape, &last).context("recorded tape does not replay")?;
    }

    report(&last)
}

fn report(snapshot: &FrameSnapshot) -> Result<()> {
    let json = serde_json::to_string_pretty(snapshot).context("encoding snapshot")?;
    println!("{json}");
    Ok(())
}
