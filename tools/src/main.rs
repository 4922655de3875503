//! sim-runner: headless host for the Dream Story simulation core.
//!
//! Usage:
//!   sim-runner --ticks 600 --speed 4             fast-forward, print a summary
//!   sim-runner --ipc-mode [--autostart]          real-time, JSON lines on stdin/stdout
//!   ... --config overrides.json                  any mode
//!
//! IPC input, one JSON object per line:
//!   {"type":"get_state"}
//!   {"type":"command","command":{"cmd":"perform","activity":"sleep"}}
//!   {"type":"quit"}
//! Every reply (and every burst of timer events) is one JSON frame.

use anyhow::Result;
use dreamstory_core::{
    command::PlayerCommand,
    config::SimConfig,
    engine::SimEngine,
    event::SimEvent,
    snapshot::SimSnapshot,
    types::RealMillis,
};
use std::env;
use std::io::{self, BufRead, Write};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

/// Upper bound on how long the IPC loop sleeps with nothing scheduled.
const IDLE_POLL_MS: u64 = 250;

#[derive(serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum IpcMessage {
    GetState,
    Command { command: PlayerCommand },
    Quit,
}

#[derive(serde::Serialize)]
struct Frame<'a> {
    events:   &'a [SimEvent],
    snapshot: SimSnapshot,
    #[serde(skip_serializing_if = "Option::is_none")]
    error:    Option<String>,
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let ticks = parse_arg(&args, "--ticks", 600u64);
    let speed = parse_arg(&args, "--speed", 1.0f64);
    let ipc_mode = args.iter().any(|a| a == "--ipc-mode");
    let autostart = args.iter().any(|a| a == "--autostart");
    let config = match arg_value(&args, "--config") {
        Some(path) => SimConfig::load(path)?,
        None => SimConfig::default(),
    };

    let mut engine = SimEngine::build(config)?;
    if speed != 1.0 {
        engine.dispatch(PlayerCommand::SetSpeed { speed }, 0)?;
    }

    if ipc_mode {
        if autostart {
            engine.dispatch(PlayerCommand::Start, 0)?;
        }
        run_ipc_loop(&mut engine)?;
    } else {
        println!("Dream Story: sim-runner");
        println!("  ticks:  {ticks}");
        println!("  speed:  {speed}x");
        println!();
        engine.dispatch(PlayerCommand::Start, 0)?;
        let events = engine.run_ticks(ticks);
        print_summary(&engine, &events);
    }

    Ok(())
}

fn run_ipc_loop(engine: &mut SimEngine) -> Result<()> {
    let (tx, rx) = mpsc::channel::<String>();
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if tx.send(line).is_err() {
                break;
            }
        }
    });

    let started = Instant::now();
    let elapsed = || started.elapsed().as_millis() as RealMillis;
    let mut stdout = io::stdout();

    write_frame(&mut stdout, engine, &[], elapsed(), None)?;

    loop {
        let now = elapsed();
        let wait = engine
            .next_deadline()
            .map_or(IDLE_POLL_MS, |at| at.saturating_sub(now).min(IDLE_POLL_MS));

        match rx.recv_timeout(Duration::from_millis(wait)) {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                let now = elapsed();
                let msg: IpcMessage = match serde_json::from_str(&line) {
                    Ok(m) => m,
                    Err(e) => {
                        log::warn!("Bad IPC message: {e}");
                        write_frame(&mut stdout, engine, &[], now, Some(e.to_string()))?;
                        continue;
                    }
                };
                match msg {
                    IpcMessage::Quit => break,
                    IpcMessage::GetState => {
                        let events = engine.pump(now);
                        write_frame(&mut stdout, engine, &events, now, None)?;
                    }
                    IpcMessage::Command { command } => match engine.dispatch(command, now) {
                        Ok(events) => write_frame(&mut stdout, engine, &events, now, None)?,
                        Err(e) => {
                            log::warn!("Command rejected: {e}");
                            write_frame(&mut stdout, engine, &[], now, Some(e.to_string()))?;
                        }
                    },
                }
            }
            Err(RecvTimeoutError::Timeout) => {
                let now = elapsed();
                let events = engine.pump(now);
                if !events.is_empty() {
                    write_frame(&mut stdout, engine, &events, now, None)?;
                }
            }
            Err(RecvTimeoutError::Disconnected) => break, // EOF
        }
    }
    Ok(())
}

fn write_frame(
    out: &mut impl Write,
    engine: &SimEngine,
    events: &[SimEvent],
    now: RealMillis,
    error: Option<String>,
) -> Result<()> {
    let frame = Frame { events, snapshot: engine.snapshot(now), error };
    writeln!(out, "{}", serde_json::to_string(&frame)?)?;
    out.flush()?;
    Ok(())
}

fn print_summary(engine: &SimEngine, events: &[SimEvent]) {
    let state = engine.state();
    let snap = engine.snapshot(0);
    let ticks = events.iter().filter(|e| matches!(e, SimEvent::Ticked { .. })).count();
    let days = events.iter().filter(|e| matches!(e, SimEvent::DayChanged { .. })).count();

    println!("=== RUN SUMMARY ===");
    println!("  ticks run:      {ticks}");
    println!("  day changes:    {days}");
    println!("  game time:      {} ({} {})", state.clock.game_time, snap.day_name, snap.formatted_time);
    println!("  energy:         {:.2} ({:?})", state.stats.energy, snap.stats.energy.tier);
    println!("  happiness:      {:.2} ({:?})", state.stats.happiness, snap.stats.happiness.tier);
    println!("  health:         {:.2} ({:?})", state.stats.health, snap.stats.health.tier);
    println!("  sleep quality:  {:.2} ({:?})", state.stats.sleep_quality, snap.stats.sleep_quality.tier);
}

fn arg_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    arg_value(args, flag)
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
