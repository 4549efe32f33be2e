//! Elemental Duo headless runner
//!
//! Replays a frame script from stdin against a session and logs what
//! happens. Each line is one frame and lists the keys held that frame:
//!
//! ```text
//! a d w           fire: left, right, jump
//! left right up   water: left, right, jump
//! enter           confirm
//! f1              skip stage
//! x30             repeat this line for 30 frames
//! ```
//!
//! Usage: `elemental-duo [--stages FILE] [--tuning FILE] < script.txt`

use std::error::Error;
use std::io::{self, BufRead};
use std::path::PathBuf;

use clap::Parser;

use elemental_duo::sim::{FrameInput, GameEvent, Session};
use elemental_duo::{StageCatalog, Tuning};

#[derive(Parser, Debug)]
#[command(name = "elemental-duo")]
#[command(about = "Replay a frame script against the Elemental Duo simulation")]
#[command(version)]
struct Args {
    /// Stage catalog JSON (defaults to the built-in levels)
    #[arg(long)]
    stages: Option<PathBuf>,

    /// Tuning JSON; missing fields keep their defaults
    #[arg(long)]
    tuning: Option<PathBuf>,
}

/// Parse one script line into an input and a repeat count
fn parse_frame(line: &str) -> Result<(FrameInput, u32), String> {
    let mut input = FrameInput::default();
    let mut repeat = 1;
    for token in line.split_whitespace() {
        match token.to_ascii_lowercase().as_str() {
            "a" => input.fire.move_left = true,
            "d" => input.fire.move_right = true,
            "w" => input.fire.jump = true,
            "left" => input.water.move_left = true,
            "right" => input.water.move_right = true,
            "up" => input.water.jump = true,
            "enter" => input.confirm = true,
            "f1" => input.skip_stage = true,
            "-" => {}
            other => {
                let count = other
                    .strip_prefix('x')
                    .and_then(|n| n.parse().ok())
                    .ok_or_else(|| format!("unknown key: {token}"))?;
                repeat = count;
            }
        }
    }
    Ok((input, repeat))
}

/// Presses act on the first frame of a line only; held directions repeat
fn clear_one_shots(input: &mut FrameInput) {
    input.fire.jump = false;
    input.water.jump = false;
    input.confirm = false;
    input.skip_stage = false;
}

fn report(session: &Session, event: &GameEvent) {
    match event {
        GameEvent::StageLoaded { index } => {
            println!("stage {}: {}", index + 1, session.stage_name());
        }
        GameEvent::HazardDeath { victim } => {
            println!("game over: {} player died", victim.as_str());
        }
        GameEvent::Victory {
            stars,
            elapsed_secs,
        } => {
            println!("victory in {elapsed_secs:.2}s, {stars} stars");
        }
        GameEvent::SessionComplete => println!("all stages complete"),
        GameEvent::CollectiblePicked { .. } | GameEvent::PlayerFell { .. } => {}
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    log::info!("Elemental Duo (headless) starting...");

    let args = Args::parse();
    let catalog = match &args.stages {
        Some(path) => StageCatalog::from_json(&std::fs::read_to_string(path)?)?,
        None => StageCatalog::builtin(),
    };
    let tuning = match &args.tuning {
        Some(path) => Tuning::from_json(&std::fs::read_to_string(path)?)?,
        None => Tuning::default(),
    };

    let mut session = Session::new(catalog, tuning)?;
    println!("stage 1: {}", session.stage_name());

    let mut frames = 0u64;
    for (line_no, line) in io::stdin().lock().lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let (mut input, repeat) =
            parse_frame(line).map_err(|e| format!("line {}: {e}", line_no + 1))?;
        for _ in 0..repeat {
            for event in session.step_frame(&input) {
                report(&session, &event);
            }
            frames += 1;
            clear_one_shots(&mut input);
        }
    }

    let hud = session.hud();
    log::info!("Replayed {} frames", frames);
    println!(
        "stage {}/{} {:?}: {:.2}s, {} collected",
        hud.stage_number, hud.stage_count, hud.phase, hud.elapsed_secs, hud.collected
    );
    let results = session.results();
    println!(
        "cleared {} stages, {} stars total",
        results.cleared(),
        results.total_stars()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_frame_keys() {
        let (input, repeat) = parse_frame("d up enter").unwrap();
        assert!(input.fire.move_right);
        assert!(input.water.jump);
        assert!(input.confirm);
        assert!(!input.skip_stage);
        assert_eq!(repeat, 1);
    }

    #[test]
    fn test_parse_frame_repeat() {
        let (input, repeat) = parse_frame("A Left x45").unwrap();
        assert!(input.fire.move_left);
        assert!(input.water.move_left);
        assert_eq!(repeat, 45);

        let (input, repeat) = parse_frame("- x10").unwrap();
        assert_eq!(input, FrameInput::default());
        assert_eq!(repeat, 10);
    }

    #[test]
    fn test_repeat_holds_moves_but_not_presses() {
        let (mut input, _) = parse_frame("d w up enter f1 x3").unwrap();
        clear_one_shots(&mut input);
        assert!(input.fire.move_right);
        assert!(!input.fire.jump);
        assert!(!input.water.jump);
        assert!(!input.confirm);
        assert!(!input.skip_stage);
    }

    #[test]
    fn test_cli_flags() {
        let args = Args::try_parse_from(["elemental-duo", "--stages", "levels.json"]).unwrap();
        assert_eq!(args.stages, Some(PathBuf::from("levels.json")));
        assert_eq!(args.tuning, None);
        assert!(Args::try_parse_from(["elemental-duo", "--bogus"]).is_err());
    }

    #[test]
    fn test_parse_frame_rejects_unknown() {
        assert!(parse_frame("space").is_err());
        assert!(parse_frame("xabc").is_err());
    }
}
