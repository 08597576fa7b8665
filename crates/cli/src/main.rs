#![deny(unsafe_code)]
//! Headless CLI driver for the flowfield particle simulation.
//!
//! Subcommands:
//! - `render <engine>` — run N frames with a fixed pointer, write a PNG
//! - `replay <seed-file>` — re-run a saved Seed exactly
//! - `list` — print available engines

mod error;

use clap::{Parser, Subcommand};
use error::CliError;
use flowfield_core::{Engine, Seed};
use flowfield_engines::grid::sample_grid;
use flowfield_engines::EngineKind;
use glam::DVec2;
use std::path::{Path, PathBuf};
use std::process;

#[derive(Parser)]
#[command(name = "flowfield", about = "Vector-field particle simulation CLI")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run an engine for N frames and write a PNG snapshot.
    Render {
        /// Engine name (e.g. "magnet").
        engine: String,

        /// Display width in pixels.
        #[arg(short = 'W', long, default_value_t = 800)]
        width: usize,

        /// Display height in pixels.
        #[arg(short = 'H', long, default_value_t = 600)]
        height: usize,

        /// Number of frames to simulate.
        #[arg(short, long, default_value_t = 600)]
        frames: usize,

        /// Simulated seconds per frame.
        #[arg(long, default_value_t = flowfield_core::seed::DEFAULT_DELTA_TIME)]
        delta_time: f64,

        /// PRNG seed for deterministic particle placement.
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Fixed reference point as "x,y" (default: center of the bounds).
        #[arg(long)]
        pointer: Option<String>,

        /// Field sample spacing as "sx,sy".
        #[arg(long, default_value = "15,15")]
        spacing: String,

        /// Engine parameters as a JSON string.
        #[arg(long, default_value = "{}")]
        params: String,

        /// Output file path.
        #[arg(short, long, default_value = "snapshot.png")]
        output: PathBuf,

        /// Also write the reproducible Seed description as JSON.
        #[arg(long)]
        save_seed: Option<PathBuf>,
    },
    /// Re-run a Seed saved with `render --save-seed` and write a PNG.
    Replay {
        /// Path to a Seed JSON file.
        seed_file: PathBuf,

        /// Field sample spacing as "sx,sy".
        #[arg(long, default_value = "15,15")]
        spacing: String,

        /// Output file path.
        #[arg(short, long, default_value = "snapshot.png")]
        output: PathBuf,
    },
    /// List available engines.
    List,
}

/// Parses an "x,y" pair of floats.
fn parse_pair(text: &str, what: &str) -> Result<DVec2, CliError> {
    let invalid = || CliError::Input(format!("invalid {what} '{text}': expected \"x,y\""));
    let (x, y) = text.split_once(',').ok_or_else(invalid)?;
    let x: f64 = x.trim().parse().map_err(|_| invalid())?;
    let y: f64 = y.trim().parse().map_err(|_| invalid())?;
    Ok(DVec2::new(x, y))
}

/// Runs a validated seed to completion and writes the snapshot.
fn run_seed(seed: &Seed, spacing: DVec2, output: &Path, json: bool) -> Result<(), CliError> {
    seed.validate()?;
    let mut engine = EngineKind::from_name(&seed.engine, seed.width, seed.height, seed.seed, &seed.params)?;
    let (w, h) = engine.bounds();
    let pointer = match seed.pointer {
        Some([x, y]) => DVec2::new(x, y),
        None => DVec2::new(w * 0.5, h * 0.5),
    };

    (0..seed.frames).try_for_each(|_| engine.step(pointer, seed.delta_time))?;

    let samples = sample_grid(engine.field(), pointer, w, h, spacing)?;
    flowfield_engines::snapshot::write_png(
        engine.particles(),
        &samples,
        seed.width,
        seed.height,
        output,
    )?;

    if json {
        let info = serde_json::json!({
            "engine": seed.engine,
            "width": seed.width,
            "height": seed.height,
            "frames": seed.frames,
            "delta_time": seed.delta_time,
            "seed": seed.seed,
            "pointer": [pointer.x, pointer.y],
            "output": output.display().to_string(),
        });
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        eprintln!(
            "simulated {} ({}x{}, {} frames, seed {}) -> {}",
            seed.engine,
            seed.width,
            seed.height,
            seed.frames,
            seed.seed,
            output.display()
        );
    }
    Ok(())
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::List => {
            let engines = EngineKind::list_engines();
            if cli.json {
                let info = serde_json::json!({ "engines": engines });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("Engines:");
                for name in engines {
                    println!("  {name}");
                }
            }
        }
        Command::Render {
            engine,
            width,
            height,
            frames,
            delta_time,
            seed,
            pointer,
            spacing,
            params,
            output,
            save_seed,
        } => {
            let params: serde_json::Value = serde_json::from_str(&params)
                .map_err(|e| CliError::Input(format!("invalid --params JSON: {e}")))?;
            let spacing = parse_pair(&spacing, "--spacing")?;
            let pointer = pointer
                .as_deref()
                .map(|text| parse_pair(text, "--pointer"))
                .transpose()?;

            let run_desc = Seed {
                engine,
                width,
                height,
                params,
                seed,
                frames,
                delta_time,
                pointer: pointer.map(|p| [p.x, p.y]),
            };

            if let Some(path) = &save_seed {
                let json = serde_json::to_string_pretty(&run_desc)?;
                std::fs::write(path, json)
                    .map_err(|e| CliError::Io(format!("{}: {e}", path.display())))?;
            }

            run_seed(&run_desc, spacing, &output, cli.json)?;
        }
        Command::Replay {
            seed_file,
            spacing,
            output,
        } => {
            let spacing = parse_pair(&spacing, "--spacing")?;
            let text = std::fs::read_to_string(&seed_file)
                .map_err(|e| CliError::Io(format!("{}: {e}", seed_file.display())))?;
            let run_desc: Seed = serde_json::from_str(&text)?;
            run_seed(&run_desc, spacing, &output, cli.json)?;
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
