#![deny(unsafe_code)]
//! CLI binary for the flowart animation system.
//!
//! Subcommands:
//! - `render <engine>`: render a clip as a numbered PNG sequence plus `seed.json`
//! - `replay <seed.json>`: re-render a clip from a saved seed
//! - `still <engine> --at <seconds>`: write the single frame shown at a given time
//! - `list`: print available engines
//! - `schema <engine>`: print an engine's parameter schema
//!
//! Set `RUST_LOG=info` (or `debug`) for progress output.

mod error;

use clap::{Args, Parser, Subcommand};
use error::CliError;
use flowart_core::{Engine, Seed};
use flowart_engines::driver::{render_sequence, render_still};
use flowart_engines::EngineKind;
use log::info;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;

/// Name of the seed file written next to each rendered sequence.
const SEED_FILE_NAME: &str = "seed.json";

#[derive(Parser)]
#[command(name = "flowart", about = "Particle flow-field animation renderer")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

/// Everything needed to build an engine and its frame schedule.
#[derive(Args)]
struct ClipArgs {
    /// Engine name (e.g. "flow-field").
    engine: String,

    /// Frame width in pixels.
    #[arg(short = 'W', long, default_value_t = Seed::DEFAULT_WIDTH)]
    width: usize,

    /// Frame height in pixels.
    #[arg(short = 'H', long, default_value_t = Seed::DEFAULT_HEIGHT)]
    height: usize,

    /// Frames per second.
    #[arg(long, default_value_t = Seed::DEFAULT_FPS)]
    fps: f64,

    /// Clip length in seconds.
    #[arg(short, long, default_value_t = Seed::DEFAULT_DURATION)]
    duration: f64,

    /// PRNG seed for deterministic output.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Engine parameters as a JSON string.
    #[arg(long, default_value = "{}")]
    params: String,
}

impl ClipArgs {
    fn to_seed(&self) -> Result<Seed, CliError> {
        let params: serde_json::Value = serde_json::from_str(&self.params)
            .map_err(|e| CliError::Input(format!("invalid --params JSON: {e}")))?;
        Ok(Seed {
            engine: self.engine.clone(),
            width: self.width,
            height: self.height,
            params,
            seed: self.seed,
            fps: self.fps,
            duration: self.duration,
        })
    }
}

#[derive(Subcommand)]
enum Command {
    /// Render a clip as a numbered PNG sequence.
    Render {
        #[command(flatten)]
        clip: ClipArgs,

        /// Output directory for frames and seed.json.
        #[arg(short, long, default_value = "frames")]
        output_dir: PathBuf,
    },
    /// Re-render a clip from a seed.json file.
    Replay {
        /// Path to a seed file written by `render`.
        seed_file: PathBuf,

        /// Output directory for frames.
        #[arg(short, long, default_value = "frames")]
        output_dir: PathBuf,
    },
    /// Render the frame shown at a given time and write it as a PNG.
    Still {
        #[command(flatten)]
        clip: ClipArgs,

        /// Time in seconds of the frame to keep.
        #[arg(long, default_value_t = 0.0)]
        at: f64,

        /// Output file path.
        #[arg(short, long, default_value = "frame.png")]
        output: PathBuf,
    },
    /// List available engines.
    List,
    /// Print the parameter schema of an engine.
    Schema {
        /// Engine name.
        engine: String,
    },
}

fn render_clip(seed: &Seed, output_dir: &Path, json: bool) -> Result<(), CliError> {
    let mut engine = EngineKind::from_seed(seed)?;
    let schedule = seed.schedule()?;
    let frames = render_sequence(&mut engine, &schedule, output_dir)?;

    let seed_path = output_dir.join(SEED_FILE_NAME);
    fs::write(&seed_path, serde_json::to_string_pretty(seed)?)?;

    if json {
        let info = serde_json::json!({
            "engine": seed.engine,
            "width": seed.width,
            "height": seed.height,
            "fps": seed.fps,
            "duration": seed.duration,
            "seed": seed.seed,
            "frames": frames,
            "output_dir": output_dir.display().to_string(),
        });
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        eprintln!(
            "rendered {} ({}x{}, {frames} frames @ {} fps, seed {}) -> {}",
            seed.engine,
            seed.width,
            seed.height,
            seed.fps,
            seed.seed,
            output_dir.display()
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
        Command::Schema { engine } => {
            let eng = EngineKind::from_name(&engine, 1, 1, 0, &serde_json::json!({}))?;
            println!("{}", serde_json::to_string_pretty(&eng.param_schema())?);
        }
        Command::Render { clip, output_dir } => {
            let seed = clip.to_seed()?;
            render_clip(&seed, &output_dir, cli.json)?;
        }
        Command::Replay {
            seed_file,
            output_dir,
        } => {
            let text = fs::read_to_string(&seed_file)?;
            let seed: Seed = serde_json::from_str(&text).map_err(|e| {
                CliError::Input(format!("invalid seed file {}: {e}", seed_file.display()))
            })?;
            info!("replaying {} from {}", seed.engine, seed_file.display());
            render_clip(&seed, &output_dir, cli.json)?;
        }
        Command::Still { clip, at, output } => {
            let seed = clip.to_seed()?;
            let mut engine = EngineKind::from_seed(&seed)?;
            let schedule = seed.schedule()?;
            let index = render_still(&mut engine, &schedule, at, &output)?;

            if cli.json {
                let info = serde_json::json!({
                    "engine": seed.engine,
                    "frame": index,
                    "t": schedule.time_at(index),
                    "output": output.display().to_string(),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                eprintln!(
                    "rendered {} frame {index} (t={:.3}s) -> {}",
                    seed.engine,
                    schedule.time_at(index),
                    output.display()
                );
            }
        }
    }

    Ok(())
}

fn main() {
    env_logger::init();
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

#[cfg(test)]
mod tests {
    use super::*;
    use flowart_engines::snapshot::frame_file_name;

    const SMALL_CLIP: &[&str] = &[
        "flow-field",
        "-W",
        "8",
        "-H",
        "8",
        "--fps",
        "2",
        "--duration",
        "1",
    ];

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("flowart").chain(args.iter().copied())).unwrap()
    }

    fn exit_code(args: &[&str]) -> i32 {
        run(cli(args)).map_or_else(|e| e.exit_code(), |()| 0)
    }

    fn path_str(path: &Path) -> &str {
        path.to_str().unwrap()
    }

    #[test]
    fn replay_of_malformed_seed_file_is_an_input_error() {
        let dir = tempfile::tempdir().unwrap();
        let seed_file = dir.path().join(SEED_FILE_NAME);
        fs::write(&seed_file, "{\"engine\": \"flow-field\", \"width\": ").unwrap();
        let out = dir.path().join("frames");

        assert_eq!(exit_code(&["replay", path_str(&seed_file), "-o", path_str(&out)]), 12);
        assert!(!out.exists());
    }

    #[test]
    fn replay_of_missing_seed_file_is_a_filesystem_error() {
        let dir = tempfile::tempdir().unwrap();
        let seed_file = dir.path().join("absent.json");
        let out = dir.path().join("frames");

        assert_eq!(exit_code(&["replay", path_str(&seed_file), "-o", path_str(&out)]), 11);
    }

    #[test]
    fn still_into_missing_directory_is_a_filesystem_error() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("missing").join("still.png");

        let mut args = vec!["still"];
        args.extend_from_slice(SMALL_CLIP);
        args.extend_from_slice(&["--params", r#"{"particle_count": 3}"#, "--at", "0.5"]);
        args.extend_from_slice(&["-o", path_str(&output)]);
        assert_eq!(exit_code(&args), 11);
        assert!(!output.exists());
    }

    #[test]
    fn render_with_malformed_params_is_an_input_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut args = vec!["render"];
        args.extend_from_slice(SMALL_CLIP);
        args.extend_from_slice(&["--params", "{particle_count: 3", "-o", path_str(dir.path())]);
        assert_eq!(exit_code(&args), 12);
    }

    #[test]
    fn render_with_zero_history_is_an_engine_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut args = vec!["render"];
        args.extend_from_slice(SMALL_CLIP);
        args.extend_from_slice(&["--params", r#"{"max_history": 0}"#, "-o", path_str(dir.path())]);
        assert_eq!(exit_code(&args), 10);
    }

    #[test]
    fn render_with_unknown_engine_is_an_engine_error() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(exit_code(&["render", "vortex", "-o", path_str(dir.path())]), 10);
    }

    #[test]
    fn replay_reproduces_rendered_frames() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("first");
        let second = dir.path().join("second");

        let mut args = vec!["render"];
        args.extend_from_slice(SMALL_CLIP);
        args.extend_from_slice(&["--params", r#"{"particle_count": 3}"#, "--seed", "7"]);
        args.extend_from_slice(&["-o", path_str(&first)]);
        assert_eq!(exit_code(&args), 0);

        let seed_file = first.join(SEED_FILE_NAME);
        assert_eq!(exit_code(&["replay", path_str(&seed_file), "-o", path_str(&second)]), 0);

        for index in 0..2 {
            let name = frame_file_name(index);
            let a = fs::read(first.join(&name)).unwrap();
            let b = fs::read(second.join(&name)).unwrap();
            assert_eq!(a, b, "{name} differs after replay");
        }
        assert!(!first.join(frame_file_name(2)).exists());
    }
}
