//! Headless frame driver for the nbody engine
//!
//! Loads a scenario from a YAML file or a built-in preset, runs frames and
//! prints the projected body positions a renderer would draw.
//!
//! ```text
//! orrery --preset solar-system --frames 600 --energy
//! RUST_LOG=debug orrery --scenario scenarios/three_body.yaml --dump
//! ```

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::{debug, info};
use std::fs;
use std::path::PathBuf;
use std::thread;
use std::time::{Duration, Instant};

use nbody::presets::PresetKind;
use nbody::projection::{Projection, RenderMode, RenderPoint};
use nbody::snapshot::SystemSnapshot;
use nbody::{NBodySystem, ScenarioConfig};

#[derive(Parser, Debug)]
#[command(name = "orrery")]
#[command(about = "Run a planar N-body scenario and print what would be drawn", long_about = None)]
struct Args {
    /// YAML scenario file
    #[arg(short, long, conflicts_with_all = ["preset", "resume"])]
    scenario: Option<PathBuf>,

    /// Built-in scenario: three-body, solar-system or solar-system-leapfrog
    #[arg(short, long, default_value = "solar-system")]
    preset: PresetKind,

    /// Continue from a JSON snapshot instead of a fresh scenario
    #[arg(long, conflicts_with = "scenario")]
    resume: Option<PathBuf>,

    /// Number of frames to run
    #[arg(short, long, default_value_t = 60)]
    frames: u64,

    /// Projection: linear, log or log-relative (defaults to the preset's)
    #[arg(short, long)]
    render: Option<RenderMode>,

    /// Pixels per AU, or per log-AU in the log modes (defaults to the preset's)
    #[arg(long)]
    scale: Option<f64>,

    #[arg(long, default_value_t = 1200.0)]
    width: f64,

    #[arg(long, default_value_t = 1200.0)]
    height: f64,

    /// Print every body's full state after each frame
    #[arg(long)]
    dump: bool,

    /// Print the energy line after each frame
    #[arg(long)]
    energy: bool,

    /// Pace frames against the wall clock
    #[arg(long)]
    realtime: bool,

    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// Write a JSON snapshot after the last frame
    #[arg(long)]
    snapshot_out: Option<PathBuf>,
}

/// A system ready to run plus how to look at it
struct Run {
    system: NBodySystem,
    render_mode: RenderMode,
    pixel_scale: f64,
}

fn load(args: &Args) -> Result<Run> {
    let defaults = args.preset.preset();

    let system = if let Some(path) = &args.resume {
        let source = fs::read_to_string(path)
            .with_context(|| format!("failed to read snapshot {}", path.display()))?;
        let snapshot = SystemSnapshot::from_json(&source)
            .with_context(|| format!("failed to parse snapshot {}", path.display()))?;
        NBodySystem::restore(snapshot)
            .with_context(|| format!("invalid snapshot {}", path.display()))?
    } else if let Some(path) = &args.scenario {
        ScenarioConfig::from_path(path)
            .and_then(|scenario| scenario.build())
            .with_context(|| format!("failed to load scenario {}", path.display()))?
    } else {
        defaults
            .scenario
            .build()
            .with_context(|| format!("invalid preset {}", args.preset))?
    };

    Ok(Run {
        system,
        render_mode: args.render.unwrap_or(defaults.render_mode),
        pixel_scale: args.scale.unwrap_or(defaults.pixel_scale),
    })
}

fn print_frame(frame: u64, points: &[RenderPoint]) {
    let line: Vec<String> = points
        .iter()
        .map(|p| {
            format!(
                "{}@({:.1}, {:.1})",
                if p.name.is_empty() { p.id.to_string() } else { p.name.clone() },
                p.pixel.x(),
                p.pixel.y()
            )
        })
        .collect();
    println!("frame {frame}: {}", line.join(" "));
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.fps == 0 {
        bail!("--fps must be at least 1");
    }

    let Run {
        mut system,
        render_mode,
        pixel_scale,
    } = load(&args)?;
    let projection = Projection::centered(args.width, args.height, pixel_scale);
    let frame_time = Duration::from_secs_f64(1.0 / f64::from(args.fps));

    info!(
        "running {} bodies for {} frames ({} sub-steps each, {} rendering)",
        system.len(),
        args.frames,
        system.config().substeps_per_frame,
        render_mode
    );

    for frame in 1..=args.frames {
        let started = Instant::now();

        system
            .advance_frame()
            .with_context(|| format!("simulation failed in frame {frame}"))?;

        print_frame(frame, &system.render_points(render_mode, &projection));
        if args.energy {
            println!("{}", system.energy_readout());
        }
        if args.dump {
            for report in system.report() {
                println!("{report}\n");
            }
        }

        if args.realtime {
            if let Some(rest) = frame_time.checked_sub(started.elapsed()) {
                thread::sleep(rest);
            } else {
                debug!("frame {frame} overran {:?}", frame_time);
            }
        }
    }

    if let Some(path) = &args.snapshot_out {
        let json = system
            .snapshot()
            .to_json()
            .with_context(|| format!("cannot write snapshot {}", path.display()))?;
        fs::write(path, json)
            .with_context(|| format!("failed to write snapshot {}", path.display()))?;
        info!("wrote snapshot to {}", path.display());
    }

    Ok(())
}
