use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use flycam_common::{ControlScheme, StepMode};
use flycam_input::Key;
use flycam_render::{DebugTextRenderer, Renderer};
use flycam_runtime::{GameLoop, SessionConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "flycam-cli", about = "Headless first-person camera simulation")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Session config (.yaml, .yml or .json)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print version and the tracked keys
    Info,
    /// Print the effective session config as YAML
    Config,
    /// Hold a set of keys for a number of frames and print each pose
    Simulate {
        /// Keys held for the whole run, comma separated (e.g. w,ArrowUp)
        #[arg(short = 'k', long, value_delimiter = ',')]
        keys: Vec<Key>,
        /// Number of frames to run
        #[arg(short, long, default_value = "10")]
        frames: u64,
        /// Seconds per frame
        #[arg(long, default_value = "0.016666668")]
        dt: f32,
        /// Print every Nth frame
        #[arg(long, default_value = "1")]
        every: u64,
        /// Override the control scheme
        #[arg(long)]
        scheme: Option<SchemeArg>,
        /// Scale motion by frame time relative to this rate instead of a fixed per-frame step
        #[arg(long)]
        time_scaled: Option<f32>,
    },
    /// Show how a display size maps onto the drawing buffer
    Resize {
        /// Client width in CSS pixels
        width: f32,
        /// Client height in CSS pixels
        height: f32,
        /// Device pixel ratio
        #[arg(long, default_value = "1.0")]
        pixel_ratio: f32,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum SchemeArg {
    Euler,
    Strafe,
}

impl From<SchemeArg> for ControlScheme {
    fn from(arg: SchemeArg) -> Self {
        match arg {
            SchemeArg::Euler => ControlScheme::Euler,
            SchemeArg::Strafe => ControlScheme::Strafe,
        }
    }
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<SessionConfig> {
    match path {
        Some(path) => SessionConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display())),
        None => Ok(SessionConfig::default()),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    let mut config = load_config(cli.config.as_ref())?;

    match cli.command {
        Commands::Info => {
            println!("flycam-cli v{}", env!("CARGO_PKG_VERSION"));
            let ids: Vec<&str> = Key::ALL.iter().map(|k| k.id()).collect();
            println!("tracked keys: {}", ids.join(", "));
        }
        Commands::Config => {
            print!("{}", config.to_yaml()?);
        }
        Commands::Simulate {
            keys,
            frames,
            dt,
            every,
            scheme,
            time_scaled,
        } => {
            if let Some(scheme) = scheme {
                config.motion.scheme = scheme.into();
            }
            if let Some(reference_hz) = time_scaled {
                config.motion.step_mode = StepMode::TimeScaled { reference_hz };
            }
            config.validate()?;

            let mut game = GameLoop::from_config(&config, 800, 400);
            for key in &keys {
                game.keys_mut().press(*key);
            }
            tracing::info!(?keys, frames, "simulating");

            let renderer = DebugTextRenderer::new();
            let every = every.max(1);
            for _ in 0..frames {
                let frame = game.tick(dt);
                if frame.index % every == 0 || frame.index + 1 == frames {
                    println!("{}", renderer.render(&frame));
                }
            }

            let start = config.initial_pose().position;
            let end = game.pose().position;
            println!(
                "moved {:.3} units over {} frames, look=({:.3}, {:.3}, {:.3})",
                start.distance(end),
                game.frames(),
                game.pose().forward().x,
                game.pose().forward().y,
                game.pose().forward().z
            );
        }
        Commands::Resize {
            width,
            height,
            pixel_ratio,
        } => {
            let mut game = GameLoop::from_config(&config, 0, 0);
            let resized = game.resize_to_display(width, height, pixel_ratio);
            let vp = game.viewport();
            println!(
                "buffer={}x{} aspect={:.4} resized={}",
                vp.width(),
                vp.height(),
                vp.projection().aspect,
                resized
            );
        }
    }

    Ok(())
}
