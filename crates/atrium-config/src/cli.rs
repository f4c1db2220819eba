//! Command-line argument parsing for the Atrium tour.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Atrium command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "atrium", about = "Walk the Atrium gallery: doors, statues and the dark room")]
pub struct CliArgs {
    /// Maximum number of frames to run.
    #[arg(long)]
    pub frames: Option<u64>,

    /// Simulated display refresh rate in Hz.
    #[arg(long)]
    pub frame_rate: Option<u32>,

    /// Seed for the planet layout.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Door swing duration in milliseconds.
    #[arg(long)]
    pub door_ms: Option<u64>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Write the effective configuration back to `config.ron`.
    #[arg(long)]
    pub save_config: bool,

    /// Pace frames against the wall clock.
    #[arg(long)]
    pub realtime: bool,

    /// Number of tours to run, re-reading the config file between them.
    #[arg(long)]
    pub tours: Option<u32>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(frames) = args.frames {
            self.session.max_frames = frames;
        }
        if let Some(rate) = args.frame_rate {
            self.session.frame_rate = rate;
        }
        if let Some(seed) = args.seed {
            self.celestial.seed = seed;
        }
        if let Some(ms) = args.door_ms {
            self.doors.animation_ms = ms;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
        if args.realtime {
            self.session.realtime = true;
        }
        if let Some(tours) = args.tours {
            self.session.tours = tours;
        }
    }
}
