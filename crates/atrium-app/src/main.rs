//! Atrium entry point.
//!
//! Loads `config.ron`, starts logging, and walks the scripted gallery tour:
//! through the hall into the sunny room, turns the three statues until the
//! door opens, then crosses over into the dark room.
//!
//! Run with: `cargo run -p atrium-app -- --realtime`

use std::process::ExitCode;

use atrium_app::render::TracingSink;
use atrium_app::tour::{self, Tour, TourReport};
use atrium_app::{AppError, PlatformDirs, Session};
use atrium_config::{CliArgs, Config};
use clap::Parser;
use tracing::{info, warn};

fn main() -> ExitCode {
    let args = CliArgs::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        // Every error is raised before logging is initialized.
        Err(err) => {
            eprintln!("atrium: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &CliArgs) -> Result<(), AppError> {
    let dirs = match &args.config {
        Some(dir) => PlatformDirs::with_config_dir(dir),
        None => PlatformDirs::resolve()?,
    };
    dirs.create_dirs()?;

    // `on_disk` mirrors config.ron; `config` adds the CLI overrides.
    let mut on_disk = Config::load_or_create(&dirs.config_dir)?;
    let mut config = on_disk.clone();
    config.apply_cli_overrides(args);
    if args.save_config {
        config.save(&dirs.config_dir)?;
        on_disk = config.clone();
    }

    atrium_log::init_logging(Some(&dirs.log_dir), cfg!(debug_assertions), Some(&config));

    info!("Atrium gallery");
    info!("Config dir: {}", dirs.config_dir.display());

    let tours = config.session.tours.max(1);
    for run in 1..=tours {
        if run > 1 && refresh(&mut on_disk, &mut config, &dirs, args) {
            info!("config.ron changed, applying it to tour {run}");
        }

        info!(
            "Tour {run}/{tours}: {} frames @ {}Hz | door {}ms | statue {}ms | {}",
            config.session.max_frames,
            config.session.frame_rate,
            config.doors.animation_ms,
            config.statues.turn_ms,
            if config.session.realtime { "realtime" } else { "simulated" },
        );

        let (report, tour) = walk(&config);
        if report.finished {
            info!(
                frames = report.frames,
                sunny = report.occupancy.entered_sunny_room,
                dark = report.occupancy.entered_dark_room,
                solved = report.puzzle_solved,
                "tour complete"
            );
        } else {
            warn!(
                frames = report.frames,
                step = ?tour.current(),
                "tour stopped before the end"
            );
        }
    }
    Ok(())
}

/// Re-read config.ron. When it changed, `on_disk` takes the new contents and
/// `config` becomes those contents plus the CLI overrides. A file that fails
/// to load leaves both untouched.
fn refresh(
    on_disk: &mut Config,
    config: &mut Config,
    dirs: &PlatformDirs,
    args: &CliArgs,
) -> bool {
    match on_disk.reload(&dirs.config_dir) {
        Ok(Some(changed)) => {
            *config = changed.clone();
            config.apply_cli_overrides(args);
            *on_disk = changed;
            true
        }
        Ok(None) => false,
        Err(err) => {
            warn!(%err, "config reload failed, keeping current settings");
            false
        }
    }
}

/// One full gallery tour on a fresh session.
fn walk(config: &Config) -> (TourReport, Tour) {
    let mut session = Session::from_config(config);
    let mut tour = Tour::gallery(config);
    let mut sink = TracingSink::new(config.debug.frame_summary_interval);
    let interval = config.session.frame_interval();
    let max_frames = config.session.max_frames;

    let report = if config.session.realtime {
        tour::run_realtime(&mut session, &mut tour, &mut sink, interval, max_frames)
    } else {
        tour::run_headless(&mut session, &mut tour, &mut sink, interval, max_frames)
    };
    (report, tour)
}
