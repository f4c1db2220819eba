//! Configuration system for Atrium.
//!
//! Provides runtime-configurable settings that persist to disk as RON files.
//! Supports CLI overrides via clap, hot-reload detection, and forward/backward
//! compatible serialization.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{
    CelestialConfig, Config, DebugConfig, DoorConfig, PlayerConfig, SessionConfig, StatueConfig,
};
pub use error::ConfigError;
