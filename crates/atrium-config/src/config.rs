//! Configuration structs with sensible defaults and RON persistence.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const CONFIG_FILE: &str = "config.ron";

/// Top-level gallery configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// First-person walker settings.
    pub player: PlayerConfig,
    /// Door animation settings.
    pub doors: DoorConfig,
    /// Statue puzzle settings.
    pub statues: StatueConfig,
    /// Dark room planetarium settings.
    pub celestial: CelestialConfig,
    /// Frame loop settings for the headless session.
    pub session: SessionConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// First-person walker configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PlayerConfig {
    /// Camera height above the floor in meters.
    pub eye_height: f32,
    /// Walking distance per frame in meters.
    pub walk_speed: f32,
    /// Keyboard turn rate in radians per frame.
    pub turn_speed: f32,
    /// Mouse sensitivity multiplier (radians per pixel of mouse delta).
    pub mouse_sensitivity: f32,
    /// Half-width of the player's collision box in meters.
    pub body_radius: f32,
    /// Maximum horizontal distance at which doors and statues can be activated.
    pub reach: f32,
}

/// Door animation configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DoorConfig {
    /// Duration of a full open or close swing in milliseconds.
    pub animation_ms: u64,
}

/// Statue puzzle configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StatueConfig {
    /// Duration of a single quarter turn in milliseconds.
    pub turn_ms: u64,
}

/// Dark room planetarium configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CelestialConfig {
    /// Seed for the deterministic planet layout.
    pub seed: u64,
    /// Number of planets orbiting the sun.
    pub planet_count: u32,
    /// Sun spin in radians added every frame.
    pub sun_spin_per_frame: f32,
    /// Smallest orbit radius in meters.
    pub min_orbit_radius: f32,
    /// Largest orbit radius in meters.
    pub max_orbit_radius: f32,
    /// Largest per-frame orbital step in radians.
    pub max_orbit_step: f32,
}

/// Frame loop configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SessionConfig {
    /// Simulated display refresh rate in Hz.
    pub frame_rate: u32,
    /// Upper bound on frames rendered by the headless tour.
    pub max_frames: u64,
    /// Pace frames against the wall clock instead of simulating time.
    pub realtime: bool,
    /// Number of tours to run back to back. `config.ron` is re-read between
    /// tours, so edits apply to the next one.
    pub tours: u32,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
    /// Emit a frame summary every N frames (0 = never).
    pub frame_summary_interval: u64,
}

// --- Default implementations ---

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            eye_height: 1.7,
            walk_speed: 0.1,
            turn_speed: 0.03,
            mouse_sensitivity: 0.002,
            body_radius: 0.3,
            reach: 3.0,
        }
    }
}

impl Default for DoorConfig {
    fn default() -> Self {
        Self { animation_ms: 1000 }
    }
}

impl Default for StatueConfig {
    fn default() -> Self {
        Self { turn_ms: 1000 }
    }
}

impl Default for CelestialConfig {
    fn default() -> Self {
        Self {
            seed: 0x5EED_0A7A,
            planet_count: 10,
            sun_spin_per_frame: 0.001,
            min_orbit_radius: 4.0,
            max_orbit_radius: 14.0,
            max_orbit_step: 0.01,
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            frame_rate: 60,
            max_frames: 60 * 120,
            realtime: false,
            tours: 1,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            frame_summary_interval: 60,
        }
    }
}

impl DoorConfig {
    /// Swing duration as a [`Duration`].
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.animation_ms)
    }
}

impl StatueConfig {
    /// Quarter-turn duration as a [`Duration`].
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.turn_ms)
    }
}

impl SessionConfig {
    /// Time between two simulated frames. A zero frame rate is treated as 1 Hz.
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.frame_rate.max(1)))
    }
}

// --- Load / Save / Reload ---

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE);

        if config_path.exists() {
            let config = Self::read(&config_path)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(|source| ConfigError::Write {
            path: config_dir.to_path_buf(),
            source,
        })?;

        let config_path = config_dir.join(CONFIG_FILE);
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .enumerate_arrays(false);

        let serialized = ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::Serialize)?;

        std::fs::write(&config_path, serialized).map_err(|source| ConfigError::Write {
            path: config_path.clone(),
            source,
        })?;
        Ok(())
    }

    /// Hot-reload: returns `Some(new_config)` if the file changed, `None` otherwise.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let new_config = Self::read(&config_dir.join(CONFIG_FILE))?;

        if &new_config != self {
            log::info!("Config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        ron::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}
