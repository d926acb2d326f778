//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`FOLIO_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use folio_core::{ContactDispatcher, OutboxTransport, SimulatedTransport};
use folio_math::Rgba;
use folio_particles::{FieldConfig, Palette};
use serde::{Serialize, Deserialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Window configuration
    #[serde(default)]
    pub window: WindowConfig,
    /// Particle field configuration
    #[serde(default)]
    pub particles: ParticlesConfig,
    /// Rendering configuration
    #[serde(default)]
    pub rendering: RenderingConfig,
    /// Theme persistence
    #[serde(default)]
    pub theme: ThemeConfig,
    /// Contact form delivery
    #[serde(default)]
    pub contact: ContactConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`FOLIO_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        // Load user config (optional)
        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // Environment variables override everything
        // FOLIO_WINDOW__TITLE=Test -> window.title = "Test"
        figment = figment.merge(Env::prefixed("FOLIO_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Window width in pixels
    pub width: u32,
    /// Window height in pixels
    pub height: u32,
    /// Start in fullscreen mode
    pub fullscreen: bool,
    /// Enable VSync
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Folio".to_string(),
            width: 1280,
            height: 720,
            fullscreen: false,
            vsync: true,
        }
    }
}

/// Particle field configuration
///
/// Mirrors [`FieldConfig`] with colours as hex strings, plus the host's
/// frame pacing and RNG seed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticlesConfig {
    pub initial_count: usize,
    pub gravity: f32,
    pub friction: f32,
    pub bounce: f32,
    pub initial_speed: f32,
    pub min_size: f32,
    pub size_range: f32,
    pub min_lifespan: u32,
    pub lifespan_range: u32,
    pub pointer_spawn_chance: f64,
    pub ambient_spawn_chance: f64,
    pub population_floor: usize,
    pub connection_distance: f32,
    pub connection_alpha_scale: f32,
    pub connection_width: f32,
    /// `#rrggbb` connection line colour
    pub connection_color: String,
    /// `#rrggbb` particle colours; empty uses the built-in palette
    pub palette: Vec<String>,
    /// Fixed RNG seed; None seeds from the OS
    pub seed: Option<u64>,
    /// Simulation steps per second
    pub frame_rate: f32,
}

impl Default for ParticlesConfig {
    fn default() -> Self {
        let field = FieldConfig::default();
        Self {
            initial_count: field.initial_count,
            gravity: field.gravity,
            friction: field.friction,
            bounce: field.bounce,
            initial_speed: field.initial_speed,
            min_size: field.min_size,
            size_range: field.size_range,
            min_lifespan: field.min_lifespan,
            lifespan_range: field.lifespan_range,
            pointer_spawn_chance: field.pointer_spawn_chance,
            ambient_spawn_chance: field.ambient_spawn_chance,
            population_floor: field.population_floor,
            connection_distance: field.connection_distance,
            connection_alpha_scale: field.connection_alpha_scale,
            connection_width: field.connection_width,
            connection_color: "#3b82f6".to_string(),
            palette: Vec::new(),
            seed: None,
            frame_rate: 60.0,
        }
    }
}

impl ParticlesConfig {
    /// Build the simulation config
    ///
    /// An unparseable connection colour falls back to the default one.
    pub fn to_field_config(&self) -> FieldConfig {
        let defaults = FieldConfig::default();
        let connection_color = Rgba::from_hex(&self.connection_color).unwrap_or_else(|| {
            log::warn!(
                "Invalid connection colour '{}', using default",
                self.connection_color
            );
            defaults.connection_color
        });

        FieldConfig {
            initial_count: self.initial_count,
            gravity: self.gravity,
            friction: self.friction,
            bounce: self.bounce,
            initial_speed: self.initial_speed,
            min_size: self.min_size,
            size_range: self.size_range,
            min_lifespan: self.min_lifespan,
            lifespan_range: self.lifespan_range,
            pointer_spawn_chance: self.pointer_spawn_chance.clamp(0.0, 1.0),
            ambient_spawn_chance: self.ambient_spawn_chance.clamp(0.0, 1.0),
            population_floor: self.population_floor,
            connection_distance: self.connection_distance,
            connection_alpha_scale: self.connection_alpha_scale,
            connection_width: self.connection_width,
            connection_color,
        }
    }

    /// Particle palette, or None to keep the built-in one
    pub fn palette(&self) -> Option<Palette> {
        if self.palette.is_empty() {
            return None;
        }
        let palette = Palette::from_hex_list(self.palette.as_slice());
        if palette.is_none() {
            log::warn!("Invalid particle palette {:?}, using default", self.palette);
        }
        palette
    }

    /// Time between simulation steps
    pub fn frame_interval(&self) -> Duration {
        let rate = if self.frame_rate > 0.0 { self.frame_rate } else { 60.0 };
        Duration::from_secs_f64(1.0 / rate as f64)
    }
}

/// Rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderingConfig {
    /// Clear colour [r, g, b, a] overriding the theme background
    pub background_color: Option<[f32; 4]>,
    /// Segments used to approximate the pointer ring
    pub ring_segments: usize,
}

impl Default for RenderingConfig {
    fn default() -> Self {
        Self {
            background_color: None,
            ring_segments: 48,
        }
    }
}

/// Theme persistence configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Directory holding the saved theme preference
    pub dir: PathBuf,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("data"),
        }
    }
}

/// Contact form delivery configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    /// Simulated submission delay in milliseconds
    pub delay_ms: u64,
    /// Write submissions here instead of simulating delivery
    pub outbox_dir: Option<PathBuf>,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            delay_ms: folio_core::SIMULATED_DELAY.as_millis() as u64,
            outbox_dir: None,
        }
    }
}

impl ContactConfig {
    /// Start a dispatcher for the configured transport
    ///
    /// With an outbox directory submissions are written there as RON files,
    /// otherwise delivery is simulated after `delay_ms`.
    pub fn dispatcher(&self) -> ContactDispatcher {
        let dispatcher = match &self.outbox_dir {
            Some(dir) => ContactDispatcher::new(OutboxTransport::new(dir.clone())),
            None => ContactDispatcher::new(SimulatedTransport::new(Duration::from_millis(
                self.delay_ms,
            ))),
        };
        log::debug!("Contact form delivery via {}", dispatcher.transport_name());
        dispatcher
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
    /// Show particle stats in the window title
    pub show_stats: bool,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            show_stats: false,
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.window.width, 1280);
        assert_eq!(config.particles.initial_count, 30);
        assert_eq!(config.contact.delay_ms, 2000);
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let toml = toml::to_string(&config).unwrap();
        assert!(toml.contains("title"));
        assert!(toml.contains("population_floor"));
    }

    #[test]
    fn test_field_config_matches_defaults() {
        let field = ParticlesConfig::default().to_field_config();
        assert_eq!(field, FieldConfig::default());
    }

    #[test]
    fn test_bad_connection_color_falls_back() {
        let particles = ParticlesConfig {
            connection_color: "blue".to_string(),
            ..Default::default()
        };
        assert_eq!(
            particles.to_field_config().connection_color,
            FieldConfig::default().connection_color
        );
    }

    #[test]
    fn test_spawn_chances_clamped() {
        let particles = ParticlesConfig {
            pointer_spawn_chance: 4.0,
            ambient_spawn_chance: -1.0,
            ..Default::default()
        };
        let field = particles.to_field_config();
        assert_eq!(field.pointer_spawn_chance, 1.0);
        assert_eq!(field.ambient_spawn_chance, 0.0);
    }

    #[test]
    fn test_frame_interval() {
        let particles = ParticlesConfig {
            frame_rate: 50.0,
            ..Default::default()
        };
        assert_eq!(particles.frame_interval(), Duration::from_millis(20));

        let stalled = ParticlesConfig {
            frame_rate: 0.0,
            ..Default::default()
        };
        assert!(stalled.frame_interval() > Duration::ZERO);
    }

    #[test]
    fn test_contact_dispatcher_transport() {
        let simulated = ContactConfig {
            delay_ms: 0,
            outbox_dir: None,
        };
        assert_eq!(simulated.dispatcher().transport_name(), "simulated");

        let dir = tempfile::tempdir().unwrap();
        let outbox = ContactConfig {
            delay_ms: 0,
            outbox_dir: Some(dir.path().to_path_buf()),
        };
        assert_eq!(outbox.dispatcher().transport_name(), "outbox");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: AppConfig = toml::from_str("[particles]\ninitial_count = 10\n").unwrap();
        assert_eq!(config.particles.initial_count, 10);
        assert_eq!(config.particles.population_floor, 50);
        assert_eq!(config.window.title, "Folio");
    }
}
