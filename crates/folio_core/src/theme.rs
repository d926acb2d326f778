//! Theme preference and its persistence
//!
//! The preference is the only state that outlives a session. It is stored as
//! a small RON file; a missing file means the default (dark) theme.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use folio_math::Rgba;

/// File name used inside the store directory
pub const THEME_FILE: &str = "theme.ron";

/// Colour scheme
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    /// Page background behind the particle layer
    pub fn background(self) -> Rgba {
        match self {
            Theme::Dark => Rgba::from_rgb8(0x03, 0x07, 0x12),
            Theme::Light => Rgba::from_rgb8(0xf9, 0xfa, 0xfb),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }
}

/// On-disk form of the preference
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct ThemePreference {
    theme: Theme,
}

/// Error loading or saving the theme preference
#[derive(Debug)]
pub enum ThemeError {
    /// IO error (permission denied, disk full, etc.)
    Io(io::Error),
    /// Parse error (corrupt preference file)
    Parse(ron::error::SpannedError),
    /// Serialization error
    Serialize(ron::Error),
}

impl From<io::Error> for ThemeError {
    fn from(e: io::Error) -> Self {
        ThemeError::Io(e)
    }
}

impl From<ron::error::SpannedError> for ThemeError {
    fn from(e: ron::error::SpannedError) -> Self {
        ThemeError::Parse(e)
    }
}

impl From<ron::Error> for ThemeError {
    fn from(e: ron::Error) -> Self {
        ThemeError::Serialize(e)
    }
}

impl std::fmt::Display for ThemeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemeError::Io(e) => write!(f, "Theme IO error: {}", e),
            ThemeError::Parse(e) => write!(f, "Theme parse error: {}", e),
            ThemeError::Serialize(e) => write!(f, "Theme serialize error: {}", e),
        }
    }
}

impl std::error::Error for ThemeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ThemeError::Io(e) => Some(e),
            ThemeError::Parse(e) => Some(e),
            ThemeError::Serialize(e) => Some(e),
        }
    }
}

/// Reads and writes the preference file in a directory
#[derive(Debug, Clone)]
pub struct ThemeStore {
    dir: PathBuf,
}

impl ThemeStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(THEME_FILE)
    }

    /// Load the saved theme, or the default if nothing was saved yet
    pub fn load(&self) -> Result<Theme, ThemeError> {
        load_from(&self.path())
    }

    /// Save the theme, creating the directory if needed
    pub fn save(&self, theme: Theme) -> Result<(), ThemeError> {
        fs::create_dir_all(&self.dir)?;
        let contents =
            ron::ser::to_string_pretty(&ThemePreference { theme }, ron::ser::PrettyConfig::new())?;
        fs::write(self.path(), contents)?;
        log::info!("Saved {} theme to {}", theme.name(), self.path().display());
        Ok(())
    }

    /// Toggle the stored theme and persist it
    pub fn toggle(&self, current: Theme) -> Result<Theme, ThemeError> {
        let next = current.toggled();
        self.save(next)?;
        Ok(next)
    }
}

fn load_from(path: &Path) -> Result<Theme, ThemeError> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Theme::default()),
        Err(e) => return Err(e.into()),
    };
    let preference: ThemePreference = ron::from_str(&contents)?;
    Ok(preference.theme)
}
