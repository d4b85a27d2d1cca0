use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Persistent preferences read from `config.toml`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub grid_size: usize,       // Cells per side of the square Life grid
    pub rate_ms: u64,           // Interactive tick interval
    pub ambient_rate_ms: u64,   // Repaint interval in ambient mode
    pub initial_cells: usize,   // Seeds scattered at startup
    pub reseed_cells: usize,    // Seeds scattered after the face is hidden
    pub color_scheme: u8,       // Index into colors::PALETTES
    pub show_grid: bool,
    pub show_seconds: bool,
    pub show_status: bool,
    pub utc_offset_minutes: Option<i32>, // Fixed offset instead of local time
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            grid_size: 32,
            rate_ms: 250,
            ambient_rate_ms: 60_000,
            initial_cells: 100,
            reseed_cells: 200,
            color_scheme: 0,
            show_grid: true,
            show_seconds: true,
            show_status: false,
            utc_offset_minutes: None,
        }
    }
}

impl Settings {
    /// Load from the default location, falling back to defaults
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(path) {
            Ok(content) => Self::parse(&content).unwrap_or_else(|e| {
                tracing::warn!(path = %path.display(), error = %e, "ignoring malformed config");
                Self::default()
            }),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "could not read config");
                Self::default()
            }
        }
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("lifeclock")
            .join("config.toml")
    }
}
