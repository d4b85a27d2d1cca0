use crate::colors::PALETTES;
use chrono::FixedOffset;
use lifeclock::settings::Settings;
use std::time::Duration;

/// Fastest and slowest interactive tick the +/- keys allow
pub const MIN_RATE: Duration = Duration::from_millis(50);
pub const MAX_RATE: Duration = Duration::from_millis(2000);

/// Largest grid side; past this cells are smaller than a terminal character
pub const MAX_GRID: usize = 256;

/// Runtime configuration for the watch face
#[derive(Clone, Debug)]
pub struct FaceConfig {
    pub grid_size: usize,
    pub rate: Duration,
    pub ambient_rate: Duration,
    pub initial_cells: usize,
    pub reseed_cells: usize,
    pub seed: Option<u64>,
    pub color_scheme: u8,
    pub show_grid: bool,
    pub show_seconds: bool,
    pub show_status: bool,
    pub utc_offset: Option<FixedOffset>,
}

impl From<&Settings> for FaceConfig {
    fn from(s: &Settings) -> Self {
        Self {
            grid_size: s.grid_size.clamp(1, MAX_GRID),
            rate: Duration::from_millis(s.rate_ms).clamp(MIN_RATE, MAX_RATE),
            ambient_rate: Duration::from_millis(s.ambient_rate_ms.max(1000)),
            initial_cells: s.initial_cells,
            reseed_cells: s.reseed_cells,
            seed: None,
            color_scheme: s.color_scheme.min(PALETTES.len() as u8 - 1),
            show_grid: s.show_grid,
            show_seconds: s.show_seconds,
            show_status: s.show_status,
            utc_offset: s.utc_offset_minutes.and_then(|m| FixedOffset::east_opt(m * 60)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_are_clamped() {
        let settings = Settings {
            grid_size: 0,
            rate_ms: 1,
            color_scheme: 12,
            utc_offset_minutes: Some(90),
            ..Settings::default()
        };
        let config = FaceConfig::from(&settings);
        assert_eq!(config.grid_size, 1);
        assert_eq!(config.rate, MIN_RATE);
        assert_eq!(config.color_scheme, PALETTES.len() as u8 - 1);
        assert_eq!(config.utc_offset.map(|o| o.local_minus_utc()), Some(5400));
    }

    #[test]
    fn huge_grid_is_capped() {
        let settings = Settings {
            grid_size: 100_000,
            ..Settings::default()
        };
        assert_eq!(FaceConfig::from(&settings).grid_size, MAX_GRID);
    }

    #[test]
    fn absurd_offset_is_dropped() {
        let settings = Settings {
            utc_offset_minutes: Some(100_000),
            ..Settings::default()
        };
        assert!(FaceConfig::from(&settings).utc_offset.is_none());
    }
}
