use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::config::{
    DEFAULT_GRID, DEFAULT_TICKS_PER_SECOND, MAX_GRID_SIDE, MAX_TICKS_PER_SECOND, MIN_GRID_WIDTH,
};
use crate::error::SettingsError;
use crate::game::ControlMode;
use crate::grid::GridSize;

const APP_DIR_NAME: &str = "astar-snake";
const SETTINGS_FILE_NAME: &str = "settings.json";

/// Optional values from one configuration layer (file or command line).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PartialSettings {
    pub grid_width: Option<u16>,
    pub grid_height: Option<u16>,
    pub ticks_per_second: Option<u32>,
    pub start_mode: Option<ControlMode>,
    pub seed: Option<u64>,
}

impl PartialSettings {
    /// Layers `over` on top of `self`; values set in `over` win.
    #[must_use]
    pub fn merged_with(self, over: Self) -> Self {
        Self {
            grid_width: over.grid_width.or(self.grid_width),
            grid_height: over.grid_height.or(self.grid_height),
            ticks_per_second: over.ticks_per_second.or(self.ticks_per_second),
            start_mode: over.start_mode.or(self.start_mode),
            seed: over.seed.or(self.seed),
        }
    }
}

/// Fully resolved runtime settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub grid: GridSize,
    pub ticks_per_second: u32,
    pub start_mode: ControlMode,
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            grid: DEFAULT_GRID,
            ticks_per_second: DEFAULT_TICKS_PER_SECOND,
            start_mode: ControlMode::Auto,
            seed: None,
        }
    }
}

impl Settings {
    /// Fills gaps in `partial` with defaults and validates the result.
    pub fn resolve(partial: PartialSettings) -> Result<Self, SettingsError> {
        let defaults = Self::default();
        let settings = Self {
            grid: GridSize::new(
                partial.grid_width.unwrap_or(defaults.grid.width),
                partial.grid_height.unwrap_or(defaults.grid.height),
            ),
            ticks_per_second: partial.ticks_per_second.unwrap_or(defaults.ticks_per_second),
            start_mode: partial.start_mode.unwrap_or(defaults.start_mode),
            seed: partial.seed,
        };

        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), SettingsError> {
        if !(MIN_GRID_WIDTH..=MAX_GRID_SIDE).contains(&self.grid.width) {
            return Err(SettingsError::Invalid(format!(
                "grid width {} must be between {MIN_GRID_WIDTH} and {MAX_GRID_SIDE}",
                self.grid.width
            )));
        }
        if !(1..=MAX_GRID_SIDE).contains(&self.grid.height) {
            return Err(SettingsError::Invalid(format!(
                "grid height {} must be between 1 and {MAX_GRID_SIDE}",
                self.grid.height
            )));
        }
        if !(1..=MAX_TICKS_PER_SECOND).contains(&self.ticks_per_second) {
            return Err(SettingsError::Invalid(format!(
                "tick rate {} must be between 1 and {MAX_TICKS_PER_SECOND}",
                self.ticks_per_second
            )));
        }

        Ok(())
    }
}

/// Returns the platform-correct default settings path.
#[must_use]
pub fn settings_path() -> Option<PathBuf> {
    let mut base = dirs::config_dir()?;
    base.push(APP_DIR_NAME);
    base.push(SETTINGS_FILE_NAME);
    Some(base)
}

/// Loads the settings file layer.
///
/// An explicit `path` must exist. Without one, the default location is
/// tried and a missing file yields empty settings.
pub fn load_settings_file(path: Option<&Path>) -> Result<PartialSettings, SettingsError> {
    match path {
        Some(path) => load_from_path(path, true),
        None => match settings_path() {
            Some(default_path) => load_from_path(&default_path, false),
            None => Ok(PartialSettings::default()),
        },
    }
}

fn load_from_path(path: &Path, required: bool) -> Result<PartialSettings, SettingsError> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == io::ErrorKind::NotFound && !required => {
            return Ok(PartialSettings::default());
        }
        Err(source) => {
            return Err(SettingsError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    serde_json::from_str(&raw).map_err(|source| SettingsError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
