use clap::ValueEnum;
use color_eyre::eyre::{eyre, Result, WrapErr};
use log::warn;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::spark::{DigitAlignment, DEFAULT_FILL};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RenderStyle {
    /// Single-row block gradient
    Glyphs,
    /// Multi-row bar histogram
    Bars,
    /// Vertical digit axis
    Axis,
    /// Bars with the digit axis underneath
    #[default]
    Chart,
}

impl RenderStyle {
    pub fn label(self) -> &'static str {
        match self {
            Self::Glyphs => "Glyphs",
            Self::Bars => "Bars",
            Self::Axis => "Axis",
            Self::Chart => "Chart",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub style: RenderStyle,
    pub fill_char: char,
    pub axis_tick: usize,
    pub axis_alignment: DigitAlignment,
    pub poll_interval_ms: u64,
    pub history_length: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            style: RenderStyle::Chart,
            fill_char: DEFAULT_FILL,
            axis_tick: 4,
            axis_alignment: DigitAlignment::Top,
            poll_interval_ms: 500,
            history_length: 120,
        }
    }
}

impl AppConfig {
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("heapspark").join("config.toml"))
    }

    /// Loads from `path`, or the default location. Missing files give the
    /// defaults; unparsable files give the defaults with a warning.
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path.map(Path::to_path_buf).or_else(Self::default_path) else {
            return Self::default();
        };
        match fs::read_to_string(&path) {
            Ok(contents) => toml::from_str(&contents).unwrap_or_else(|e| {
                warn!("ignoring invalid config {}: {e}", path.display());
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    /// Writes the config as TOML and returns where it went.
    pub fn save(&self, path: Option<&Path>) -> Result<PathBuf> {
        let path = path
            .map(Path::to_path_buf)
            .or_else(Self::default_path)
            .ok_or_else(|| eyre!("no config directory on this platform"))?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .wrap_err_with(|| format!("could not create {}", parent.display()))?;
        }
        let contents = toml::to_string_pretty(self)?;
        fs::write(&path, contents)
            .wrap_err_with(|| format!("could not write {}", path.display()))?;
        Ok(path)
    }
}
