//! Configuration for streakwidget

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::copy::{CopyMode, CtaMode};
use crate::engine::DeriveOptions;
use crate::window::WindowMode;

/// Widget layout preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// Pill counter with name-first copy
    Compact,
    /// Large counter with contextual copy
    #[default]
    Hero,
}

impl std::str::FromStr for Layout {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "compact" | "pill" => Ok(Self::Compact),
            "hero" => Ok(Self::Hero),
            _ => Err(format!("Unknown layout: {}. Use: compact or hero", s)),
        }
    }
}

impl Layout {
    pub fn options(&self) -> DeriveOptions {
        match self {
            Self::Compact => DeriveOptions::compact(),
            Self::Hero => DeriveOptions::hero(),
        }
    }
}

/// Output format for derived plans
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "plain" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => Err(format!("Unknown format: {}. Use: text, json, or yaml", s)),
        }
    }
}

/// Main streakwidget configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Layout preset the overrides below apply to
    pub layout: Layout,

    /// Override: append day/days to the counter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pluralize: Option<bool>,

    /// Override: subtitle rule set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copy_mode: Option<CopyMode>,

    /// Override: CTA rule set, `none` hides the CTA
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cta_mode: Option<CtaSetting>,

    /// Override: slot-to-date mapping
    #[serde(skip_serializing_if = "Option::is_none")]
    pub window: Option<WindowMode>,

    /// Log level (trace, debug, info, warn, error)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,

    /// Default output format
    pub output: OutputFormat,
}

/// CTA override as written in YAML
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CtaSetting {
    None,
    Tiered,
    Binary,
}

impl From<CtaSetting> for Option<CtaMode> {
    fn from(setting: CtaSetting) -> Self {
        match setting {
            CtaSetting::None => None,
            CtaSetting::Tiered => Some(CtaMode::Tiered),
            CtaSetting::Binary => Some(CtaMode::Binary),
        }
    }
}

impl Config {
    /// Load configuration with fallback chain.
    ///
    /// Returns the config plus a warning for every fallback file that failed
    /// to load, so the caller can log them once logging is up.
    pub fn load(config_path: Option<&PathBuf>) -> Result<(Self, Vec<String>)> {
        if let Some(path) = config_path {
            let config = Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()))?;
            return Ok((config, Vec::new()));
        }

        // Project-local ./streakwidget.yml, then ~/.config/streakwidget/streakwidget.yml
        let mut candidates = vec![PathBuf::from("streakwidget.yml")];
        if let Some(config_dir) = dirs::config_dir() {
            candidates.push(config_dir.join("streakwidget").join("streakwidget.yml"));
        }

        Ok(Self::load_from_candidates(&candidates))
    }

    /// First candidate that exists and parses wins; broken files are skipped
    pub fn load_from_candidates(candidates: &[PathBuf]) -> (Self, Vec<String>) {
        let mut warnings = Vec::new();
        for path in candidates.iter().filter(|p| p.exists()) {
            match Self::load_from_file(path) {
                Ok(config) => return (config, warnings),
                Err(e) => warnings.push(format!("Failed to load config from {}: {:#}", path.display(), e)),
            }
        }
        (Self::default(), warnings)
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).context("Failed to read config file")?;
        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;
        Ok(config)
    }

    /// Save config to file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Resolve the layout preset plus overrides into derivation options
    pub fn options(&self) -> DeriveOptions {
        self.options_for(self.layout)
    }

    /// Same as [`Config::options`] but starting from another preset
    pub fn options_for(&self, layout: Layout) -> DeriveOptions {
        let mut options = layout.options();
        if let Some(pluralize) = self.pluralize {
            options.pluralize = pluralize;
        }
        if let Some(copy_mode) = self.copy_mode {
            options.copy_mode = copy_mode;
        }
        if let Some(cta) = self.cta_mode {
            options.cta_mode = cta.into();
        }
        if let Some(window) = self.window {
            options.window = window;
        }
        options
    }
}
