use crate::cli::output::OutputFormat;
use crate::CaseStyle;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const LOCAL_CONFIG_FILE: &str = ".recase.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Config {
    pub style: CaseStyle,
    pub all_styles: bool,
    pub color: bool,
    pub format: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            style: CaseStyle::Kebab,
            all_styles: false,
            color: true,
            format: OutputFormat::Text,
        }
    }
}

/// One config file. Keys left out of the file keep the lower layer's value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub style: Option<CaseStyle>,
    pub all_styles: Option<bool>,
    pub color: Option<bool>,
    pub format: Option<OutputFormat>,
}

impl ConfigFile {
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }
}

/// Settings given on the command line; `None` leaves the file value in place.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub style: Option<CaseStyle>,
    pub all_styles: bool,
    pub no_color: bool,
    pub format: Option<OutputFormat>,
}

impl Config {
    /// Load configuration with priority: CLI args > local config > global config > defaults
    pub fn load(overrides: Overrides) -> Result<Self> {
        Self::load_from(
            Self::global_config_path().as_deref(),
            Path::new(LOCAL_CONFIG_FILE),
            overrides,
        )
    }

    pub fn load_from(global: Option<&Path>, local: &Path, overrides: Overrides) -> Result<Self> {
        let mut config = Self::default();

        if let Some(global_path) = global {
            if global_path.exists() {
                tracing::debug!(path = %global_path.display(), "loading global config");
                config = config.merge(ConfigFile::from_file(global_path)?);
            }
        }

        if local.exists() {
            tracing::debug!(path = %local.display(), "loading local config");
            config = config.merge(ConfigFile::from_file(local)?);
        }

        Ok(config.apply(overrides))
    }

    fn merge(mut self, file: ConfigFile) -> Self {
        if let Some(style) = file.style {
            self.style = style;
        }
        if let Some(all_styles) = file.all_styles {
            self.all_styles = all_styles;
        }
        if let Some(color) = file.color {
            self.color = color;
        }
        if let Some(format) = file.format {
            self.format = format;
        }
        self
    }

    fn apply(mut self, overrides: Overrides) -> Self {
        // An explicit style on the command line replaces `all_styles` from a file.
        if let Some(style) = overrides.style {
            self.style = style;
            self.all_styles = false;
        }
        if overrides.all_styles {
            self.all_styles = true;
        }
        if overrides.no_color {
            self.color = false;
        }
        if let Some(format) = overrides.format {
            self.format = format;
        }
        self
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "recase").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}
