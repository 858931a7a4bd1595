use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Application configuration loaded from config.yaml
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct AppConfig {
    /// Where the mixing LUT comes from
    #[serde(default)]
    pub lut: LutConfig,

    /// Gradient and swatch rendering settings
    #[serde(default)]
    pub gradient: GradientConfig,
}

/// LUT source configuration. A raw `path` wins over `transport`.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct LutConfig {
    /// Raw LUT file (3×64³ bytes plus padding, no header)
    #[serde(default)]
    pub path: Option<PathBuf>,

    /// File holding the base64 transport string
    #[serde(default)]
    pub transport: Option<PathBuf>,
}

/// Where to read the LUT from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LutSource {
    /// Raw LUT bytes on disk
    Raw(PathBuf),
    /// Base64 transport string on disk
    Transport(PathBuf),
}

impl std::fmt::Display for LutSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LutSource::Raw(path) => write!(f, "raw {}", path.display()),
            LutSource::Transport(path) => write!(f, "transport {}", path.display()),
        }
    }
}

/// Gradient and swatch rendering settings
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct GradientConfig {
    /// Steps used when a request does not specify any
    pub default_steps: usize,

    /// Upper bound on requested steps
    pub max_steps: usize,

    /// Width of one swatch in rendered PNGs
    pub swatch_width: u32,

    /// Height of rendered PNGs
    pub swatch_height: u32,
}

impl Default for GradientConfig {
    fn default() -> Self {
        Self {
            default_steps: 9,
            max_steps: 256,
            swatch_width: 48,
            swatch_height: 48,
        }
    }
}

impl AppConfig {
    /// Load configuration from a YAML file.
    ///
    /// Without a path, or when the file cannot be read or parsed, defaults
    /// are used and a warning is logged.
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            tracing::debug!("No config file configured, using defaults");
            return Self::default();
        };

        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_yaml(&content) {
                Ok(config) => {
                    tracing::info!(
                        path = %path.display(),
                        lut = ?config.lut_source().map(|s| s.to_string()),
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, path = %path.display(), "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, path = %path.display(), "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    /// Parse configuration from a YAML string.
    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    /// Apply `LUT_FILE` / `LUT_TRANSPORT_FILE` style overrides.
    ///
    /// An override of either kind replaces both configured sources.
    pub fn with_lut_overrides(mut self, raw: Option<PathBuf>, transport: Option<PathBuf>) -> Self {
        if raw.is_some() || transport.is_some() {
            self.lut = LutConfig {
                path: raw,
                transport,
            };
        }
        self
    }

    /// The configured LUT source, if any.
    pub fn lut_source(&self) -> Option<LutSource> {
        match (&self.lut.path, &self.lut.transport) {
            (Some(path), _) => Some(LutSource::Raw(path.clone())),
            (None, Some(path)) => Some(LutSource::Transport(path.clone())),
            (None, None) => None,
        }
    }
}
