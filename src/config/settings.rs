//! User gradient configuration
//!
//! A JSON file lists extra gradients to build at startup. Each entry names
//! a source gradient (registered name or explicit colors) and an ordered
//! list of transforms; the result is registered under the entry's name.

use anyhow::{Context, Result};
use customcolour_core::{
    add_black, add_rgba, add_white, grayscale, invert, Gradient, Registry, DEFAULT_N,
};
use customcolour_types::{BlendSpec, Color, ColorStop, SegmentData};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Current config format version
pub const CONFIG_VERSION: u32 = 1;

/// Top-level configuration file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CmapConfig {
    /// Version of the config format
    #[serde(default = "default_version")]
    pub version: u32,
    /// Gradients to build, in order
    #[serde(default)]
    pub gradients: Vec<CustomGradientConfig>,
}

fn default_version() -> u32 {
    CONFIG_VERSION
}

fn default_ncolor() -> usize {
    DEFAULT_N
}

/// One user-defined gradient
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CustomGradientConfig {
    /// Name the finished gradient is registered under
    pub name: String,
    pub source: SourceSpec,
    /// Transforms applied to the source, in order
    #[serde(default)]
    pub ops: Vec<GradientOp>,
}

/// Where a user gradient starts from
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum SourceSpec {
    /// A gradient already in the registry
    Named(String),
    /// Evenly spaced colors
    Colors {
        colors: Vec<Color>,
        #[serde(default = "default_ncolor")]
        ncolor: usize,
    },
    /// Explicitly positioned stops
    Stops {
        stops: Vec<ColorStop>,
        #[serde(default = "default_ncolor")]
        ncolor: usize,
    },
    /// Per-channel segment anchors
    Segments {
        data: SegmentData,
        #[serde(default = "default_ncolor")]
        ncolor: usize,
    },
}

/// Transform step applied to a user gradient
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum GradientOp {
    Grayscale {
        #[serde(default)]
        ncolor: Option<usize>,
    },
    Invert {
        #[serde(default)]
        ncolor: Option<usize>,
    },
    Reverse,
    AddRgba {
        color: Color,
        #[serde(default)]
        blend: BlendSpec,
    },
    AddWhite {
        #[serde(default)]
        blend: BlendSpec,
    },
    AddBlack {
        #[serde(default)]
        blend: BlendSpec,
    },
}

impl GradientOp {
    pub fn apply(&self, gradient: &Gradient) -> customcolour_core::Result<Gradient> {
        match self {
            GradientOp::Grayscale { ncolor } => grayscale(gradient, *ncolor),
            GradientOp::Invert { ncolor } => invert(gradient, *ncolor),
            GradientOp::Reverse => Ok(gradient.reversed()),
            GradientOp::AddRgba { color, blend } => add_rgba(gradient, *color, blend),
            GradientOp::AddWhite { blend } => add_white(gradient, blend),
            GradientOp::AddBlack { blend } => add_black(gradient, blend),
        }
    }
}

impl CustomGradientConfig {
    /// Build the gradient against `registry` without registering it
    pub fn build(&self, registry: &Registry) -> Result<Gradient> {
        let mut gradient = match &self.source {
            SourceSpec::Named(name) => registry.resolve(name.as_str())?.clone(),
            SourceSpec::Colors { colors, ncolor } => {
                Gradient::from_colors(self.name.as_str(), colors, *ncolor)?
            }
            SourceSpec::Stops { stops, ncolor } => {
                Gradient::from_stops(self.name.as_str(), stops, *ncolor)?
            }
            SourceSpec::Segments { data, ncolor } => {
                Gradient::from_segments(self.name.as_str(), data, *ncolor)?
            }
        };
        for op in &self.ops {
            gradient = op.apply(&gradient)?;
        }
        Ok(gradient.renamed(self.name.as_str()))
    }
}

impl CmapConfig {
    /// Load configuration from the default location.
    ///
    /// A missing file, or no config directory at all, is an empty
    /// configuration.
    pub fn load() -> Result<Self> {
        Self::load_or_default(Self::config_path())
    }

    fn load_or_default(config_path: Option<PathBuf>) -> Result<Self> {
        let Some(config_path) = config_path else {
            info!("No config directory available, using defaults");
            return Ok(Self::default());
        };

        if !config_path.exists() {
            info!("No gradient config at {}, using defaults", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from_path(&config_path)
    }

    /// Get the configuration file path, if the platform has a config directory
    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("org", "customcolour", "customcolour")
            .map(|dirs| dirs.config_dir().join("colormaps.json"))
    }

    /// Load configuration from a specific file path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        info!(
            "Loaded {} gradient definitions from {}",
            config.gradients.len(),
            path.display()
        );
        Ok(config)
    }

    /// Save configuration to a specific file path
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Build and register every gradient, in file order.
    ///
    /// Later entries may use earlier ones as their source. If any entry
    /// fails, `registry` is left untouched.
    pub fn apply(&self, registry: &mut Registry) -> Result<usize> {
        let mut staged = registry.clone();
        for entry in &self.gradients {
            let gradient = entry
                .build(&staged)
                .with_context(|| format!("Failed to build gradient '{}'", entry.name))?;
            staged
                .register(gradient)
                .with_context(|| format!("Failed to register gradient '{}'", entry.name))?;
            debug!("Registered user gradient '{}'", entry.name);
        }
        *registry = staged;
        Ok(self.gradients.len())
    }
}

impl Default for CmapConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            gradients: Vec::new(),
        }
    }
}
