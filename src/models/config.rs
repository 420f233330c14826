use std::collections::HashMap;
use std::path::Path;

use pixelworks_core::{HistogramChart, Kernel};
use serde::Deserialize;

use crate::error::ConfigError;

/// Names that always resolve to the built-in kernels.
pub const BUILTIN_KERNELS: [&str; 2] = ["blur", "sharpen"];

/// Engine configuration, validated.
#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    /// Histogram chart geometry
    pub histogram: HistogramConfig,

    /// Extra named kernels usable with `convolve`
    kernels: HashMap<String, Kernel>,
}

/// Histogram chart settings
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct HistogramConfig {
    /// Side length of the rendered chart in pixels
    #[serde(default = "default_chart_size")]
    pub size: usize,

    /// Grid line distance in pixels (0 disables the grid)
    #[serde(default = "default_grid_spacing")]
    pub grid_spacing: usize,
}

fn default_chart_size() -> usize {
    256
}

fn default_grid_spacing() -> usize {
    10
}

impl Default for HistogramConfig {
    fn default() -> Self {
        Self {
            size: default_chart_size(),
            grid_spacing: default_grid_spacing(),
        }
    }
}

impl HistogramConfig {
    pub fn chart(&self) -> HistogramChart {
        HistogramChart::new(self.size, self.grid_spacing)
    }
}

/// On-disk shape of the configuration file
#[derive(Debug, Deserialize, Default)]
struct RawConfig {
    #[serde(default)]
    histogram: HistogramConfig,

    #[serde(default)]
    kernels: HashMap<String, Vec<Vec<f64>>>,
}

impl EngineConfig {
    /// Parse and validate a YAML document.
    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig = serde_yaml::from_str(content)?;
        if raw.histogram.size == 0 {
            return Err(ConfigError::HistogramSize(raw.histogram.size));
        }

        let mut config = Self {
            histogram: raw.histogram,
            kernels: HashMap::new(),
        };
        for (name, rows) in raw.kernels {
            let kernel = Kernel::new(rows).map_err(|source| ConfigError::Kernel {
                name: name.clone(),
                source,
            })?;
            config.add_kernel(name, kernel)?;
        }
        Ok(config)
    }

    /// Load configuration from a YAML file.
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration from a YAML file, falling back to defaults on any
    /// error.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load_from_path(path) {
            Ok(config) => {
                tracing::info!(
                    path = %path.display(),
                    kernels = config.kernels.len(),
                    histogram_size = config.histogram.size,
                    "Loaded configuration"
                );
                config
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), %e, "Failed to load config, using defaults");
                Self::default()
            }
        }
    }

    /// Register a named kernel. Built-in names are rejected.
    pub fn add_kernel(&mut self, name: impl Into<String>, kernel: Kernel) -> Result<(), ConfigError> {
        let name = name.into();
        if BUILTIN_KERNELS.contains(&name.as_str()) {
            return Err(ConfigError::ReservedKernel(name));
        }
        self.kernels.insert(name, kernel);
        Ok(())
    }

    /// Look up a kernel by name, built-ins first.
    pub fn kernel(&self, name: &str) -> Option<Kernel> {
        match name {
            "blur" => Some(Kernel::blur()),
            "sharpen" => Some(Kernel::sharpen()),
            _ => self.kernels.get(name).cloned(),
        }
    }

    /// Every resolvable kernel name, sorted.
    pub fn kernel_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = BUILTIN_KERNELS
            .iter()
            .copied()
            .chain(self.kernels.keys().map(String::as_str))
            .collect();
        names.sort_unstable();
        names
    }
}
