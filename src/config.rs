//! Chart configuration: titles, window size and icon.

use crate::error::{PlotError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_WINDOW_TITLE: &str = "Function Plotter";
pub const DEFAULT_WINDOW_SIZE: [f32; 2] = [800.0, 600.0];

/// Text and window settings for a chart.
///
/// Every field is optional in JSON; missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub window_title: String,
    pub chart_title: Option<String>,
    pub x_axis_title: Option<String>,
    pub y_axis_title: Option<String>,
    /// Inner size of the window in points.
    pub window_size: [f32; 2],
    /// Image file used as the window icon.
    pub icon: Option<PathBuf>,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            window_title: DEFAULT_WINDOW_TITLE.to_string(),
            chart_title: None,
            x_axis_title: None,
            y_axis_title: None,
            window_size: DEFAULT_WINDOW_SIZE,
            icon: None,
        }
    }
}

impl ChartConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| PlotError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&json)?;
        tracing::debug!(path = %path.display(), "chart config loaded");
        Ok(config)
    }
}
