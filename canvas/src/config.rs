//! Viewer configuration: asset locations, scene extents, marker styling and
//! navigation policy.
//!
//! Every field has a default, so an empty JSON object is a valid config. The
//! host page may embed overrides as JSON; see [`ViewerConfig::from_json`].

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_CAMERA_ORBIT, DEFAULT_DOCUMENT_URL, DEFAULT_MARKER_FILL, DEFAULT_MODEL_URL, DEFAULT_WORKER_SRC,
    MARKER_RADIUS_PX,
};
use crate::mapping::ViewConfig;

/// Invalid viewer configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid viewer config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid viewer config: {field} must be positive and finite")]
    Extent { field: &'static str },
    #[error("invalid viewer config: marker radius must be positive")]
    MarkerRadius,
}

/// What happens to the click marker when the user changes page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerPolicy {
    /// The marker and the 3D selection survive navigation.
    #[default]
    KeepOnNavigate,
    /// Navigation clears the marker and hides the 3D hotspot.
    ClearOnNavigate,
}

/// Fill and size of the click marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerStyle {
    #[serde(default = "default_marker_radius")]
    pub radius: f64,
    #[serde(default = "default_marker_fill")]
    pub fill: String,
}

fn default_marker_radius() -> f64 {
    MARKER_RADIUS_PX
}

fn default_marker_fill() -> String {
    DEFAULT_MARKER_FILL.to_owned()
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self { radius: default_marker_radius(), fill: default_marker_fill() }
    }
}

/// Full configuration of one viewer instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// PDF to open on mount.
    pub document_url: String,
    /// PDF.js worker script.
    pub worker_src: String,
    /// GLB model shown in the 3D pane.
    pub model_url: String,
    pub view: ViewConfig,
    pub marker: MarkerStyle,
    pub marker_policy: MarkerPolicy,
    /// `camera-orbit` preset applied on every sync.
    pub camera_orbit: String,
    /// Whether the 3D viewer starts with drag/orbit input enabled.
    pub camera_interaction: bool,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            document_url: DEFAULT_DOCUMENT_URL.to_owned(),
            worker_src: DEFAULT_WORKER_SRC.to_owned(),
            model_url: DEFAULT_MODEL_URL.to_owned(),
            view: ViewConfig::default(),
            marker: MarkerStyle::default(),
            marker_policy: MarkerPolicy::default(),
            camera_orbit: DEFAULT_CAMERA_ORBIT.to_owned(),
            camera_interaction: true,
        }
    }
}

impl ViewerConfig {
    /// Parse and validate a JSON override. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for malformed JSON, non-positive extents, or a
    /// non-positive marker radius.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let cfg: Self = serde_json::from_str(raw)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Check the invariants the mapper and renderer rely on.
    ///
    /// # Errors
    ///
    /// See [`ViewerConfig::from_json`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.view.source_extent.is_usable() {
            return Err(ConfigError::Extent { field: "view.source_extent" });
        }
        if !self.view.target_extent.is_usable() {
            return Err(ConfigError::Extent { field: "view.target_extent" });
        }
        if !(self.marker.radius.is_finite() && self.marker.radius > 0.0) {
            return Err(ConfigError::MarkerRadius);
        }
        Ok(())
    }
}
