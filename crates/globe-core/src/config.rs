//! Runtime configuration.
//!
//! Every field has a default, so a page can override a single value with a
//! small JSON object (e.g. `{"host":{"width":800}}`) on the canvas element.

use crate::constants::{
    DETAILED_POLYGON_RESOLUTION, INITIAL_PITCH, INITIAL_POLYGON_RESOLUTION, INITIAL_YAW,
    POLYGON_UPGRADE_DELAY_MS, WHEEL_DEAD_ZONE,
};
use crate::error::ConfigError;
use crate::markers::{default_markers, MarkerPoint};
use crate::state::{Palette, RotationState};
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    pub dead_zone: f64,
    pub initial_rotation: RotationState,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            dead_zone: WHEEL_DEAD_ZONE,
            initial_rotation: RotationState::new(INITIAL_YAW, INITIAL_PITCH),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TessellationConfig {
    pub initial_resolution: u32,
    pub detailed_resolution: u32,
    pub upgrade_delay_ms: u64,
}

impl TessellationConfig {
    pub fn upgrade_delay(&self) -> Duration {
        Duration::from_millis(self.upgrade_delay_ms)
    }
}

impl Default for TessellationConfig {
    fn default() -> Self {
        Self {
            initial_resolution: INITIAL_POLYGON_RESOLUTION,
            detailed_resolution: DETAILED_POLYGON_RESOLUTION,
            upgrade_delay_ms: POLYGON_UPGRADE_DELAY_MS,
        }
    }
}

/// Options forwarded verbatim to the scene host when it is created.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HostOptions {
    pub width: u32,
    pub height: u32,
    pub max_pixel_ratio: f64,
    pub background: String,
    pub globe_color: String,
    pub globe_opacity: f64,
    pub show_atmosphere: bool,
    pub ambient_light: f64,
    pub camera_fov: f64,
    pub camera_z: f64,
    pub hex_margin: f64,
    pub point_altitude: f64,
    pub point_resolution: u32,
    pub ring_resolution: u32,
    pub auto_rotate: bool,
    pub rotate_speed: f64,
    pub polygons_url: String,
}

impl Default for HostOptions {
    fn default() -> Self {
        Self {
            width: 600,
            height: 600,
            max_pixel_ratio: 2.0,
            background: "#ffffff".to_string(),
            globe_color: "#ffffff".to_string(),
            globe_opacity: 0.2,
            show_atmosphere: false,
            ambient_light: 1.3,
            camera_fov: 45.0,
            camera_z: 270.0,
            hex_margin: 0.5,
            point_altitude: 0.002,
            point_resolution: 64,
            ring_resolution: 64,
            auto_rotate: true,
            rotate_speed: 0.8,
            polygons_url: "globe-data-min.json".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobeConfig {
    pub controller: ControllerConfig,
    pub tessellation: TessellationConfig,
    pub palette: Palette,
    pub host: HostOptions,
    pub markers: Vec<MarkerPoint>,
}

impl Default for GlobeConfig {
    fn default() -> Self {
        Self {
            controller: ControllerConfig::default(),
            tessellation: TessellationConfig::default(),
            palette: Palette::default(),
            host: HostOptions::default(),
            markers: default_markers(),
        }
    }
}

impl GlobeConfig {
    /// Parse a JSON override document; missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let cfg: GlobeConfig = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let dz = self.controller.dead_zone;
        if !dz.is_finite() || dz < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "dead_zone must be a non-negative number, got {dz}"
            )));
        }
        let r = self.controller.initial_rotation;
        if !r.yaw.is_finite() || !r.pitch.is_finite() {
            return Err(ConfigError::Invalid("initial_rotation must be finite".into()));
        }
        if self.host.width == 0 || self.host.height == 0 {
            return Err(ConfigError::Invalid("host size must be non-zero".into()));
        }
        if self.tessellation.detailed_resolution < self.tessellation.initial_resolution {
            return Err(ConfigError::Invalid(
                "detailed_resolution is coarser than initial_resolution".into(),
            ));
        }
        Ok(())
    }
}
