//! Orientation and selection state shared with the web frontend.
//!
//! These types avoid platform APIs so the controller can be exercised on the
//! host. The render loop reads them once per frame through [`FrameState`].

use crate::constants::{DEFAULT_COLOR, HIGHLIGHT_COLOR, HOVER_PRESETS, INITIAL_PITCH, INITIAL_YAW};
use crate::regions::{RegionId, RegionSet};
use serde::{Deserialize, Serialize};

/// Globe orientation in radians. `yaw` is the globe's `rotation.y`, `pitch`
/// its `rotation.x`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RotationState {
    pub yaw: f64,
    pub pitch: f64,
}

impl RotationState {
    pub const fn new(yaw: f64, pitch: f64) -> Self {
        Self { yaw, pitch }
    }

    /// Fixed orientation applied when a region is picked from the menu.
    pub fn preset(id: RegionId) -> Self {
        let (pitch, yaw) = HOVER_PRESETS[id.index()];
        Self { yaw, pitch }
    }

    #[inline]
    pub(crate) fn step(&mut self, (d_yaw, d_pitch): (f64, f64)) {
        self.yaw += d_yaw;
        self.pitch += d_pitch;
    }
}

impl Default for RotationState {
    fn default() -> Self {
        Self::new(INITIAL_YAW, INITIAL_PITCH)
    }
}

/// The one highlighted region. Never empty, never more than one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActiveSelection {
    pub region: RegionId,
}

impl ActiveSelection {
    pub fn id(&self) -> u32 {
        self.region.index() as u32
    }
}

impl Default for ActiveSelection {
    fn default() -> Self {
        Self {
            region: RegionId::India,
        }
    }
}

/// Snapshot handed to the render loop.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameState {
    pub rotation: RotationState,
    pub selection: ActiveSelection,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub highlight: String,
    pub default: String,
}

impl Palette {
    /// Polygon colour for a country code under the given highlighted set.
    pub fn color_for<'a>(&'a self, region: &RegionSet, iso_a3: &str) -> &'a str {
        if region.contains(iso_a3) {
            &self.highlight
        } else {
            &self.default
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            highlight: HIGHLIGHT_COLOR.to_string(),
            default: DEFAULT_COLOR.to_string(),
        }
    }
}
