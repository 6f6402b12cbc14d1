//! Scroll / hover driven region highlighting.
//!
//! The globe is split into three yaw bands (India, Africa, Westerns). Wheel
//! events walk the rotation through the bands in fixed steps and switch the
//! highlighted region as they go; hover events jump straight to a preset.
//! Past the outermost band the wheel is handed back to the page.

use crate::config::ControllerConfig;
use crate::constants::{
    BACKWARD_AFRICA_ABOVE_YAW, BACKWARD_AFRICA_STEP, BACKWARD_INDIA_FROM_YAW,
    BACKWARD_INDIA_STEP, FORWARD_AFRICA_BELOW_YAW, FORWARD_AFRICA_STEP,
    FORWARD_WESTERNS_BELOW_YAW, FORWARD_WESTERNS_STEP,
};
use crate::error::ControllerError;
use crate::regions::{RegionCatalog, RegionId, RegionSet};
use crate::state::{ActiveSelection, FrameState, RotationState};

/// What a wheel event did.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum WheelOutcome {
    /// Inside the dead zone (or not a number); nothing changed.
    Ignored,
    /// Rotation stepped and `region` is now active. `refresh` is set when the
    /// polygon geometry must be cleared and resupplied.
    Rotated { region: RegionId, refresh: bool },
    /// Already at the end of the band table; the page should scroll instead.
    PassThrough { delta_y: f64 },
}

pub struct RegionHighlightController {
    catalog: RegionCatalog,
    dead_zone: f64,
    rotation: RotationState,
    selection: ActiveSelection,
    pending_refresh: bool,
    // One-shot guard: set once the current stay in the Westerns band has
    // had its geometry refresh.
    westerns_refreshed: bool,
}

impl RegionHighlightController {
    pub fn new(catalog: RegionCatalog, config: &ControllerConfig) -> Self {
        Self {
            catalog,
            dead_zone: config.dead_zone,
            rotation: config.initial_rotation,
            selection: ActiveSelection::default(),
            pending_refresh: false,
            westerns_refreshed: false,
        }
    }

    pub fn rotation(&self) -> RotationState {
        self.rotation
    }

    pub fn selection(&self) -> ActiveSelection {
        self.selection
    }

    pub fn active_set(&self) -> &RegionSet {
        self.catalog.get(self.selection.region)
    }

    pub fn catalog(&self) -> &RegionCatalog {
        &self.catalog
    }

    pub fn frame_state(&self) -> FrameState {
        FrameState {
            rotation: self.rotation,
            selection: self.selection,
        }
    }

    pub fn has_pending_refresh(&self) -> bool {
        self.pending_refresh
    }

    /// Consume the pending geometry refresh, if any.
    pub fn take_pending_refresh(&mut self) -> bool {
        std::mem::take(&mut self.pending_refresh)
    }

    pub fn on_wheel(&mut self, delta_y: f64) -> WheelOutcome {
        if !delta_y.is_finite() || delta_y.abs() <= self.dead_zone {
            return WheelOutcome::Ignored;
        }
        let Some((region, step)) = band_step(self.rotation.yaw, delta_y > 0.0) else {
            return WheelOutcome::PassThrough { delta_y };
        };
        self.rotation.step(step);
        self.selection.region = region;

        let refresh = if region == RegionId::Westerns {
            !std::mem::replace(&mut self.westerns_refreshed, true)
        } else {
            self.westerns_refreshed = false;
            false
        };
        if refresh {
            self.pending_refresh = true;
        }
        log::debug!(
            "[wheel] dy={:.1} region={} yaw={:.2} pitch={:.2} refresh={}",
            delta_y,
            region,
            self.rotation.yaw,
            self.rotation.pitch,
            refresh
        );
        WheelOutcome::Rotated { region, refresh }
    }

    /// Jump to a region and its preset orientation. Always asks for a
    /// geometry refresh.
    pub fn on_hover_select(&mut self, region_id: u32) -> Result<RegionId, ControllerError> {
        let region = RegionId::try_from(region_id)?;
        self.selection.region = region;
        self.rotation = RotationState::preset(region);
        self.westerns_refreshed = region == RegionId::Westerns;
        self.pending_refresh = true;
        log::debug!("[hover] region={} preset={:?}", region, self.rotation);
        Ok(region)
    }
}

// Thresholds are tested nearest-zero first; the first matching band wins.
fn band_step(yaw: f64, forward: bool) -> Option<(RegionId, (f64, f64))> {
    if forward {
        if yaw < FORWARD_AFRICA_BELOW_YAW {
            Some((RegionId::Africa, FORWARD_AFRICA_STEP))
        } else if yaw < FORWARD_WESTERNS_BELOW_YAW {
            Some((RegionId::Westerns, FORWARD_WESTERNS_STEP))
        } else {
            None
        }
    } else if yaw > BACKWARD_AFRICA_ABOVE_YAW {
        Some((RegionId::Africa, BACKWARD_AFRICA_STEP))
    } else if yaw >= BACKWARD_INDIA_FROM_YAW {
        Some((RegionId::India, BACKWARD_INDIA_STEP))
    } else {
        None
    }
}
