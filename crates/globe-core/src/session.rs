//! Owned context shared by the input handlers and the frame loop.
//!
//! Handlers mutate the controller and may clear the host's polygons right
//! away; everything else (recolouring, the deferred polygon resupply, the
//! tessellation upgrade, rotation, render) happens in [`GlobeSession::tick`],
//! so a frame always sees a finished transition.

use crate::config::{GlobeConfig, TessellationConfig};
use crate::controller::{RegionHighlightController, WheelOutcome};
use crate::error::ControllerError;
use crate::host::{apply, CommandBatch, HostCommand, SceneHost};
use crate::regions::{RegionCatalog, RegionId};
use crate::state::{FrameState, Palette};
use std::time::Duration;

/// What a frame did, mostly for the frontend's menu state and for tests.
#[derive(Clone, Debug, PartialEq)]
pub struct TickReport {
    pub region: RegionId,
    pub region_changed: bool,
    pub commands: CommandBatch,
}

pub struct GlobeSession<H: SceneHost> {
    controller: RegionHighlightController,
    palette: Palette,
    tessellation: TessellationConfig,
    host: Option<H>,
    applied_region: Option<RegionId>,
    since_attach: Duration,
    upgraded: bool,
}

impl<H: SceneHost> GlobeSession<H> {
    pub fn new(config: &GlobeConfig) -> Self {
        Self {
            controller: RegionHighlightController::new(
                RegionCatalog::default(),
                &config.controller,
            ),
            palette: config.palette.clone(),
            tessellation: config.tessellation.clone(),
            host: None,
            applied_region: None,
            since_attach: Duration::ZERO,
            upgraded: false,
        }
    }

    pub fn controller(&self) -> &RegionHighlightController {
        &self.controller
    }

    pub fn frame_state(&self) -> FrameState {
        self.controller.frame_state()
    }

    pub fn is_attached(&self) -> bool {
        self.host.is_some()
    }

    pub fn host(&self) -> Option<&H> {
        self.host.as_ref()
    }

    /// Attach the scene host and push the current state into it.
    pub fn attach_host(&mut self, host: H) -> CommandBatch {
        if let Some(mut old) = self.host.take() {
            log::warn!("[session] replacing attached scene host");
            old.dispose();
        }
        let region = self.controller.selection().region;
        // A fresh host gets full geometry below; nothing is left to resupply.
        self.controller.take_pending_refresh();
        self.applied_region = Some(region);
        self.since_attach = Duration::ZERO;
        self.upgraded = self.tessellation.detailed_resolution == self.tessellation.initial_resolution;

        let batch: CommandBatch = [
            HostCommand::SetPolygonResolution(self.tessellation.initial_resolution),
            HostCommand::SetPolygonColor(region),
            HostCommand::SupplyPolygons,
            HostCommand::SetRotation(self.controller.rotation()),
        ]
        .into_iter()
        .collect();
        self.host = Some(host);
        self.run(&batch);
        log::info!("[session] scene host attached, region={}", region);
        batch
    }

    /// Dispose and release the host. Later events report `HostUnavailable`.
    pub fn detach_host(&mut self) -> Option<H> {
        let mut host = self.host.take()?;
        host.dispose();
        self.applied_region = None;
        log::info!("[session] scene host detached");
        Some(host)
    }

    pub fn handle_wheel(&mut self, delta_y: f64) -> Result<WheelOutcome, ControllerError> {
        let host = self.host.as_mut().ok_or(ControllerError::HostUnavailable)?;
        let outcome = self.controller.on_wheel(delta_y);
        if let WheelOutcome::Rotated { refresh: true, .. } = outcome {
            host.clear_polygons();
        }
        Ok(outcome)
    }

    pub fn handle_hover(&mut self, region_id: u32) -> Result<RegionId, ControllerError> {
        let host = self.host.as_mut().ok_or(ControllerError::HostUnavailable)?;
        let region = self.controller.on_hover_select(region_id)?;
        host.reset_view();
        host.clear_polygons();
        Ok(region)
    }

    /// Advance one animation frame.
    pub fn tick(&mut self, dt: Duration) -> Result<TickReport, ControllerError> {
        if self.host.is_none() {
            return Err(ControllerError::HostUnavailable);
        }
        let mut batch = CommandBatch::new();

        let region = self.controller.selection().region;
        let region_changed = self.applied_region != Some(region);
        if region_changed {
            batch.push(HostCommand::SetPolygonColor(region));
            self.applied_region = Some(region);
        }
        if self.controller.take_pending_refresh() {
            batch.push(HostCommand::SupplyPolygons);
        }
        if !self.upgraded {
            self.since_attach += dt;
            if self.since_attach >= self.tessellation.upgrade_delay() {
                batch.push(HostCommand::SetPolygonResolution(
                    self.tessellation.detailed_resolution,
                ));
                self.upgraded = true;
                log::debug!(
                    "[session] polygon resolution -> {}",
                    self.tessellation.detailed_resolution
                );
            }
        }
        batch.push(HostCommand::SetRotation(self.controller.rotation()));
        batch.push(HostCommand::Render);

        self.run(&batch);
        Ok(TickReport {
            region,
            region_changed,
            commands: batch,
        })
    }

    fn run(&mut self, batch: &CommandBatch) {
        if let Some(host) = self.host.as_mut() {
            for cmd in batch {
                apply(host, self.controller.catalog(), &self.palette, *cmd);
            }
        }
    }
}

impl<H: SceneHost> Drop for GlobeSession<H> {
    fn drop(&mut self) {
        if let Some(host) = self.host.as_mut() {
            host.dispose();
        }
    }
}
