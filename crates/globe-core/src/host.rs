//! Contract between the session and whatever draws the globe.

use crate::regions::{RegionCatalog, RegionId, RegionSet};
use crate::state::{Palette, RotationState};
use smallvec::SmallVec;

/// Scene host port.
///
/// Implementors own the scene, camera and renderer; they receive state and
/// draw. No decision logic lives behind this trait and no time is owned by it.
pub trait SceneHost {
    /// Apply the globe orientation.
    fn set_rotation(&mut self, rotation: RotationState);

    /// Install a polygon colouring function for the highlighted set.
    fn set_polygon_color(&mut self, region: &RegionSet, palette: &Palette);

    /// Drop the polygon geometry currently shown.
    fn clear_polygons(&mut self);

    /// Hand the (unchanged) polygon geometry back to the globe.
    fn supply_polygons(&mut self);

    /// Hex polygon tessellation level.
    fn set_polygon_resolution(&mut self, resolution: u32);

    /// Return the camera controls to their initial pose.
    fn reset_view(&mut self);

    /// Draw one frame.
    fn render(&mut self);

    /// Release scene resources. The host is not used afterwards.
    fn dispose(&mut self);
}

/// One host call, recorded so the order of a frame can be inspected.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HostCommand {
    SetRotation(RotationState),
    SetPolygonColor(RegionId),
    ClearPolygons,
    SupplyPolygons,
    SetPolygonResolution(u32),
    ResetView,
    Render,
}

pub type CommandBatch = SmallVec<[HostCommand; 6]>;

pub(crate) fn apply<H: SceneHost>(
    host: &mut H,
    catalog: &RegionCatalog,
    palette: &Palette,
    cmd: HostCommand,
) {
    match cmd {
        HostCommand::SetRotation(r) => host.set_rotation(r),
        HostCommand::SetPolygonColor(id) => host.set_polygon_color(catalog.get(id), palette),
        HostCommand::ClearPolygons => host.clear_polygons(),
        HostCommand::SupplyPolygons => host.supply_polygons(),
        HostCommand::SetPolygonResolution(res) => host.set_polygon_resolution(res),
        HostCommand::ResetView => host.reset_view(),
        HostCommand::Render => host.render(),
    }
}
