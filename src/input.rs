use crate::constants::{
    DOM_DELTA_LINE, DOM_DELTA_PAGE, DOM_DELTA_PIXEL, LINE_HEIGHT_PX, MAX_FRAME_DT_MS,
    PAGE_HEIGHT_PX,
};
use std::time::Duration;

// ---------------- Wheel helpers ----------------
/// Convert a wheel delta to pixels so the dead zone means the same thing
/// for every input device.
#[inline]
pub fn normalize_wheel_delta(delta_y: f64, delta_mode: u32) -> f64 {
    match delta_mode {
        DOM_DELTA_PIXEL => delta_y,
        DOM_DELTA_LINE => delta_y * LINE_HEIGHT_PX,
        DOM_DELTA_PAGE => delta_y * PAGE_HEIGHT_PX,
        _ => delta_y,
    }
}

// ---------------- Menu helpers ----------------
/// Parse a `data-region` value: a numeric id, or a region name.
///
/// Unknown numbers are passed through so the controller can reject them.
#[inline]
pub fn parse_region_attr(value: &str) -> Option<u32> {
    let v = value.trim();
    if let Ok(id) = v.parse::<u32>() {
        return Some(id);
    }
    match v.to_ascii_lowercase().as_str() {
        "india" => Some(0),
        "africa" => Some(1),
        "westerns" => Some(2),
        _ => None,
    }
}

// ---------------- Frame helpers ----------------
#[inline]
pub fn clamp_frame_dt(dt: Duration) -> Duration {
    dt.min(Duration::from_millis(MAX_FRAME_DT_MS))
}
