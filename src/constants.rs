// DOM hooks and browser-side tuning used by the web frontend.

// Element lookups
pub const CANVAS_ID: &str = "globe-canvas"; // auto-mounted on start if present
pub const REGION_MENU_SELECTOR: &str = "[data-region]"; // hover targets
pub const REGION_ATTR: &str = "data-region"; // holds a region id or name
pub const CONFIG_ATTR: &str = "data-globe-config"; // optional JSON overrides on the canvas
pub const ACTIVE_CLASS: &str = "active"; // set on the menu entry of the active region

// WheelEvent.deltaMode values
pub const DOM_DELTA_PIXEL: u32 = 0;
pub const DOM_DELTA_LINE: u32 = 1;
pub const DOM_DELTA_PAGE: u32 = 2;

// Pixel equivalents for line/page wheel deltas
pub const LINE_HEIGHT_PX: f64 = 16.0;
pub const PAGE_HEIGHT_PX: f64 = 800.0;

// Frame loop
pub const MAX_FRAME_DT_MS: u64 = 100; // clamp long gaps (background tabs) to one step
