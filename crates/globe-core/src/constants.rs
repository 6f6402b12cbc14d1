// Hand-tuned interaction constants shared by the controller and the session.
// The band boundaries have no geometric derivation; keep them literal.

// Wheel handling
pub const WHEEL_DEAD_ZONE: f64 = 10.0; // |deltaY| at or below this is ignored

// Forward scroll (deltaY > 0): India band -> Africa band -> Westerns band
pub const FORWARD_AFRICA_BELOW_YAW: f64 = -0.35; // yaw < this steps through Africa
pub const FORWARD_WESTERNS_BELOW_YAW: f64 = 1.09; // yaw < this steps through Westerns
pub const FORWARD_AFRICA_STEP: (f64, f64) = (0.15, -0.05); // (yaw, pitch) increments
pub const FORWARD_WESTERNS_STEP: (f64, f64) = (0.2, -0.03);

// Backward scroll (deltaY < 0): Westerns band -> Africa band -> India band
pub const BACKWARD_AFRICA_ABOVE_YAW: f64 = -0.35; // yaw > this steps through Africa
pub const BACKWARD_INDIA_FROM_YAW: f64 = -1.3; // yaw >= this steps through India
pub const BACKWARD_AFRICA_STEP: (f64, f64) = (-0.2, 0.03);
pub const BACKWARD_INDIA_STEP: (f64, f64) = (-0.15, 0.05);

// Orientation at mount
pub const INITIAL_YAW: f64 = -1.35;
pub const INITIAL_PITCH: f64 = 0.3;

// Hover presets indexed by region id, as (pitch, yaw)
pub const HOVER_PRESETS: [(f64, f64); 3] = [
    (0.3, -1.5), // india
    (0.1, -0.5), // africa
    (0.0, 1.0),  // westerns
];

// Polygon colouring
pub const HIGHLIGHT_COLOR: &str = "rgb(235, 131, 52)";
pub const DEFAULT_COLOR: &str = "rgba(0, 0, 0, 0.4)";

// Hex polygon tessellation: start coarse, refine once the first frames are up
pub const INITIAL_POLYGON_RESOLUTION: u32 = 0;
pub const DETAILED_POLYGON_RESOLUTION: u32 = 3;
pub const POLYGON_UPGRADE_DELAY_MS: u64 = 1000;
