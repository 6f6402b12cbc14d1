//! Point and ring payloads shown on the globe.
//!
//! The controller never reads these; they are serialized once and handed to
//! the scene host, whose accessors look up the camelCase field names.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerPoint {
    pub lat: f64,
    pub lng: f64,
    pub color: String,
    pub radius: f64,
    #[serde(rename = "maxR")]
    pub max_r: f64,
    pub propagation_speed: f64,
    pub repeat_period: f64,
    pub ring_color: String,
}

impl MarkerPoint {
    fn city(lat: f64, lng: f64) -> Self {
        Self {
            lat,
            lng,
            color: "rgb(235, 131, 52)".to_string(),
            radius: 0.6,
            max_r: 4.0,
            propagation_speed: 2.0,
            repeat_period: 1200.0,
            ring_color: "rgba(235, 131, 52, 0.6)".to_string(),
        }
    }
}

pub fn default_markers() -> Vec<MarkerPoint> {
    vec![
        MarkerPoint::city(28.61, 77.21),   // New Delhi
        MarkerPoint::city(19.08, 72.88),   // Mumbai
        MarkerPoint::city(12.97, 77.59),   // Bengaluru
        MarkerPoint::city(-1.29, 36.82),   // Nairobi
        MarkerPoint::city(6.52, 3.38),     // Lagos
        MarkerPoint::city(-26.20, 28.05),  // Johannesburg
        MarkerPoint::city(51.51, -0.13),   // London
        MarkerPoint::city(40.71, -74.01),  // New York
        MarkerPoint::city(37.77, -122.42), // San Francisco
    ]
}
