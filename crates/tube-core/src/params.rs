//! Tube parameter value type

use serde::{Deserialize, Serialize};

/// Defining parameters of a rectangular hollow tube.
///
/// This is the authoritative description of a tube. Shell geometry and
/// bounding boxes are always derived from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TubeParams {
    pub id: String,
    /// Free-form category tag (e.g. "Rectangular", "Square")
    pub kind: String,
    pub width: f32,
    pub height: f32,
    /// Wall thickness
    pub thickness: f32,
    pub length: f32,
    /// Yaw in degrees, kept in [0, 360)
    pub angle_deg: f32,
}

impl TubeParams {
    /// Create parameters with the angle normalized into [0, 360)
    pub fn new(
        id: impl Into<String>,
        kind: impl Into<String>,
        width: f32,
        height: f32,
        thickness: f32,
        length: f32,
        angle_deg: f32,
    ) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
            width,
            height,
            thickness,
            length,
            angle_deg: normalize_angle(angle_deg),
        }
    }

    /// Return a copy with a different yaw
    pub fn with_angle(mut self, angle_deg: f32) -> Self {
        self.angle_deg = normalize_angle(angle_deg);
        self
    }

    /// Yaw in radians
    pub fn rotation_y(&self) -> f32 {
        self.angle_deg.to_radians()
    }
}

/// Wrap an angle in degrees into [0, 360).
pub fn normalize_angle(angle_deg: f32) -> f32 {
    let wrapped = angle_deg.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}
