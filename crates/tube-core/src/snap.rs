//! Input-time angle snapping

/// Coarse snap increment in degrees
pub const MAJOR_STEP_DEG: f32 = 45.0;
/// Fine snap increment in degrees
pub const MINOR_STEP_DEG: f32 = 15.0;
/// Distance below which the coarse increment wins
pub const MAJOR_TOLERANCE_DEG: f32 = 7.0;

/// Snap a raw angle to the nearest 45° multiple when closer than 7°,
/// otherwise to the nearest 15° multiple.
///
/// Ties round toward positive infinity, so `7.5` snaps to `15` and `-7.5` to `0`.
pub fn snap_angle(angle_deg: f32) -> f32 {
    let to_major = round_to_step(angle_deg, MAJOR_STEP_DEG);
    if (angle_deg - to_major).abs() < MAJOR_TOLERANCE_DEG {
        return to_major;
    }
    round_to_step(angle_deg, MINOR_STEP_DEG)
}

fn round_to_step(angle_deg: f32, step: f32) -> f32 {
    (angle_deg / step + 0.5).floor() * step
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_snap_prefers_major_step() {
        assert_relative_eq!(snap_angle(40.0), 45.0);
        assert_relative_eq!(snap_angle(50.0), 45.0);
        assert_relative_eq!(snap_angle(84.0), 90.0);
    }

    #[test]
    fn test_snap_falls_back_to_minor_step() {
        assert_relative_eq!(snap_angle(20.0), 15.0);
        assert_relative_eq!(snap_angle(29.0), 30.0);
        assert_relative_eq!(snap_angle(62.0), 60.0);
    }

    #[test]
    fn test_snap_outside_tolerance() {
        assert_relative_eq!(snap_angle(37.0), 30.0);
        assert_relative_eq!(snap_angle(98.0), 105.0);
    }

    #[test]
    fn test_snap_negative_and_wrapped() {
        assert_relative_eq!(snap_angle(-40.0), -45.0);
        assert_relative_eq!(snap_angle(355.0), 360.0);
        assert_relative_eq!(snap_angle(7.5), 15.0);
    }
}
