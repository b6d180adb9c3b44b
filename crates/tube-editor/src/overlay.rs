//! Transient joint overlay.
//!
//! After a recompute that finds joints, the overlap region of the last pair is
//! shown for a fixed time. The overlay is cosmetic and never part of history.

use std::time::{Duration, Instant};

use tube_core::BoundingBox;

/// A region shown until its deadline passes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActiveOverlay {
    pub region: BoundingBox,
    pub expires_at: Instant,
}

/// Holds at most one overlay; a newer one replaces the old.
#[derive(Debug, Clone)]
pub struct JointOverlay {
    duration: Duration,
    active: Option<ActiveOverlay>,
}

impl JointOverlay {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            active: None,
        }
    }

    /// Show a region starting at `now`.
    pub fn show(&mut self, region: BoundingBox, now: Instant) {
        self.active = Some(ActiveOverlay {
            region,
            expires_at: now + self.duration,
        });
    }

    /// Hide immediately. Returns true if something was visible.
    pub fn hide(&mut self) -> bool {
        self.active.take().is_some()
    }

    /// Drop the overlay once its deadline is reached. Returns true if it expired.
    pub fn expire(&mut self, now: Instant) -> bool {
        match self.active {
            Some(overlay) if now >= overlay.expires_at => {
                self.active = None;
                true
            }
            _ => false,
        }
    }

    /// The region visible at `now`, if any.
    pub fn visible_at(&self, now: Instant) -> Option<BoundingBox> {
        self.active
            .filter(|overlay| now < overlay.expires_at)
            .map(|overlay| overlay.region)
    }

    pub fn active(&self) -> Option<&ActiveOverlay> {
        self.active.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    fn region(size: f32) -> BoundingBox {
        BoundingBox::centered(Vec3::splat(size))
    }

    #[test]
    fn test_overlay_expires() {
        let start = Instant::now();
        let mut overlay = JointOverlay::new(Duration::from_millis(2500));
        overlay.show(region(1.0), start);

        assert_eq!(overlay.visible_at(start), Some(region(1.0)));
        assert!(!overlay.expire(start + Duration::from_millis(2499)));
        assert!(overlay.expire(start + Duration::from_millis(2500)));
        assert!(overlay.active().is_none());
        assert!(!overlay.expire(start + Duration::from_secs(10)));
    }

    #[test]
    fn test_newer_overlay_replaces_old() {
        let start = Instant::now();
        let mut overlay = JointOverlay::new(Duration::from_millis(100));
        overlay.show(region(1.0), start);
        overlay.show(region(2.0), start + Duration::from_millis(80));

        let later = start + Duration::from_millis(150);
        assert_eq!(overlay.visible_at(later), Some(region(2.0)));
    }

    #[test]
    fn test_hide() {
        let mut overlay = JointOverlay::new(Duration::from_millis(100));
        assert!(!overlay.hide());
        overlay.show(region(1.0), Instant::now());
        assert!(overlay.hide());
    }
}
