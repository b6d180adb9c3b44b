//! Axis-aligned bounding boxes

use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min: Vec3,
    pub max: Vec3,
}

impl BoundingBox {
    /// Creates a bounding box from its corners.
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Creates an empty box that any `extend` call will overwrite.
    pub fn empty() -> Self {
        Self {
            min: Vec3::splat(f32::INFINITY),
            max: Vec3::splat(f32::NEG_INFINITY),
        }
    }

    /// Creates a box of the given size centered on the origin.
    pub fn centered(size: Vec3) -> Self {
        let half = size * 0.5;
        Self::new(-half, half)
    }

    /// Builds the tightest box around a set of points.
    pub fn from_points(points: impl IntoIterator<Item = Vec3>) -> Self {
        points.into_iter().fold(Self::empty(), |mut bounds, p| {
            bounds.extend(p);
            bounds
        })
    }

    /// Returns true if no point has been added.
    pub fn is_empty(&self) -> bool {
        self.min.cmpgt(self.max).any()
    }

    /// Grows the box to contain `point`.
    pub fn extend(&mut self, point: Vec3) {
        self.min = self.min.min(point);
        self.max = self.max.max(point);
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// The eight corner points.
    pub fn corners(&self) -> [Vec3; 8] {
        let (a, b) = (self.min, self.max);
        [
            Vec3::new(a.x, a.y, a.z),
            Vec3::new(b.x, a.y, a.z),
            Vec3::new(a.x, b.y, a.z),
            Vec3::new(b.x, b.y, a.z),
            Vec3::new(a.x, a.y, b.z),
            Vec3::new(b.x, a.y, b.z),
            Vec3::new(a.x, b.y, b.z),
            Vec3::new(b.x, b.y, b.z),
        ]
    }

    /// Transforms every corner and returns the axis-aligned box around them.
    ///
    /// Rotated boxes grow; the result is never tighter than the true shape.
    pub fn transform(&self, matrix: &Mat4) -> Self {
        Self::from_points(self.corners().map(|c| matrix.transform_point3(c)))
    }

    /// Inclusive overlap test: boxes that only touch on a face intersect.
    pub fn intersects(&self, other: &BoundingBox) -> bool {
        self.min.cmple(other.max).all() && self.max.cmpge(other.min).all()
    }

    /// Overlap volume of two boxes, or `None` when they are disjoint.
    pub fn intersection(&self, other: &BoundingBox) -> Option<BoundingBox> {
        if !self.intersects(other) {
            return None;
        }
        Some(Self::new(self.min.max(other.min), self.max.min(other.max)))
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_intersects_inclusive() {
        let a = BoundingBox::new(Vec3::ZERO, Vec3::ONE);
        let touching = BoundingBox::new(Vec3::new(1.0, 0.0, 0.0), Vec3::new(2.0, 1.0, 1.0));
        let apart = BoundingBox::new(Vec3::new(1.5, 0.0, 0.0), Vec3::new(2.0, 1.0, 1.0));

        assert!(a.intersects(&touching));
        assert!(touching.intersects(&a));
        assert!(!a.intersects(&apart));
    }

    #[test]
    fn test_intersection_region() {
        let a = BoundingBox::new(Vec3::ZERO, Vec3::splat(2.0));
        let b = BoundingBox::new(Vec3::ONE, Vec3::splat(3.0));
        let region = a.intersection(&b).unwrap();
        assert_eq!(region, BoundingBox::new(Vec3::ONE, Vec3::splat(2.0)));

        let far = BoundingBox::new(Vec3::splat(5.0), Vec3::splat(6.0));
        assert!(a.intersection(&far).is_none());
    }

    #[test]
    fn test_transform_rotated_quarter_turn() {
        let bounds = BoundingBox::centered(Vec3::new(100.0, 20.0, 10.0));
        let rotated = bounds.transform(&Mat4::from_rotation_y(FRAC_PI_2));

        assert!(rotated.size().abs_diff_eq(Vec3::new(10.0, 20.0, 100.0), 1e-3));
        assert!(rotated.center().abs_diff_eq(Vec3::ZERO, 1e-3));
    }

    #[test]
    fn test_empty_and_extend() {
        let mut bounds = BoundingBox::empty();
        assert!(bounds.is_empty());
        bounds.extend(Vec3::new(1.0, -2.0, 3.0));
        assert!(!bounds.is_empty());
        assert_eq!(bounds.size(), Vec3::ZERO);
    }
}
