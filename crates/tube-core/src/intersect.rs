//! Joint detection between placed tubes
//!
//! Detection runs on plain bounding-box values so it can be tested without a
//! registry or renderer. Every unordered pair of distinct tubes is checked
//! once; a tube is never paired with itself.

use crate::geometry::BoundingBox;

/// World-space bounds of one tube
#[derive(Debug, Clone, PartialEq)]
pub struct TubeBounds {
    pub id: String,
    pub bounds: BoundingBox,
}

/// An overlapping pair and the box where they overlap
#[derive(Debug, Clone, PartialEq)]
pub struct Intersection {
    /// Earlier tube in display order
    pub id_a: String,
    pub id_b: String,
    pub region: BoundingBox,
}

impl Intersection {
    pub fn involves(&self, id: &str) -> bool {
        self.id_a == id || self.id_b == id
    }
}

/// Result of one full detection pass, in scan order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct IntersectionSet {
    pairs: Vec<Intersection>,
}

impl IntersectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pairs(&self) -> &[Intersection] {
        &self.pairs
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Intersection> {
        self.pairs.iter()
    }

    /// The pair for two ids, in either order
    pub fn find(&self, a: &str, b: &str) -> Option<&Intersection> {
        self.pairs
            .iter()
            .find(|p| (p.id_a == a && p.id_b == b) || (p.id_a == b && p.id_b == a))
    }

    /// Highlight state of a tube given this set
    pub fn highlight(&self, id: &str) -> Highlight {
        if self.pairs.iter().any(|p| p.involves(id)) {
            Highlight::Alert
        } else {
            Highlight::Neutral
        }
    }

    /// Most recently found pair
    pub fn last(&self) -> Option<&Intersection> {
        self.pairs.last()
    }
}

impl<'a> IntoIterator for &'a IntersectionSet {
    type Item = &'a Intersection;
    type IntoIter = std::slice::Iter<'a, Intersection>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.iter()
    }
}

/// Per-tube highlight state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Highlight {
    #[default]
    Neutral,
    /// Part of at least one joint
    Alert,
}

impl Highlight {
    /// Display color (RGBA)
    pub fn color(&self) -> [f32; 4] {
        match self {
            // #8aa6ff
            Highlight::Neutral => [0.541, 0.651, 1.0, 1.0],
            // #ffaa33
            Highlight::Alert => [1.0, 0.667, 0.2, 1.0],
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Highlight::Neutral => "Neutral",
            Highlight::Alert => "Alert",
        }
    }
}

/// Report every pair of tubes whose bounding boxes overlap.
///
/// Comparisons are inclusive, so tubes touching on a face form a joint.
pub fn detect(tubes: &[TubeBounds]) -> IntersectionSet {
    let mut pairs = Vec::new();
    for (i, a) in tubes.iter().enumerate() {
        for b in &tubes[i + 1..] {
            if let Some(region) = a.bounds.intersection(&b.bounds) {
                pairs.push(Intersection {
                    id_a: a.id.clone(),
                    id_b: b.id.clone(),
                    region,
                });
            }
        }
    }
    IntersectionSet { pairs }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    fn bounds(id: &str, min: [f32; 3], max: [f32; 3]) -> TubeBounds {
        TubeBounds {
            id: id.to_string(),
            bounds: BoundingBox::new(Vec3::from(min), Vec3::from(max)),
        }
    }

    #[test]
    fn test_single_tube_has_no_joints() {
        let set = detect(&[bounds("T1", [0.0; 3], [1.0; 3])]);
        assert!(set.is_empty());
        assert_eq!(set.highlight("T1"), Highlight::Neutral);
    }

    #[test]
    fn test_identical_boxes_overlap_fully() {
        let a = bounds("T1", [-50.0, 0.0, -10.0], [50.0, 20.0, 10.0]);
        let b = bounds("T2", [-50.0, 0.0, -10.0], [50.0, 20.0, 10.0]);
        let set = detect(&[a.clone(), b]);

        assert_eq!(set.len(), 1);
        let pair = &set.pairs()[0];
        assert_eq!((pair.id_a.as_str(), pair.id_b.as_str()), ("T1", "T2"));
        assert_eq!(pair.region, a.bounds);
    }

    #[test]
    fn test_touching_faces_count() {
        let set = detect(&[
            bounds("T1", [0.0; 3], [1.0; 3]),
            bounds("T2", [1.0, 0.0, 0.0], [2.0, 1.0, 1.0]),
        ]);
        assert_eq!(set.len(), 1);
        assert_eq!(set.pairs()[0].region.size().x, 0.0);
    }

    #[test]
    fn test_no_self_pairs_and_symmetry() {
        let set = detect(&[
            bounds("T1", [0.0; 3], [2.0; 3]),
            bounds("T2", [1.0; 3], [3.0; 3]),
            bounds("T3", [10.0; 3], [11.0; 3]),
        ]);

        assert_eq!(set.len(), 1);
        assert!(set.iter().all(|p| p.id_a != p.id_b));
        assert!(set.find("T2", "T1").is_some());
        assert_eq!(set.highlight("T1"), Highlight::Alert);
        assert_eq!(set.highlight("T2"), Highlight::Alert);
        assert_eq!(set.highlight("T3"), Highlight::Neutral);
    }

    #[test]
    fn test_detect_is_idempotent() {
        let tubes = vec![
            bounds("T1", [0.0; 3], [2.0; 3]),
            bounds("T2", [1.0; 3], [3.0; 3]),
            bounds("T3", [1.5; 3], [4.0; 3]),
        ];
        let first = detect(&tubes);
        assert_eq!(first, detect(&tubes));
        assert_eq!(first.len(), 3);
        assert_eq!(first.last().unwrap().id_a, "T2");
    }

    #[test]
    fn test_disjoint_on_one_axis() {
        let set = detect(&[
            bounds("T1", [0.0; 3], [1.0; 3]),
            bounds("T2", [0.0, 0.0, 1.5], [1.0, 1.0, 2.0]),
        ]);
        assert!(set.is_empty());
    }
}
