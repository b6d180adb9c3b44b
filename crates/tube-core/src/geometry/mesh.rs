//! Triangle mesh output for shells

use glam::Vec3;

use super::BoundingBox;

/// A tessellated mesh ready for upload by a presenter
#[derive(Debug, Clone, Default)]
pub struct TessellatedMesh {
    /// Vertex positions
    pub vertices: Vec<[f32; 3]>,
    /// Vertex normals (one per vertex)
    pub normals: Vec<[f32; 3]>,
    /// Triangle indices (3 indices per triangle)
    pub indices: Vec<u32>,
}

impl TessellatedMesh {
    /// Create an empty tessellated mesh
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if the mesh is empty
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Get the number of triangles
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Append a box as six quads with flat normals.
    ///
    /// With `inward` set, normals and winding face the box interior.
    pub(crate) fn push_box(&mut self, bounds: BoundingBox, inward: bool) {
        let (a, b) = (bounds.min, bounds.max);
        // (normal, four corners counter-clockwise seen from outside)
        let faces: [(Vec3, [Vec3; 4]); 6] = [
            (
                Vec3::X,
                [
                    Vec3::new(b.x, a.y, b.z),
                    Vec3::new(b.x, a.y, a.z),
                    Vec3::new(b.x, b.y, a.z),
                    Vec3::new(b.x, b.y, b.z),
                ],
            ),
            (
                Vec3::NEG_X,
                [
                    Vec3::new(a.x, a.y, a.z),
                    Vec3::new(a.x, a.y, b.z),
                    Vec3::new(a.x, b.y, b.z),
                    Vec3::new(a.x, b.y, a.z),
                ],
            ),
            (
                Vec3::Y,
                [
                    Vec3::new(a.x, b.y, b.z),
                    Vec3::new(b.x, b.y, b.z),
                    Vec3::new(b.x, b.y, a.z),
                    Vec3::new(a.x, b.y, a.z),
                ],
            ),
            (
                Vec3::NEG_Y,
                [
                    Vec3::new(a.x, a.y, a.z),
                    Vec3::new(b.x, a.y, a.z),
                    Vec3::new(b.x, a.y, b.z),
                    Vec3::new(a.x, a.y, b.z),
                ],
            ),
            (
                Vec3::Z,
                [
                    Vec3::new(a.x, a.y, b.z),
                    Vec3::new(b.x, a.y, b.z),
                    Vec3::new(b.x, b.y, b.z),
                    Vec3::new(a.x, b.y, b.z),
                ],
            ),
            (
                Vec3::NEG_Z,
                [
                    Vec3::new(b.x, a.y, a.z),
                    Vec3::new(a.x, a.y, a.z),
                    Vec3::new(a.x, b.y, a.z),
                    Vec3::new(b.x, b.y, a.z),
                ],
            ),
        ];

        for (normal, corners) in faces {
            let base = self.vertices.len() as u32;
            let normal = if inward { -normal } else { normal };
            for corner in corners {
                self.vertices.push(corner.to_array());
                self.normals.push(normal.to_array());
            }
            if inward {
                self.indices
                    .extend_from_slice(&[base, base + 2, base + 1, base, base + 3, base + 2]);
            } else {
                self.indices
                    .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::ShellGeometry;

    #[test]
    fn test_shell_tessellation_counts() {
        let shell = ShellGeometry::build(20.0, 20.0, 2.0, 100.0).unwrap();
        let mesh = shell.tessellate();

        // two boxes, six quads each, four vertices and two triangles per quad
        assert_eq!(mesh.vertices.len(), 48);
        assert_eq!(mesh.normals.len(), 48);
        assert_eq!(mesh.triangle_count(), 24);
        assert!(mesh.indices.iter().all(|&i| (i as usize) < mesh.vertices.len()));
    }

    #[test]
    fn test_cavity_normals_point_inward() {
        let shell = ShellGeometry::build(20.0, 20.0, 2.0, 100.0).unwrap();
        let mesh = shell.tessellate();

        // first cavity face is the +X wall, its normal must face -X
        assert_eq!(mesh.normals[24], [-1.0, 0.0, 0.0]);
        assert_eq!(mesh.vertices[24][0], 48.0);
    }

    #[test]
    fn test_empty_mesh() {
        let mesh = super::TessellatedMesh::new();
        assert!(mesh.is_empty());
        assert_eq!(mesh.triangle_count(), 0);
    }
}
