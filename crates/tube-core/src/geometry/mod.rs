//! Hollow shell geometry for rectangular tubes
//!
//! A tube is modeled as an outer box with a concentric cavity box removed.
//! Local axes: x runs along the tube length, y is height, z is width.

mod bounds;
mod mesh;

pub use bounds::BoundingBox;
pub use mesh::TessellatedMesh;

use glam::Vec3;
use thiserror::Error;

use crate::params::TubeParams;

/// Geometry construction errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    #[error("Invalid dimension: {0}")]
    InvalidDimension(String),
}

/// Outer box and inner cavity of a hollow tube, both centered on the local origin.
#[derive(Debug, Clone, PartialEq)]
pub struct ShellGeometry {
    /// Outer box size (length, height, width)
    pub outer: Vec3,
    /// Cavity box size (outer minus two wall thicknesses on each axis)
    pub inner: Vec3,
}

impl ShellGeometry {
    /// Build a shell from tube dimensions.
    ///
    /// Fails when any outer dimension is not positive, when the wall
    /// thickness is not positive, or when the walls would meet
    /// (`2 * thickness >= min(width, height, length)`).
    pub fn build(
        width: f32,
        height: f32,
        thickness: f32,
        length: f32,
    ) -> Result<Self, GeometryError> {
        for (name, value) in [("width", width), ("height", height), ("length", length)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(GeometryError::InvalidDimension(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }
        if !thickness.is_finite() || thickness <= 0.0 {
            return Err(GeometryError::InvalidDimension(format!(
                "thickness must be positive, got {thickness}"
            )));
        }
        let smallest = width.min(height).min(length);
        if 2.0 * thickness >= smallest {
            return Err(GeometryError::InvalidDimension(format!(
                "thickness {thickness} leaves no cavity inside smallest side {smallest}"
            )));
        }

        let outer = Vec3::new(length, height, width);
        let inner = outer - Vec3::splat(2.0 * thickness);
        Ok(Self { outer, inner })
    }

    /// Build the shell described by a parameter set.
    pub fn from_params(params: &TubeParams) -> Result<Self, GeometryError> {
        Self::build(params.width, params.height, params.thickness, params.length)
    }

    /// Local-space bounds (the outer box).
    pub fn local_bounds(&self) -> BoundingBox {
        BoundingBox::centered(self.outer)
    }

    /// Local-space bounds of the cavity.
    pub fn cavity_bounds(&self) -> BoundingBox {
        BoundingBox::centered(self.inner)
    }

    /// Material volume (outer minus cavity).
    pub fn wall_volume(&self) -> f32 {
        let outer = self.outer;
        let inner = self.inner;
        outer.x * outer.y * outer.z - inner.x * inner.y * inner.z
    }

    /// Triangulate the outer box and the inward-facing cavity.
    pub fn tessellate(&self) -> TessellatedMesh {
        let mut mesh = TessellatedMesh::new();
        mesh.push_box(self.local_bounds(), false);
        mesh.push_box(self.cavity_bounds(), true);
        mesh
    }
}
