//! Tube Editor Core
//!
//! Renderer-independent scene model for the tube joint editor:
//! - [`geometry`]: hollow shell construction and bounding boxes
//! - [`registry`]: ordered collection of placed tubes and their snapshots
//! - [`history`]: bounded undo/redo over registry snapshots
//! - [`intersect`]: pairwise bounding-box joint detection
//! - [`snap`]: input-time angle snapping

pub mod geometry;
pub mod history;
pub mod intersect;
pub mod params;
pub mod registry;
pub mod snap;

pub use geometry::{BoundingBox, GeometryError, ShellGeometry, TessellatedMesh};
pub use history::{UndoEntry, UndoHistory};
pub use intersect::{Highlight, Intersection, IntersectionSet, TubeBounds, detect};
pub use params::{TubeParams, normalize_angle};
pub use registry::{
    RegistryError, RegistrySnapshot, ShellHandle, ShellStore, TubeEntity, TubeRecord,
    TubeRegistry, TubeSummary,
};
pub use snap::snap_angle;
