//! Registry snapshots used by the undo history

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::params::TubeParams;

/// Defining state of one tube at snapshot time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TubeRecord {
    pub id: String,
    pub params: TubeParams,
    pub position: Vec3,
    /// Yaw in radians
    pub rotation_y: f32,
}

/// Self-contained copy of the whole registry, in display order.
///
/// Snapshots hold values only; they never refer back to live entities.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RegistrySnapshot {
    pub tubes: Vec<TubeRecord>,
}

impl RegistrySnapshot {
    pub fn len(&self) -> usize {
        self.tubes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tubes.is_empty()
    }
}
