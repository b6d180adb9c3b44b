//! Ordered registry of placed tubes
//!
//! The registry is the single source of truth for tube state. Derived shell
//! geometry lives in a [`ShellStore`] owned by the registry, one handle per
//! entity, and is released whenever the entity leaves the registry.
//!
//! History recording and intersection recompute are not triggered here; the
//! editor session owns those side effects.

mod shells;
mod snapshot;

pub use shells::{ShellHandle, ShellStore};
pub use snapshot::{RegistrySnapshot, TubeRecord};

use glam::{Mat4, Quat, Vec3};
use thiserror::Error;

use crate::geometry::{GeometryError, ShellGeometry};
use crate::intersect::TubeBounds;
use crate::params::{TubeParams, normalize_angle};

/// Registry errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RegistryError {
    #[error(transparent)]
    InvalidDimension(#[from] GeometryError),

    #[error("Tube not found: {0}")]
    NotFound(String),

    #[error("Tube id already in use: {0}")]
    DuplicateId(String),
}

/// A placed tube
#[derive(Debug)]
pub struct TubeEntity {
    pub params: TubeParams,
    /// World position of the shell center
    pub position: Vec3,
    /// Yaw in radians
    pub rotation_y: f32,
    shell: ShellHandle,
}

impl TubeEntity {
    pub fn id(&self) -> &str {
        &self.params.id
    }

    /// Handle of the derived shell in the owning registry's store
    pub fn shell_handle(&self) -> ShellHandle {
        self.shell
    }

    /// Local-to-world transform (yaw about +Y, then translation)
    pub fn transform(&self) -> Mat4 {
        Mat4::from_rotation_translation(Quat::from_rotation_y(self.rotation_y), self.position)
    }

    /// Yaw rounded to whole degrees, as shown in the tube list
    pub fn display_angle(&self) -> i32 {
        self.rotation_y.to_degrees().round() as i32
    }

    fn record(&self) -> TubeRecord {
        TubeRecord {
            id: self.params.id.clone(),
            params: self.params.clone(),
            position: self.position,
            rotation_y: self.rotation_y,
        }
    }
}

/// List entry for display
#[derive(Debug, Clone, PartialEq)]
pub struct TubeSummary {
    pub id: String,
    pub kind: String,
    /// Whole degrees
    pub angle_deg: i32,
    pub width: f32,
    pub height: f32,
    pub thickness: f32,
    pub length: f32,
}

/// Default placement: resting on the ground plane at the origin
pub fn default_position(params: &TubeParams) -> Vec3 {
    Vec3::new(0.0, params.height / 2.0, 0.0)
}

/// Ordered collection of tube entities
#[derive(Debug, Default)]
pub struct TubeRegistry {
    tubes: Vec<TubeEntity>,
    shells: ShellStore,
}

impl TubeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build and append a tube at the default placement.
    ///
    /// The registry is left unchanged when the parameters are invalid or the
    /// id is already taken.
    pub fn add(&mut self, params: TubeParams) -> Result<&TubeEntity, RegistryError> {
        if self.contains(&params.id) {
            return Err(RegistryError::DuplicateId(params.id));
        }
        check_angle(params.angle_deg)?;
        let shell = ShellGeometry::from_params(&params)?;

        let mut params = params;
        params.angle_deg = normalize_angle(params.angle_deg);
        let position = default_position(&params);
        let rotation_y = params.rotation_y();
        let handle = self.shells.insert(shell);

        tracing::debug!(
            "Added tube {} ({}x{}x{}, t={}) at {}°",
            params.id,
            params.length,
            params.height,
            params.width,
            params.thickness,
            params.angle_deg
        );

        self.tubes.push(TubeEntity {
            params,
            position,
            rotation_y,
            shell: handle,
        });
        let index = self.tubes.len() - 1;
        Ok(&self.tubes[index])
    }

    /// Set a tube's yaw in degrees, leaving its position and dimensions untouched.
    pub fn set_angle(&mut self, id: &str, angle_deg: f32) -> Result<(), RegistryError> {
        check_angle(angle_deg)?;
        let tube = self
            .tubes
            .iter_mut()
            .find(|t| t.params.id == id)
            .ok_or_else(|| RegistryError::NotFound(id.to_string()))?;

        tube.params.angle_deg = normalize_angle(angle_deg);
        tube.rotation_y = tube.params.rotation_y();
        Ok(())
    }

    /// Remove every tube and release its shell.
    pub fn clear(&mut self) {
        let released = self.release_all();
        if released > 0 {
            tracing::debug!("Cleared registry, released {} shells", released);
        }
    }

    /// Replace the whole collection with the snapshot's contents.
    ///
    /// Every record is validated and its shell rebuilt before anything is
    /// replaced, so a snapshot that fails validation leaves the registry as it
    /// was. Angles must be finite, as must the stored position and yaw.
    pub fn restore(&mut self, snapshot: &RegistrySnapshot) -> Result<(), RegistryError> {
        let mut rebuilt = Vec::with_capacity(snapshot.len());
        for (index, record) in snapshot.tubes.iter().enumerate() {
            if snapshot.tubes[..index].iter().any(|t| t.id == record.id) {
                return Err(RegistryError::DuplicateId(record.id.clone()));
            }
            check_angle(record.params.angle_deg)?;
            check_placement(record)?;
            let shell = ShellGeometry::from_params(&record.params)?;
            let mut params = record.params.clone();
            params.id = record.id.clone();
            params.angle_deg = normalize_angle(params.angle_deg);
            rebuilt.push((params, record.position, record.rotation_y, shell));
        }

        let released = self.release_all();
        for (params, position, rotation_y, shell) in rebuilt {
            let handle = self.shells.insert(shell);
            self.tubes.push(TubeEntity {
                params,
                position,
                rotation_y,
                shell: handle,
            });
        }

        tracing::debug!(
            "Restored {} tubes, released {} shells",
            self.tubes.len(),
            released
        );
        Ok(())
    }

    /// Copy the current state into a snapshot.
    pub fn snapshot(&self) -> RegistrySnapshot {
        RegistrySnapshot {
            tubes: self.tubes.iter().map(TubeEntity::record).collect(),
        }
    }

    /// Summaries in display order.
    pub fn list(&self) -> Vec<TubeSummary> {
        self.tubes
            .iter()
            .map(|t| TubeSummary {
                id: t.params.id.clone(),
                kind: t.params.kind.clone(),
                angle_deg: t.display_angle(),
                width: t.params.width,
                height: t.params.height,
                thickness: t.params.thickness,
                length: t.params.length,
            })
            .collect()
    }

    pub fn get(&self, id: &str) -> Option<&TubeEntity> {
        self.tubes.iter().find(|t| t.params.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.tubes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tubes.is_empty()
    }

    /// Entities in display order.
    pub fn iter(&self) -> impl Iterator<Item = &TubeEntity> {
        self.tubes.iter()
    }

    /// Derived shell of an entity.
    pub fn shell(&self, entity: &TubeEntity) -> Option<&ShellGeometry> {
        self.shells.get(entity.shell)
    }

    /// Number of shells currently held.
    pub fn live_shells(&self) -> usize {
        self.shells.len()
    }

    /// World-space bounds of every entity, in display order.
    pub fn world_bounds(&self) -> Vec<TubeBounds> {
        self.tubes
            .iter()
            .filter_map(|t| {
                let shell = self.shells.get(t.shell)?;
                Some(TubeBounds {
                    id: t.params.id.clone(),
                    bounds: shell.local_bounds().transform(&t.transform()),
                })
            })
            .collect()
    }

    fn release_all(&mut self) -> usize {
        let mut released = 0;
        for tube in self.tubes.drain(..) {
            if self.shells.release(tube.shell).is_some() {
                released += 1;
            }
        }
        released
    }
}

fn check_angle(angle_deg: f32) -> Result<(), GeometryError> {
    if angle_deg.is_finite() {
        Ok(())
    } else {
        Err(GeometryError::InvalidDimension(format!(
            "angle must be finite, got {angle_deg}"
        )))
    }
}

fn check_placement(record: &TubeRecord) -> Result<(), GeometryError> {
    if record.position.is_finite() && record.rotation_y.is_finite() {
        Ok(())
    } else {
        Err(GeometryError::InvalidDimension(format!(
            "placement of {} must be finite, got position {} and yaw {}",
            record.id, record.position, record.rotation_y
        )))
    }
}
