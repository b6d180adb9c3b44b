//! Application configuration module
//!
//! Editor toggles, history depth, overlay timing, and the default tube used
//! by the console `add` command.

mod manager;

pub use manager::{ConfigError, ConfigManager};

use serde::{Deserialize, Serialize};
use tube_core::TubeParams;

/// Editor preferences
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EditorConfig {
    /// Snap entered angles to 15°/45° steps
    pub snap_angles: bool,
    /// Highlight tubes that form joints
    pub highlight_joints: bool,
    /// Draw tubes as wireframes
    pub wireframe: bool,
    /// Maximum number of undo entries, capped at 50 by the session
    pub history_capacity: usize,
    /// How long a joint overlay stays visible, in milliseconds
    pub overlay_duration_ms: u64,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            snap_angles: true,
            highlight_joints: true,
            wireframe: false,
            history_capacity: tube_core::history::DEFAULT_CAPACITY,
            overlay_duration_ms: 2500,
        }
    }
}

/// Dimensions used when a tube is added without explicit values
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TubeDefaults {
    pub kind: String,
    pub width: f32,
    pub height: f32,
    pub thickness: f32,
    pub length: f32,
    pub angle_deg: f32,
}

impl Default for TubeDefaults {
    fn default() -> Self {
        Self {
            kind: "Rectangular".to_string(),
            width: 40.0,
            height: 40.0,
            thickness: 2.0,
            length: 500.0,
            angle_deg: 0.0,
        }
    }
}

impl TubeDefaults {
    /// Parameters for a new tube with the given id
    pub fn params(&self, id: impl Into<String>) -> TubeParams {
        TubeParams::new(
            id,
            self.kind.clone(),
            self.width,
            self.height,
            self.thickness,
            self.length,
            self.angle_deg,
        )
    }
}

/// Complete application configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AppConfig {
    /// Configuration format version
    #[serde(default)]
    pub version: u32,
    /// Editor settings
    #[serde(default)]
    pub editor: EditorConfig,
    /// Default tube dimensions
    #[serde(default)]
    pub tube_defaults: TubeDefaults,
}

impl AppConfig {
    /// Current configuration version
    pub const CURRENT_VERSION: u32 = 1;

    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self {
            version: Self::CURRENT_VERSION,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::new();
        assert_eq!(config.version, AppConfig::CURRENT_VERSION);
        assert_eq!(config.editor.history_capacity, 50);
        assert!(config.editor.snap_angles);
        assert!(config.editor.highlight_joints);
        assert!(!config.editor.wireframe);
    }

    #[test]
    fn test_partial_ron_uses_defaults() {
        let config: AppConfig = ron::from_str("(version: 1)").unwrap();
        assert_eq!(config.editor, EditorConfig::default());
        assert_eq!(config.tube_defaults, TubeDefaults::default());
    }

    #[test]
    fn test_tube_defaults_params() {
        let params = TubeDefaults::default().params("Tube1");
        assert_eq!(params.id, "Tube1");
        assert_eq!(params.kind, "Rectangular");
        assert_eq!(params.length, 500.0);
    }
}
