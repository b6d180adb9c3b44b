//! Editor actions
//!
//! Every inbound call from a front end is expressed as an [`EditorAction`]
//! and routed through [`EditorSession::dispatch`](crate::EditorSession::dispatch).

use tube_core::TubeParams;

/// A user-triggered editor action
#[derive(Debug, Clone, PartialEq)]
pub enum EditorAction {
    /// Place a new tube at the default position
    AddTube(TubeParams),
    /// Rotate a tube about the vertical axis
    SetAngle { id: String, angle_deg: f32 },
    /// Select a tube for subsequent angle edits
    Select(String),
    /// Rotate the selected tube
    SetSelectedAngle(f32),
    /// Remove every tube
    Clear,
    Undo,
    Redo,
    SetWireframe(bool),
    SetHighlightMode(bool),
    SetSnap(bool),
}

impl EditorAction {
    /// Check if this action should be included in undo history
    pub fn is_undoable(&self) -> bool {
        match self {
            // Registry mutations
            EditorAction::AddTube(_)
            | EditorAction::SetAngle { .. }
            | EditorAction::SetSelectedAngle(_)
            | EditorAction::Clear => true,

            // Selection and display toggles do not change the registry
            EditorAction::Select(_)
            | EditorAction::SetWireframe(_)
            | EditorAction::SetHighlightMode(_)
            | EditorAction::SetSnap(_) => false,

            // Undo/Redo themselves are not undoable
            EditorAction::Undo | EditorAction::Redo => false,
        }
    }

    /// Get a description of the action for display
    pub fn description(&self) -> &'static str {
        match self {
            EditorAction::AddTube(_) => "Add Tube",
            EditorAction::SetAngle { .. } | EditorAction::SetSelectedAngle(_) => "Rotate Tube",
            EditorAction::Select(_) => "Select Tube",
            EditorAction::Clear => "Clear Scene",
            EditorAction::Undo => "Undo",
            EditorAction::Redo => "Redo",
            EditorAction::SetWireframe(_) => "Toggle Wireframe",
            EditorAction::SetHighlightMode(_) => "Toggle Joint Highlight",
            EditorAction::SetSnap(_) => "Toggle Angle Snap",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_undoable_actions() {
        let params = TubeParams::new("Tube1", "Square", 20.0, 20.0, 2.0, 100.0, 0.0);
        assert!(EditorAction::AddTube(params).is_undoable());
        assert!(EditorAction::Clear.is_undoable());
        assert!(!EditorAction::Undo.is_undoable());
        assert!(!EditorAction::SetWireframe(true).is_undoable());
        assert!(!EditorAction::Select("Tube1".into()).is_undoable());
    }

    #[test]
    fn test_descriptions() {
        let rotate = EditorAction::SetAngle {
            id: "Tube1".into(),
            angle_deg: 30.0,
        };
        assert_eq!(rotate.description(), "Rotate Tube");
        assert_eq!(EditorAction::SetSelectedAngle(15.0).description(), "Rotate Tube");
        assert_eq!(EditorAction::Clear.description(), "Clear Scene");
    }
}
