//! Editor session: the single owner of scene and history state
//!
//! Every mutation follows the same sequence: change the registry, record a
//! snapshot, recompute joints, notify presenters. Each step finishes before
//! the call returns.

use std::time::{Duration, Instant};

use thiserror::Error;
use tube_core::{
    BoundingBox, Highlight, IntersectionSet, RegistryError, RegistrySnapshot, TubeParams,
    TubeRegistry, TubeSummary, UndoHistory, detect, history::DEFAULT_CAPACITY, snap_angle,
};

use crate::actions::EditorAction;
use crate::config::EditorConfig;
use crate::overlay::JointOverlay;
use crate::presenter::Presenter;

/// Description of the entry recorded when a session starts
pub const INITIAL_STATE: &str = "Initial State";

/// Session errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EditorError {
    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error("No tube selected")]
    NoSelection,
}

/// Result of an action that may have nothing to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    /// Nothing changed (e.g. undo with no earlier state)
    NoOp,
}

/// Display toggles owned by the session.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayOptions {
    /// Whether tubes are drawn as wireframes.
    pub wireframe: bool,
    /// Whether joints are detected and highlighted.
    pub highlight_joints: bool,
    /// Whether entered angles are snapped.
    pub snap_angles: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self::from(&EditorConfig::default())
    }
}

impl From<&EditorConfig> for DisplayOptions {
    fn from(config: &EditorConfig) -> Self {
        Self {
            wireframe: config.wireframe,
            highlight_joints: config.highlight_joints,
            snap_angles: config.snap_angles,
        }
    }
}

/// Scene, history, and display state for one editing session
pub struct EditorSession {
    registry: TubeRegistry,
    history: UndoHistory,
    joints: IntersectionSet,
    /// Highlight per tube, in registry order
    highlights: Vec<(String, Highlight)>,
    display: DisplayOptions,
    selected: Option<String>,
    overlay: JointOverlay,
    presenters: Vec<Box<dyn Presenter>>,
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new(&EditorConfig::default())
    }
}

impl EditorSession {
    /// Create an empty session. The empty scene is recorded as the first history entry.
    ///
    /// The configured history capacity is clamped to `1..=DEFAULT_CAPACITY`.
    pub fn new(config: &EditorConfig) -> Self {
        let capacity = config.history_capacity.clamp(1, DEFAULT_CAPACITY);
        if capacity != config.history_capacity {
            tracing::warn!(
                "History capacity {} out of range, using {}",
                config.history_capacity,
                capacity
            );
        }
        let mut history = UndoHistory::new(capacity);
        history.record(RegistrySnapshot::default(), INITIAL_STATE);

        Self {
            registry: TubeRegistry::new(),
            history,
            joints: IntersectionSet::new(),
            highlights: Vec::new(),
            display: DisplayOptions::from(config),
            selected: None,
            overlay: JointOverlay::new(Duration::from_millis(config.overlay_duration_ms)),
            presenters: Vec::new(),
        }
    }

    /// Attach a presenter and bring it up to date.
    pub fn add_presenter(&mut self, mut presenter: Box<dyn Presenter>) {
        tracing::debug!("Attached presenter: {}", presenter.name());
        presenter.wireframe_changed(self.display.wireframe);
        presenter.tubes_changed(&self.registry.list());
        presenter.joints_changed(&self.joints, &self.highlights);
        self.presenters.push(presenter);
    }

    /// Route an action to the matching operation.
    pub fn dispatch(&mut self, action: EditorAction) -> Result<Outcome, EditorError> {
        match action {
            EditorAction::AddTube(params) => self.add_tube(params).map(|_| Outcome::Applied),
            EditorAction::SetAngle { id, angle_deg } => {
                self.set_angle(&id, angle_deg).map(|_| Outcome::Applied)
            }
            EditorAction::Select(id) => self.select(&id).map(|_| Outcome::Applied),
            EditorAction::SetSelectedAngle(angle_deg) => {
                self.set_selected_angle(angle_deg).map(|_| Outcome::Applied)
            }
            EditorAction::Clear => {
                self.clear();
                Ok(Outcome::Applied)
            }
            EditorAction::Undo => self.undo(),
            EditorAction::Redo => self.redo(),
            EditorAction::SetWireframe(on) => {
                self.set_wireframe(on);
                Ok(Outcome::Applied)
            }
            EditorAction::SetHighlightMode(on) => {
                self.set_highlight_mode(on);
                Ok(Outcome::Applied)
            }
            EditorAction::SetSnap(on) => {
                self.set_snap(on);
                Ok(Outcome::Applied)
            }
        }
    }

    /// Add a tube at the default placement.
    ///
    /// The angle is snapped first when snap mode is on. Invalid parameters
    /// leave the registry and history untouched.
    pub fn add_tube(&mut self, params: TubeParams) -> Result<TubeSummary, EditorError> {
        let angle = self.input_angle(params.angle_deg);
        let params = params.with_angle(angle);
        let id = params.id.clone();
        let action = EditorAction::AddTube(params.clone());

        self.registry.add(params)?;
        tracing::info!("Added tube {} at {}°", id, angle);

        self.commit(&action);
        self.summary(&id)
    }

    /// Rotate a tube. Unknown ids fail with `NotFound` and record nothing.
    pub fn set_angle(&mut self, id: &str, angle_deg: f32) -> Result<(), EditorError> {
        let angle = self.input_angle(angle_deg);
        self.registry.set_angle(id, angle)?;
        tracing::info!("Rotated tube {} to {}°", id, angle);

        self.commit(&EditorAction::SetAngle {
            id: id.to_string(),
            angle_deg: angle,
        });
        Ok(())
    }

    /// Select a tube and return its display angle.
    pub fn select(&mut self, id: &str) -> Result<i32, EditorError> {
        let angle = self
            .registry
            .get(id)
            .map(|t| t.display_angle())
            .ok_or_else(|| RegistryError::NotFound(id.to_string()))?;
        self.selected = Some(id.to_string());
        tracing::debug!("Selected tube {}", id);
        Ok(angle)
    }

    /// Rotate the selected tube.
    pub fn set_selected_angle(&mut self, angle_deg: f32) -> Result<(), EditorError> {
        let id = self.selected.clone().ok_or(EditorError::NoSelection)?;
        self.set_angle(&id, angle_deg)
    }

    /// Remove every tube. Recorded in history, so it can be undone.
    pub fn clear(&mut self) {
        let count = self.registry.len();
        self.registry.clear();
        self.selected = None;
        tracing::info!("Cleared {} tubes", count);

        self.commit(&EditorAction::Clear);
    }

    /// Step back to the previous recorded state.
    pub fn undo(&mut self) -> Result<Outcome, EditorError> {
        let Some(target) = self.history.undo_target().map(|e| e.snapshot.clone()) else {
            tracing::debug!("Undo: nothing to undo");
            return Ok(Outcome::NoOp);
        };
        let undone = self
            .history
            .current()
            .map(|e| e.description.clone())
            .unwrap_or_default();

        self.registry.restore(&target)?;
        self.history.undo();
        tracing::debug!("Undo: {}", undone);

        self.after_restore();
        Ok(Outcome::Applied)
    }

    /// Re-apply the most recently undone state.
    pub fn redo(&mut self) -> Result<Outcome, EditorError> {
        let Some(entry) = self.history.redo_target().cloned() else {
            tracing::debug!("Redo: nothing to redo");
            return Ok(Outcome::NoOp);
        };

        self.registry.restore(&entry.snapshot)?;
        self.history.redo();
        tracing::debug!("Redo: {}", entry.description);

        self.after_restore();
        Ok(Outcome::Applied)
    }

    /// Toggle wireframe display. Cosmetic only.
    pub fn set_wireframe(&mut self, wireframe: bool) {
        self.display.wireframe = wireframe;
        for presenter in &mut self.presenters {
            presenter.wireframe_changed(wireframe);
        }
    }

    /// Toggle joint highlighting and recompute.
    pub fn set_highlight_mode(&mut self, enabled: bool) {
        self.display.highlight_joints = enabled;
        self.commit(&EditorAction::SetHighlightMode(enabled));
    }

    /// Toggle angle snapping for subsequent edits.
    pub fn set_snap(&mut self, enabled: bool) {
        self.display.snap_angles = enabled;
    }

    /// Expire the joint overlay once its time is up.
    pub fn tick(&mut self, now: Instant) {
        if self.overlay.expire(now) {
            for presenter in &mut self.presenters {
                presenter.overlay_changed(None);
            }
        }
    }

    /// Next free id of the form `Tube<n>`.
    pub fn next_tube_id(&self) -> String {
        let mut n = self.registry.len() + 1;
        loop {
            let id = format!("Tube{n}");
            if !self.registry.contains(&id) {
                return id;
            }
            n += 1;
        }
    }

    pub fn registry(&self) -> &TubeRegistry {
        &self.registry
    }

    pub fn history(&self) -> &UndoHistory {
        &self.history
    }

    /// Joints found by the last recompute.
    pub fn joints(&self) -> &IntersectionSet {
        &self.joints
    }

    /// Highlight per tube, in registry order.
    pub fn highlights(&self) -> &[(String, Highlight)] {
        &self.highlights
    }

    pub fn highlight(&self, id: &str) -> Option<Highlight> {
        self.highlights
            .iter()
            .find(|(tube, _)| tube == id)
            .map(|(_, h)| *h)
    }

    pub fn display(&self) -> &DisplayOptions {
        &self.display
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Tube list in registry order.
    pub fn tubes(&self) -> Vec<TubeSummary> {
        self.registry.list()
    }

    pub fn snapshot(&self) -> RegistrySnapshot {
        self.registry.snapshot()
    }

    /// Joint overlay region visible at `now`.
    pub fn overlay_at(&self, now: Instant) -> Option<BoundingBox> {
        self.overlay.visible_at(now)
    }

    fn input_angle(&self, angle_deg: f32) -> f32 {
        if self.display.snap_angles {
            snap_angle(angle_deg)
        } else {
            angle_deg
        }
    }

    fn summary(&self, id: &str) -> Result<TubeSummary, EditorError> {
        self.registry
            .list()
            .into_iter()
            .find(|s| s.id == id)
            .ok_or_else(|| RegistryError::NotFound(id.to_string()).into())
    }

    /// Record the committed state if the action is undoable, then recompute and notify.
    fn commit(&mut self, action: &EditorAction) {
        if action.is_undoable() {
            let description = action.description();
            self.history.record(self.registry.snapshot(), description);
            tracing::debug!(
                "Recorded '{}' ({} undo entries)",
                description,
                self.history.past_len()
            );
        }
        self.refresh();
    }

    fn after_restore(&mut self) {
        let stale = self
            .selected
            .as_deref()
            .is_some_and(|id| !self.registry.contains(id));
        if stale {
            self.selected = None;
        }
        self.refresh();
    }

    /// Reset every tube to neutral, then detect joints and raise alerts.
    fn refresh(&mut self) {
        let ids: Vec<String> = self.registry.iter().map(|t| t.id().to_string()).collect();

        self.highlights = ids.iter().map(|id| (id.clone(), Highlight::Neutral)).collect();
        self.joints = if self.display.highlight_joints {
            detect(&self.registry.world_bounds())
        } else {
            IntersectionSet::new()
        };
        for (id, highlight) in &mut self.highlights {
            *highlight = self.joints.highlight(id);
        }

        if !self.joints.is_empty() {
            tracing::debug!("Found {} joints", self.joints.len());
        }

        let overlay = self.joints.last().map(|joint| joint.region);
        let overlay_changed = match overlay {
            Some(region) => {
                self.overlay.show(region, Instant::now());
                true
            }
            None => self.overlay.hide(),
        };

        let tubes = self.registry.list();
        for presenter in &mut self.presenters {
            presenter.tubes_changed(&tubes);
            presenter.joints_changed(&self.joints, &self.highlights);
            if overlay_changed {
                presenter.overlay_changed(overlay);
            }
        }
    }
}
