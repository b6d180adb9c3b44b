//! Presentation boundary.
//!
//! The session pushes every state change to its presenters. A presenter
//! renders; it never mutates the session.

use std::io::Write;

use tube_core::{BoundingBox, Highlight, IntersectionSet, TubeSummary};

/// Receives session updates.
///
/// All methods default to no-ops so presenters implement only what they draw.
pub trait Presenter {
    /// Returns the name of this presenter.
    fn name(&self) -> &str;

    /// The tube list changed (ids and display angles, in registry order).
    fn tubes_changed(&mut self, _tubes: &[TubeSummary]) {}

    /// A recompute finished. `highlights` is in registry order.
    fn joints_changed(&mut self, _joints: &IntersectionSet, _highlights: &[(String, Highlight)]) {}

    /// Wireframe display was toggled.
    fn wireframe_changed(&mut self, _wireframe: bool) {}

    /// The joint overlay appeared (`Some`) or was cleared (`None`).
    fn overlay_changed(&mut self, _region: Option<BoundingBox>) {}
}

/// Writes updates as plain text.
pub struct ConsolePresenter<W: Write> {
    out: W,
}

impl<W: Write> ConsolePresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, line: std::fmt::Arguments<'_>) {
        if let Err(e) = writeln!(self.out, "{line}") {
            tracing::warn!("Failed to write console output: {}", e);
        }
    }
}

impl<W: Write> Presenter for ConsolePresenter<W> {
    fn name(&self) -> &str {
        "console"
    }

    fn tubes_changed(&mut self, tubes: &[TubeSummary]) {
        if tubes.is_empty() {
            self.emit(format_args!("tubes: (none)"));
            return;
        }
        self.emit(format_args!("tubes:"));
        for tube in tubes {
            self.emit(format_args!(
                "  {} [{}] {}x{} t={} l={}, angle {}°",
                tube.id, tube.kind, tube.width, tube.height, tube.thickness, tube.length, tube.angle_deg
            ));
        }
    }

    fn joints_changed(&mut self, joints: &IntersectionSet, _highlights: &[(String, Highlight)]) {
        if joints.is_empty() {
            self.emit(format_args!("joints: (none)"));
            return;
        }
        self.emit(format_args!("joints:"));
        for joint in joints {
            let size = joint.region.size();
            let center = joint.region.center();
            self.emit(format_args!(
                "  {} x {}: region {:.1}x{:.1}x{:.1} at ({:.1}, {:.1}, {:.1})",
                joint.id_a, joint.id_b, size.x, size.y, size.z, center.x, center.y, center.z
            ));
        }
    }

    fn wireframe_changed(&mut self, wireframe: bool) {
        self.emit(format_args!(
            "wireframe: {}",
            if wireframe { "on" } else { "off" }
        ));
    }
}
