//! Tube Editor
//!
//! Session orchestration on top of `tube-core`: actions, presenters,
//! configuration, the transient joint overlay, and console parsing.

pub mod actions;
pub mod config;
pub mod console;
pub mod overlay;
pub mod presenter;
pub mod session;

pub use actions::EditorAction;
pub use config::{AppConfig, ConfigManager, EditorConfig, TubeDefaults};
pub use presenter::{ConsolePresenter, Presenter};
pub use session::{DisplayOptions, EditorError, EditorSession, Outcome};
