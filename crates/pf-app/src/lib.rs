//! Host-side service layer for parafit.
//!
//! This crate binds the editing collaborator (a point editor with undo/redo)
//! to the recompute engine, and provides the session configuration and
//! replay scripts shared by the CLI and GUI frontends.

pub mod config;
pub mod editor;
pub mod error;
pub mod script;
pub mod session;

pub use config::{SessionConfig, load_config};
pub use editor::{EditCommand, PointEditor};
pub use error::{AppError, AppResult};
pub use script::{CurveSummary, Script, Step, StepOutcome, StepReport, load_script, run_script};
pub use session::{Session, SessionSnapshot};
